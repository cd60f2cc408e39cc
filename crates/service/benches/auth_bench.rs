use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::auth::domain::{LoginInput, SignupInput};
use service::auth::repository::mock::MockUserRepository;
use service::auth::service::{AuthConfig, AuthService};

fn bench_login(c: &mut Criterion) {
    let repo = Arc::new(MockUserRepository::default());
    let svc = AuthService::new(repo, AuthConfig::default()).unwrap();

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(svc.signup(SignupInput { username: Some("bench".into()), password: Some("Benchmark1".into()) }))
        .unwrap();

    c.bench_function("auth_login_verify", |b| {
        b.iter(|| {
            rt.block_on(svc.login(LoginInput { username: Some("bench".into()), password: Some("Benchmark1".into()) }))
                .unwrap();
        });
    });
}

criterion_group!(benches, bench_login);
criterion_main!(benches);
