use async_trait::async_trait;

use models::User;

use super::errors::AuthError;

/// Repository abstraction for user account persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AuthError>;
    async fn insert(&self, user: User) -> Result<(), AuthError>;
    /// Remove every account with this name; returns how many were removed.
    async fn remove_by_name(&self, name: &str) -> Result<usize, AuthError>;
    async fn list(&self) -> Result<Vec<User>, AuthError>;
}

/// Simple in-memory mock repository for tests and benches
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<Vec<User>>,
    }

    impl MockUserRepository {
        fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<User>>, AuthError> {
            self.users.lock().map_err(|e| AuthError::Repository(e.to_string()))
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_name(&self, name: &str) -> Result<Option<User>, AuthError> {
            Ok(self.lock()?.iter().find(|u| u.name == name).cloned())
        }

        async fn insert(&self, user: User) -> Result<(), AuthError> {
            self.lock()?.push(user);
            Ok(())
        }

        async fn remove_by_name(&self, name: &str) -> Result<usize, AuthError> {
            let mut users = self.lock()?;
            let before = users.len();
            users.retain(|u| u.name != name);
            Ok(before - users.len())
        }

        async fn list(&self) -> Result<Vec<User>, AuthError> {
            Ok(self.lock()?.clone())
        }
    }
}
