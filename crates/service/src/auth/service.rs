use std::sync::Arc;

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, PasswordHash, Version,
};
use rand::rngs::OsRng;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use models::User;

use super::domain::{credentials, LoginInput, SignupInput};
use super::errors::AuthError;
use super::repository::UserRepository;

/// Work factor for password hashing. Stored hashes carry their own
/// parameters, so changing these only affects new signups.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// Auth business service independent of web framework
pub struct AuthService<R: UserRepository> {
    repo: Arc<R>,
    argon: Argon2<'static>,
    // serializes the check-then-insert of signups
    signup_lock: Mutex<()>,
}

impl<R: UserRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Result<Self, AuthError> {
        let params = Params::new(cfg.memory_kib, cfg.iterations, cfg.parallelism, None)
            .map_err(|e| AuthError::HashError(e.to_string()))?;
        Ok(Self { repo, argon: Argon2::new(Algorithm::Argon2id, Version::V0x13, params), signup_lock: Mutex::new(()) })
    }

    /// Create an account with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockUserRepository};
    /// use service::auth::domain::SignupInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockUserRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig::default()).unwrap();
    /// let input = SignupInput { username: Some("ann".into()), password: Some("hunter2".into()) };
    /// let user = tokio_test::block_on(svc.signup(input)).unwrap();
    /// assert_eq!(user.name, "ann");
    /// assert_ne!(user.password, "hunter2");
    /// ```
    #[instrument(skip(self, input), fields(username = input.username.as_deref().unwrap_or_default()))]
    pub async fn signup(&self, input: SignupInput) -> Result<User, AuthError> {
        let (username, password) = credentials(&input.username, &input.password).ok_or(AuthError::Validation)?;

        let _guard = self.signup_lock.lock().await;
        if self.repo.find_by_name(username).await?.is_some() {
            debug!("username taken");
            return Err(AuthError::Conflict);
        }

        let hash = self.hash(password.to_owned()).await?;
        let user = User { name: username.to_owned(), password: hash };
        self.repo.insert(user.clone()).await?;
        info!(user = %user.name, "user_registered");
        Ok(user)
    }

    /// Check a username/password pair against the stored hash.
    #[instrument(skip(self, input), fields(username = input.username.as_deref().unwrap_or_default()))]
    pub async fn login(&self, input: LoginInput) -> Result<User, AuthError> {
        let (username, password) = credentials(&input.username, &input.password).ok_or(AuthError::Validation)?;

        let user = self.repo.find_by_name(username).await?.ok_or(AuthError::NotFound)?;
        if !self.verify(password.to_owned(), user.password.clone()).await? {
            warn!("password mismatch");
            return Err(AuthError::PasswordMismatch);
        }
        info!(user = %user.name, "user_logged_in");
        Ok(user)
    }

    /// Remove the named account. Unknown names are a no-op.
    pub async fn delete_user(&self, name: &str) -> Result<usize, AuthError> {
        let removed = self.repo.remove_by_name(name).await?;
        info!(user = %name, removed, "user_deleted");
        Ok(removed)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AuthError> {
        self.repo.list().await
    }

    async fn hash(&self, password: String) -> Result<String, AuthError> {
        let argon = self.argon.clone();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon
                .hash_password(password.as_bytes(), &salt)
                .map(|h| h.to_string())
                .map_err(|e| AuthError::HashError(e.to_string()))
        })
        .await
        .map_err(|e| AuthError::HashError(e.to_string()))?
    }

    async fn verify(&self, password: String, stored: String) -> Result<bool, AuthError> {
        let argon = self.argon.clone();
        tokio::task::spawn_blocking(move || {
            if is_bcrypt_hash(&stored) {
                return bcrypt::verify(password.as_bytes(), &stored).map_err(|e| AuthError::HashError(e.to_string()));
            }
            let parsed = PasswordHash::new(&stored).map_err(|e| AuthError::HashError(e.to_string()))?;
            Ok(argon.verify_password(password.as_bytes(), &parsed).is_ok())
        })
        .await
        .map_err(|e| AuthError::HashError(e.to_string()))?
    }
}

/// Accounts created before the switch to argon2 carry bcrypt hashes.
fn is_bcrypt_hash(stored: &str) -> bool {
    ["$2a$", "$2b$", "$2y$"].iter().any(|p| stored.starts_with(p))
}
