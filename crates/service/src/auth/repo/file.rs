use std::sync::Arc;

use models::User;

use crate::auth::errors::AuthError;
use crate::auth::repository::UserRepository;
use crate::storage::JsonCollection;

/// Users kept in a JSON array file (`[{ "name", "password" }]`).
#[derive(Clone)]
pub struct FileUserRepository {
    users: Arc<JsonCollection<User>>,
}

impl FileUserRepository {
    pub fn new(users: Arc<JsonCollection<User>>) -> Self {
        Self { users }
    }
}

#[async_trait::async_trait]
impl UserRepository for FileUserRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<User>, AuthError> {
        Ok(self.users.find(|u| u.name == name).await)
    }

    async fn insert(&self, user: User) -> Result<(), AuthError> {
        Ok(self.users.append(user).await?)
    }

    async fn remove_by_name(&self, name: &str) -> Result<usize, AuthError> {
        Ok(self.users.remove(|u| u.name == name).await?)
    }

    async fn list(&self) -> Result<Vec<User>, AuthError> {
        Ok(self.users.list().await)
    }
}
