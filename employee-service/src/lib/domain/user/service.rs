use std::sync::Arc;

use async_trait::async_trait;

use crate::user::errors::UserError;
use crate::user::models::NewUser;
use crate::user::models::RegisterUserCommand;
use crate::user::models::User;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register_user(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        // Argon2 is CPU-bound; keep it off the async workers.
        let password_hasher = self.password_hasher.clone();
        let password = command.password;
        let password_hash = tokio::task::spawn_blocking(move || {
            password_hasher.hash(password.expose())
        })
        .await
        .map_err(|e| UserError::PasswordHashing(e.to_string()))?
        .map_err(|e| UserError::PasswordHashing(e.to_string()))?;

        let user = self
            .repository
            .create(NewUser {
                username: command.username,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::NotFoundByUsername(username.to_string()))
    }
}
