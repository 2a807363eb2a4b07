use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::user::errors::UserError;
use crate::user::models::NewUser;
use crate::user::models::User;
use crate::user::models::UserId;
use crate::user::models::Username;
use crate::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
}

impl From<UserRow> for User {
    fn from(r: UserRow) -> Self {
        User {
            id: UserId(r.id),
            username: Username::from_stored(r.username),
            password_hash: r.password_hash,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(user.username.as_str())
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("users_username_key")
                {
                    return UserError::UsernameAlreadyExists(user.username.as_str().to_string());
                }
            }
            tracing::error!(error = %e, "User insert failed");
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(User {
            id: UserId(id),
            username: user.username,
            password_hash: user.password_hash,
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "User lookup failed");
            UserError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(User::from))
    }
}
