//! User repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use devhub_core::error::{AppError, ErrorKind};
use devhub_core::result::AppResult;
use devhub_entity::user::model::DEFAULT_PROFILE_PICTURE;
use devhub_entity::user::{CreateUser, UpdateUser, User};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive). The returned record carries
    /// the password hash; it is the caller's responsibility to keep it off
    /// the wire.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new user. Unique violations on username or email are mapped
    /// to conflict errors; the constraint is the final arbiter even under
    /// concurrent creates.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password_hash, profile_picture) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(
            data.profile_picture
                .as_deref()
                .unwrap_or(DEFAULT_PROFILE_PICTURE),
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, data))
    }

    /// Update a user's profile fields. `None` fields are left untouched.
    pub async fn update(&self, data: &UpdateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET username = COALESCE($2, username), \
                              email = COALESCE($3, email), \
                              password_hash = COALESCE($4, password_hash), \
                              profile_picture = COALESCE($5, profile_picture), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.username)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.profile_picture)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_key") =>
            {
                AppError::conflict("Username already exists")
            }
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already in use")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update user", e),
        })?
        .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Delete a user by ID. Returns whether a row was removed.
    pub async fn delete(&self, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_unique_violation(e: sqlx::Error, data: &CreateUser) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_username_key") => {
            AppError::conflict(format!("Username '{}' already exists", data.username))
        }
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
            AppError::conflict("Email already in use")
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
    }
}
