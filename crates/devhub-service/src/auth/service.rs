//! Registration and sign-in flows.

use std::sync::Arc;

use rand::Rng;
use rand::distr::Alphanumeric;
use tracing::info;
use validator::ValidateEmail;

use devhub_auth::jwt::encoder::{IssuedToken, JwtEncoder};
use devhub_auth::password::{PasswordHasher, PasswordPolicy};
use devhub_core::error::{AppError, ErrorKind};
use devhub_core::result::AppResult;
use devhub_database::repositories::user::UserRepository;
use devhub_entity::user::{CreateUser, User};

/// Length of the random password generated for federated accounts. The
/// plaintext is discarded immediately; only its hash is stored, so the
/// account stays reachable exclusively through the federated path.
const GENERATED_PASSWORD_LENGTH: usize = 16;

/// Orchestrates registration and both sign-in paths.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    policy: Arc<PasswordPolicy>,
    /// Token issuer.
    jwt_encoder: Arc<JwtEncoder>,
}

/// Result of a successful sign-in: the record plus a fresh token.
#[derive(Debug, Clone)]
pub struct SignIn {
    /// The signed-in user.
    pub user: User,
    /// The freshly issued session token.
    pub token: IssuedToken,
    /// Whether the account was created by this call (federated path only).
    pub created: bool,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        policy: Arc<PasswordPolicy>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            policy,
            jwt_encoder,
        }
    }

    /// Registers a new user with a password. No token is issued; the
    /// client signs in afterwards.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> AppResult<User> {
        let username = username.trim();
        let email = email.trim();

        if username.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AppError::validation("All fields are required"));
        }
        if !email.validate_email() {
            return Err(AppError::validation("Invalid email format"));
        }
        let len = username.chars().count();
        if !(3..=50).contains(&len) {
            return Err(AppError::validation(
                "Username must be between 3 and 50 characters",
            ));
        }
        self.policy.validate(password)?;

        let password_hash = self.hash_blocking(password.to_string()).await?;

        let user = self
            .user_repo
            .create(&CreateUser {
                username: username.to_string(),
                email: email.to_lowercase(),
                password_hash,
                profile_picture: None,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Signs in with email and password, issuing a session token.
    pub async fn sign_in(&self, email: &str, password: &str) -> AppResult<SignIn> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AppError::validation("All fields are required"));
        }

        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let valid = self
            .verify_blocking(password.to_string(), user.password_hash.clone())
            .await?;
        if !valid {
            return Err(AppError::authentication("Invalid credentials"));
        }

        let token = self.jwt_encoder.issue(user.id, user.is_admin)?;

        info!(user_id = %user.id, "User signed in");
        Ok(SignIn {
            user,
            token,
            created: false,
        })
    }

    /// Federated (Google-asserted) sign-in. Signs in an existing account or
    /// provisions a new one from the asserted profile.
    ///
    /// The upstream assertion is trusted as-is; provider-token verification
    /// is a known gap of this flow. When two concurrent calls race to
    /// create the same brand-new email, the database uniqueness constraint
    /// decides the winner and the loser re-runs the lookup.
    pub async fn google_sign_in(
        &self,
        email: &str,
        name: &str,
        picture: Option<String>,
    ) -> AppResult<SignIn> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(AppError::validation("Email is required"));
        }

        if let Some(user) = self.user_repo.find_by_email(&email).await? {
            let token = self.jwt_encoder.issue(user.id, user.is_admin)?;
            info!(user_id = %user.id, "Federated sign-in");
            return Ok(SignIn {
                user,
                token,
                created: false,
            });
        }

        match self.provision_federated(&email, name, picture).await {
            Ok(user) => {
                let token = self.jwt_encoder.issue(user.id, user.is_admin)?;
                info!(user_id = %user.id, username = %user.username, "Federated account provisioned");
                Ok(SignIn {
                    user,
                    token,
                    created: true,
                })
            }
            Err(err) if err.kind == ErrorKind::Conflict => {
                // Lost the creation race; the winner's record is authoritative.
                let user = self
                    .user_repo
                    .find_by_email(&email)
                    .await?
                    .ok_or(err)?;
                let token = self.jwt_encoder.issue(user.id, user.is_admin)?;
                Ok(SignIn {
                    user,
                    token,
                    created: false,
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Creates a user record from an asserted federated profile.
    async fn provision_federated(
        &self,
        email: &str,
        name: &str,
        picture: Option<String>,
    ) -> AppResult<User> {
        let username = federated_username(name);
        let generated: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(GENERATED_PASSWORD_LENGTH)
            .map(char::from)
            .collect();
        let password_hash = self.hash_blocking(generated).await?;

        self.user_repo
            .create(&CreateUser {
                username,
                email: email.to_string(),
                password_hash,
                profile_picture: picture,
            })
            .await
    }

    async fn hash_blocking(&self, password: String) -> AppResult<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash_password(&password))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {e}")))?
    }

    async fn verify_blocking(&self, password: String, hash: String) -> AppResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Verification task failed: {e}")))?
    }
}

/// Derives a username from an asserted display name: lowercased, spaces
/// removed, suffixed with a random disambiguator to satisfy uniqueness.
fn federated_username(name: &str) -> String {
    let base: String = name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .concat();
    let base = if base.is_empty() { "user".to_string() } else { base };
    format!("{base}{}", rand::rng().random_range(1000..10000))
}
