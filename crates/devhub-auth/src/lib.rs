//! # devhub-auth
//!
//! Authentication primitives for the DevHub blog backend.
//!
//! ## Modules
//!
//! - `jwt` — stateless session token creation and verification
//! - `password` — bcrypt password hashing and policy enforcement
//!
//! Tokens are self-contained and expire after a configurable validity
//! window; there is no server-side session state and no revocation list.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordPolicy};
