//! # devhub-service
//!
//! Business logic for the DevHub blog backend: the auth core
//! (registration, password sign-in, federated sign-in), post operations,
//! and user self-service. All authorization rules live in this crate;
//! the HTTP layer only extracts identity and delegates.

pub mod auth;
pub mod context;
pub mod post;
pub mod user;

pub use auth::AuthService;
pub use context::RequestContext;
pub use post::PostService;
pub use user::UserService;
