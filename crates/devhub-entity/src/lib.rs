//! # devhub-entity
//!
//! Domain entities for the DevHub blog backend: users and blog posts,
//! plus the data carriers used to create and update them.

pub mod post;
pub mod user;

pub use post::Post;
pub use user::User;
