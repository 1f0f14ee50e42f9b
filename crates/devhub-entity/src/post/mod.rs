//! Blog post domain entities.

pub mod model;

pub use model::{CreatePost, Post};
