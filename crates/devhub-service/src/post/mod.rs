//! Blog post operations.

pub mod service;

pub use service::{NewPost, PostService};
