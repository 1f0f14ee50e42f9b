//! The auth core: registration, password sign-in, federated sign-in.

pub mod service;

pub use service::{AuthService, SignIn};
