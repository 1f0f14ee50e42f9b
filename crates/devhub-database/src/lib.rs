//! # devhub-database
//!
//! PostgreSQL connection management and concrete repository
//! implementations for the DevHub entities. The database is the sole
//! arbiter of the uniqueness constraints on usernames and emails; unique
//! violations are mapped to conflict errors here and nowhere else.

pub mod connection;
pub mod migration;
pub mod repositories;
