//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL persistence via SeaORM
//!
//! The in-memory repository is always available.

pub mod database;

pub use database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostRepository};
