//! URL repository implementations.
//!
//! # Repositories
//!
//! - [`MemoryUrlRepository`] - Concurrent in-process map, lost on restart
//! - [`PgUrlRepository`] - PostgreSQL table, created on demand

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
