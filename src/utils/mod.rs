//! Pure helpers used by the shortener core.
//!
//! - [`key_generator`] - Deterministic hash-based short key generation
//! - [`url_validator`] - Syntactic URL validation
//! - [`db_error`] - PostgreSQL error classification

pub mod db_error;
pub mod key_generator;
pub mod url_validator;
