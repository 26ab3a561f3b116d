//! Domain layer: the storage contract the shortener is written against.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. A URL record is not modelled as its own type: the mapping is a
//! short key and the long URL it resolves to, and the repository trait in
//! [`repositories`] is its only representation.

pub mod repositories;
