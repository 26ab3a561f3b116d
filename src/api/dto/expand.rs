//! DTOs for the key resolution endpoint.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub long_url: String,
}
