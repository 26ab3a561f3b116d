//! Deterministic short key generation.
//!
//! A key is derived from the long URL alone: SHA-256 digest, read as one
//! big-endian integer, encoded in base 62 and truncated to [`KEY_LENGTH`]
//! characters. The same URL always yields the same key, on any machine.
//!
//! Truncation means two different URLs can share a key. Nothing here detects
//! that; see [`crate::application::services::ShortenerService::shorten`] for
//! how the store reacts.

use sha2::{Digest, Sha256};

/// Base-62 alphabet. Digit value `n` maps to `BASE62_ALPHABET[n]`.
pub const BASE62_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Maximum length of a generated key.
pub const KEY_LENGTH: usize = 7;

const BASE: u32 = 62;

/// Generates the short key for a long URL.
///
/// # Examples
///
/// ```
/// use url_shortener::utils::key_generator::generate_key;
///
/// assert_eq!(generate_key("https://example.com"), "3NBE4XK");
/// ```
pub fn generate_key(long_url: &str) -> String {
    let digest = Sha256::digest(long_url.as_bytes());

    let mut encoded = encode_base62(&digest);
    encoded.truncate(KEY_LENGTH);
    encoded
}

/// Encodes a big-endian unsigned integer in base 62.
///
/// Produces the minimal representation: no leading `'0'` digits, except for
/// the value zero which encodes as `"0"` (including the empty slice).
pub fn encode_base62(number: &[u8]) -> String {
    let mut dividend: Vec<u8> = number
        .iter()
        .copied()
        .skip_while(|byte| *byte == 0)
        .collect();

    if dividend.is_empty() {
        return (BASE62_ALPHABET[0] as char).to_string();
    }

    // Schoolbook long division by 62, least significant digit first.
    let mut digits = Vec::with_capacity(dividend.len() * 4 / 3 + 1);
    while !dividend.is_empty() {
        let mut quotient = Vec::with_capacity(dividend.len());
        let mut remainder: u32 = 0;

        for byte in &dividend {
            let accumulator = (remainder << 8) | u32::from(*byte);
            let digit = accumulator / BASE;
            remainder = accumulator % BASE;

            if !quotient.is_empty() || digit != 0 {
                quotient.push(digit as u8);
            }
        }

        digits.push(BASE62_ALPHABET[remainder as usize]);
        dividend = quotient;
    }

    digits.iter().rev().map(|digit| *digit as char).collect()
}
