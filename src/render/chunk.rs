//! Splits the hex digest into display groups

use crate::core::DIGEST_HEX_LEN;

/// Splits `hex` into `hex.len() / chunk_size` chunks of exactly `chunk_size`
/// characters, taken from the front
///
/// A `chunk_size` of 0 means one chunk covering the whole digest. Trailing
/// characters that do not fill a whole chunk are dropped, not padded.
pub fn split(hex: &str, chunk_size: usize) -> Vec<&str> {
    let chunk_size = if chunk_size == 0 {
        DIGEST_HEX_LEN
    } else {
        chunk_size
    };

    let count = hex.len() / chunk_size;
    (0..count)
        .map(|i| &hex[i * chunk_size..(i + 1) * chunk_size])
        .collect()
}
