//! Random alphanumeric payload generator.

use rand::Rng;

/// Alphabet field values are drawn from.
pub const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generate a random `[a-z0-9]` string with length in `min_len..max_len`.
///
/// The upper bound is exclusive: `max_len` itself is never produced.
/// Callers must ensure `min_len < max_len`; [`crate::FactoryConfig::validate`]
/// rejects anything else before a factory exists.
pub fn generate_alphanumeric<R: Rng>(rng: &mut R, min_len: usize, max_len: usize) -> String {
    let len = rng.random_range(min_len..max_len);

    (0..len)
        .map(|_| ALPHANUMERIC[rng.random_range(0..ALPHANUMERIC.len())] as char)
        .collect()
}
