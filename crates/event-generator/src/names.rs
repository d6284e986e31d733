//! Random field name generation.
//!
//! Names look like `Qbxmrt` or `Hvauelqzwk`: one uppercase letter followed by
//! lowercase letters, which keeps them valid as keys in JSON, logfmt and most
//! structured-log backends. Names are not deduplicated.

use rand::Rng;

/// Shortest field name that can be generated.
pub const MIN_FIELD_NAME_LEN: usize = 5;

/// Exclusive upper bound on generated field name length.
pub const MAX_FIELD_NAME_LEN: usize = 15;

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generate `count` random field names.
///
/// Each name has a length drawn from `MIN_FIELD_NAME_LEN..MAX_FIELD_NAME_LEN`.
pub fn generate_field_names<R: Rng>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| generate_field_name(rng)).collect()
}

fn generate_field_name<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(MIN_FIELD_NAME_LEN..MAX_FIELD_NAME_LEN);
    let mut name = String::with_capacity(len);

    name.push(UPPER[rng.random_range(0..UPPER.len())] as char);
    for _ in 1..len {
        name.push(LOWER[rng.random_range(0..LOWER.len())] as char);
    }

    name
}
