//! Random alias generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated aliases when the client does not supply one.
pub const DEFAULT_ALIAS_LENGTH: usize = 7;

/// Generates a random alias of `length` characters drawn uniformly from
/// `[a-zA-Z0-9]`.
///
/// Uses the process-wide thread-local RNG, so concurrent requests do not
/// produce correlated aliases. There is no collision check here; a collision
/// surfaces as an alias-exists error from the save path.
pub fn random_alias(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
