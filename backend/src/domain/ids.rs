//! Record identifiers and class join codes.
//!
//! Both generators draw from a non-cryptographic RNG and make no uniqueness
//! guarantee. Callers never retry on collision; the system accepts the small
//! risk of two records or two classes colliding.

use rand::Rng;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LEN: usize = 6;

/// Opaque record id: 9 base-36 characters.
pub fn record_id() -> String {
    sample(ID_ALPHABET, ID_LEN)
}

/// Human-enterable join code: exactly 6 characters from `A-Z0-9`, sampled
/// uniformly with replacement. Existing codes are not consulted.
pub fn join_code() -> String {
    sample(CODE_ALPHABET, CODE_LEN)
}

fn sample(alphabet: &[u8], len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}
