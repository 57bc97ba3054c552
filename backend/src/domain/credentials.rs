//! Legacy demo credential helpers.
//!
//! The stored "hash" is a plain base64 encoding of the password: reversible,
//! unsalted, and not suitable for anything but a demo. More importantly,
//! nothing calls [`hash_password`] on the registration path, so no credential
//! is ever stored; the login handler instead accepts a password equal to the
//! account's lower-cased display name. That gap is preserved deliberately —
//! it defines today's observable behavior.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encode a password with the reversible demo scheme.
pub fn hash_password(password: &str) -> String {
    STANDARD.encode(password.as_bytes())
}

/// Check a password against a stored demo hash.
pub fn verify_password(password: &str, hash: &str) -> bool {
    hash_password(password) == hash
}
