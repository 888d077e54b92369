//! Short token generation.
//!
//! Produces the opaque identifier substituted for a long URL. Generation is
//! non-cryptographic and fire-and-forget: there is no collision detection and
//! no retry. With an 8-character token over a 64-symbol alphabet the space is
//! 64^8, so collisions are possible but vanishingly rare at this service's
//! scale.

use rand::Rng;

/// URL-safe alphabet: letters, digits, underscore, hyphen.
const TOKEN_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Generated token length in characters.
const TOKEN_LENGTH: usize = 8;

/// Generates a short, URL-safe random token.
pub fn generate_token() -> String {
    let mut rng = rand::rng();

    (0..TOKEN_LENGTH)
        .map(|_| TOKEN_ALPHABET[rng.random_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}
