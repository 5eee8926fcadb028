//! Short code generation and path validation.
//!
//! Codes are drawn uniformly from a 62-symbol alphanumeric alphabet using
//! OS entropy and rejection sampling.

use regex::Regex;
use std::sync::LazyLock;

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 8;

/// Symbols a generated code is drawn from.
const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Bytes at or above this value are rejected (largest multiple of 62 below 256).
const REJECTION_THRESHOLD: u8 = (256 - 256 % ALPHABET.len()) as u8;

/// Random bytes drawn per refill. Sized so one draw almost always suffices.
const BUFFER_BYTES: usize = 16;

/// Shape of a short code accepted on the redirect path.
///
/// Wider than what [`generate_code`] produces so codes with `-` and `_`
/// still route.
static CODE_PATH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Generates a cryptographically secure random short code.
///
/// Returns exactly [`CODE_LENGTH`] characters from `[A-Za-z0-9]`. Each random
/// byte below 248 maps onto the alphabet with equal weight; the rest are
/// discarded and the buffer is refilled until enough symbols are collected.
///
/// # Panics
///
/// Panics if the system random number generator fails. The service cannot
/// hand out identifiers without entropy.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut code = String::with_capacity(CODE_LENGTH);
    let mut buffer = [0u8; BUFFER_BYTES];

    while code.len() < CODE_LENGTH {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        let accepted = buffer
            .iter()
            .copied()
            .filter(|&b| b < REJECTION_THRESHOLD)
            .map(|b| ALPHABET[b as usize % ALPHABET.len()] as char)
            .take(CODE_LENGTH - code.len());

        code.extend(accepted);
    }

    code
}

/// Returns true if `code` has the shape of a routable short code.
pub fn is_valid_code_path(code: &str) -> bool {
    CODE_PATH_REGEX.is_match(code)
}
