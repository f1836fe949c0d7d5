//! ROT13 letter substitution.
//!
//! Each ASCII letter moves 13 places along its own case's alphabet, wrapping
//! at `Z`/`z`. Everything else is copied through, so the output always has
//! the same length as the input and applying the transform twice is a no-op.

/// The message decoded by the rot13 driver.
pub const ENCODED_MESSAGE: &str = "Pbatenghyngvbaf ba ohvyqvat n pbqr-rqvgvat ntrag!";

const SHIFT: u8 = 13;
const ALPHABET_LEN: u8 = 26;

/// Substitutes a single character; non-letters come back unchanged.
pub fn rot13_char(c: char) -> char {
    match c {
        'A'..='Z' => rotate(c, b'A'),
        'a'..='z' => rotate(c, b'a'),
        _ => c,
    }
}

// `c` is ASCII here, so the `as u8` cast is lossless.
fn rotate(c: char, base: u8) -> char {
    (base + (c as u8 - base + SHIFT) % ALPHABET_LEN) as char
}

/// Applies ROT13 to every character of `input`.
pub fn rot13(input: &str) -> String {
    input.chars().map(rot13_char).collect()
}
