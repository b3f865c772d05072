//! String-level entry points: the two operations an external caller invokes.
//! Plaintext is UTF-8 text, ciphertext is an uppercase hex string; every
//! failure surfaces as a single descriptive [Error](crate::Error).

use crate::rc5::cipher::Cipher;
use crate::rc5::error::Result;
use crate::rc5::key::Key;
use crate::rc5::util::{hex_decode, hex_encode};
use crate::rc5::word::WordSize;

/// Encrypts `plaintext` with RC5-`word_size`/`rounds` under `key`, returning
/// the ciphertext as an uppercase hex string.
///
/// ## Examples
/// ```
/// # fn main() -> rc5x::Result<()> {
/// let ciphertext = rc5x::encrypt(32, 12, "Hello", "testkey")?;
/// assert_eq!(rc5x::decrypt(32, 12, &ciphertext, "testkey")?, "Hello");
/// # Ok(())
/// # }
/// ```
pub fn encrypt(word_size: u32, rounds: u32, plaintext: &str, key: &str) -> Result<String> {
    let word_size = WordSize::from_bits(word_size)?;
    let key = Key::try_from_slice(key.as_bytes())?;
    let cipher = Cipher::new(word_size, rounds, &key)?;

    Ok(hex_encode(&cipher.encrypt(plaintext.as_bytes())?))
}

/// Decrypts a hex ciphertext produced by [encrypt] with the same parameters
/// and key, returning the recovered text.
pub fn decrypt(word_size: u32, rounds: u32, ciphertext_hex: &str, key: &str) -> Result<String> {
    let word_size = WordSize::from_bits(word_size)?;
    let key = Key::try_from_slice(key.as_bytes())?;

    // decode before deriving the schedule so malformed input costs nothing
    let ciphertext = hex_decode(ciphertext_hex)?;

    let cipher = Cipher::new(word_size, rounds, &key)?;
    Ok(String::from_utf8(cipher.decrypt(&ciphertext)?)?)
}
