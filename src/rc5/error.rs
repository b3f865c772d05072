use rand::rand_core;
use thiserror::Error;

/// RC5 Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// RC5 Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to select a word size that is not 16, 32, or 64 bits.
    #[error("invalid word size: {bits} bits (expected 16, 32, or 64)")]
    InvalidWordSize { bits: u32 },

    /// Attempted to use a round count outside the allowed range of 0 to 255.
    #[error("invalid round count: {rounds} (expected 0 to 255)")]
    InvalidRoundCount { rounds: u32 },

    /// Attempted to instantiate a key longer than 255 bytes (2040 bits).
    #[error("invalid key length: {len} bytes (maximum is 255)")]
    InvalidKeyLength { len: usize },

    /// Provided a hex string that could not be decoded into bytes.
    #[error("invalid hex input ({context})")]
    InvalidHex { context: &'static str },

    /// Provided ciphertext bytes that are not a whole number of blocks.
    #[error("invalid ciphertext length: {len} bytes ({context})")]
    InvalidCiphertext { len: usize, context: &'static str },

    /// Decryption produced bytes that are not valid UTF-8 text.
    #[error("decrypted bytes are not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
