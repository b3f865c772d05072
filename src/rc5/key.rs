//! Defines the [`Key`] struct, which holds an RC5 key of at most 255 bytes.
//! Keys can be randomly generated or built from an existing byte slice.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::rc5::error::{Error, Result};

/// Maximum key length in bytes (2040 bits, per the RC5 parameter limits).
pub const MAX_KEY_BYTES: usize = 255;

/// Contains a valid RC5 key of 0 to 255 bytes. Unlike AES, RC5 accepts keys
/// of any length within that range, including the empty key.
/// A `Key` is required to instantiate a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> rc5x::Result<()> {
/// use rc5x::Key;
///
/// // Build a key from arbitrary bytes:
/// let key = Key::try_from_slice(b"testkey")?;
/// assert_eq!(key.as_bytes(), b"testkey");
///
/// // The empty key is valid:
/// let empty = Key::try_from_slice(b"")?;
/// assert!(empty.as_bytes().is_empty());
///
/// // Generate a random 16-byte key:
/// let random = Key::random(16)?;
/// assert_eq!(random.as_bytes().len(), 16);
///
/// // Anything longer than 255 bytes is rejected:
/// assert!(Key::try_from_slice(&[0u8; 256]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: Vec<u8>,
}

impl Key {
    /// Attempts to build a key from a slice of bytes. Returns an
    /// InvalidKeyLength error if the slice is longer than 255 bytes.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > MAX_KEY_BYTES {
            return Err(Error::InvalidKeyLength { len: bytes.len() });
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Generates a random key of `len` bytes. Returns an InvalidKeyLength
    /// error if `len` exceeds 255, or an Rng error if OsRng fails.
    pub fn random(len: usize) -> Result<Self> {
        if len > MAX_KEY_BYTES {
            return Err(Error::InvalidKeyLength { len });
        }
        let mut bytes = vec![0u8; len];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self { bytes })
    }

    /// Returns the internal key bytes as a slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
