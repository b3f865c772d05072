mod rc5;

pub use rc5::{Cipher, Error, Key, MAX_KEY_BYTES, Result, WordSize, decrypt, encrypt};
