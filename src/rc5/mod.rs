mod cipher;
mod core;
mod error;
mod interface;
mod key;
mod padding;
mod util;
mod word;

pub use cipher::Cipher;
pub use error::{Error, Result};
pub use interface::{decrypt, encrypt};
pub use key::{Key, MAX_KEY_BYTES};
pub use word::WordSize;
