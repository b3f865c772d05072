use crate::rc5::core::BlockCipher;
use crate::rc5::error::{Error, Result};
use crate::rc5::key::Key;
use crate::rc5::padding::{pad, unpad};
use crate::rc5::word::{Word, WordSize};

/// Provides RC5 [encryption](Cipher::encrypt) and
/// [decryption](Cipher::decrypt) over byte buffers of any length.
/// Instantiated with a [WordSize], a round count, and a [Key]; the key is
/// expanded into the subkey table once and stored in the instance.
///
/// ## Examples
/// ```
/// # fn main() -> rc5x::Result<()> {
/// use rc5x::{Cipher, Key, WordSize};
///
/// let key = Key::try_from_slice(b"testkey")?;
/// let cipher = Cipher::new(WordSize::Bits32, 12, &key)?;
///
/// let ciphertext = cipher.encrypt(b"Hello")?;
/// assert_eq!(cipher.decrypt(&ciphertext)?, b"Hello");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Cipher {
    inner: Inner,
}

/// Monomorphized schedules, one variant per supported register width.
#[derive(Debug)]
enum Inner {
    W16(BlockCipher<u16>),
    W32(BlockCipher<u32>),
    W64(BlockCipher<u64>),
}

impl Cipher {
    /// Derives the key schedule for the given parameters and stores it in
    /// the returned instance. Returns an InvalidRoundCount error when
    /// `rounds` exceeds 255.
    pub fn new(word_size: WordSize, rounds: u32, key: &Key) -> Result<Self> {
        if rounds > 255 {
            return Err(Error::InvalidRoundCount { rounds });
        }
        let rounds = rounds as usize;

        let inner = match word_size {
            WordSize::Bits16 => Inner::W16(BlockCipher::new(rounds, key.as_bytes())),
            WordSize::Bits32 => Inner::W32(BlockCipher::new(rounds, key.as_bytes())),
            WordSize::Bits64 => Inner::W64(BlockCipher::new(rounds, key.as_bytes())),
        };
        Ok(Self { inner })
    }

    /// Block size in bytes for this cipher's word size.
    pub fn block_size(&self) -> usize {
        match &self.inner {
            Inner::W16(_) => 4,
            Inner::W32(_) => 8,
            Inner::W64(_) => 16,
        }
    }

    /// Encrypts a plaintext buffer. The buffer is padded up to a block
    /// boundary, then each block is transformed independently in place.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut buf = plaintext.to_vec();
        pad(&mut buf, self.block_size());
        self.for_each_block(&mut buf, true);
        Ok(buf)
    }

    /// Decrypts a ciphertext buffer and strips padding leniently. The input
    /// must be a whole number of blocks.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.block_size();
        if ciphertext.len() % block_size != 0 {
            return Err(Error::InvalidCiphertext {
                len: ciphertext.len(),
                context: "not a multiple of the block size",
            });
        }

        let mut buf = ciphertext.to_vec();
        self.for_each_block(&mut buf, false);
        unpad(&mut buf, block_size);
        Ok(buf)
    }

    fn for_each_block(&self, buf: &mut [u8], encrypt: bool) {
        match &self.inner {
            Inner::W16(cipher) => transform_blocks(cipher, buf, 4, encrypt),
            Inner::W32(cipher) => transform_blocks(cipher, buf, 8, encrypt),
            Inner::W64(cipher) => transform_blocks(cipher, buf, 16, encrypt),
        }
    }
}

fn transform_blocks<W: Word>(
    cipher: &BlockCipher<W>,
    buf: &mut [u8],
    block_size: usize,
    encrypt: bool,
) {
    for block in buf.chunks_exact_mut(block_size) {
        if encrypt {
            cipher.encrypt_block(block);
        } else {
            cipher.decrypt_block(block);
        }
    }
}
