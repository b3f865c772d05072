//! Word-level primitives for RC5. The cipher is defined over a register type
//! of `w` bits; [`WordSize`] selects the width at runtime and the
//! crate-private [`Word`] trait maps the paper's primitive operations onto
//! the matching unsigned integer type:
//!
//! 1. Two's complement addition and subtraction: `wrapping_add`/`wrapping_sub`.
//! 2. Bitwise exclusive or.
//! 3. Data-dependent left/right rotation, amount taken modulo `w`.

use crate::rc5::error::{Error, Result};

/// Register width selector. RC5 is parameterized by a word size `w`; this
/// crate supports the 16, 32, and 64-bit variants.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum WordSize {
    /// 16-bit registers, 4-byte blocks.
    Bits16,
    /// 32-bit registers, 8-byte blocks (the nominal RC5 parameter).
    Bits32,
    /// 64-bit registers, 16-byte blocks.
    Bits64,
}

impl WordSize {
    /// Selects a word size from a bit count. Returns an InvalidWordSize
    /// error for anything other than 16, 32, or 64.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            16 => Ok(Self::Bits16),
            32 => Ok(Self::Bits32),
            64 => Ok(Self::Bits64),
            _ => Err(Error::InvalidWordSize { bits }),
        }
    }

    /// Register width in bits.
    pub fn bits(self) -> u32 {
        match self {
            Self::Bits16 => 16,
            Self::Bits32 => 32,
            Self::Bits64 => 64,
        }
    }

    /// Block size in bytes: two registers per block.
    pub fn block_size(self) -> usize {
        2 * (self.bits() as usize / 8)
    }
}

/// Operations the key schedule and block transforms need from a register
/// type, plus the magic constants seeding the schedule. P and Q are the odd
/// integers closest to `(e - 2) * 2^w` and `(phi - 1) * 2^w`, fixed lookup
/// values per supported width.
pub(crate) trait Word: Copy + Eq + std::fmt::Debug {
    const BYTES: usize;
    const P: Self;
    const Q: Self;
    const ZERO: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn xor(self, rhs: Self) -> Self;
    fn rotate_left(self, amount: u32) -> Self;
    fn rotate_right(self, amount: u32) -> Self;

    /// The low `log2(w)` bits, which is how rotation amounts are derived
    /// from register values.
    fn low_bits(self) -> u32;

    /// `(self << 8) + byte`, used when packing key bytes into words.
    fn shift_in_byte(self, byte: u8) -> Self;

    fn from_le(bytes: &[u8]) -> Self;
    fn write_le(self, out: &mut [u8]);
}

macro_rules! impl_word {
    ($ty:ty, $p:expr, $q:expr) => {
        impl Word for $ty {
            const BYTES: usize = (<$ty>::BITS / 8) as usize;
            const P: Self = $p;
            const Q: Self = $q;
            const ZERO: Self = 0;

            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }

            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }

            fn xor(self, rhs: Self) -> Self {
                self ^ rhs
            }

            fn rotate_left(self, amount: u32) -> Self {
                <$ty>::rotate_left(self, amount)
            }

            fn rotate_right(self, amount: u32) -> Self {
                <$ty>::rotate_right(self, amount)
            }

            fn low_bits(self) -> u32 {
                (self & ((<$ty>::BITS - 1) as $ty)) as u32
            }

            fn shift_in_byte(self, byte: u8) -> Self {
                (self << 8).wrapping_add(byte as $ty)
            }

            fn from_le(bytes: &[u8]) -> Self {
                // callers always hand over exactly one register's bytes
                <$ty>::from_le_bytes(bytes.try_into().unwrap())
            }

            fn write_le(self, out: &mut [u8]) {
                out.copy_from_slice(&self.to_le_bytes());
            }
        }
    };
}

impl_word!(u16, 0xB7E1, 0x9E37);
impl_word!(u32, 0xB7E1_5163, 0x9E37_79B9);
impl_word!(u64, 0xB7E1_5162_8AED_2A6B, 0x9E37_79B9_7F4A_7C15);
