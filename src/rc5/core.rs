//! Key schedule derivation and single-block transforms, generic over the
//! register type. Variable names follow the RC5 paper:
//!
//! - `b`   key length in bytes
//! - `c`   key length in words, at least 1
//! - `t`   expanded key table length, `2 * (r + 1)`
//! - `L`   the key packed into words, little-endian
//! - `S`   the expanded key table

use std::cmp::max;

use crate::rc5::word::Word;

/// A derived RC5 key schedule for one word width. The schedule is computed
/// once in the constructor and read-only afterwards.
#[derive(Debug)]
pub(crate) struct BlockCipher<W: Word> {
    schedule: Vec<W>,
    rounds: usize,
}

impl<W: Word> BlockCipher<W> {
    pub(crate) fn new(rounds: usize, key: &[u8]) -> Self {
        Self {
            schedule: expand_key::<W>(rounds, key),
            rounds,
        }
    }

    /// Encrypts one block in place. `block` must be exactly `2 * W::BYTES`
    /// bytes; both registers are read and written little-endian.
    pub(crate) fn encrypt_block(&self, block: &mut [u8]) {
        let s = &self.schedule;
        let mut a = W::from_le(&block[..W::BYTES]).wrapping_add(s[0]);
        let mut b = W::from_le(&block[W::BYTES..]).wrapping_add(s[1]);

        for i in 1..=self.rounds {
            // rotation amount comes from the other register, sampled after
            // the xor and before the rotation
            a = a.xor(b).rotate_left(b.low_bits()).wrapping_add(s[2 * i]);
            b = b.xor(a).rotate_left(a.low_bits()).wrapping_add(s[2 * i + 1]);
        }

        a.write_le(&mut block[..W::BYTES]);
        b.write_le(&mut block[W::BYTES..]);
    }

    /// Decrypts one block in place: the exact inverse of
    /// [`encrypt_block`](Self::encrypt_block), with rounds in descending
    /// order and the initial additions undone last.
    pub(crate) fn decrypt_block(&self, block: &mut [u8]) {
        let s = &self.schedule;
        let mut a = W::from_le(&block[..W::BYTES]);
        let mut b = W::from_le(&block[W::BYTES..]);

        for i in (1..=self.rounds).rev() {
            b = b
                .wrapping_sub(s[2 * i + 1])
                .rotate_right(a.low_bits())
                .xor(a);
            a = a.wrapping_sub(s[2 * i]).rotate_right(b.low_bits()).xor(b);
        }

        b = b.wrapping_sub(s[1]);
        a = a.wrapping_sub(s[0]);

        a.write_le(&mut block[..W::BYTES]);
        b.write_le(&mut block[W::BYTES..]);
    }

    #[cfg(test)]
    pub(crate) fn schedule(&self) -> &[W] {
        &self.schedule
    }
}

/// RC5 key expansion: pack the key into words, seed the table from P and Q,
/// then mix the two arrays together over `3 * max(t, c)` iterations.
fn expand_key<W: Word>(rounds: usize, key: &[u8]) -> Vec<W> {
    let b = key.len();
    let c = max(b, 1).div_ceil(W::BYTES);
    let t = 2 * (rounds + 1);

    // L[i/u] = (L[i/u] << 8) + K[i], walking the key bytes high to low,
    // packs each word little-endian with zero fill
    let mut l = vec![W::ZERO; c];
    for i in (0..b).rev() {
        l[i / W::BYTES] = l[i / W::BYTES].shift_in_byte(key[i]);
    }

    let mut s = vec![W::ZERO; t];
    s[0] = W::P;
    for i in 1..t {
        s[i] = s[i - 1].wrapping_add(W::Q);
    }

    let mut a = W::ZERO;
    let mut b_reg = W::ZERO;
    let mut i = 0;
    let mut j = 0;

    for _ in 0..3 * max(t, c) {
        s[i] = s[i].wrapping_add(a).wrapping_add(b_reg).rotate_left(3);
        a = s[i];

        let amount = a.wrapping_add(b_reg).low_bits();
        l[j] = l[j].wrapping_add(a).wrapping_add(b_reg).rotate_left(amount);
        b_reg = l[j];

        i = (i + 1) % t;
        j = (j + 1) % c;
    }

    s
}
