//! Length-valued padding for applying the block cipher to arbitrary-length
//! plaintext. Every appended byte holds the number of bytes appended; input
//! that is already block-aligned gets no padding at all.

/// Pads `buf` up to the next multiple of `block_size`. A no-op when the
/// buffer is already aligned (including the empty buffer).
pub(crate) fn pad(buf: &mut Vec<u8>, block_size: usize) {
    let pad_len = (block_size - buf.len() % block_size) % block_size;
    buf.resize(buf.len() + pad_len, pad_len as u8);
}

/// Strips padding from a decrypted buffer. The trailing byte is trusted as
/// the pad length when it falls within `[1, block_size]`; otherwise the
/// buffer is left untouched. Removal is deliberately lenient and never
/// fails: without authentication, bad padding is indistinguishable from
/// plaintext that merely ends in a small byte value.
pub(crate) fn unpad(buf: &mut Vec<u8>, block_size: usize) {
    if let Some(&last) = buf.last() {
        let pad_len = last as usize;
        if pad_len >= 1 && pad_len <= block_size {
            buf.truncate(buf.len() - pad_len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_up_to_block_boundary() {
        let mut buf = vec![0x41, 0x42, 0x43, 0x44, 0x45];
        pad(&mut buf, 8);
        assert_eq!(buf, vec![0x41, 0x42, 0x43, 0x44, 0x45, 3, 3, 3]);
    }

    #[test]
    fn aligned_input_gets_no_padding() {
        let mut buf = vec![0x41; 8];
        pad(&mut buf, 8);
        assert_eq!(buf.len(), 8);

        let mut empty: Vec<u8> = Vec::new();
        pad(&mut empty, 8);
        assert!(empty.is_empty());
    }

    #[test]
    fn strips_valid_padding() {
        let mut buf = vec![0x41, 0x42, 0x43, 0x44, 0x45, 3, 3, 3];
        unpad(&mut buf, 8);
        assert_eq!(buf, vec![0x41, 0x42, 0x43, 0x44, 0x45]);
    }

    #[test]
    fn out_of_range_trailing_byte_is_left_alone() {
        // 0x45 > block_size, so this is treated as unpadded plaintext
        let mut buf = vec![0x41, 0x42, 0x43, 0x44, 0x41, 0x42, 0x43, 0x45];
        unpad(&mut buf, 8);
        assert_eq!(buf.len(), 8);

        // a trailing zero is equally out of range
        let mut zeros = vec![0x41, 0x42, 0x43, 0x00];
        unpad(&mut zeros, 4);
        assert_eq!(zeros.len(), 4);
    }

    #[test]
    fn unpad_of_empty_buffer_is_a_no_op() {
        let mut empty: Vec<u8> = Vec::new();
        unpad(&mut empty, 8);
        assert!(empty.is_empty());
    }
}
