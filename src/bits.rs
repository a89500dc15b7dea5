//! Bit-exact buffer concatenation for packing value fields.
//!
//! A field buffer is read as a big-endian integer whose significant bits are
//! its low `bits` bits. [`concat_bits`] yields `(A << b_bits) | B` rendered in
//! exactly `ceil((a_bits + b_bits) / 8)` bytes, so adjacent fields are never
//! separated by implicit byte padding; only the final buffer rounds up to a
//! whole byte.

/// Read bit `i` of `buf`, with `i` counted LSB-first from the end of the
/// buffer. Positions past the buffer read as zero (zero-extension).
fn get_bit(buf: &[u8], i: usize) -> bool {
    let byte = i / 8;
    if byte >= buf.len() {
        return false;
    }
    (buf[buf.len() - 1 - byte] >> (i % 8)) & 1 == 1
}

fn set_bit(buf: &mut [u8], i: usize) {
    let len = buf.len();
    buf[len - 1 - i / 8] |= 1 << (i % 8);
}

/// Copy the low `bits` bits of `src` into `dst`, starting at LSB offset
/// `shift`. Bits of `src` above `bits` are ignored.
fn write_low_bits(dst: &mut [u8], src: &[u8], bits: u32, shift: u32) {
    for i in 0..bits as usize {
        if get_bit(src, i) {
            set_bit(dst, i + shift as usize);
        }
    }
}

/// Bit-exact concatenation of two width-tagged buffers.
///
/// `a` occupies the high bit positions and `b` the low ones; the result holds
/// exactly `a_bits + b_bits` significant bits. Sources shorter than their
/// declared width are zero-extended; bits above the declared width are masked
/// off.
pub fn concat_bits(a: &[u8], a_bits: u32, b: &[u8], b_bits: u32) -> Vec<u8> {
    let total = (a_bits + b_bits) as usize;
    let mut out = vec![0u8; (total + 7) / 8];
    write_low_bits(&mut out, b, b_bits, 0);
    write_low_bits(&mut out, a, a_bits, b_bits);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_two_nibbles_is_one_byte() {
        let out = concat_bits(&[0x0A], 4, &[0x0B], 4);
        assert_eq!(out, vec![0xAB]);
    }

    #[test]
    fn concat_byte_count_rounds_up() {
        let out = concat_bits(&[0x07], 3, &[0x3F], 6);
        // 9 significant bits -> 2 bytes: 111_111111 = 0x01FF
        assert_eq!(out, vec![0x01, 0xFF]);
    }

    #[test]
    fn short_source_zero_extends() {
        let out = concat_bits(&[], 4, &[0x0B], 4);
        assert_eq!(out, vec![0x0B]);
    }

    #[test]
    fn high_bits_above_width_are_masked() {
        let out = concat_bits(&[0xFF], 4, &[0xFF], 4);
        assert_eq!(out, vec![0xFF]);
        let out = concat_bits(&[0xF3], 2, &[0x00], 2);
        // only the low 2 bits of 0xF3 (0b11) survive
        assert_eq!(out, vec![0x0C]);
    }

    #[test]
    fn empty_concat_is_empty() {
        assert_eq!(concat_bits(&[], 0, &[], 0), Vec::<u8>::new());
    }
}
