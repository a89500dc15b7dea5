//! Value fields: opaque byte producers for field-mode segments.

use byteorder::{BigEndian, ByteOrder};

/// A leaf value field.
///
/// The engine never inspects field content; at render time it packs the low
/// `bits` bits of this buffer (read as a big-endian integer) at the width
/// resolved for the field. Implement this for custom content sources (random,
/// sequential, clock-derived, ...); the crate itself only ships
/// [`FixedBytes`]. `Send + Sync` so a built schema can be shared across
/// threads and rendered concurrently.
pub trait Field: std::fmt::Debug + Send + Sync {
    fn bytes(&self) -> Vec<u8>;
}

/// A field with fixed byte content.
#[derive(Debug, Clone)]
pub struct FixedBytes(Vec<u8>);

impl FixedBytes {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        FixedBytes(bytes.into())
    }

    /// Big-endian encoding of `v` in eight bytes. Combine with an explicit
    /// `bits` width to take only the low bits.
    pub fn from_u64(v: u64) -> Self {
        let mut buf = [0u8; 8];
        BigEndian::write_u64(&mut buf, v);
        FixedBytes(buf.to_vec())
    }
}

impl Field for FixedBytes {
    fn bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u64_is_big_endian() {
        assert_eq!(
            FixedBytes::from_u64(0xABCD).bytes(),
            vec![0, 0, 0, 0, 0, 0, 0xAB, 0xCD]
        );
    }
}
