//! Charset codecs: render a packed buffer as text in a named alphabet.
//!
//! A codec is selected by identifier string at schema-build time (unknown
//! names fail). Encoding treats the packed buffer as one big-endian unsigned
//! integer and writes it base-N, most significant digit first, with a single
//! zero digit for the zero value. `bits_for_length` answers the inverse sizing
//! question: the widest bit count whose every value still fits in a given
//! number of characters.

use crate::schema::SchemaError;

const HEX_LOWER: &[u8] = b"0123456789abcdef";
const HEX_UPPER: &[u8] = b"0123456789ABCDEF";
const DEC: &[u8] = b"0123456789";
const BASE36_LOWER: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const BASE36_UPPER: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BASE62: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// A named alphabet for rendering packed buffers.
#[derive(Debug, Clone)]
pub struct Codec {
    name: &'static str,
    alphabet: &'static [u8],
}

/// Resolve a charset identifier to its codec. Lowercase names select the
/// lowercase alphabet where the alphabet has case.
pub fn codec(name: &str) -> Result<Codec, SchemaError> {
    let (name, alphabet) = match name {
        "hex" => ("hex", HEX_LOWER),
        "HEX" => ("HEX", HEX_UPPER),
        "dec" => ("dec", DEC),
        "base36" => ("base36", BASE36_LOWER),
        "BASE36" => ("BASE36", BASE36_UPPER),
        "base62" => ("base62", BASE62),
        other => return Err(SchemaError::UnknownCharset(other.to_string())),
    };
    Ok(Codec { name, alphabet })
}

impl Codec {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Alphabet size.
    pub fn base(&self) -> u32 {
        self.alphabet.len() as u32
    }

    /// The alphabet's zero character, used to left-pad an encoding up to a
    /// declared length.
    pub fn zero_digit(&self) -> char {
        self.alphabet[0] as char
    }

    /// The largest bit width whose every value fits in `chars` characters of
    /// this alphabet: `floor(chars * log2(base))`.
    pub fn bits_for_length(&self, chars: u32) -> u32 {
        (chars as f64 * (self.alphabet.len() as f64).log2()).floor() as u32
    }

    /// Render `bytes` (big-endian integer) in this alphabet, most significant
    /// digit first, minimal digits. The zero value encodes as one zero digit.
    pub fn encode(&self, bytes: &[u8]) -> String {
        let base = self.alphabet.len() as u16;
        let mut num: Vec<u8> = bytes.iter().copied().skip_while(|&b| b == 0).collect();
        if num.is_empty() {
            return (self.alphabet[0] as char).to_string();
        }
        let mut digits = Vec::new();
        while !num.is_empty() {
            // one long division of `num` by the base, collecting the remainder
            let mut rem: u16 = 0;
            let mut quotient = Vec::with_capacity(num.len());
            for &byte in &num {
                let acc = rem * 256 + byte as u16;
                quotient.push((acc / base) as u8);
                rem = acc % base;
            }
            digits.push(self.alphabet[rem as usize]);
            num = match quotient.iter().position(|&b| b != 0) {
                Some(i) => quotient[i..].to_vec(),
                None => Vec::new(),
            };
        }
        digits.reverse();
        digits.into_iter().map(char::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_charset_fails() {
        let err = codec("base999").unwrap_err();
        assert!(matches!(err, SchemaError::UnknownCharset(ref s) if s == "base999"));
    }

    #[test]
    fn hex_encode() {
        let c = codec("hex").expect("hex");
        assert_eq!(c.encode(&[0xAB]), "ab");
        assert_eq!(c.encode(&[0x01, 0xFF]), "1ff");
        assert_eq!(codec("HEX").expect("HEX").encode(&[0xAB]), "AB");
    }

    #[test]
    fn zero_buffer_encodes_as_one_zero_digit() {
        let c = codec("hex").expect("hex");
        assert_eq!(c.encode(&[]), "0");
        assert_eq!(c.encode(&[0x00, 0x00]), "0");
    }

    #[test]
    fn base36_encode() {
        let c = codec("base36").expect("base36");
        // 256 = 7 * 36 + 4
        assert_eq!(c.encode(&[0x01, 0x00]), "74");
        assert_eq!(c.encode(&[35]), "z");
    }

    #[test]
    fn bits_for_length_values() {
        assert_eq!(codec("hex").expect("hex").bits_for_length(2), 8);
        assert_eq!(codec("hex").expect("hex").bits_for_length(3), 12);
        // log2(36) ~ 5.17
        assert_eq!(codec("base36").expect("base36").bits_for_length(2), 10);
        // log2(62) ~ 5.95
        assert_eq!(codec("base62").expect("base62").bits_for_length(3), 17);
        assert_eq!(codec("dec").expect("dec").bits_for_length(3), 9);
    }

    #[test]
    fn zero_digit_per_alphabet() {
        assert_eq!(codec("hex").expect("hex").zero_digit(), '0');
        assert_eq!(codec("base62").expect("base62").zero_digit(), '0');
    }

    #[test]
    fn name_and_base() {
        let c = codec("BASE36").expect("BASE36");
        assert_eq!(c.name(), "BASE36");
        assert_eq!(c.base(), 36);
    }
}
