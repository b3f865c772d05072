use crate::rc5::error::{Error, Result};

/// Renders bytes as uppercase hex with no separators.
pub(crate) fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

/// Parses a hex string into bytes. Requires an even number of digits; both
/// uppercase and lowercase digits are accepted.
pub(crate) fn hex_decode(s: &str) -> Result<Vec<u8>> {
    if !s.is_ascii() {
        return Err(Error::InvalidHex {
            context: "non-hex character",
        });
    }
    if s.len() % 2 != 0 {
        return Err(Error::InvalidHex {
            context: "odd number of digits",
        });
    }

    (0..s.len())
        .step_by(2)
        .map(|i| {
            let digits = &s[i..i + 2];
            // from_str_radix tolerates a leading sign, so check the digits
            // ourselves
            if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(Error::InvalidHex {
                    context: "non-hex character",
                });
            }
            u8::from_str_radix(digits, 16).map_err(|_| Error::InvalidHex {
                context: "non-hex character",
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_is_uppercase() {
        assert_eq!(hex_encode(&[0x0A, 0xFF, 0x00]), "0AFF00");
        assert_eq!(hex_encode(&[]), "");
    }

    #[test]
    fn decode_accepts_both_cases() {
        assert_eq!(hex_decode("0aFf00").unwrap(), vec![0x0A, 0xFF, 0x00]);
    }

    #[test]
    fn decode_rejects_odd_length() {
        assert!(matches!(
            hex_decode("ABC"),
            Err(Error::InvalidHex {
                context: "odd number of digits"
            })
        ));
    }

    #[test]
    fn decode_rejects_non_hex_input() {
        assert!(hex_decode("ZZZZ").is_err());
        assert!(hex_decode("äb").is_err());
    }

    #[test]
    fn decode_rejects_sign_prefixed_pairs() {
        // from_str_radix alone would happily parse these
        assert!(matches!(
            hex_decode("+1"),
            Err(Error::InvalidHex {
                context: "non-hex character"
            })
        ));
        assert!(matches!(
            hex_decode("+1+1+1+1+1+1+1+1"),
            Err(Error::InvalidHex { .. })
        ));
    }
}
