//! CRC-16 fingerprint of the channel database.
//!
//! The tuner firmware checks the database against a copy of this checksum
//! held in the sidecar file, so the variant is fixed: CRC-16/XMODEM
//! (poly `0x1021`, init `0x0000`, unreflected, no final xor).
//!
//! The sidecar stores the value low byte first. The "swapped hex" form is the
//! big-endian hex rendering with its two byte groups exchanged, i.e. the hex
//! of the bytes as they sit in the file.

use std::fmt;

use crc::{Crc, CRC_16_XMODEM};

use crate::error::{CoreError, Result};

const XMODEM: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// A 16-bit checksum over the full content of a file.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Checksum(pub u16);

impl Checksum {
    /// Compute the checksum of `data`.
    pub fn compute(data: &[u8]) -> Self {
        Self(XMODEM.checksum(data))
    }

    pub const fn value(&self) -> u16 {
        self.0
    }

    /// The two bytes as embedded in the sidecar.
    pub const fn swapped_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    /// Four lowercase hex digits, byte groups swapped (`0x1234` -> `"3412"`).
    pub fn to_swapped_hex(&self) -> String {
        hex::encode(self.swapped_bytes())
    }

    /// Parse a swapped hex string back into a checksum.
    pub fn from_swapped_hex(s: &str) -> Result<Self> {
        Ok(Self(u16::from_le_bytes(decode_swapped_hex(s)?)))
    }
}

impl fmt::Debug for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Checksum({:04x})", self.0)
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_swapped_hex())
    }
}

/// Decode a swapped hex string into the raw two bytes it names.
///
/// Accepts either letter case.
pub fn decode_swapped_hex(s: &str) -> Result<[u8; 2]> {
    let bytes = hex::decode(s).map_err(|source| CoreError::InvalidChecksumHex {
        input: s.to_string(),
        source,
    })?;
    bytes
        .try_into()
        .map_err(|_| CoreError::ChecksumLength(s.to_string()))
}

/// Database checksum before and after the rank update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecksumPair {
    pub before: Checksum,
    pub after: Checksum,
}

impl ChecksumPair {
    pub const fn new(before: Checksum, after: Checksum) -> Self {
        Self { before, after }
    }

    /// True when the update left the database bytes with the same checksum.
    pub fn is_unchanged(&self) -> bool {
        self.before == self.after
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_xmodem_check_value() {
        assert_eq!(Checksum::compute(b"123456789").value(), 0x31c3);
        assert_eq!(Checksum::compute(b"").value(), 0x0000);
    }

    #[test]
    fn test_swapped_hex() {
        assert_eq!(Checksum(0x1234).to_swapped_hex(), "3412");
        assert_eq!(Checksum(0x31c3).to_swapped_hex(), "c331");
        assert_eq!(Checksum(0xcdab).to_swapped_hex(), "abcd");
    }

    #[test]
    fn test_swapped_hex_is_zero_padded() {
        assert_eq!(Checksum(0x00ab).to_swapped_hex(), "ab00");
        assert_eq!(Checksum(0x0a00).to_swapped_hex(), "000a");
        assert_eq!(Checksum(0).to_swapped_hex(), "0000");
    }

    #[test]
    fn test_swapped_hex_matches_naive_render_with_groups_swapped() {
        let naive = format!("{:04x}", 0xbeefu16);
        let swapped = format!("{}{}", &naive[2..4], &naive[0..2]);
        assert_eq!(Checksum(0xbeef).to_swapped_hex(), swapped);
    }

    #[test]
    fn test_decode_swapped_hex() {
        assert_eq!(decode_swapped_hex("ABCD").unwrap(), [0xab, 0xcd]);
        assert_eq!(decode_swapped_hex("ef01").unwrap(), [0xef, 0x01]);
    }

    #[test]
    fn test_decode_swapped_hex_rejects_bad_input() {
        assert!(matches!(
            decode_swapped_hex("zz00"),
            Err(CoreError::InvalidChecksumHex { .. })
        ));
        assert!(matches!(
            decode_swapped_hex("abc"),
            Err(CoreError::InvalidChecksumHex { .. })
        ));
        assert!(matches!(
            decode_swapped_hex("abcdef"),
            Err(CoreError::ChecksumLength(_))
        ));
    }

    #[test]
    fn test_pair_unchanged() {
        assert!(ChecksumPair::new(Checksum(1), Checksum(1)).is_unchanged());
        assert!(!ChecksumPair::new(Checksum(1), Checksum(2)).is_unchanged());
    }

    proptest! {
        #[test]
        fn swapped_hex_roundtrip(value: u16) {
            let hex = Checksum(value).to_swapped_hex();
            prop_assert_eq!(hex.len(), 4);
            let decoded = Checksum::from_swapped_hex(&hex).unwrap();
            prop_assert_eq!(decoded, Checksum(value));
            prop_assert_eq!(decoded.to_swapped_hex(), hex);
        }

        #[test]
        fn swapped_bytes_match_swapped_hex(value: u16) {
            let checksum = Checksum(value);
            prop_assert_eq!(
                decode_swapped_hex(&checksum.to_swapped_hex()).unwrap(),
                checksum.swapped_bytes()
            );
        }
    }
}
