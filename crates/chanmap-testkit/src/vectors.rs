//! Golden checksum vectors.
//!
//! The tuner validates `tv.db` against a CRC-16/XMODEM fingerprint. These
//! vectors pin the variant and the byte order of its swapped hex form.

use chanmap_core::Checksum;

/// A golden checksum vector.
#[derive(Debug, Clone)]
pub struct ChecksumVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Input bytes.
    pub input: &'static [u8],
    /// Expected checksum value.
    pub expected: u16,
    /// Expected swapped hex, as the bytes appear in `chanLst.bin`.
    pub swapped_hex: &'static str,
}

/// Get all golden checksum vectors.
pub fn all_vectors() -> Vec<ChecksumVector> {
    vec![
        ChecksumVector {
            name: "standard check string",
            input: b"123456789",
            expected: 0x31c3,
            swapped_hex: "c331",
        },
        ChecksumVector {
            name: "empty input",
            input: b"",
            expected: 0x0000,
            swapped_hex: "0000",
        },
        ChecksumVector {
            name: "single byte",
            input: b"A",
            expected: 0x58e5,
            swapped_hex: "e558",
        },
        ChecksumVector {
            name: "SQLite file header",
            input: b"SQLite format 3\0",
            expected: 0xb02f,
            swapped_hex: "2fb0",
        },
        ChecksumVector {
            name: "all ones",
            input: &[0xff; 32],
            expected: 0x84b4,
            swapped_hex: "b484",
        },
    ]
}

/// Check every vector, returning the name of the first mismatch.
pub fn verify_all_vectors() -> Result<(), String> {
    for vector in all_vectors() {
        let checksum = Checksum::compute(vector.input);
        if checksum.value() != vector.expected {
            return Err(format!(
                "{}: expected {:04x}, got {:04x}",
                vector.name,
                vector.expected,
                checksum.value()
            ));
        }
        if checksum.to_swapped_hex() != vector.swapped_hex {
            return Err(format!(
                "{}: expected swapped hex {}, got {}",
                vector.name,
                vector.swapped_hex,
                checksum.to_swapped_hex()
            ));
        }
    }
    Ok(())
}
