//! Byte-level rewrite of the checksum embedded in the sidecar file.
//!
//! The sidecar layout is not modelled. Every non-overlapping occurrence of
//! the old two-byte fingerprint is replaced, scanning left to right, wherever
//! it sits. An unrelated pair of bytes that happens to equal the old
//! fingerprint is rewritten as well.

use crate::checksum::ChecksumPair;

/// Result of patching sidecar content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patched {
    /// The rewritten content, same length as the input.
    pub content: Vec<u8>,
    /// How many occurrences were replaced. Informational only.
    pub replacements: usize,
}

/// Replace every occurrence of `old` in `content` with `new`.
pub fn patch(content: &[u8], old: [u8; 2], new: [u8; 2]) -> Patched {
    let mut out = Vec::with_capacity(content.len());
    let mut replacements = 0;
    let mut i = 0;

    while i < content.len() {
        if content[i..].starts_with(&old) {
            out.extend_from_slice(&new);
            replacements += 1;
            i += old.len();
        } else {
            out.push(content[i]);
            i += 1;
        }
    }

    Patched {
        content: out,
        replacements,
    }
}

/// Swap the `before` fingerprint for the `after` one.
pub fn patch_checksum(content: &[u8], checksums: &ChecksumPair) -> Patched {
    patch(
        content,
        checksums.before.swapped_bytes(),
        checksums.after.swapped_bytes(),
    )
}
