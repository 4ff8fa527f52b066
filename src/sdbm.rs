//! The sdbm string hash.

/// Hashes `key` byte by byte: `h = b + (h << 6) + (h << 16) - h`, starting
/// from zero. Deterministic and unsalted; all arithmetic wraps at 64 bits.
///
/// Bytes are deliberately read as unsigned, so bytes `>= 0x80` are not
/// sign-extended. Bucket placement of non-ASCII keys therefore matches
/// sdbm implementations on unsigned-`char` platforms, not signed-`char` ones.
#[inline]
pub fn sdbm(key: &str) -> u64 {
    key.bytes().fold(0u64, |hash, b| {
        u64::from(b)
            .wrapping_add(hash << 6)
            .wrapping_add(hash << 16)
            .wrapping_sub(hash)
    })
}

/// Maps a hash onto a bucket array of `size` slots.
#[inline]
pub(crate) fn bucket_index(hash: u64, size: usize) -> usize {
    debug_assert!(size > 0);
    (hash % size as u64) as usize
}
