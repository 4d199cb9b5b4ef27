//! Hash functions for Bloom filters
//!
//! Uses MurmurHash3 with different seeds to emulate `k` independent hash
//! functions. The item itself is first reduced to a 64-bit digest with
//! SipHash-1-3 under fixed keys, so any `T: Hash` can be indexed and the
//! same item always lands on the same bits for the life of the process.

use siphasher::sip::SipHasher13;
use std::hash::{Hash, Hasher};
use std::io::Cursor;

use crate::error::FilterError;

/// Fixed SipHash keys for the item digest.
const DIGEST_KEYS: (u64, u64) = (0x736f_6d65_7073_6575, 0x646f_7261_6e64_6f6d);

/// Maps one item to bit positions.
///
/// The digest is computed once; each seed index then yields one position
/// via a seeded MurmurHash3 over the digest bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashIndexer {
    digest: [u8; 8],
}

impl HashIndexer {
    /// Digest an item for indexing.
    pub fn new<T: Hash + ?Sized>(item: &T) -> Self {
        let mut hasher = SipHasher13::new_with_keys(DIGEST_KEYS.0, DIGEST_KEYS.1);
        item.hash(&mut hasher);
        Self {
            digest: hasher.finish().to_le_bytes(),
        }
    }

    /// Position of the item under hash function `seed`, in `[0, m)`.
    pub fn position(&self, seed: u32, m: usize) -> Result<usize, FilterError> {
        debug_assert!(m > 0, "modulus must be positive");
        let hash = murmur_hash(&self.digest, seed)?;
        Ok((hash % m as u64) as usize)
    }

    /// Positions for seeds `0..k`.
    pub fn positions(&self, k: usize, m: usize) -> Result<Vec<usize>, FilterError> {
        (0..k).map(|i| self.position(i as u32, m)).collect()
    }
}

/// Hash bytes with MurmurHash3 (x64, 128-bit) and keep the lower 64 bits.
///
/// Fails only if the underlying reader does; a byte slice never does.
pub fn murmur_hash(element: &[u8], seed: u32) -> Result<u64, FilterError> {
    let mut cursor = Cursor::new(element);
    let hash = murmur3::murmur3_x64_128(&mut cursor, seed)
        .map_err(|e| FilterError::Unhashable(e.to_string()))?;
    Ok(hash as u64)
}

/// Compute `k` bit positions in `[0, m)` for an item.
pub fn compute_hash_positions<T: Hash + ?Sized>(
    item: &T,
    k: usize,
    m: usize,
) -> Result<Vec<usize>, FilterError> {
    HashIndexer::new(item).positions(k, m)
}
