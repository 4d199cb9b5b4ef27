//! Fixed-length bit vector backing a single filter

use bitvec::prelude::*;

/// An owned sequence of bits, all zero at construction.
///
/// The length is fixed for the lifetime of the vector. Bits can be set but
/// never cleared, so the number of ones only grows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitVector {
    bits: BitVec<u8, Lsb0>,
}

impl BitVector {
    /// Longest vector the backing storage can address.
    pub const MAX_LEN: usize = BitSlice::<u8, Lsb0>::MAX_BITS;

    /// Create a vector of `len` zero bits.
    ///
    /// # Panics
    /// Panics if `len > MAX_LEN`.
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; len],
        }
    }

    /// Read the bit at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Set the bit at `index`, returning `true` if it was previously zero.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize) -> bool {
        !self.bits.replace(index, true)
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }
}
