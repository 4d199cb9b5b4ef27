//! Inbound Ports (Driving Ports)
//!
//! The add/query surface shared by [`FixedFilter`](crate::FixedFilter),
//! [`SizedFilter`](crate::SizedFilter) and
//! [`ScalableFilter`](crate::ScalableFilter).

use std::hash::Hash;

use crate::error::FilterError;

/// Probabilistic set membership (Driving Port)
///
/// Implementations never produce false negatives: once `add(x)` has
/// returned `Ok`, every later `query(x)` returns `Ok(true)`. A `true`
/// answer for an item that was never added is a false positive.
pub trait MembershipFilter {
    /// Record `item` as a member.
    ///
    /// On error the filter is left unchanged.
    fn add<T: Hash + ?Sized>(&mut self, item: &T) -> Result<(), FilterError>;

    /// Test whether `item` might be a member.
    ///
    /// - `true` if the item might be in the set (could be a false positive)
    /// - `false` if the item is definitely not in the set
    fn query<T: Hash + ?Sized>(&self, item: &T) -> Result<bool, FilterError>;

    /// Add every item yielded by `items`, stopping at the first error.
    fn add_all<'a, T, I>(&mut self, items: I) -> Result<(), FilterError>
    where
        T: Hash + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for item in items {
            self.add(item)?;
        }
        Ok(())
    }
}
