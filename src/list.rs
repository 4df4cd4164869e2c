//! Bounded singly-linked list of fixed-size binary records.
//!
//! A [`BoundedList`] owns its node chain. Each node either borrows a record
//! from the caller (`append`) or owns a copy of one (`copy`,
//! `sublist_copy`). Dropping the list frees the nodes and the owned copies;
//! borrowed records go back to the caller untouched.

use std::fmt;

use boundlist_chain::{self as chain, Link, Node, Released};
use tracing::{debug, trace};

use crate::config::ListConfig;
use crate::error::{ListError, Result};

/// Default maximum number of records in a list.
pub const MAX_CAPACITY: usize = 5000;

/// Iterator over the records of a [`BoundedList`], head to tail.
pub type Iter<'c, 'a> = chain::Iter<'c, 'a>;

/// A singly-linked list holding at most `capacity` records.
///
/// Invariants: `len` equals the number of nodes reachable from `head`,
/// `len <= capacity`, and `head` is `None` exactly when `len == 0`.
pub struct BoundedList<'a> {
    pub(crate) head: Link<'a>,
    pub(crate) len: usize,
    capacity: usize,
}

impl<'a> BoundedList<'a> {
    /// Create an empty list with the default capacity.
    pub const fn new() -> Self {
        Self {
            head: None,
            len: 0,
            capacity: MAX_CAPACITY,
        }
    }

    /// Create an empty list holding at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ListError::ZeroCapacity);
        }
        Ok(Self {
            head: None,
            len: 0,
            capacity,
        })
    }

    /// Create an empty list from loaded configuration.
    pub fn from_config(config: &ListConfig) -> Result<Self> {
        Self::with_capacity(config.capacity)
    }

    /// Number of records, O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of records. Same as [`len`](Self::len).
    pub fn size_get(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Link `data` as the new tail.
    ///
    /// The record is borrowed, not copied. A full list ignores the call and
    /// returns `false`.
    pub fn append(&mut self, data: &'a mut [u8]) -> bool {
        if self.len >= self.capacity {
            debug!(capacity = self.capacity, "list full, record dropped");
            return false;
        }
        *chain::tail_slot(&mut self.head) = Some(Node::borrowed(data));
        self.len += 1;
        true
    }

    /// Release every node and every owned record, consuming the list.
    pub fn destroy(mut self) -> Released {
        let released = chain::release(self.head.take());
        self.len = 0;
        trace!(
            nodes = released.nodes,
            owned = released.owned,
            "list destroyed"
        );
        released
    }

    /// Apply `visitor` to every record, head to tail.
    ///
    /// The visitor may rewrite bytes in place.
    pub fn run_for_all<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut [u8]),
    {
        for record in chain::iter_mut(&mut self.head) {
            visitor(record);
        }
    }

    /// Records, head to tail.
    pub fn iter(&self) -> Iter<'_, 'a> {
        chain::iter(&self.head)
    }

    /// Overwrite this list with a deep copy of `src`.
    ///
    /// Each copied node owns the first `element_size` bytes of its source
    /// record. The previous contents are released first. On error this list
    /// is left as it was.
    pub fn copy(&mut self, src: &BoundedList<'_>, element_size: usize) -> Result<()> {
        let copied = chain::deep_copy(&src.head, element_size)?;
        self.replace_chain(copied, src.len);
        trace!(len = self.len, element_size, "list copied");
        Ok(())
    }

    /// Overwrite this list with a deep copy of `src` from `position` to its
    /// tail.
    ///
    /// No wraparound: `position` may be at most `src.len()`, where the result
    /// is an empty list.
    pub fn sublist_copy(
        &mut self,
        src: &BoundedList<'_>,
        position: usize,
        element_size: usize,
    ) -> Result<()> {
        let start = chain::link_at(&src.head, position).ok_or(ListError::PositionOutOfRange {
            position,
            len: src.len,
        })?;
        let copied = chain::deep_copy(start, element_size)?;
        self.replace_chain(copied, src.len - position);
        trace!(len = self.len, position, "sublist copied");
        Ok(())
    }

    /// Record at `position`, wrapping past the tail back to head.
    ///
    /// On `[11, 12, 13, 14, 15]` position 7 resolves to 13.
    pub fn data_handle_get(&self, position: usize) -> Result<&[u8]> {
        let head = self.head.as_deref().ok_or(ListError::EmptyList)?;
        Ok(chain::advance_with_wrap(head, position).payload.as_bytes())
    }

    /// Mutable record at `position`, with the same wraparound addressing as
    /// [`data_handle_get`](Self::data_handle_get).
    pub fn data_handle_get_mut(&mut self, position: usize) -> Result<&mut [u8]> {
        let head = self.head.as_deref_mut().ok_or(ListError::EmptyList)?;
        Ok(chain::advance_with_wrap_mut(head, position)
            .payload
            .as_bytes_mut())
    }

    fn replace_chain(&mut self, copied: Link<'a>, len: usize) {
        let previous = std::mem::replace(&mut self.head, copied);
        chain::release(previous);
        self.len = len;
        self.truncate_to_capacity();
    }

    /// Free every node past `capacity` and cap `len`.
    pub(crate) fn truncate_to_capacity(&mut self) {
        if self.len <= self.capacity {
            return;
        }
        if let Some(slot) = chain::link_at_mut(&mut self.head, self.capacity) {
            let released = chain::release(slot.take());
            debug!(
                capacity = self.capacity,
                dropped = released.nodes,
                "list truncated to capacity"
            );
        }
        self.len = self.capacity;
    }
}

impl Default for BoundedList<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BoundedList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedList")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
