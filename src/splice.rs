//! Tail exchange between two lists.

use std::mem;

use boundlist_chain as chain;
use tracing::{trace, warn};

use crate::error::{ListError, Result};
use crate::list::BoundedList;

impl<'a> BoundedList<'a> {
    /// Swap the tails of two lists.
    ///
    /// Everything at or after `pos_a` in this list trades places with
    /// everything at or after `pos_b` in `other`. Position 0 moves a whole
    /// list; a position equal to the list length moves nothing.
    ///
    /// New sizes are `pos_a + other.len() - pos_b` and
    /// `pos_b + self.len() - pos_a`. A list pushed past its capacity has its
    /// excess tail freed. A position past the end of its list is rejected
    /// before anything is relinked.
    pub fn cross(&mut self, pos_a: usize, other: &mut BoundedList<'a>, pos_b: usize) -> Result<()> {
        let (len_a, len_b) = (self.len, other.len);

        // Position 0 attaches at the head slot; any other position at the
        // `next` slot of the node before it.
        let slot_a = chain::link_at_mut(&mut self.head, pos_a)
            .ok_or_else(|| out_of_range(pos_a, len_a))?;
        let slot_b = chain::link_at_mut(&mut other.head, pos_b)
            .ok_or_else(|| out_of_range(pos_b, len_b))?;
        mem::swap(slot_a, slot_b);

        self.len = pos_a + (len_b - pos_b);
        other.len = pos_b + (len_a - pos_a);
        trace!(pos_a, pos_b, len_a = self.len, len_b = other.len, "lists crossed");

        self.truncate_to_capacity();
        other.truncate_to_capacity();
        Ok(())
    }
}

fn out_of_range(position: usize, len: usize) -> ListError {
    warn!(position, len, "cross position past end of list");
    ListError::PositionOutOfRange { position, len }
}
