//! Content comparison of two lists.

use crate::list::BoundedList;

impl BoundedList<'_> {
    /// True if both lists hold the same number of records and each pair is
    /// byte-equal over its first `element_size` bytes.
    ///
    /// A record shorter than `element_size` never compares equal.
    pub fn compare(&self, other: &BoundedList<'_>, element_size: usize) -> bool {
        self.len == other.len
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| match (a.get(..element_size), b.get(..element_size)) {
                    (Some(a), Some(b)) => a == b,
                    _ => false,
                })
    }
}
