//! Two-list call forms of the list operations.
//!
//! These mirror the `operation(dst, src, ...)` shape of the method API for
//! callers that hold lists side by side.

use crate::error::Result;
use crate::list::BoundedList;

/// Create an empty list with the default capacity.
pub fn create<'a>() -> BoundedList<'a> {
    BoundedList::new()
}

/// Overwrite `dst` with a deep copy of `src`.
pub fn copy(dst: &mut BoundedList<'_>, src: &BoundedList<'_>, element_size: usize) -> Result<()> {
    dst.copy(src, element_size)
}

/// Overwrite `dst` with a deep copy of `src` from `position` onward.
pub fn sublist_copy(
    dst: &mut BoundedList<'_>,
    src: &BoundedList<'_>,
    position: usize,
    element_size: usize,
) -> Result<()> {
    dst.sublist_copy(src, position, element_size)
}

/// Swap the tails of `list_a` (from `pos_a`) and `list_b` (from `pos_b`).
pub fn cross<'a>(
    list_a: &mut BoundedList<'a>,
    pos_a: usize,
    list_b: &mut BoundedList<'a>,
    pos_b: usize,
) -> Result<()> {
    list_a.cross(pos_a, list_b, pos_b)
}

/// Byte-wise equality of two lists over `element_size`-byte records.
pub fn compare(list_a: &BoundedList<'_>, list_b: &BoundedList<'_>, element_size: usize) -> bool {
    list_a.compare(list_b, element_size)
}

/// Stored record count of `list`.
pub fn size_get(list: &BoundedList<'_>) -> usize {
    list.size_get()
}
