//! boundlist - bounded singly-linked list of binary records
//!
//! A [`BoundedList`] chains caller-supplied fixed-size records up to a fixed
//! capacity. Appended records are borrowed; copies own fresh buffers. Two
//! lists can trade tails at arbitrary positions with [`BoundedList::cross`],
//! and any position can be read with wraparound through
//! [`BoundedList::data_handle_get`].
//!
//! ```
//! use boundlist::BoundedList;
//!
//! let mut a_records = [[1u8], [2], [3]];
//! let mut b_records = [[7u8], [8]];
//!
//! let mut a = BoundedList::new();
//! let mut b = BoundedList::new();
//! for record in a_records.iter_mut() {
//!     a.append(record);
//! }
//! for record in b_records.iter_mut() {
//!     b.append(record);
//! }
//!
//! a.cross(1, &mut b, 1).unwrap();
//! assert_eq!(a.iter().collect::<Vec<_>>(), vec![&[1u8][..], &[8]]);
//! assert_eq!(b.iter().collect::<Vec<_>>(), vec![&[7u8][..], &[2], &[3]]);
//! assert_eq!(a.data_handle_get(3).unwrap(), &[8]);
//! ```

mod compare;
pub mod config;
pub mod error;
pub mod list;
pub mod ops;
mod splice;
pub mod utils;


pub use boundlist_chain::{ChainError, Released};
pub use crate::config::ListConfig;
pub use crate::error::{ListError, Result};
pub use crate::list::{BoundedList, Iter, MAX_CAPACITY};
