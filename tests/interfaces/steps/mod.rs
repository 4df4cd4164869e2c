//! Step definitions for interface tests.

pub mod bounded_list;
