//! Utility functions.

pub mod bootstrap;
