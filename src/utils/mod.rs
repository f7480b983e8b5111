//! Utility functions and helpers

pub mod paths;

pub use paths::{basename, dirname, join_paths, normalize, normalize_slashes};
