//! Error handling for dts-walker
//!
//! This module provides the crate-wide error type, its categories, result alias
//! and context utilities.

pub mod context;
pub mod types;

pub use context::ResultExt;
pub use types::{ErrorCategory, Result, WalkerError};
