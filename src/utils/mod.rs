//! Shared utilities
//!
//! Currently only the crate error type lives here.

pub mod error;
