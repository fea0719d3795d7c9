//! Error handling for the monitoring engine
//!
//! This module defines the crate error type and its helper constructors.

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{MonitoringError, Result};
