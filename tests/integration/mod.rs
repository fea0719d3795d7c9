//! Integration tests for request-monitor
//!
//! These tests drive the public API the way a host service would and
//! check real engine behavior without mocking.

pub mod config_validation_tests;
pub mod scheduler_tests;
