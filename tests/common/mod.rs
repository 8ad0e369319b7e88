//! Shared test utilities for enroll
//!
//! - TUI terminal testing helpers
//! - Key event builders for driving the app

pub mod keys;
pub mod terminal;
