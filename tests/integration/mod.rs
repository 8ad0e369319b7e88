//! Integration tests for enroll
//!
//! These drive the app through key events and check the rendered screen.

#[path = "../common/mod.rs"]
pub mod common;

pub mod identity_form;
pub mod wizard_flow;
