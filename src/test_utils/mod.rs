//! Test utilities.
//!
//! This module provides:
//! - In-memory and failure-injecting `WaitlistRepo` implementations
//! - `TestAppStateBuilder` for constructing `AppState` with test dependencies

mod waitlist_mocks;

pub use app_state_builder::*;
pub use waitlist_mocks::*;
