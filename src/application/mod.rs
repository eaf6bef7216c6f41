//! Application layer managing state and screen workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing picker state, fetch sequencing, and screen navigation.

pub mod state;

pub use state::*;
