//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP client for the geographic lookup
//! service and the background dispatcher that keeps network I/O off the
//! UI thread.

pub mod lookup;
pub mod fetch;

pub use lookup::*;
pub use fetch::*;
