//! recicla - Terminal Collection Points Locator Library
//!
//! A terminal client for finding waste collection points, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
