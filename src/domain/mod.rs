//! Domain layer holding lookup records and selection state.

pub mod models;
pub mod errors;

pub use models::*;
pub use errors::*;
