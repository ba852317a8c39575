//! tn-core: stable foundation for transitnet.
//!
//! Contains:
//! - ids (compact stable IDs for stations and routes)
//! - color (opaque route display color)
//! - error (shared error types)

pub mod color;
pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use color::Color;
pub use error::{TnError, TnResult};
pub use ids::*;
