//! Utility types and functions for sel2coll.
//!
//! This module contains fundamental pieces used throughout the library:
//! - [`Error`] / [`Result`] - Error handling
//! - [`naming`] - Host-default name de-duplication

mod error;
pub mod naming;

pub use error::*;
