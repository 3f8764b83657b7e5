//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`].
//!
//! # Available Implementations
//!
//! - `mock`: Test implementations for desktop development
//! - `gpio`: GPIO limit switches over `embedded-hal` (requires `embedded-hal` feature)

pub mod mock;

#[cfg(feature = "embedded-hal")]
pub mod gpio;

pub use mock::*;

#[cfg(feature = "embedded-hal")]
pub use gpio::*;
