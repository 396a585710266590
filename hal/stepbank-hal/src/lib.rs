//! Stepbank Hardware Abstraction Layer
//!
//! This crate defines the hardware capability traits consumed by the
//! stepper bank controller, so the same driver logic runs against any
//! chip-specific implementation (or against mocks on a host).
//!
//! # Traits
//!
//! - [`gpio::DigitalOutput`] - pin-mode configuration and digital writes,
//!   addressed by pin number
//! - [`time::Clock`] - monotonic millisecond tick counter

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use gpio::{DigitalOutput, Level, PinId};
pub use time::Clock;
