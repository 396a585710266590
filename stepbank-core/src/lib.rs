//! Board-agnostic stepper bank controller
//!
//! Drives a fixed-capacity bank of unipolar/bipolar stepper motors over
//! 2 or 4 control wires each, by cycling a fixed 4-phase
//! coil-energization sequence. Hardware access goes through the
//! capability traits in `stepbank-hal`:
//!
//! - Coil sequence tables (2-wire and 4-wire)
//! - Per-motor control block with step/wrap arithmetic
//! - The bank controller: registration, speed, coordinated moves
//!
//! # Usage
//!
//! ```ignore
//! let mut bank: StepperBank<_, _, 2> = StepperBank::new(clock, outputs)?;
//! let left = bank.add_four_wire(200, 2, 3, 4, 5)?;
//! let right = bank.add_two_wire(200, 6, 7)?;
//! bank.set_speed(left, 60)?;
//! bank.set_speed(right, 120)?;
//! bank.move_by(&[400, -400])?; // blocks until both motors arrive
//! ```

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bank;
pub mod motor;
pub mod phase;

pub use bank::{BankError, StepperBank};
pub use motor::{Direction, Motor, Wiring};

/// Revision of the driver interface.
pub const INTERFACE_VERSION: u8 = 5;
