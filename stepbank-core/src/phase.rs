//! Coil-energization sequence tables
//!
//! A stepper is rotated by walking a 4-phase cycle of coil
//! energizations. With 4 control wires each phase drives the coil pairs
//! directly; with 2 control wires an external inverter stage (Darlington
//! array or H-bridge) derives the other two signals, so the table holds
//! only the middle two columns of the 4-wire one.
//!
//! These tables are the single source of truth for the sequence. The
//! two are phase-offset views of the same underlying cycle and must
//! only ever be re-derived together.

use stepbank_hal::Level::{self, High, Low};

/// Number of phases in the coil-energization cycle.
pub const PHASES: u32 = 4;

/// Levels for (pin A, pin B) at phases 0..3 of a 2-wire motor.
pub static TWO_WIRE_SEQUENCE: [[Level; 2]; 4] = [
    [Low, High],
    [High, High],
    [High, Low],
    [Low, Low],
];

/// Levels for (pin A, pin B, pin C, pin D) at phases 0..3 of a 4-wire motor.
pub static FOUR_WIRE_SEQUENCE: [[Level; 4]; 4] = [
    [High, Low, High, Low],
    [Low, High, High, Low],
    [Low, High, Low, High],
    [High, Low, Low, High],
];
