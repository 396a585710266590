//! Per-motor control block
//!
//! Each registered motor is tracked by one [`Motor`] block: its wiring,
//! its position within a revolution, its timing state and the countdown
//! of the move in progress. Blocks live in the bank's arena and are
//! addressed by registration index; the bank mutates them, callers get
//! read access through the accessors.

use stepbank_hal::{Level, PinId};

use crate::phase::{self, PHASES};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Increasing step index
    #[default]
    Forward,
    /// Decreasing step index
    Backward,
}

impl Direction {
    /// Get the opposite direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// How a motor's coils are wired to the controller
///
/// Fixed at registration. The pin order matches the column order of the
/// corresponding sequence table in [`phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Wiring {
    /// Two control wires, external stage inverts them onto the coils
    TwoWire([PinId; 2]),
    /// Four control wires driving the coil pairs directly
    FourWire([PinId; 4]),
}

impl Wiring {
    /// The output pins of this motor, in sequence-table column order
    pub fn pins(&self) -> &[PinId] {
        match self {
            Wiring::TwoWire(pins) => pins,
            Wiring::FourWire(pins) => pins,
        }
    }

    /// Levels to drive onto [`pins`](Self::pins) for the given phase
    pub fn levels(&self, phase: u32) -> &'static [Level] {
        match self {
            Wiring::TwoWire(_) => &phase::TWO_WIRE_SEQUENCE[phase as usize % 4],
            Wiring::FourWire(_) => &phase::FOUR_WIRE_SEQUENCE[phase as usize % 4],
        }
    }
}

/// Control block for one registered motor
#[derive(Debug, Clone)]
pub struct Motor {
    wiring: Wiring,
    /// Total steps in one full revolution of this motor
    steps_per_rev: u32,
    /// Current position, in [0, steps_per_rev)
    step_index: u32,
    direction: Direction,
    /// Minimum milliseconds between successive steps
    step_interval_ms: u32,
    /// Timestamp of the most recent step
    last_step_ms: u32,
    /// Steps left in the move currently in progress
    steps_remaining: u32,
}

impl Motor {
    /// Create a zeroed control block
    ///
    /// `steps_per_rev` must be non-zero; the bank validates before
    /// constructing.
    pub(crate) fn new(steps_per_rev: u32, wiring: Wiring) -> Self {
        Self {
            wiring,
            steps_per_rev,
            step_index: 0,
            direction: Direction::Forward,
            step_interval_ms: 0,
            last_step_ms: 0,
            steps_remaining: 0,
        }
    }

    /// How the motor's coils are wired
    pub fn wiring(&self) -> Wiring {
        self.wiring
    }

    /// Total steps per full revolution
    pub fn steps_per_rev(&self) -> u32 {
        self.steps_per_rev
    }

    /// Current position within the revolution, in [0, steps_per_rev)
    pub fn step_index(&self) -> u32 {
        self.step_index
    }

    /// Direction of the last commanded move
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Minimum milliseconds between steps (0 until a speed is set)
    pub fn step_interval_ms(&self) -> u32 {
        self.step_interval_ms
    }

    /// Steps left in the move currently in progress
    pub fn steps_remaining(&self) -> u32 {
        self.steps_remaining
    }

    /// Position within the 4-phase coil cycle
    pub fn phase(&self) -> u32 {
        self.step_index % PHASES
    }

    pub(crate) fn set_interval(&mut self, interval_ms: u32) {
        self.step_interval_ms = interval_ms;
    }

    /// Arm a move: direction from the sign, countdown from the magnitude.
    /// A zero target leaves the direction unchanged.
    pub(crate) fn arm(&mut self, target: i32) {
        if target > 0 {
            self.direction = Direction::Forward;
        }
        if target < 0 {
            self.direction = Direction::Backward;
        }
        self.steps_remaining = target.unsigned_abs();
    }

    /// Whether this motor's step interval has elapsed at `now_ms`
    ///
    /// Wrapping subtraction keeps the gate correct across a 32-bit
    /// rollover of the clock.
    pub(crate) fn due(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.last_step_ms) >= self.step_interval_ms
    }

    /// Take exactly one step at `now_ms`
    pub(crate) fn advance(&mut self, now_ms: u32) {
        self.last_step_ms = now_ms;
        self.step_index = match self.direction {
            Direction::Forward => (self.step_index + 1) % self.steps_per_rev,
            Direction::Backward => {
                // Wrap before decrementing so the index never underflows
                if self.step_index == 0 {
                    self.steps_per_rev - 1
                } else {
                    self.step_index - 1
                }
            }
        };
        self.steps_remaining -= 1;
    }
}
