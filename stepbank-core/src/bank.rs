//! Stepper bank controller
//!
//! Owns a fixed-capacity arena of [`Motor`] control blocks plus the
//! injected [`Clock`] and [`DigitalOutput`] collaborators, and advances
//! every motor of a coordinated move from one cooperative poll loop.
//!
//! # Usage
//!
//! The blocking [`move_by`](StepperBank::move_by) busy-polls until all
//! motors arrive. Hosts that cannot block arm the same move with
//! [`begin_move`](StepperBank::begin_move) and call
//! [`poll`](StepperBank::poll) from their own loop:
//!
//! ```ignore
//! bank.begin_move(&[400, -400])?;
//! while bank.poll() {
//!     // service other work between steps
//! }
//! ```

use heapless::Vec;
use stepbank_hal::{Clock, DigitalOutput, PinId};

use crate::motor::{Motor, Wiring};

/// Errors that can occur with bank operations
///
/// All are precondition violations detected before any pin write for
/// the offending call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BankError {
    /// The bank was instantiated with capacity 0
    ZeroCapacity,
    /// No free slot for another motor
    CapacityExceeded,
    /// steps-per-revolution must be non-zero
    InvalidStepCount,
    /// RPM must be non-zero
    InvalidSpeed,
    /// Motor index beyond the registered count
    NoSuchMotor,
    /// Move target list length differs from the registered count
    LengthMismatch,
}

/// Controller for a bank of up to `N` stepper motors
///
/// Motors are registered once, addressed by the index registration
/// returned, and advanced together by [`poll`](Self::poll). All state
/// lives in this value; the collaborators injected at construction are
/// the only hardware surface.
pub struct StepperBank<C, O, const N: usize> {
    clock: C,
    outputs: O,
    motors: Vec<Motor, N>,
}

impl<C: Clock, O: DigitalOutput, const N: usize> StepperBank<C, O, N> {
    /// Create an empty bank around the injected collaborators
    pub fn new(clock: C, outputs: O) -> Result<Self, BankError> {
        if N == 0 {
            return Err(BankError::ZeroCapacity);
        }
        Ok(Self {
            clock,
            outputs,
            motors: Vec::new(),
        })
    }

    /// Register a motor driven over two control wires
    ///
    /// Configures both pins as outputs and returns the new motor's
    /// index. The block starts zeroed; call
    /// [`set_speed`](Self::set_speed) before moving.
    pub fn add_two_wire(
        &mut self,
        steps_per_rev: u32,
        pin_a: PinId,
        pin_b: PinId,
    ) -> Result<usize, BankError> {
        self.register(steps_per_rev, Wiring::TwoWire([pin_a, pin_b]))
    }

    /// Register a motor driven over four control wires
    pub fn add_four_wire(
        &mut self,
        steps_per_rev: u32,
        pin_a: PinId,
        pin_b: PinId,
        pin_c: PinId,
        pin_d: PinId,
    ) -> Result<usize, BankError> {
        self.register(steps_per_rev, Wiring::FourWire([pin_a, pin_b, pin_c, pin_d]))
    }

    fn register(&mut self, steps_per_rev: u32, wiring: Wiring) -> Result<usize, BankError> {
        if steps_per_rev == 0 {
            return Err(BankError::InvalidStepCount);
        }
        if self.motors.is_full() {
            return Err(BankError::CapacityExceeded);
        }
        for &pin in wiring.pins() {
            self.outputs.configure_output(pin);
        }
        let index = self.motors.len();
        // Cannot fail, fullness was checked above
        let _ = self.motors.push(Motor::new(steps_per_rev, wiring));
        Ok(index)
    }

    /// Set a motor's speed in revolutions per minute
    ///
    /// Derives the minimum inter-step interval from that motor's own
    /// steps-per-revolution, truncating toward zero:
    /// `60000 / (steps_per_rev * rpm)`. Leaves position and direction
    /// untouched. The interval stays in force until the next call.
    pub fn set_speed(&mut self, motor: usize, rpm: u16) -> Result<(), BankError> {
        let block = self.motors.get_mut(motor).ok_or(BankError::NoSuchMotor)?;
        if rpm == 0 {
            return Err(BankError::InvalidSpeed);
        }
        let interval = 60_000u64 / (u64::from(block.steps_per_rev()) * u64::from(rpm));
        block.set_interval(interval as u32);
        Ok(())
    }

    /// Arm a coordinated move without driving it
    ///
    /// `targets` holds one signed step count per registered motor, in
    /// registration order. Each motor's direction comes from the sign
    /// (a zero target leaves it unchanged) and its countdown from the
    /// magnitude. Checked before any pin write.
    pub fn begin_move(&mut self, targets: &[i32]) -> Result<(), BankError> {
        if targets.len() != self.motors.len() {
            return Err(BankError::LengthMismatch);
        }
        for (motor, &target) in self.motors.iter_mut().zip(targets) {
            motor.arm(target);
        }
        Ok(())
    }

    /// Advance every due motor by at most one step
    ///
    /// Reads the clock once, then in registration order steps each
    /// motor that still has countdown left and whose interval has
    /// elapsed, emitting its new coil pattern. Never sleeps, so motors
    /// on different intervals interleave without the slowest one
    /// blocking the rest. Returns `true` while any motor still has
    /// steps to take.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now_millis();
        let mut moving = false;
        for motor in self.motors.iter_mut() {
            if motor.steps_remaining() == 0 {
                continue;
            }
            if motor.due(now) {
                motor.advance(now);
                let wiring = motor.wiring();
                self.outputs
                    .write_pattern(wiring.pins(), wiring.levels(motor.phase()));
            }
            moving |= motor.steps_remaining() > 0;
        }
        moving
    }

    /// Move all motors by the given signed step counts, blocking
    ///
    /// Busy-polls until every motor has taken its full count. There is
    /// no cancellation; a caller that needs a timeout must wrap the
    /// cooperative [`begin_move`](Self::begin_move)/[`poll`](Self::poll)
    /// pair instead.
    pub fn move_by(&mut self, targets: &[i32]) -> Result<(), BankError> {
        self.begin_move(targets)?;
        while self.poll() {}
        Ok(())
    }

    /// Maximum number of motors this bank can hold
    pub fn capacity(&self) -> usize {
        N
    }

    /// Number of motors registered so far
    pub fn motor_count(&self) -> usize {
        self.motors.len()
    }

    /// Whether any motor still has steps to take
    pub fn is_moving(&self) -> bool {
        self.motors.iter().any(|m| m.steps_remaining() > 0)
    }

    /// Read access to a motor's control block
    pub fn motor(&self, index: usize) -> Option<&Motor> {
        self.motors.get(index)
    }

    /// The injected clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The injected output sink
    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    /// Mutable access to the output sink
    pub fn outputs_mut(&mut self) -> &mut O {
        &mut self.outputs
    }

    /// Consume the bank and hand the collaborators back
    pub fn release(self) -> (C, O) {
        (self.clock, self.outputs)
    }
}
