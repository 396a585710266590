//! Time abstractions
//!
//! The driver only needs a free-running millisecond counter to gate
//! step timing; it never sleeps on it.

/// Monotonic millisecond tick counter
///
/// Implementations report elapsed milliseconds since an arbitrary
/// epoch. The counter is monotonically non-decreasing and wraps like a
/// 32-bit hardware tick register; consumers must compare timestamps
/// with wrapping subtraction.
pub trait Clock {
    /// Current tick count in milliseconds
    fn now_millis(&self) -> u32;
}

// A shared reference to a clock is itself a clock, so a host or test
// harness can keep a handle to the clock it injects.
impl<T: Clock> Clock for &T {
    fn now_millis(&self) -> u32 {
        (**self).now_millis()
    }
}
