//! GPIO abstractions
//!
//! Provides a digital-output sink addressed by pin number, implemented
//! by chip-specific HALs. A single sink serves every coil line of every
//! motor in a bank, which is why pins are identified by number rather
//! than owned one object per line.

/// Identifier of a digital output line on the target board.
pub type PinId = u8;

/// Logic level of a digital output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if this is the high level
    pub fn is_high(self) -> bool {
        self == Level::High
    }

    /// The opposite level
    pub fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

/// Digital output sink
///
/// Implementations handle the actual hardware register manipulation for
/// the specific chip. The sink is write-only by contract; the driver
/// never reads a level back.
pub trait DigitalOutput {
    /// Configure the pin as a digital output
    fn configure_output(&mut self, pin: PinId);

    /// Drive the pin to the given level
    fn write(&mut self, pin: PinId, level: Level);

    /// Drive a group of pins to the corresponding levels
    ///
    /// Pins and levels are paired positionally; any excess entries on
    /// either side are ignored.
    fn write_pattern(&mut self, pins: &[PinId], levels: &[Level]) {
        for (&pin, &level) in pins.iter().zip(levels) {
            self.write(pin, level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
    }

    #[test]
    fn test_level_toggled() {
        assert_eq!(Level::Low.toggled(), Level::High);
        assert_eq!(Level::High.toggled(), Level::Low);
        assert!(Level::High.is_high());
        assert!(!Level::Low.is_high());
    }
}
