//! Limit switches wired directly to GPIO pins.
//!
//! [`PinInputs`] maps digital channel numbers onto `embedded-hal` input pins
//! so a board without a separate DIO controller can feed
//! [`HardwareSensors`](crate::HardwareSensors).
//!
//! Reads fail safe: a pin that errors, or a channel with no pin assigned,
//! reads as triggered so the interlock blocks that direction.
//!
//! ```rust,ignore
//! use teleop_core::hal::PinInputs;
//!
//! let inputs = PinInputs::new([
//!     (1, rack_upper_pin),
//!     (2, rack_lower_pin),
//!     (3, drawbridge_upper_pin),
//!     (5, drawbridge_lower_pin),
//! ]);
//! ```

use embedded_hal::digital::InputPin;

use crate::traits::DigitalInputs;

/// Fixed set of input pins addressed by channel number.
pub struct PinInputs<P: InputPin, const N: usize> {
    pins: [(u8, P); N],
}

impl<P: InputPin, const N: usize> PinInputs<P, N> {
    /// Create from (channel, pin) pairs. Pins are active-high.
    pub fn new(pins: [(u8, P); N]) -> Self {
        Self { pins }
    }

    /// Give the pins back.
    pub fn release(self) -> [(u8, P); N] {
        self.pins
    }
}

impl<P: InputPin, const N: usize> DigitalInputs for PinInputs<P, N> {
    fn read(&mut self, channel: u8) -> bool {
        let Some((_, pin)) = self.pins.iter_mut().find(|(ch, _)| *ch == channel) else {
            tracing::warn!(channel, "no pin assigned, reading as triggered");
            return true;
        };
        match pin.is_high() {
            Ok(level) => level,
            Err(_) => {
                tracing::warn!(channel, "pin read failed, reading as triggered");
                true
            }
        }
    }
}
