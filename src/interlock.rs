//! Travel-limit interlock.
//!
//! A directional mechanism may only be driven toward a travel extreme while
//! that extreme's limit switch is open. When it is closed the request turns
//! into an explicit [`ActuatorCommand::Stop`] so the actuator is never left
//! coasting into the hard stop.
//!
//! Each direction checks only its own switch. Both switches closed at once
//! (sensor fault or zero-travel mechanism) still blocks both directions, and
//! nothing here tries to work out which reading is wrong.
//!
//! ```rust
//! use teleop_core::{interlock, ActuatorCommand, LimitPair, TravelDirection};
//!
//! let at_bottom = LimitPair { upper: false, lower: true };
//!
//! let cmd = interlock::evaluate(TravelDirection::Lower, 0.5, &at_bottom);
//! assert_eq!(cmd, ActuatorCommand::Stop);
//!
//! let cmd = interlock::evaluate(TravelDirection::Raise, -0.5, &at_bottom);
//! assert_eq!(cmd, ActuatorCommand::Output(-0.5));
//! ```

use crate::command::ActuatorCommand;

/// Direction of travel for an interlocked mechanism.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelDirection {
    /// Toward the upper limit.
    Raise,
    /// Toward the lower limit.
    Lower,
}

/// Upper and lower limit-switch readings for one mechanism.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LimitPair {
    /// Upper travel limit triggered.
    pub upper: bool,
    /// Lower travel limit triggered.
    pub lower: bool,
}

impl LimitPair {
    /// The switch guarding `direction`.
    #[inline]
    pub fn triggered(&self, direction: TravelDirection) -> bool {
        match direction {
            TravelDirection::Raise => self.upper,
            TravelDirection::Lower => self.lower,
        }
    }
}

/// Decide the command for a requested move.
///
/// Returns `requested` (clamped) when the limit for `direction` is open,
/// otherwise an explicit stop.
pub fn evaluate(direction: TravelDirection, requested: f32, limits: &LimitPair) -> ActuatorCommand {
    if limits.triggered(direction) {
        ActuatorCommand::Stop
    } else {
        ActuatorCommand::output(requested)
    }
}
