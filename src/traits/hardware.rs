//! Hardware abstraction traits for operator input, limit sensors, and actuators.
//!
//! These are the seams between the teleop core and the driver layer. The core
//! trusts every implementation to return a valid boolean or magnitude each
//! tick; wiring and transport faults belong to the implementation.
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`OperatorController`] | Gamepad buttons and analog axes |
//! | [`DigitalInputs`] | Limit switches on digital input channels |
//! | [`MotorBus`] | Percent-output motor controllers addressed by device ID |
//! | [`Drivetrain`] | Opaque arcade-drive kinematics service |
//!
//! # Implementation
//!
//! For testing and desktop development, use the mock implementations
//! from [`crate::hal::mock`]. GPIO-wired limit switches can use
//! `hal::gpio` (requires the `embedded-hal` feature).
//!
//! # Example
//!
//! ```rust
//! use teleop_core::traits::{MotorBus, DigitalInputs};
//! use teleop_core::hal::{MockMotorBus, MockDigitalInputs};
//!
//! let mut bus = MockMotorBus::new();
//! bus.set_percent_output(7, 1.0).unwrap();
//! assert_eq!(bus.output(7), Some(1.0));
//!
//! let mut dio = MockDigitalInputs::new();
//! dio.set(3, true);
//! assert!(dio.read(3));
//! ```

/// Gamepad buttons the teleop bindings can refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Button {
    /// Left face button.
    X,
    /// Top face button.
    Y,
    /// Bottom face button.
    A,
    /// Right face button.
    B,
    /// Left shoulder bumper.
    LeftBumper,
    /// Right shoulder bumper.
    RightBumper,
}

impl Button {
    /// Returns the button as a lowercase string.
    ///
    /// # Examples
    ///
    /// ```
    /// use teleop_core::Button;
    ///
    /// assert_eq!(Button::X.as_str(), "x");
    /// assert_eq!(Button::LeftBumper.as_str(), "left_bumper");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Button::X => "x",
            Button::Y => "y",
            Button::A => "a",
            Button::B => "b",
            Button::LeftBumper => "left_bumper",
            Button::RightBumper => "right_bumper",
        }
    }

    /// Parse a button name.
    ///
    /// Accepts the names from [`as_str`](Self::as_str) plus the short
    /// bumper forms `"lb"` and `"rb"`. Input is trimmed and case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use teleop_core::Button;
    ///
    /// assert_eq!(Button::from_text("Y"), Some(Button::Y));
    /// assert_eq!(Button::from_text(" rb "), Some(Button::RightBumper));
    /// assert_eq!(Button::from_text("start"), None);
    /// ```
    pub fn from_text(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Some(Button::X),
            "y" => Some(Button::Y),
            "a" => Some(Button::A),
            "b" => Some(Button::B),
            "left_bumper" | "lb" => Some(Button::LeftBumper),
            "right_bumper" | "rb" => Some(Button::RightBumper),
            _ => None,
        }
    }
}

/// Operator gamepad.
///
/// Buttons report the raw "currently held" level; edge detection is the
/// core's job, not the controller's.
pub trait OperatorController {
    /// Returns true while the button is held down.
    fn button(&self, button: Button) -> bool;

    /// Raw axis sample in `[-1.0, 1.0]`, in the device's own polarity.
    fn raw_axis(&self, axis: u8) -> f32;
}

/// Digital input channels carrying limit switches.
///
/// Active-high: `true` means the switch is triggered.
pub trait DigitalInputs {
    /// Read the current level of a channel.
    fn read(&mut self, channel: u8) -> bool;
}

/// Percent-output motor controllers addressed by device ID.
///
/// The driver must retain the last output written to a device until a new
/// one arrives. The teleop core never re-sends an unchanged command.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use teleop_core::traits::MotorBus;
///
/// struct CanBus { /* transport handle */ }
///
/// impl MotorBus for CanBus {
///     type Error = CanError;
///
///     fn set_percent_output(&mut self, device_id: u8, output: f32) -> Result<(), CanError> {
///         let frame = encode_percent_output(device_id, output.clamp(-1.0, 1.0));
///         self.send(frame)
///     }
/// }
/// ```
pub trait MotorBus {
    /// Error type for bus operations.
    type Error;

    /// Set a device's output as a signed fraction of full duty (`-1.0..=1.0`).
    fn set_percent_output(&mut self, device_id: u8, output: f32) -> Result<(), Self::Error>;

    /// Convenience method to stop a device.
    fn stop(&mut self, device_id: u8) -> Result<(), Self::Error> {
        self.set_percent_output(device_id, 0.0)
    }
}

/// Drivetrain kinematics service.
///
/// How `forward` and `rotate` combine into per-side output is up to the
/// implementation.
pub trait Drivetrain {
    /// Error type for drivetrain operations.
    type Error;

    /// Drive with an arcade-style (forward, rotate) pair, both in `[-1.0, 1.0]`.
    fn arcade_drive(&mut self, forward: f32, rotate: f32) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Button Tests
    // =========================================================================

    #[test]
    fn button_round_trips_through_text() {
        for button in [
            Button::X,
            Button::Y,
            Button::A,
            Button::B,
            Button::LeftBumper,
            Button::RightBumper,
        ] {
            assert_eq!(Button::from_text(button.as_str()), Some(button));
        }
    }

    #[test]
    fn button_from_text_short_bumpers() {
        assert_eq!(Button::from_text("lb"), Some(Button::LeftBumper));
        assert_eq!(Button::from_text("RB"), Some(Button::RightBumper));
    }

    #[test]
    fn button_from_text_invalid() {
        assert_eq!(Button::from_text(""), None);
        assert_eq!(Button::from_text("start"), None);
        assert_eq!(Button::from_text("xx"), None);
    }

    // =========================================================================
    // MotorBus Default Methods Tests
    // =========================================================================

    struct TestBus {
        last: Option<(u8, f32)>,
    }

    impl MotorBus for TestBus {
        type Error = ();

        fn set_percent_output(&mut self, device_id: u8, output: f32) -> Result<(), ()> {
            self.last = Some((device_id, output));
            Ok(())
        }
    }

    #[test]
    fn motor_bus_stop_default_impl() {
        let mut bus = TestBus { last: None };
        bus.set_percent_output(6, 0.5).unwrap();
        bus.stop(6).unwrap();
        assert_eq!(bus.last, Some((6, 0.0)));
    }
}
