//! Actuator and drivetrain command types.
//!
//! Commands are produced fresh by the core every tick and handed straight to
//! a [`CommandDispatcher`]; nothing in the core keeps them afterwards.
//!
//! # Stop vs. No Command
//!
//! [`ActuatorCommand::Stop`] is an explicit zero output that is sent to the
//! driver. A tick on which a mechanism has no edge produces *no* command at
//! all, and the driver keeps whatever it was last told.
//!
//! ```rust
//! use teleop_core::ActuatorCommand;
//!
//! let cmd = ActuatorCommand::output(1.5);
//! assert_eq!(cmd.value(), 1.0); // clamped
//!
//! assert!(ActuatorCommand::output(0.0).is_stop());
//! ```
//!
//! [`CommandDispatcher`]: crate::traits::CommandDispatcher

/// A controllable mechanism other than the drivetrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mechanism {
    /// Roller intake, toggled on and off.
    Intake,
    /// Limit-interlocked drawbridge.
    Drawbridge,
    /// Limit-interlocked rack-and-pinion lift.
    RackAndPinion,
}

impl Mechanism {
    /// Number of mechanisms.
    pub const COUNT: usize = 3;

    /// All mechanisms, in dispatch order.
    pub const ALL: [Mechanism; Self::COUNT] = [
        Mechanism::Intake,
        Mechanism::Drawbridge,
        Mechanism::RackAndPinion,
    ];

    /// Returns the mechanism name as a lowercase string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Mechanism::Intake => "intake",
            Mechanism::Drawbridge => "drawbridge",
            Mechanism::RackAndPinion => "rack_and_pinion",
        }
    }
}

/// Directive for a single actuator.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActuatorCommand {
    /// Signed duty magnitude in `[-1.0, 1.0]`, never exactly zero.
    Output(f32),
    /// Explicit stop (`0.0`).
    Stop,
}

impl ActuatorCommand {
    /// Build a command from a signed magnitude.
    ///
    /// The value is clamped to `[-1.0, 1.0]`. Zero and NaN become [`Stop`](Self::Stop).
    pub fn output(value: f32) -> Self {
        if value == 0.0 || value.is_nan() {
            ActuatorCommand::Stop
        } else {
            ActuatorCommand::Output(value.clamp(-1.0, 1.0))
        }
    }

    /// The magnitude to write to the driver.
    #[inline]
    pub fn value(&self) -> f32 {
        match self {
            ActuatorCommand::Output(v) => *v,
            ActuatorCommand::Stop => 0.0,
        }
    }

    /// True for an explicit stop.
    #[inline]
    pub fn is_stop(&self) -> bool {
        matches!(self, ActuatorCommand::Stop)
    }
}

/// Arcade-drive pair for the drivetrain service.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriveCommand {
    /// Forward speed, positive away from the operator.
    pub forward: f32,
    /// Rotation rate.
    pub rotate: f32,
}

impl DriveCommand {
    /// Map raw stick samples to a drive command.
    ///
    /// The forward stick reads negative when pushed away from the operator,
    /// so it is inverted. Rotate passes through. Both are clamped to `[-1.0, 1.0]`.
    ///
    /// ```rust
    /// use teleop_core::DriveCommand;
    ///
    /// let drive = DriveCommand::from_axes(0.6, -0.25);
    /// assert_eq!(drive.forward, -0.6);
    /// assert_eq!(drive.rotate, -0.25);
    /// ```
    pub fn from_axes(raw_forward: f32, raw_rotate: f32) -> Self {
        Self {
            forward: clamp_axis(-raw_forward),
            rotate: clamp_axis(raw_rotate),
        }
    }
}

fn clamp_axis(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-1.0, 1.0)
    }
}
