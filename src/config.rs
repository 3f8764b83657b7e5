//! Robot configuration: channel assignments, button bindings, mechanism outputs.
//!
//! All structs use the builder pattern and implement `Default` with the
//! competition robot's wiring.
//!
//! # Example
//!
//! ```rust
//! use teleop_core::config::{Config, ChannelMap, MechanismConfig};
//!
//! // Use defaults
//! let config = Config::default();
//! assert_eq!(config.channels.intake, 7);
//!
//! // Or customize
//! let config = Config::default()
//!     .with_channels(ChannelMap::default().with_intake(9))
//!     .with_mechanisms(MechanismConfig::default().with_drawbridge_magnitude(0.3));
//! assert_eq!(config.channels.intake, 9);
//! ```

use crate::input::ControlInput;
use crate::traits::Button;

// ============================================================================
// Main Config
// ============================================================================

/// Complete robot configuration
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Device IDs, digital channels and axes
    pub channels: ChannelMap,
    /// Which button drives which logical input
    pub bindings: ButtonBindings,
    /// Mechanism output levels
    pub mechanisms: MechanismConfig,
    /// Control loop timing
    pub teleop: TeleopConfig,
}

impl Config {
    /// Set channel assignments
    pub fn with_channels(mut self, channels: ChannelMap) -> Self {
        self.channels = channels;
        self
    }

    /// Set button bindings
    pub fn with_bindings(mut self, bindings: ButtonBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Set mechanism outputs
    pub fn with_mechanisms(mut self, mechanisms: MechanismConfig) -> Self {
        self.mechanisms = mechanisms;
        self
    }

    /// Set loop timing
    pub fn with_teleop(mut self, teleop: TeleopConfig) -> Self {
        self.teleop = teleop;
        self
    }
}

// ============================================================================
// Channel Map
// ============================================================================

/// Hardware addresses for every device on the robot.
///
/// The core reads the mechanism IDs, limit channels and axes. The drivetrain
/// IDs and `controller_port` are wiring data for the host, which builds its
/// [`Drivetrain`](crate::Drivetrain) and operator controller from them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChannelMap {
    /// Drivetrain front-left motor controller (host wiring)
    pub front_left: u8,
    /// Drivetrain front-right motor controller
    pub front_right: u8,
    /// Drivetrain back-left motor controller
    pub back_left: u8,
    /// Drivetrain back-right motor controller
    pub back_right: u8,
    /// Rack-and-pinion motor controller
    pub rack_and_pinion: u8,
    /// Drawbridge motor controller
    pub drawbridge: u8,
    /// Intake motor controller
    pub intake: u8,
    /// Drawbridge upper limit switch (digital channel)
    pub drawbridge_upper_limit: u8,
    /// Drawbridge lower limit switch (digital channel)
    pub drawbridge_lower_limit: u8,
    /// Rack-and-pinion upper limit switch (digital channel)
    pub rack_and_pinion_upper_limit: u8,
    /// Rack-and-pinion lower limit switch (digital channel)
    pub rack_and_pinion_lower_limit: u8,
    /// Operator controller port (host wiring)
    pub controller_port: u8,
    /// Forward stick axis
    pub forward_axis: u8,
    /// Rotate stick axis
    pub rotate_axis: u8,
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self {
            front_left: 0,
            front_right: 2,
            back_left: 1,
            back_right: 3,
            rack_and_pinion: 5,
            drawbridge: 6,
            intake: 7,
            drawbridge_upper_limit: 3,
            drawbridge_lower_limit: 5,
            rack_and_pinion_upper_limit: 1,
            rack_and_pinion_lower_limit: 2,
            controller_port: 0,
            forward_axis: 1,
            rotate_axis: 0,
        }
    }
}

impl ChannelMap {
    /// Set the intake motor controller ID
    pub fn with_intake(mut self, id: u8) -> Self {
        self.intake = id;
        self
    }

    /// Set the drawbridge motor controller ID
    pub fn with_drawbridge(mut self, id: u8) -> Self {
        self.drawbridge = id;
        self
    }

    /// Set the rack-and-pinion motor controller ID
    pub fn with_rack_and_pinion(mut self, id: u8) -> Self {
        self.rack_and_pinion = id;
        self
    }

    /// Set the drawbridge limit switch channels
    pub fn with_drawbridge_limits(mut self, upper: u8, lower: u8) -> Self {
        self.drawbridge_upper_limit = upper;
        self.drawbridge_lower_limit = lower;
        self
    }

    /// Set the rack-and-pinion limit switch channels
    pub fn with_rack_and_pinion_limits(mut self, upper: u8, lower: u8) -> Self {
        self.rack_and_pinion_upper_limit = upper;
        self.rack_and_pinion_lower_limit = lower;
        self
    }

    /// Set the stick axes
    pub fn with_axes(mut self, forward: u8, rotate: u8) -> Self {
        self.forward_axis = forward;
        self.rotate_axis = rotate;
        self
    }
}

// ============================================================================
// Button Bindings
// ============================================================================

/// Gamepad button for each logical input
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ButtonBindings {
    /// Toggles the intake
    pub intake_toggle: Button,
    /// Raises the drawbridge
    pub drawbridge_raise: Button,
    /// Lowers the drawbridge
    pub drawbridge_lower: Button,
    /// Raises the rack-and-pinion
    pub rack_and_pinion_raise: Button,
    /// Lowers the rack-and-pinion
    pub rack_and_pinion_lower: Button,
}

impl Default for ButtonBindings {
    fn default() -> Self {
        Self {
            intake_toggle: Button::X,
            drawbridge_raise: Button::RightBumper,
            drawbridge_lower: Button::LeftBumper,
            rack_and_pinion_raise: Button::Y,
            rack_and_pinion_lower: Button::A,
        }
    }
}

impl ButtonBindings {
    /// Button bound to `input`
    pub fn button_for(&self, input: ControlInput) -> Button {
        match input {
            ControlInput::IntakeToggle => self.intake_toggle,
            ControlInput::DrawbridgeRaise => self.drawbridge_raise,
            ControlInput::DrawbridgeLower => self.drawbridge_lower,
            ControlInput::RackAndPinionRaise => self.rack_and_pinion_raise,
            ControlInput::RackAndPinionLower => self.rack_and_pinion_lower,
        }
    }

    /// Rebind one logical input
    pub fn with_binding(mut self, input: ControlInput, button: Button) -> Self {
        match input {
            ControlInput::IntakeToggle => self.intake_toggle = button,
            ControlInput::DrawbridgeRaise => self.drawbridge_raise = button,
            ControlInput::DrawbridgeLower => self.drawbridge_lower = button,
            ControlInput::RackAndPinionRaise => self.rack_and_pinion_raise = button,
            ControlInput::RackAndPinionLower => self.rack_and_pinion_lower = button,
        }
        self
    }
}

// ============================================================================
// Mechanism Config
// ============================================================================

/// Output levels for each mechanism
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MechanismConfig {
    /// Intake output while running (0.0 to 1.0)
    pub intake_output: f32,
    /// Drawbridge travel magnitude (0.0 to 1.0)
    pub drawbridge_magnitude: f32,
    /// Rack-and-pinion travel magnitude (0.0 to 1.0)
    pub rack_and_pinion_magnitude: f32,
}

impl Default for MechanismConfig {
    fn default() -> Self {
        Self {
            intake_output: 1.0,
            drawbridge_magnitude: 0.5,
            rack_and_pinion_magnitude: 0.5,
        }
    }
}

impl MechanismConfig {
    /// Set the intake run output
    pub fn with_intake_output(mut self, output: f32) -> Self {
        self.intake_output = unit_level(output);
        self
    }

    /// Set the drawbridge travel magnitude
    pub fn with_drawbridge_magnitude(mut self, magnitude: f32) -> Self {
        self.drawbridge_magnitude = unit_level(magnitude);
        self
    }

    /// Set the rack-and-pinion travel magnitude
    pub fn with_rack_and_pinion_magnitude(mut self, magnitude: f32) -> Self {
        self.rack_and_pinion_magnitude = unit_level(magnitude);
        self
    }
}

/// Clamp a run level or travel magnitude into `[0.0, 1.0]`; NaN becomes 0.
pub(crate) fn unit_level(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Teleop Config
// ============================================================================

/// Control loop timing
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TeleopConfig {
    /// Tick period in milliseconds
    pub tick_ms: u32,
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self { tick_ms: 20 }
    }
}

impl TeleopConfig {
    /// Set the tick period (minimum 1 ms)
    pub fn with_tick_ms(mut self, ms: u32) -> Self {
        self.tick_ms = ms.max(1);
        self
    }

    /// Session time at the start of tick `n` (1-based)
    pub fn elapsed_ms(&self, tick: u64) -> u64 {
        tick.saturating_sub(1) * u64::from(self.tick_ms)
    }
}

// ============================================================================
// Tests
// ============================================================================
