//! Per-tick sensor snapshot.
//!
//! At the start of every tick the core reads every operator input and every
//! limit switch exactly once into an [`InputSnapshot`]. The rest of the tick
//! works from that snapshot only, so a sensor changing mid-tick cannot split
//! a decision.
//!
//! [`HardwareSensors`] builds snapshots from an [`OperatorController`] and a
//! set of [`DigitalInputs`], using the channel assignments and button bindings
//! from [`Config`](crate::Config).
//!
//! # Example
//!
//! ```rust
//! use teleop_core::{Button, ControlInput, HardwareSensors, Config};
//! use teleop_core::hal::{MockController, MockDigitalInputs};
//! use teleop_core::traits::SensorSource;
//!
//! let mut pad = MockController::new();
//! pad.press(Button::X);
//! pad.set_axis(1, 0.6);
//!
//! let mut dio = MockDigitalInputs::new();
//! dio.set(1, true); // rack-and-pinion upper limit
//!
//! let config = Config::default();
//! let mut sensors = HardwareSensors::new(pad, dio, &config);
//! let snapshot = sensors.snapshot();
//!
//! assert!(snapshot.buttons.get(ControlInput::IntakeToggle));
//! assert_eq!(snapshot.forward_axis, 0.6);
//! assert!(snapshot.limits.rack_and_pinion.upper);
//! ```

use crate::config::{ButtonBindings, ChannelMap, Config};
use crate::interlock::LimitPair;
use crate::traits::{DigitalInputs, OperatorController, SensorSource};

/// A named logical operator input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ControlInput {
    /// Start/stop the intake.
    IntakeToggle,
    /// Drive the drawbridge up.
    DrawbridgeRaise,
    /// Drive the drawbridge down.
    DrawbridgeLower,
    /// Drive the rack-and-pinion up.
    RackAndPinionRaise,
    /// Drive the rack-and-pinion down.
    RackAndPinionLower,
}

impl ControlInput {
    /// Number of logical inputs.
    pub const COUNT: usize = 5;

    /// All logical inputs, in index order.
    pub const ALL: [ControlInput; Self::COUNT] = [
        ControlInput::IntakeToggle,
        ControlInput::DrawbridgeRaise,
        ControlInput::DrawbridgeLower,
        ControlInput::RackAndPinionRaise,
        ControlInput::RackAndPinionLower,
    ];

    /// Dense index in `0..COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            ControlInput::IntakeToggle => 0,
            ControlInput::DrawbridgeRaise => 1,
            ControlInput::DrawbridgeLower => 2,
            ControlInput::RackAndPinionRaise => 3,
            ControlInput::RackAndPinionLower => 4,
        }
    }
}

/// Raw "currently held" level of each logical input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ButtonSample {
    /// Intake toggle held.
    pub intake_toggle: bool,
    /// Drawbridge raise held.
    pub drawbridge_raise: bool,
    /// Drawbridge lower held.
    pub drawbridge_lower: bool,
    /// Rack-and-pinion raise held.
    pub rack_and_pinion_raise: bool,
    /// Rack-and-pinion lower held.
    pub rack_and_pinion_lower: bool,
}

impl ButtonSample {
    /// Level of one logical input.
    pub fn get(&self, input: ControlInput) -> bool {
        match input {
            ControlInput::IntakeToggle => self.intake_toggle,
            ControlInput::DrawbridgeRaise => self.drawbridge_raise,
            ControlInput::DrawbridgeLower => self.drawbridge_lower,
            ControlInput::RackAndPinionRaise => self.rack_and_pinion_raise,
            ControlInput::RackAndPinionLower => self.rack_and_pinion_lower,
        }
    }

    /// Set the level of one logical input.
    pub fn set(&mut self, input: ControlInput, pressed: bool) {
        match input {
            ControlInput::IntakeToggle => self.intake_toggle = pressed,
            ControlInput::DrawbridgeRaise => self.drawbridge_raise = pressed,
            ControlInput::DrawbridgeLower => self.drawbridge_lower = pressed,
            ControlInput::RackAndPinionRaise => self.rack_and_pinion_raise = pressed,
            ControlInput::RackAndPinionLower => self.rack_and_pinion_lower = pressed,
        }
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, input: ControlInput, pressed: bool) -> Self {
        self.set(input, pressed);
        self
    }
}

/// Limit-switch readings for every interlocked mechanism.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LimitSample {
    /// Drawbridge travel limits.
    pub drawbridge: LimitPair,
    /// Rack-and-pinion travel limits.
    pub rack_and_pinion: LimitPair,
}

/// Everything the core reads in one tick.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InputSnapshot {
    /// Logical button levels.
    pub buttons: ButtonSample,
    /// Raw forward stick, device polarity (negative = pushed away).
    pub forward_axis: f32,
    /// Raw rotate stick.
    pub rotate_axis: f32,
    /// Limit-switch levels.
    pub limits: LimitSample,
}

impl InputSnapshot {
    /// Snapshot with nothing pressed, sticks centred and no limit triggered.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Set one logical input.
    pub fn with_button(mut self, input: ControlInput, pressed: bool) -> Self {
        self.buttons.set(input, pressed);
        self
    }

    /// Set the raw stick samples.
    pub fn with_axes(mut self, forward: f32, rotate: f32) -> Self {
        self.forward_axis = forward;
        self.rotate_axis = rotate;
        self
    }

    /// Set the limit-switch levels.
    pub fn with_limits(mut self, limits: LimitSample) -> Self {
        self.limits = limits;
        self
    }
}

/// Snapshot source backed by a gamepad and digital input channels.
pub struct HardwareSensors<C: OperatorController, I: DigitalInputs> {
    controller: C,
    inputs: I,
    channels: ChannelMap,
    bindings: ButtonBindings,
}

impl<C: OperatorController, I: DigitalInputs> HardwareSensors<C, I> {
    /// Create a sensor source using the channel map and bindings from `config`.
    pub fn new(controller: C, inputs: I, config: &Config) -> Self {
        Self {
            controller,
            inputs,
            channels: config.channels.clone(),
            bindings: config.bindings.clone(),
        }
    }

    /// Get a mutable reference to the controller.
    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    /// Get a mutable reference to the digital inputs.
    pub fn inputs_mut(&mut self) -> &mut I {
        &mut self.inputs
    }

    fn read_pair(&mut self, upper: u8, lower: u8) -> LimitPair {
        LimitPair {
            upper: self.inputs.read(upper),
            lower: self.inputs.read(lower),
        }
    }
}

impl<C: OperatorController, I: DigitalInputs> SensorSource for HardwareSensors<C, I> {
    fn snapshot(&mut self) -> InputSnapshot {
        let mut buttons = ButtonSample::default();
        for input in ControlInput::ALL {
            buttons.set(input, self.controller.button(self.bindings.button_for(input)));
        }

        let ch = &self.channels;
        let (db_upper, db_lower) = (ch.drawbridge_upper_limit, ch.drawbridge_lower_limit);
        let (rp_upper, rp_lower) = (ch.rack_and_pinion_upper_limit, ch.rack_and_pinion_lower_limit);
        let (forward_id, rotate_id) = (ch.forward_axis, ch.rotate_axis);

        let limits = LimitSample {
            drawbridge: self.read_pair(db_upper, db_lower),
            rack_and_pinion: self.read_pair(rp_upper, rp_lower),
        };

        InputSnapshot {
            buttons,
            forward_axis: self.controller.raw_axis(forward_id),
            rotate_axis: self.controller.raw_axis(rotate_id),
            limits,
        }
    }
}
