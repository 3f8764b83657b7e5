//! Mock implementations for testing without hardware.
//!
//! This module provides test doubles for the hardware and pipeline traits,
//! enabling development and testing on desktop without a robot.
//!
//! # Available Mocks
//!
//! | Mock | Trait | Purpose |
//! |------|-------|---------|
//! | [`MockController`] | [`OperatorController`] | Settable buttons and axes |
//! | [`MockDigitalInputs`] | [`DigitalInputs`] | Settable limit-switch levels |
//! | [`MockMotorBus`] | [`MotorBus`] | Records writes per device |
//! | [`MockDrivetrain`] | [`Drivetrain`] | Records drive pairs |
//! | [`ScriptedSensors`] | [`SensorSource`] | Plays back a list of snapshots |
//! | [`RecordingDispatcher`] | [`CommandDispatcher`] | Records every dispatched command |
//!
//! # Example
//!
//! ```rust
//! use teleop_core::{ActuatorCommand, Config, ControlInput, InputSnapshot, Mechanism, TeleopController};
//! use teleop_core::hal::{RecordingDispatcher, ScriptedSensors};
//!
//! let press = InputSnapshot::idle().with_button(ControlInput::IntakeToggle, true);
//! let release = InputSnapshot::idle();
//! let sensors = ScriptedSensors::new(vec![press, release, press]);
//!
//! let mut controller = TeleopController::new(sensors, RecordingDispatcher::new(), &Config::default());
//! controller.on_session_start();
//! for _ in 0..3 {
//!     controller.on_tick().unwrap();
//! }
//!
//! let intake = controller.dispatcher().commands_for(Mechanism::Intake);
//! assert_eq!(intake, vec![ActuatorCommand::Output(1.0), ActuatorCommand::Stop]);
//! ```
//!
//! [`OperatorController`]: crate::traits::OperatorController
//! [`DigitalInputs`]: crate::traits::DigitalInputs
//! [`MotorBus`]: crate::traits::MotorBus
//! [`Drivetrain`]: crate::traits::Drivetrain
//! [`SensorSource`]: crate::traits::SensorSource
//! [`CommandDispatcher`]: crate::traits::CommandDispatcher

extern crate alloc;
use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::command::{ActuatorCommand, DriveCommand, Mechanism};
use crate::input::InputSnapshot;
use crate::traits::{
    Button, CommandDispatcher, DigitalInputs, Drivetrain, MotorBus, OperatorController,
    SensorSource,
};

/// Number of digital channels on [`MockDigitalInputs`].
pub const MOCK_DIO_CHANNELS: usize = 10;

/// Number of axes on [`MockController`].
pub const MOCK_AXES: usize = 6;

// ============================================================================
// Hardware Mocks
// ============================================================================

/// Mock gamepad.
///
/// # Example
///
/// ```rust
/// use teleop_core::hal::MockController;
/// use teleop_core::traits::{Button, OperatorController};
///
/// let mut pad = MockController::new();
/// pad.press(Button::A);
/// pad.set_axis(1, -0.5);
///
/// assert!(pad.button(Button::A));
/// assert!(!pad.button(Button::B));
/// assert_eq!(pad.raw_axis(1), -0.5);
/// assert_eq!(pad.raw_axis(42), 0.0); // unknown axis
/// ```
#[derive(Debug, Default)]
pub struct MockController {
    held: Vec<Button>,
    axes: [f32; MOCK_AXES],
}

impl MockController {
    /// Creates a controller with nothing held and sticks centred.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold a button down.
    pub fn press(&mut self, button: Button) {
        if !self.held.contains(&button) {
            self.held.push(button);
        }
    }

    /// Let go of a button.
    pub fn release(&mut self, button: Button) {
        self.held.retain(|b| *b != button);
    }

    /// Let go of every button.
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Set a raw axis value. Out-of-range axis IDs are ignored.
    pub fn set_axis(&mut self, axis: u8, value: f32) {
        if let Some(slot) = self.axes.get_mut(usize::from(axis)) {
            *slot = value;
        }
    }
}

impl OperatorController for MockController {
    fn button(&self, button: Button) -> bool {
        self.held.contains(&button)
    }

    fn raw_axis(&self, axis: u8) -> f32 {
        self.axes.get(usize::from(axis)).copied().unwrap_or(0.0)
    }
}

/// Mock digital input channels.
///
/// Unknown channels read `false`.
#[derive(Debug, Default)]
pub struct MockDigitalInputs {
    levels: [bool; MOCK_DIO_CHANNELS],
    /// Number of reads performed.
    pub read_count: usize,
}

impl MockDigitalInputs {
    /// Creates inputs with every channel low.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a channel level. Out-of-range channels are ignored.
    pub fn set(&mut self, channel: u8, level: bool) {
        if let Some(slot) = self.levels.get_mut(usize::from(channel)) {
            *slot = level;
        }
    }
}

impl DigitalInputs for MockDigitalInputs {
    fn read(&mut self, channel: u8) -> bool {
        self.read_count += 1;
        self.levels.get(usize::from(channel)).copied().unwrap_or(false)
    }
}

/// Error from [`MockMotorBus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MockBusError {
    /// The addressed device was marked offline.
    DeviceOffline(u8),
}

/// Mock motor bus.
///
/// Records every write in order.
///
/// # Example
///
/// ```rust
/// use teleop_core::hal::MockMotorBus;
/// use teleop_core::traits::MotorBus;
///
/// let mut bus = MockMotorBus::new();
/// bus.set_percent_output(6, 0.5).unwrap();
/// bus.stop(6).unwrap();
///
/// assert_eq!(bus.output(6), Some(0.0));
/// assert_eq!(bus.writes, vec![(6, 0.5), (6, 0.0)]);
/// assert_eq!(bus.output(5), None); // never written
/// ```
#[derive(Debug, Default)]
pub struct MockMotorBus {
    /// Every (device, output) write, in order.
    pub writes: Vec<(u8, f32)>,
    /// Number of successful writes.
    pub write_count: usize,
    offline: Option<u8>,
}

impl MockMotorBus {
    /// Creates a bus with every device online.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make writes to `device_id` fail.
    pub fn with_offline(mut self, device_id: u8) -> Self {
        self.offline = Some(device_id);
        self
    }

    /// Bring the offline device back.
    pub fn reconnect(&mut self) {
        self.offline = None;
    }

    /// Last output written to `device_id`, which the device still holds.
    pub fn output(&self, device_id: u8) -> Option<f32> {
        self.writes
            .iter()
            .rev()
            .find(|(id, _)| *id == device_id)
            .map(|(_, v)| *v)
    }
}

impl MotorBus for MockMotorBus {
    type Error = MockBusError;

    fn set_percent_output(&mut self, device_id: u8, output: f32) -> Result<(), MockBusError> {
        if self.offline == Some(device_id) {
            return Err(MockBusError::DeviceOffline(device_id));
        }
        self.writes.push((device_id, output));
        self.write_count += 1;
        Ok(())
    }
}

/// Mock drivetrain.
#[derive(Debug, Default)]
pub struct MockDrivetrain {
    /// Last (forward, rotate) pair.
    pub last: Option<(f32, f32)>,
    /// Number of `arcade_drive` calls.
    pub call_count: usize,
}

impl MockDrivetrain {
    /// Creates a drivetrain that has not been driven.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Drivetrain for MockDrivetrain {
    type Error = ();

    fn arcade_drive(&mut self, forward: f32, rotate: f32) -> Result<(), ()> {
        self.last = Some((forward, rotate));
        self.call_count += 1;
        Ok(())
    }
}

// ============================================================================
// Pipeline Mocks
// ============================================================================

/// Sensor source that plays back snapshots in order.
///
/// Once the script runs out every tick reads [`InputSnapshot::idle`].
#[derive(Debug, Default)]
pub struct ScriptedSensors {
    frames: VecDeque<InputSnapshot>,
}

impl ScriptedSensors {
    /// Creates a source that will play `frames` front to back.
    pub fn new(frames: Vec<InputSnapshot>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// Append a frame to the script.
    pub fn push(&mut self, frame: InputSnapshot) {
        self.frames.push_back(frame);
    }

    /// Frames not yet played.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl SensorSource for ScriptedSensors {
    fn snapshot(&mut self) -> InputSnapshot {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Dispatcher that records everything it is given.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    /// Every mechanism command, in dispatch order.
    pub commands: Vec<(Mechanism, ActuatorCommand)>,
    /// Every drive pair, one per tick.
    pub drives: Vec<DriveCommand>,
}

impl RecordingDispatcher {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands sent to one mechanism, in order.
    pub fn commands_for(&self, mechanism: Mechanism) -> Vec<ActuatorCommand> {
        self.commands
            .iter()
            .filter(|(m, _)| *m == mechanism)
            .map(|(_, c)| *c)
            .collect()
    }

    /// Command the mechanism's driver is holding, if it was ever sent one.
    pub fn held(&self, mechanism: Mechanism) -> Option<ActuatorCommand> {
        self.commands
            .iter()
            .rev()
            .find(|(m, _)| *m == mechanism)
            .map(|(_, c)| *c)
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.drives.clear();
    }
}

impl CommandDispatcher for RecordingDispatcher {
    type Error = ();

    fn dispatch(&mut self, mechanism: Mechanism, command: ActuatorCommand) -> Result<(), ()> {
        self.commands.push((mechanism, command));
        Ok(())
    }

    fn drive(&mut self, command: DriveCommand) -> Result<(), ()> {
        self.drives.push(command);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // MockController Tests
    // =========================================================================

    #[test]
    fn mock_controller_default() {
        let pad = MockController::new();
        assert!(!pad.button(Button::X));
        assert_eq!(pad.raw_axis(0), 0.0);
    }

    #[test]
    fn mock_controller_press_release() {
        let mut pad = MockController::new();
        pad.press(Button::X);
        pad.press(Button::X);
        assert!(pad.button(Button::X));

        pad.release(Button::X);
        assert!(!pad.button(Button::X));
    }

    #[test]
    fn mock_controller_release_all() {
        let mut pad = MockController::new();
        pad.press(Button::A);
        pad.press(Button::B);
        pad.release_all();
        assert!(!pad.button(Button::A));
        assert!(!pad.button(Button::B));
    }

    #[test]
    fn mock_controller_axis_out_of_range_ignored() {
        let mut pad = MockController::new();
        pad.set_axis(200, 1.0);
        assert_eq!(pad.raw_axis(200), 0.0);
    }

    // =========================================================================
    // MockDigitalInputs Tests
    // =========================================================================

    #[test]
    fn mock_dio_set_and_read() {
        let mut dio = MockDigitalInputs::new();
        assert!(!dio.read(4));
        dio.set(4, true);
        assert!(dio.read(4));
        assert_eq!(dio.read_count, 2);
    }

    #[test]
    fn mock_dio_unknown_channel_low() {
        let mut dio = MockDigitalInputs::new();
        dio.set(99, true);
        assert!(!dio.read(99));
    }

    // =========================================================================
    // MockMotorBus Tests
    // =========================================================================

    #[test]
    fn mock_bus_records_writes() {
        let mut bus = MockMotorBus::new();
        bus.set_percent_output(7, 1.0).unwrap();
        bus.set_percent_output(5, -0.5).unwrap();
        assert_eq!(bus.write_count, 2);
        assert_eq!(bus.output(7), Some(1.0));
        assert_eq!(bus.output(5), Some(-0.5));
    }

    #[test]
    fn mock_bus_offline_device() {
        let mut bus = MockMotorBus::new().with_offline(5);
        assert_eq!(
            bus.set_percent_output(5, 0.5),
            Err(MockBusError::DeviceOffline(5))
        );
        assert!(bus.writes.is_empty());
        assert!(bus.set_percent_output(6, 0.5).is_ok());

        bus.reconnect();
        assert!(bus.set_percent_output(5, 0.5).is_ok());
        assert_eq!(bus.output(5), Some(0.5));
    }

    // =========================================================================
    // MockDrivetrain Tests
    // =========================================================================

    #[test]
    fn mock_drivetrain_records() {
        let mut dt = MockDrivetrain::new();
        assert!(dt.last.is_none());
        dt.arcade_drive(0.5, -0.1).unwrap();
        assert_eq!(dt.last, Some((0.5, -0.1)));
        assert_eq!(dt.call_count, 1);
    }

    // =========================================================================
    // ScriptedSensors Tests
    // =========================================================================

    #[test]
    fn scripted_sensors_play_in_order_then_idle() {
        let a = InputSnapshot::idle().with_axes(0.1, 0.0);
        let b = InputSnapshot::idle().with_axes(0.2, 0.0);
        let mut sensors = ScriptedSensors::new(vec![a, b]);
        assert_eq!(sensors.remaining(), 2);

        assert_eq!(sensors.snapshot(), a);
        assert_eq!(sensors.snapshot(), b);
        assert_eq!(sensors.snapshot(), InputSnapshot::idle());
        assert_eq!(sensors.remaining(), 0);
    }

    // =========================================================================
    // RecordingDispatcher Tests
    // =========================================================================

    #[test]
    fn recording_dispatcher_tracks_held_command() {
        let mut d = RecordingDispatcher::new();
        d.dispatch(Mechanism::Drawbridge, ActuatorCommand::Output(0.5)).unwrap();
        d.dispatch(Mechanism::Intake, ActuatorCommand::Output(1.0)).unwrap();
        d.dispatch(Mechanism::Drawbridge, ActuatorCommand::Stop).unwrap();

        assert_eq!(d.held(Mechanism::Drawbridge), Some(ActuatorCommand::Stop));
        assert_eq!(d.held(Mechanism::RackAndPinion), None);
        assert_eq!(
            d.commands_for(Mechanism::Drawbridge),
            vec![ActuatorCommand::Output(0.5), ActuatorCommand::Stop]
        );

        d.clear();
        assert!(d.commands.is_empty());
    }
}
