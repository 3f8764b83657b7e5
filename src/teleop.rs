//! Teleoperated control loop that ties everything together.
//!
//! This module provides [`TeleopController`], the per-tick core that turns a
//! sensor snapshot into actuator and drivetrain commands.
//!
//! # Overview
//!
//! Every tick runs the same pipeline, synchronously and to completion:
//!
//! 1. Take one [`InputSnapshot`] from the [`SensorSource`]
//! 2. Forward the sticks to the drivetrain (forward axis inverted)
//! 3. Run every input through its edge detector
//! 4. Intake, then drawbridge, then rack-and-pinion react to their edges
//! 5. Hand each resulting command to the [`CommandDispatcher`]
//!
//! A mechanism without an edge this tick gets no command; the driver keeps
//! its previous one. At most one command per mechanism is dispatched per tick.
//! If the driver rejects a command, that mechanism's state is rolled back and
//! its press re-armed, so a held button retries on the next tick.
//!
//! # Example
//!
//! ```rust
//! use teleop_core::{ActuatorCommand, Config, ControlInput, InputSnapshot, Mechanism, TeleopController};
//! use teleop_core::hal::{RecordingDispatcher, ScriptedSensors};
//!
//! let pressed = InputSnapshot::idle().with_button(ControlInput::IntakeToggle, true);
//! let sensors = ScriptedSensors::new(vec![pressed, pressed, InputSnapshot::idle()]);
//! let mut controller = TeleopController::new(sensors, RecordingDispatcher::new(), &Config::default());
//!
//! controller.on_session_start();
//! let report = controller.on_tick().unwrap();
//! assert_eq!(report.command(Mechanism::Intake), Some(ActuatorCommand::Output(1.0)));
//!
//! // Still held: no new command
//! let report = controller.on_tick().unwrap();
//! assert!(report.commands.is_empty());
//! ```
//!
//! # Threading
//!
//! The controller is not thread-safe and must not be re-entered. The host
//! calls [`on_session_start`](TeleopController::on_session_start) before the
//! first tick of each teleop session, then
//! [`on_tick`](TeleopController::on_tick) once per period.

use heapless::Vec;

use crate::command::{ActuatorCommand, DriveCommand, Mechanism};
use crate::config::Config;
use crate::debounce::{DebounceBank, Edges};
use crate::input::{ControlInput, InputSnapshot};
use crate::mechanism::{InterlockedMechanism, ToggleMechanism, ToggleState};
use crate::traits::{CommandDispatcher, SensorSource};

/// Per-tick teleop core.
///
/// # Type Parameters
///
/// - `S`: where snapshots come from ([`SensorSource`])
/// - `D`: where commands go ([`CommandDispatcher`])
pub struct TeleopController<S: SensorSource, D: CommandDispatcher> {
    sensors: S,
    dispatcher: D,
    debounce: DebounceBank,
    intake: ToggleMechanism,
    drawbridge: InterlockedMechanism,
    rack_and_pinion: InterlockedMechanism,
    session_ticks: u64,
}

impl<S: SensorSource, D: CommandDispatcher> TeleopController<S, D> {
    /// Create a controller with mechanism magnitudes from `config`.
    pub fn new(sensors: S, dispatcher: D, config: &Config) -> Self {
        let m = &config.mechanisms;
        Self {
            sensors,
            dispatcher,
            debounce: DebounceBank::new(),
            intake: ToggleMechanism::new(m.intake_output),
            drawbridge: InterlockedMechanism::new(
                Mechanism::Drawbridge,
                ControlInput::DrawbridgeRaise,
                ControlInput::DrawbridgeLower,
                m.drawbridge_magnitude,
            ),
            rack_and_pinion: InterlockedMechanism::new(
                Mechanism::RackAndPinion,
                ControlInput::RackAndPinionRaise,
                ControlInput::RackAndPinionLower,
                m.rack_and_pinion_magnitude,
            ),
            session_ticks: 0,
        }
    }

    /// Start a teleop session: re-arm every edge detector and stop the intake state.
    ///
    /// Nothing is dispatched.
    pub fn on_session_start(&mut self) {
        self.debounce.reset();
        self.intake.reset();
        self.session_ticks = 0;
        tracing::info!("teleop session started");
    }

    /// Run one tick: snapshot the sensors, then [`step`](Self::step).
    pub fn on_tick(&mut self) -> Result<TickReport, D::Error> {
        let snapshot = self.sensors.snapshot();
        self.step(&snapshot)
    }

    /// Run the tick pipeline on an already-taken snapshot.
    ///
    /// A failed drive returns before any edge is consumed. A failed mechanism
    /// dispatch does not stop the others from being sent; the failed
    /// mechanism's state is rolled back and the first error is returned.
    pub fn step(&mut self, snapshot: &InputSnapshot) -> Result<TickReport, D::Error> {
        self.session_ticks += 1;

        let drive = DriveCommand::from_axes(snapshot.forward_axis, snapshot.rotate_axis);
        tracing::trace!(forward = drive.forward, rotate = drive.rotate, "drive");
        self.dispatcher.drive(drive)?;

        let edges = self.debounce.update(&snapshot.buttons);
        let limits = &snapshot.limits;
        let intake_before = self.intake.state();

        let pending = [
            (
                Mechanism::Intake,
                self.intake.step(edges.pressed(ControlInput::IntakeToggle)),
            ),
            (
                Mechanism::Drawbridge,
                self.drawbridge.step(&edges, &limits.drawbridge),
            ),
            (
                Mechanism::RackAndPinion,
                self.rack_and_pinion.step(&edges, &limits.rack_and_pinion),
            ),
        ];

        let mut report = TickReport {
            tick: self.session_ticks,
            drive,
            commands: Vec::new(),
        };
        let mut first_error = None;

        for (mechanism, command) in pending {
            let Some(command) = command else {
                continue;
            };
            tracing::debug!(
                mechanism = mechanism.as_str(),
                output = command.value(),
                "dispatch"
            );
            match self.dispatcher.dispatch(mechanism, command) {
                Ok(()) => {
                    let pushed = report.commands.push((mechanism, command));
                    debug_assert!(pushed.is_ok(), "one slot per mechanism");
                }
                Err(e) => {
                    tracing::warn!(
                        mechanism = mechanism.as_str(),
                        "dispatch failed, re-arming its inputs"
                    );
                    self.roll_back(mechanism, &edges, intake_before);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(report),
        }
    }

    /// Undo a mechanism's tick after its command never reached the driver.
    ///
    /// The toggle goes back to the state the driver is still in, and any
    /// input that produced an edge this tick is re-armed so a held press
    /// retries on the next tick.
    fn roll_back(&mut self, mechanism: Mechanism, edges: &Edges, intake_before: ToggleState) {
        let inputs = match mechanism {
            Mechanism::Intake => {
                self.intake.restore(intake_before);
                [Some(ControlInput::IntakeToggle), None]
            }
            Mechanism::Drawbridge => self.drawbridge.inputs().map(Some),
            Mechanism::RackAndPinion => self.rack_and_pinion.inputs().map(Some),
        };
        for input in inputs.into_iter().flatten() {
            if edges.pressed(input) {
                self.debounce.rearm(input);
            }
        }
    }

    /// Current core state for UI/diagnostics.
    pub fn state(&self) -> TeleopState {
        let mut latched = [false; ControlInput::COUNT];
        for input in ControlInput::ALL {
            latched[input.index()] = self.debounce.is_latched(input);
        }
        TeleopState {
            intake: self.intake.state(),
            latched,
            session_ticks: self.session_ticks,
        }
    }

    /// Get a reference to the dispatcher.
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Get a mutable reference to the dispatcher.
    pub fn dispatcher_mut(&mut self) -> &mut D {
        &mut self.dispatcher
    }

    /// Get a mutable reference to the sensor source.
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }
}

/// What one tick produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    /// Tick number within the session, starting at 1.
    pub tick: u64,
    /// Drive pair sent this tick.
    pub drive: DriveCommand,
    /// Mechanism commands sent this tick, in dispatch order.
    pub commands: Vec<(Mechanism, ActuatorCommand), { Mechanism::COUNT }>,
}

impl TickReport {
    /// The command dispatched to `mechanism` this tick, if any.
    pub fn command(&self, mechanism: Mechanism) -> Option<ActuatorCommand> {
        self.commands
            .iter()
            .find(|(m, _)| *m == mechanism)
            .map(|(_, c)| *c)
    }
}

/// Snapshot of the core's persistent state.
///
/// ```rust
/// use teleop_core::{Config, TeleopController, ToggleState};
/// use teleop_core::hal::{RecordingDispatcher, ScriptedSensors};
///
/// let controller = TeleopController::new(
///     ScriptedSensors::default(),
///     RecordingDispatcher::new(),
///     &Config::default(),
/// );
/// let state = controller.state();
/// assert_eq!(state.intake, ToggleState::Stopped);
/// assert_eq!(state.session_ticks, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeleopState {
    /// Intake state.
    pub intake: ToggleState,
    /// Latch flag per [`ControlInput`], by index.
    pub latched: [bool; ControlInput::COUNT],
    /// Ticks run since the session started.
    pub session_ticks: u64,
}
