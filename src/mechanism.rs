//! Mechanism state machines.
//!
//! Two kinds of mechanism are driven from operator edges:
//!
//! - [`ToggleMechanism`]: flips between [`ToggleState::Stopped`] and
//!   [`ToggleState::Running`] on every edge (the intake).
//! - [`InterlockedMechanism`]: drives toward one travel extreme per edge,
//!   through the [`interlock`](crate::interlock) check (drawbridge,
//!   rack-and-pinion). It keeps no state of its own.
//!
//! Both return `Option<ActuatorCommand>`: `None` means "no edge, leave the
//! driver holding its last command", never "stop".

use crate::command::{ActuatorCommand, Mechanism};
use crate::config::unit_level;
use crate::debounce::Edges;
use crate::input::ControlInput;
use crate::interlock::{self, LimitPair, TravelDirection};

/// State of a toggled mechanism.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ToggleState {
    /// Output off.
    #[default]
    Stopped,
    /// Output at the configured run level.
    Running,
}

/// On/off mechanism with no interlock.
///
/// ```rust
/// use teleop_core::{ToggleMechanism, ToggleState, ActuatorCommand};
///
/// let mut intake = ToggleMechanism::new(1.0);
/// assert_eq!(intake.on_edge(), ActuatorCommand::Output(1.0));
/// assert_eq!(intake.on_edge(), ActuatorCommand::Stop);
/// assert_eq!(intake.state(), ToggleState::Stopped);
/// ```
#[derive(Clone, Debug)]
pub struct ToggleMechanism {
    state: ToggleState,
    run_output: f32,
}

impl ToggleMechanism {
    /// Create a stopped mechanism that runs at `run_output` when toggled on.
    ///
    /// `run_output` is clamped into `[0.0, 1.0]`.
    pub fn new(run_output: f32) -> Self {
        Self {
            state: ToggleState::Stopped,
            run_output: unit_level(run_output),
        }
    }

    /// Flip state and return the command for the new state.
    pub fn on_edge(&mut self) -> ActuatorCommand {
        match self.state {
            ToggleState::Stopped => {
                self.state = ToggleState::Running;
                ActuatorCommand::output(self.run_output)
            }
            ToggleState::Running => {
                self.state = ToggleState::Stopped;
                ActuatorCommand::Stop
            }
        }
    }

    /// Handle one tick: a command only when `edge` is set.
    pub fn step(&mut self, edge: bool) -> Option<ActuatorCommand> {
        edge.then(|| self.on_edge())
    }

    /// Current state.
    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// True while running.
    pub fn is_running(&self) -> bool {
        self.state == ToggleState::Running
    }

    /// Back to [`ToggleState::Stopped`] without emitting anything.
    pub fn reset(&mut self) {
        self.state = ToggleState::Stopped;
    }

    /// Put back a state the driver is known to be in, e.g. after a failed dispatch.
    pub fn restore(&mut self, state: ToggleState) {
        self.state = state;
    }
}

/// Two-direction mechanism guarded by a pair of limit switches.
///
/// Each direction has its own [`ControlInput`]. When both directions see an
/// edge on the same tick, raise is evaluated first and lower second, and the
/// lower result is the one returned.
#[derive(Clone, Debug)]
pub struct InterlockedMechanism {
    mechanism: Mechanism,
    raise: ControlInput,
    lower: ControlInput,
    magnitude: f32,
}

impl InterlockedMechanism {
    /// Create a mechanism driven at `magnitude` (lower = `+magnitude`,
    /// raise = `-magnitude`). `magnitude` is clamped into `[0.0, 1.0]`.
    pub fn new(
        mechanism: Mechanism,
        raise: ControlInput,
        lower: ControlInput,
        magnitude: f32,
    ) -> Self {
        Self {
            mechanism,
            raise,
            lower,
            magnitude: unit_level(magnitude),
        }
    }

    /// Which mechanism this drives.
    pub fn mechanism(&self) -> Mechanism {
        self.mechanism
    }

    /// The (raise, lower) inputs this mechanism reacts to.
    pub fn inputs(&self) -> [ControlInput; 2] {
        [self.raise, self.lower]
    }

    /// Signed output requested for `direction`, before the interlock.
    pub fn requested(&self, direction: TravelDirection) -> f32 {
        match direction {
            TravelDirection::Raise => -self.magnitude,
            TravelDirection::Lower => self.magnitude,
        }
    }

    /// Handle one tick's edges against this tick's limit readings.
    pub fn step(&self, edges: &Edges, limits: &LimitPair) -> Option<ActuatorCommand> {
        let mut command = None;
        for (input, direction) in [
            (self.raise, TravelDirection::Raise),
            (self.lower, TravelDirection::Lower),
        ] {
            if edges.pressed(input) {
                let cmd = interlock::evaluate(direction, self.requested(direction), limits);
                if limits.triggered(direction) {
                    tracing::debug!(
                        mechanism = self.mechanism.as_str(),
                        ?direction,
                        "limit triggered, holding stop"
                    );
                }
                command = Some(cmd);
            }
        }
        command
    }
}
