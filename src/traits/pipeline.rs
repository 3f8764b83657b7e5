//! Traits at the two ends of the tick pipeline.
//!
//! A tick starts by taking one [`InputSnapshot`] from a [`SensorSource`] and
//! ends by handing the resulting commands to a [`CommandDispatcher`].

use crate::command::{ActuatorCommand, DriveCommand, Mechanism};
use crate::input::InputSnapshot;

/// Produces the sensor snapshot for a tick.
pub trait SensorSource {
    /// Read every operator input and limit switch once.
    fn snapshot(&mut self) -> InputSnapshot;
}

/// Delivers commands to the actuator driver layer and the drivetrain.
///
/// The driver must keep the last command per mechanism in effect until the
/// next one; ticks with no edge dispatch nothing for that mechanism.
pub trait CommandDispatcher {
    /// Error reported by the driver layer.
    type Error;

    /// Send a command to one mechanism's actuator.
    fn dispatch(&mut self, mechanism: Mechanism, command: ActuatorCommand)
        -> Result<(), Self::Error>;

    /// Send this tick's drive pair.
    fn drive(&mut self, command: DriveCommand) -> Result<(), Self::Error>;
}
