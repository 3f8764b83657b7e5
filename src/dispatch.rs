//! Command dispatcher backed by a motor bus and a drivetrain service.
//!
//! [`HardwareDispatcher`] maps each [`Mechanism`] to its motor-controller
//! device ID from the [`ChannelMap`] and forwards drive pairs to the
//! [`Drivetrain`] unchanged.
//!
//! ```rust
//! use teleop_core::{ActuatorCommand, Config, HardwareDispatcher, Mechanism};
//! use teleop_core::hal::{MockDrivetrain, MockMotorBus};
//! use teleop_core::traits::CommandDispatcher;
//!
//! let config = Config::default();
//! let mut dispatcher = HardwareDispatcher::new(MockMotorBus::new(), MockDrivetrain::new(), &config);
//!
//! dispatcher.dispatch(Mechanism::Intake, ActuatorCommand::Output(1.0)).unwrap();
//! assert_eq!(dispatcher.bus().output(config.channels.intake), Some(1.0));
//! ```

use core::fmt;

use crate::command::{ActuatorCommand, DriveCommand, Mechanism};
use crate::config::{ChannelMap, Config};
use crate::traits::{CommandDispatcher, Drivetrain, MotorBus};

/// Failure from either side of a [`HardwareDispatcher`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError<M, D> {
    /// The motor bus rejected a write.
    Motor(M),
    /// The drivetrain rejected a drive pair.
    Drive(D),
}

impl<M: fmt::Debug, D: fmt::Debug> fmt::Display for DispatchError<M, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::Motor(e) => write!(f, "motor bus error: {:?}", e),
            DispatchError::Drive(e) => write!(f, "drivetrain error: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<M: fmt::Debug, D: fmt::Debug> std::error::Error for DispatchError<M, D> {}

/// Dispatcher writing mechanism commands to a [`MotorBus`].
pub struct HardwareDispatcher<B: MotorBus, T: Drivetrain> {
    bus: B,
    drivetrain: T,
    channels: ChannelMap,
}

impl<B: MotorBus, T: Drivetrain> HardwareDispatcher<B, T> {
    /// Create a dispatcher using the device IDs from `config`.
    pub fn new(bus: B, drivetrain: T, config: &Config) -> Self {
        Self {
            bus,
            drivetrain,
            channels: config.channels.clone(),
        }
    }

    /// Device ID the mechanism's motor controller answers to.
    pub fn device_id(&self, mechanism: Mechanism) -> u8 {
        match mechanism {
            Mechanism::Intake => self.channels.intake,
            Mechanism::Drawbridge => self.channels.drawbridge,
            Mechanism::RackAndPinion => self.channels.rack_and_pinion,
        }
    }

    /// Get a reference to the motor bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Get a mutable reference to the motor bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Get a reference to the drivetrain.
    pub fn drivetrain(&self) -> &T {
        &self.drivetrain
    }
}

impl<B: MotorBus, T: Drivetrain> CommandDispatcher for HardwareDispatcher<B, T> {
    type Error = DispatchError<B::Error, T::Error>;

    fn dispatch(&mut self, mechanism: Mechanism, command: ActuatorCommand) -> Result<(), Self::Error> {
        let id = self.device_id(mechanism);
        self.bus
            .set_percent_output(id, command.value())
            .map_err(DispatchError::Motor)
    }

    fn drive(&mut self, command: DriveCommand) -> Result<(), Self::Error> {
        self.drivetrain
            .arcade_drive(command.forward, command.rotate)
            .map_err(DispatchError::Drive)
    }
}
