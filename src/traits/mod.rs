//! Trait definitions for hardware abstraction and the tick pipeline.
//!
//! This module defines the seams that let the teleop core:
//! - Run on real motor controllers and GPIO, or against desktop mocks
//! - Stay independent of how commands reach the hardware
//!
//! # Submodules
//!
//! - `hardware`: Gamepad, digital inputs, motor bus, drivetrain
//! - `pipeline`: Sensor snapshot source and command dispatcher
//!
//! # Hardware Abstraction
//!
//! - [`OperatorController`]: Buttons and raw axes
//! - [`DigitalInputs`]: Limit switches
//! - [`MotorBus`]: Percent-output motor controllers by device ID
//! - [`Drivetrain`]: Arcade-drive kinematics service
//!
//! # Pipeline
//!
//! - [`SensorSource`]: One [`InputSnapshot`](crate::InputSnapshot) per tick
//! - [`CommandDispatcher`]: Where the tick's commands go

pub mod hardware;
pub mod pipeline;

pub use hardware::*;
pub use pipeline::*;
