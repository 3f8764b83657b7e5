//! # teleop-core
//!
//! The teleoperated control core of a small electromechanical robot: it turns
//! raw operator and limit-switch samples into safety-interlocked actuator
//! commands once per control tick.
//!
//! ## Features
//!
//! - **Edge detection**: One event per button press, no matter how long it is held
//! - **Limit interlocks**: A mechanism at its travel limit gets an explicit stop
//! - **Toggle mechanisms**: Press once to start, press again to stop
//! - **Hold semantics**: No edge, no command; the driver keeps the last one
//! - **Hardware abstraction**: Traits for gamepad, digital inputs, motor bus, drivetrain
//!
//! ## Architecture
//!
//! The crate is structured to allow testing on desktop without hardware:
//!
//! - `traits` - Hardware and pipeline abstractions
//! - `input` - Per-tick sensor snapshot
//! - `debounce` - Edge detection
//! - `interlock` - Travel-limit checks
//! - `mechanism` - Toggle and interlocked mechanism state machines
//! - `dispatch` - Command delivery to the motor bus and drivetrain
//! - `teleop` - Main controller that ties everything together
//! - `hal` - Concrete implementations (mocks for testing, GPIO adapter)
//!
//! ## Example
//!
//! ```rust
//! use teleop_core::{Button, Config, HardwareDispatcher, HardwareSensors, TeleopController};
//! use teleop_core::hal::{MockController, MockDigitalInputs, MockDrivetrain, MockMotorBus};
//!
//! let config = Config::default();
//! let sensors = HardwareSensors::new(MockController::new(), MockDigitalInputs::new(), &config);
//! let dispatcher = HardwareDispatcher::new(MockMotorBus::new(), MockDrivetrain::new(), &config);
//! let mut controller = TeleopController::new(sensors, dispatcher, &config);
//!
//! controller.on_session_start();
//!
//! // Operator presses X: the intake starts
//! controller.sensors_mut().controller_mut().press(Button::X);
//! controller.on_tick().unwrap();
//! assert_eq!(controller.dispatcher().bus().output(config.channels.intake), Some(1.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

/// Actuator and drivetrain command types.
pub mod command;
/// Robot configuration: channels, bindings, mechanism outputs.
pub mod config;
/// Edge detection for held operator inputs.
pub mod debounce;
/// Command dispatcher over a motor bus and drivetrain.
pub mod dispatch;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Per-tick sensor snapshot.
pub mod input;
/// Travel-limit interlock.
pub mod interlock;
/// Toggle and interlocked mechanism state machines.
pub mod mechanism;
/// Main teleop controller that runs the tick pipeline.
pub mod teleop;
/// Core traits for hardware abstraction and the tick pipeline.
pub mod traits;

// Re-exports for convenience
pub use command::{ActuatorCommand, DriveCommand, Mechanism};
pub use config::{ButtonBindings, ChannelMap, Config, MechanismConfig, TeleopConfig};
pub use debounce::{DebounceBank, EdgeDetector, Edges};
pub use dispatch::{DispatchError, HardwareDispatcher};
pub use input::{ButtonSample, ControlInput, HardwareSensors, InputSnapshot, LimitSample};
pub use interlock::{LimitPair, TravelDirection};
pub use mechanism::{InterlockedMechanism, ToggleMechanism, ToggleState};
pub use teleop::{TeleopController, TeleopState, TickReport};
pub use traits::{
    Button, CommandDispatcher, DigitalInputs, Drivetrain, MotorBus, OperatorController,
    SensorSource,
};
