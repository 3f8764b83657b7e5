//! Integration tests for the teleop controller

use teleop_core::{
    hal::{
        MockController, MockDigitalInputs, MockDrivetrain, MockMotorBus, RecordingDispatcher,
        ScriptedSensors,
    },
    ActuatorCommand, Button, Config, ControlInput, HardwareDispatcher, HardwareSensors,
    InputSnapshot, LimitPair, LimitSample, Mechanism, TeleopController, ToggleState,
};

type Scripted = TeleopController<ScriptedSensors, RecordingDispatcher>;

fn scripted(frames: Vec<InputSnapshot>) -> Scripted {
    let mut controller = TeleopController::new(
        ScriptedSensors::new(frames),
        RecordingDispatcher::new(),
        &Config::default(),
    );
    controller.on_session_start();
    controller
}

fn run_all(controller: &mut Scripted, ticks: usize) {
    for _ in 0..ticks {
        controller.on_tick().unwrap();
    }
}

fn press(input: ControlInput) -> InputSnapshot {
    InputSnapshot::idle().with_button(input, true)
}

#[test]
fn intake_two_presses_ends_stopped() {
    let frames = vec![
        press(ControlInput::IntakeToggle),
        press(ControlInput::IntakeToggle),
        InputSnapshot::idle(),
        press(ControlInput::IntakeToggle),
        InputSnapshot::idle(),
    ];
    let mut controller = scripted(frames);
    run_all(&mut controller, 5);

    assert_eq!(controller.state().intake, ToggleState::Stopped);
    assert_eq!(
        controller.dispatcher().commands_for(Mechanism::Intake),
        vec![ActuatorCommand::Output(1.0), ActuatorCommand::Stop]
    );
}

#[test]
fn rack_lower_at_lower_limit_dispatches_stop() {
    let limits = LimitSample {
        rack_and_pinion: LimitPair { upper: false, lower: true },
        ..Default::default()
    };
    let frame = press(ControlInput::RackAndPinionLower).with_limits(limits);
    let mut controller = scripted(vec![frame]);

    let report = controller.on_tick().unwrap();
    assert_eq!(report.command(Mechanism::RackAndPinion), Some(ActuatorCommand::Stop));
    assert_eq!(report.command(Mechanism::RackAndPinion).unwrap().value(), 0.0);
}

#[test]
fn drive_forward_inverted_rotate_unchanged() {
    let mut controller = scripted(vec![InputSnapshot::idle().with_axes(0.6, 0.35)]);
    let report = controller.on_tick().unwrap();

    assert_eq!(report.drive.forward, -0.6);
    assert_eq!(report.drive.rotate, 0.35);
    assert_eq!(controller.dispatcher().drives, vec![report.drive]);
}

#[test]
fn held_command_persists_without_edges() {
    let frames = vec![
        press(ControlInput::DrawbridgeLower),
        press(ControlInput::DrawbridgeLower),
        InputSnapshot::idle(),
        InputSnapshot::idle(),
    ];
    let mut controller = scripted(frames);
    run_all(&mut controller, 4);

    // Only the first tick sent anything; the driver holds it
    assert_eq!(
        controller.dispatcher().commands_for(Mechanism::Drawbridge),
        vec![ActuatorCommand::Output(0.5)]
    );
    assert_eq!(
        controller.dispatcher().held(Mechanism::Drawbridge),
        Some(ActuatorCommand::Output(0.5))
    );
}

#[test]
fn drawbridge_raise_then_lower() {
    let frames = vec![
        press(ControlInput::DrawbridgeRaise),
        InputSnapshot::idle(),
        press(ControlInput::DrawbridgeLower),
    ];
    let mut controller = scripted(frames);
    run_all(&mut controller, 3);

    assert_eq!(
        controller.dispatcher().commands_for(Mechanism::Drawbridge),
        vec![ActuatorCommand::Output(-0.5), ActuatorCommand::Output(0.5)]
    );
}

#[test]
fn session_restart_rearms_held_button() {
    let frames = vec![
        press(ControlInput::RackAndPinionRaise),
        press(ControlInput::RackAndPinionRaise),
    ];
    let mut controller = scripted(frames);
    controller.on_tick().unwrap();

    controller.on_session_start();
    let report = controller.on_tick().unwrap();
    assert_eq!(
        report.command(Mechanism::RackAndPinion),
        Some(ActuatorCommand::Output(-0.5))
    );
}

#[test]
fn session_restart_stops_intake_state() {
    let mut controller = scripted(vec![
        press(ControlInput::IntakeToggle),
        InputSnapshot::idle(),
        press(ControlInput::IntakeToggle),
    ]);
    run_all(&mut controller, 2);
    assert_eq!(controller.state().intake, ToggleState::Running);

    controller.on_session_start();
    controller.on_tick().unwrap();

    // Starts from Stopped again, so the press turns it on
    assert_eq!(controller.state().intake, ToggleState::Running);
    assert_eq!(
        controller.dispatcher().held(Mechanism::Intake),
        Some(ActuatorCommand::Output(1.0))
    );
}

// ============================================================================
// Full hardware pipeline
// ============================================================================

#[test]
fn hardware_pipeline_writes_device_ids() {
    let config = Config::default();
    let sensors = HardwareSensors::new(MockController::new(), MockDigitalInputs::new(), &config);
    let dispatcher = HardwareDispatcher::new(MockMotorBus::new(), MockDrivetrain::new(), &config);
    let mut controller = TeleopController::new(sensors, dispatcher, &config);
    controller.on_session_start();

    {
        let pad = controller.sensors_mut().controller_mut();
        pad.press(Button::A); // rack-and-pinion lower
        pad.press(Button::RightBumper); // drawbridge raise
        pad.set_axis(config.channels.forward_axis, -1.0);
    }
    controller.on_tick().unwrap();

    let bus = controller.dispatcher().bus();
    assert_eq!(bus.output(config.channels.rack_and_pinion), Some(0.5));
    assert_eq!(bus.output(config.channels.drawbridge), Some(-0.5));
    assert_eq!(bus.output(config.channels.intake), None);
    assert_eq!(controller.dispatcher().drivetrain().last, Some((1.0, 0.0)));
}

#[test]
fn hardware_pipeline_interlock_from_dio() {
    let config = Config::default();
    let mut dio = MockDigitalInputs::new();
    dio.set(config.channels.drawbridge_upper_limit, true);

    let sensors = HardwareSensors::new(MockController::new(), dio, &config);
    let dispatcher = HardwareDispatcher::new(MockMotorBus::new(), MockDrivetrain::new(), &config);
    let mut controller = TeleopController::new(sensors, dispatcher, &config);
    controller.on_session_start();

    controller
        .sensors_mut()
        .controller_mut()
        .press(Button::RightBumper);
    controller.on_tick().unwrap();

    assert_eq!(
        controller.dispatcher().bus().output(config.channels.drawbridge),
        Some(0.0)
    );
}

#[test]
fn hardware_pipeline_propagates_bus_error() {
    let config = Config::default();
    let sensors = HardwareSensors::new(MockController::new(), MockDigitalInputs::new(), &config);
    let bus = MockMotorBus::new().with_offline(config.channels.intake);
    let dispatcher = HardwareDispatcher::new(bus, MockDrivetrain::new(), &config);
    let mut controller = TeleopController::new(sensors, dispatcher, &config);
    controller.on_session_start();

    controller.sensors_mut().controller_mut().press(Button::X);
    assert!(controller.on_tick().is_err());
}

#[test]
fn failed_intake_dispatch_leaves_intake_stopped_and_rearmed() {
    let config = Config::default();
    let sensors = HardwareSensors::new(MockController::new(), MockDigitalInputs::new(), &config);
    let bus = MockMotorBus::new().with_offline(config.channels.intake);
    let dispatcher = HardwareDispatcher::new(bus, MockDrivetrain::new(), &config);
    let mut controller = TeleopController::new(sensors, dispatcher, &config);
    controller.on_session_start();

    controller.sensors_mut().controller_mut().press(Button::X);
    assert!(controller.on_tick().is_err());

    let state = controller.state();
    assert_eq!(state.intake, ToggleState::Stopped);
    assert!(!state.latched[ControlInput::IntakeToggle.index()]);
    assert_eq!(controller.dispatcher().bus().output(config.channels.intake), None);

    // Device back, button still held: the press goes through this time
    controller.dispatcher_mut().bus_mut().reconnect();
    let report = controller.on_tick().unwrap();
    assert_eq!(report.command(Mechanism::Intake), Some(ActuatorCommand::Output(1.0)));
    assert_eq!(controller.state().intake, ToggleState::Running);
    assert_eq!(
        controller.dispatcher().bus().output(config.channels.intake),
        Some(1.0)
    );
}

#[test]
fn failed_dispatch_still_sends_other_mechanisms() {
    let config = Config::default();
    let sensors = HardwareSensors::new(MockController::new(), MockDigitalInputs::new(), &config);
    let bus = MockMotorBus::new().with_offline(config.channels.intake);
    let dispatcher = HardwareDispatcher::new(bus, MockDrivetrain::new(), &config);
    let mut controller = TeleopController::new(sensors, dispatcher, &config);
    controller.on_session_start();

    {
        let pad = controller.sensors_mut().controller_mut();
        pad.press(Button::X);
        pad.press(Button::A); // rack-and-pinion lower
    }
    assert!(controller.on_tick().is_err());
    assert!(controller.on_tick().is_err());

    let rack = config.channels.rack_and_pinion;
    let bus = controller.dispatcher().bus();
    assert_eq!(bus.output(rack), Some(0.5));
    // Sent once; the held button does not repeat it
    assert_eq!(bus.writes.iter().filter(|(id, _)| *id == rack).count(), 1);
    assert!(controller.state().latched[ControlInput::RackAndPinionLower.index()]);
    assert_eq!(controller.state().intake, ToggleState::Stopped);
}

#[test]
fn failed_drawbridge_dispatch_retries_held_press() {
    let config = Config::default();
    let sensors = HardwareSensors::new(MockController::new(), MockDigitalInputs::new(), &config);
    let bus = MockMotorBus::new().with_offline(config.channels.drawbridge);
    let dispatcher = HardwareDispatcher::new(bus, MockDrivetrain::new(), &config);
    let mut controller = TeleopController::new(sensors, dispatcher, &config);
    controller.on_session_start();

    controller
        .sensors_mut()
        .controller_mut()
        .press(Button::RightBumper);
    assert!(controller.on_tick().is_err());
    assert!(!controller.state().latched[ControlInput::DrawbridgeRaise.index()]);

    controller.dispatcher_mut().bus_mut().reconnect();
    let report = controller.on_tick().unwrap();
    assert_eq!(
        report.command(Mechanism::Drawbridge),
        Some(ActuatorCommand::Output(-0.5))
    );
}
