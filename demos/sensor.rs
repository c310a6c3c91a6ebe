//! Pressure sensor lifecycle demo.
//!
//! Unlike the camera demo, this machine puts most of its side effects on
//! the states: every state has enter and exit hooks, and the measuring
//! state acknowledges streaming heartbeats without transitioning.
//!
//! Run with: cargo run --example sensor

use machina::builder::{StateBuilder, TransitionBuilder};
use machina::core::{Event, MachineDef, StateMachine, StateRef, Transition};
use machina::event_enum;

event_enum! {
    pub enum SensorEvent {
        ConnectOk,
        StartMeasure,
        Streaming,
        StopMeasure,
        Error,
        Reset,
    }
}

struct SensorDef {
    disconnected: StateRef<SensorEvent>,
    ready: StateRef<SensorEvent>,
    measuring: StateRef<SensorEvent>,
    error: StateRef<SensorEvent>,
}

impl SensorDef {
    fn new() -> Self {
        Self {
            disconnected: StateBuilder::new("disconnected")
                .description("Sensor is disconnected.")
                .on_enter(|| "Sensor disconnected.".to_string())
                .on_exit(|| "Leaving disconnected state.".to_string())
                .build(),
            ready: StateBuilder::new("ready")
                .description("Sensor is ready.")
                .on_enter(|| "Sensor is now ready.".to_string())
                .on_exit(|| "Sensor is no longer ready.".to_string())
                .build(),
            measuring: StateBuilder::new("measuring")
                .description("Sensor is measuring.")
                .on_event(SensorEvent::Streaming, || {
                    "Processing measurement...".to_string()
                })
                .on_enter(|| "Starting measurement.".to_string())
                .on_exit(|| "Stopping measurement.".to_string())
                .build(),
            error: StateBuilder::new("error")
                .description("Sensor encountered an error.")
                .on_enter(|| "Entering error state.".to_string())
                .on_exit(|| "Exiting error state.".to_string())
                .build(),
        }
    }
}

impl MachineDef for SensorDef {
    type Event = SensorEvent;

    fn name(&self) -> &str {
        "PressureSensorSM"
    }

    fn initial_state(&self) -> StateRef<SensorEvent> {
        self.disconnected.clone()
    }

    fn transitions(&self) -> Vec<Transition<SensorEvent>> {
        vec![
            TransitionBuilder::new()
                .on(SensorEvent::ConnectOk)
                .from(self.disconnected.clone())
                .to(self.ready.clone())
                .action(|| "Ready.".to_string())
                .describe("Connected")
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .on(SensorEvent::StartMeasure)
                .from(self.ready.clone())
                .to(self.measuring.clone())
                .action(|| "Measuring...".to_string())
                .describe("Begin measurement")
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .on(SensorEvent::Error)
                .from(self.ready.clone())
                .to(self.error.clone())
                .action(|| "Handling Error!".to_string())
                .describe("Sensor error")
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .on(SensorEvent::StopMeasure)
                .from(self.measuring.clone())
                .to(self.ready.clone())
                .action(|| "Ready.".to_string())
                .describe("Stop measurement")
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .on(SensorEvent::Error)
                .from(self.measuring.clone())
                .to(self.error.clone())
                .action(|| "Handling Error!".to_string())
                .describe("Measurement error")
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .on(SensorEvent::Reset)
                .from(self.error.clone())
                .to(self.disconnected.clone())
                .action(|| "Cleaning Up...".to_string())
                .describe("Reset sensor")
                .build()
                .unwrap(),
        ]
    }
}

/// Fire one event and render the structured outcome the engine returns.
fn dispatch<E: Event>(machine: &mut StateMachine<E>, event: E) {
    let event_name = event.name().to_string();
    let (effects, transition) = machine.handle_event(event);

    let outcome = match transition {
        Some(t) => format!(
            "  transition:  {} -> {}\n  description: {}\n",
            t.from().name(),
            t.to().name(),
            t.description().unwrap_or("-"),
        ),
        None => "  no valid transition found for this event\n".to_string(),
    };

    let mut log = format!("[{}]\n  event:       {event_name}\n{outcome}", machine.name());
    if effects.is_empty() {
        log.push_str("  effects:     none\n");
    } else {
        log.push_str("  effects:\n");
        for effect in &effects {
            log.push_str(&format!("    {effect}\n"));
        }
    }
    println!("{log}");
}

fn main() {
    println!("=== Pressure Sensor Lifecycle ===\n");

    let mut sensor = StateMachine::new(&SensorDef::new());
    println!("Initial sensor state: {}\n", sensor.state().name());

    dispatch(&mut sensor, SensorEvent::ConnectOk);
    dispatch(&mut sensor, SensorEvent::StartMeasure);
    // Heartbeats while measuring: acknowledged without a transition.
    dispatch(&mut sensor, SensorEvent::Streaming);
    dispatch(&mut sensor, SensorEvent::Streaming);
    dispatch(&mut sensor, SensorEvent::Streaming);
    dispatch(&mut sensor, SensorEvent::StopMeasure);
    dispatch(&mut sensor, SensorEvent::Error);
    dispatch(&mut sensor, SensorEvent::Reset);

    println!("Visited: {}", sensor.history().path().join(" -> "));
}
