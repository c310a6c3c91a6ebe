//! Camera lifecycle demo.
//!
//! A camera machine whose side effects live on its transitions: the states
//! themselves are bare nodes. The driver fires a scripted event sequence,
//! including events the current state rejects, and renders each outcome.
//!
//! Run with: cargo run --example camera

use machina::builder::{StateBuilder, TransitionBuilder};
use machina::core::{Event, MachineDef, StateMachine, StateRef, Transition};
use machina::event_enum;

event_enum! {
    pub enum CameraEvent {
        Connect,
        ConnectOk,
        StartStream,
        StopStream,
        Error,
        Reset,
    }
}

struct CameraDef {
    disconnected: StateRef<CameraEvent>,
    connecting: StateRef<CameraEvent>,
    ready: StateRef<CameraEvent>,
    streaming: StateRef<CameraEvent>,
    error: StateRef<CameraEvent>,
}

impl CameraDef {
    fn new() -> Self {
        Self {
            disconnected: StateBuilder::new("disconnected").build(),
            connecting: StateBuilder::new("connecting").build(),
            ready: StateBuilder::new("ready").build(),
            streaming: StateBuilder::new("streaming").build(),
            error: StateBuilder::new("error").build(),
        }
    }
}

impl MachineDef for CameraDef {
    type Event = CameraEvent;

    fn name(&self) -> &str {
        "CameraSM"
    }

    fn initial_state(&self) -> StateRef<CameraEvent> {
        self.disconnected.clone()
    }

    fn transitions(&self) -> Vec<Transition<CameraEvent>> {
        vec![
            TransitionBuilder::new()
                .on(CameraEvent::Connect)
                .from(self.disconnected.clone())
                .to(self.connecting.clone())
                .action(|| "Initializing...".to_string())
                .describe("Begin connection")
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .on(CameraEvent::ConnectOk)
                .from(self.connecting.clone())
                .to(self.ready.clone())
                .action(|| "Ready.".to_string())
                .describe("Connection established")
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .on(CameraEvent::Error)
                .from(self.connecting.clone())
                .to(self.error.clone())
                .action(|| "Handling Error!".to_string())
                .describe("Connection failed")
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .on(CameraEvent::StartStream)
                .from(self.ready.clone())
                .to(self.streaming.clone())
                .action(|| "Streaming...".to_string())
                .describe("Start streaming")
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .on(CameraEvent::Error)
                .from(self.ready.clone())
                .to(self.error.clone())
                .action(|| "Handling Error!".to_string())
                .describe("Runtime error")
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .on(CameraEvent::StopStream)
                .from(self.streaming.clone())
                .to(self.ready.clone())
                .action(|| "Ready.".to_string())
                .describe("Stop streaming")
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .on(CameraEvent::Error)
                .from(self.streaming.clone())
                .to(self.error.clone())
                .action(|| "Handling Error!".to_string())
                .describe("Streaming error")
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .on(CameraEvent::Reset)
                .from(self.error.clone())
                .to(self.disconnected.clone())
                .action(|| "Cleaning Up...".to_string())
                .describe("Reset from error")
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
    println!("=== Camera Lifecycle ===\n");

    let mut camera = StateMachine::new(&CameraDef::new());
    println!("Initial camera state: {}\n", camera.state().name());

    dispatch(&mut camera, CameraEvent::Connect);
    dispatch(&mut camera, CameraEvent::ConnectOk);
    dispatch(&mut camera, CameraEvent::StartStream);
    dispatch(&mut camera, CameraEvent::StopStream);
    // Stopping twice: rejected, the machine stays put.
    dispatch(&mut camera, CameraEvent::StopStream);
    dispatch(&mut camera, CameraEvent::Error);
    dispatch(&mut camera, CameraEvent::Reset);

    println!("Visited: {}", camera.history().path().join(" -> "));
}
