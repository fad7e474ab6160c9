//! Queueing button presses and applying them to the turtle on the UI thread.

use crossbeam_channel::{Receiver, Sender, TrySendError};
use turtle_core::{Command, Turtle};

use crate::controller::events::ControllerEvent;

pub const COMMAND_QUEUE_CAPACITY: usize = 64;

/// Queues a press. The queue is drained every frame, so a rejected send is
/// only logged and never surfaces in the UI.
pub fn dispatch_command(cmd_tx: &Sender<Command>, cmd: Command) {
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd.name(), "queued button command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd.name(), "button command queue full; dropping press");
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(command = cmd.name(), "button command queue closed");
        }
    }
}

/// Runs every queued command through [`Turtle::apply`] in press order.
pub fn apply_queued_commands(
    cmd_rx: &Receiver<Command>,
    turtle: &mut Turtle,
) -> Vec<ControllerEvent> {
    let mut events = Vec::new();
    while let Ok(cmd) = cmd_rx.try_recv() {
        let before = turtle.pose();
        let after = turtle.apply(cmd);
        let event = ControllerEvent::from_transition(cmd, before, after);
        tracing::debug!(
            command = event.command().name(),
            status = %event.status_line(),
            "turtle updated"
        );
        events.push(event);
    }
    events
}
