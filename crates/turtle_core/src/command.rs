//! Movement commands and the trigger table that binds button labels to them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

impl Command {
    pub fn name(self) -> &'static str {
        match self {
            Command::Forward => "forward",
            Command::Backward => "backward",
            Command::TurnLeft => "turn_left",
            Command::TurnRight => "turn_right",
        }
    }

    /// Caption of the button that triggers this command.
    pub const fn label(self) -> &'static str {
        match self {
            Command::Forward => "Forward",
            Command::Backward => "Backward",
            Command::TurnLeft => "Left",
            Command::TurnRight => "Right",
        }
    }

    pub fn is_turn(self) -> bool {
        matches!(self, Command::TurnLeft | Command::TurnRight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandButton {
    pub label: &'static str,
    pub command: Command,
}

/// Button row contents, left to right.
pub const COMMAND_BUTTONS: [CommandButton; 4] = [
    CommandButton {
        label: Command::Forward.label(),
        command: Command::Forward,
    },
    CommandButton {
        label: Command::Backward.label(),
        command: Command::Backward,
    },
    CommandButton {
        label: Command::TurnLeft.label(),
        command: Command::TurnLeft,
    },
    CommandButton {
        label: Command::TurnRight.label(),
        command: Command::TurnRight,
    },
];

#[cfg(test)]
#[path = "tests/command_tests.rs"]
mod tests;
