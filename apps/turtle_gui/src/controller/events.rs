//! What changed on the turtle after a button command ran.

use turtle_core::{Command, Heading, Point, Pose};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControllerEvent {
    Moved {
        command: Command,
        from: Point,
        to: Point,
    },
    Turned {
        command: Command,
        from: Heading,
        to: Heading,
    },
}

impl ControllerEvent {
    pub fn from_transition(command: Command, before: Pose, after: Pose) -> Self {
        if command.is_turn() {
            ControllerEvent::Turned {
                command,
                from: before.heading,
                to: after.heading,
            }
        } else {
            ControllerEvent::Moved {
                command,
                from: before.position,
                to: after.position,
            }
        }
    }

    pub fn command(&self) -> Command {
        match self {
            ControllerEvent::Moved { command, .. } | ControllerEvent::Turned { command, .. } => {
                *command
            }
        }
    }

    pub fn status_line(&self) -> String {
        match self {
            ControllerEvent::Moved { command, from, to } => format!(
                "{}: ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                command.label(),
                from.x,
                from.y,
                to.x,
                to.y
            ),
            ControllerEvent::Turned { command, from, to } => format!(
                "{}: heading {:.0}° -> {:.0}°",
                command.label(),
                from.degrees(),
                to.degrees()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ControllerEvent;
    use turtle_core::{Command, Heading, Point, Pose};

    #[test]
    fn turn_transition_reports_headings() {
        let before = Pose::default();
        let after = Pose {
            position: Point::ORIGIN,
            heading: Heading::from_degrees(270.0),
        };

        let event = ControllerEvent::from_transition(Command::TurnRight, before, after);
        assert_eq!(event.command(), Command::TurnRight);
        assert_eq!(event.status_line(), "Right: heading 0° -> 270°");
    }

    #[test]
    fn move_transition_reports_positions() {
        let before = Pose::default();
        let after = Pose {
            position: Point::new(0.0, 10.0),
            heading: Heading::NORTH,
        };

        let event = ControllerEvent::from_transition(Command::Forward, before, after);
        assert!(matches!(event, ControllerEvent::Moved { .. }));
        assert_eq!(event.status_line(), "Forward: (0.0, 0.0) -> (0.0, 10.0)");
    }
}
