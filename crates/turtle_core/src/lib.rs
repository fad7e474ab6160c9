//! Turtle model behind the button-driven canvas: pose, drawn path, and the
//! command table the UI dispatches through.

pub mod command;
pub mod geometry;
pub mod turtle;

pub use command::{Command, CommandButton, COMMAND_BUTTONS};
pub use geometry::{Heading, Point, Pose, Segment};
pub use turtle::{Speed, Turtle, STEP_DISTANCE, TURN_ANGLE};
