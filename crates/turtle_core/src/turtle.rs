use crate::command::Command;
use crate::geometry::{Heading, Point, Pose, Segment};

/// Distance covered by one forward/backward command.
pub const STEP_DISTANCE: f64 = 10.0;
/// Degrees rotated by one left/right command.
pub const TURN_ANGLE: f64 = 90.0;

/// Animation speed setting. Rendering is instant, so this is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Speed(pub u8);

impl Speed {
    pub const SLOWEST: Speed = Speed(1);
}

impl Default for Speed {
    fn default() -> Self {
        Self::SLOWEST
    }
}

/// The single cursor on a canvas. Its pose only changes through the four
/// movement operations.
#[derive(Debug, Clone)]
pub struct Turtle {
    pose: Pose,
    pen_down: bool,
    speed: Speed,
    path: Vec<Segment>,
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle {
    pub fn new() -> Self {
        Self::with_pose(Pose::default())
    }

    pub fn with_pose(pose: Pose) -> Self {
        Self {
            pose,
            pen_down: true,
            speed: Speed::default(),
            path: Vec::new(),
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn position(&self) -> Point {
        self.pose.position
    }

    pub fn heading(&self) -> Heading {
        self.pose.heading
    }

    pub fn is_pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Segments drawn so far, oldest first.
    pub fn path(&self) -> &[Segment] {
        &self.path
    }

    pub fn apply(&mut self, command: Command) -> Pose {
        match command {
            Command::Forward => self.forward(),
            Command::Backward => self.backward(),
            Command::TurnLeft => self.turn_left(),
            Command::TurnRight => self.turn_right(),
        }
        tracing::debug!(
            command = command.name(),
            x = self.pose.position.x,
            y = self.pose.position.y,
            heading = self.pose.heading.degrees(),
            "applied turtle command"
        );
        self.pose
    }

    pub fn forward(&mut self) {
        self.advance(STEP_DISTANCE);
    }

    pub fn backward(&mut self) {
        self.advance(-STEP_DISTANCE);
    }

    pub fn turn_left(&mut self) {
        self.pose.heading = self.pose.heading.turned_by(TURN_ANGLE);
    }

    pub fn turn_right(&mut self) {
        self.pose.heading = self.pose.heading.turned_by(-TURN_ANGLE);
    }

    fn advance(&mut self, distance: f64) {
        let (dx, dy) = self.pose.heading.direction();
        let from = self.pose.position;
        let to = from.offset(distance * dx, distance * dy);

        if self.pen_down {
            self.path.push(Segment { from, to });
        }
        self.pose.position = to;
    }
}

#[cfg(test)]
#[path = "tests/turtle_tests.rs"]
mod tests;
