use serde::{Deserialize, Serialize};

/// Position in turtle space. Origin is the canvas center and +y points up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Facing direction in degrees, kept in `[0, 360)`.
///
/// 0 is "up" (+y) and positive turns are counter-clockwise, so 90 faces -x and
/// 270 faces +x. Non-finite input collapses to 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Heading(f64);

impl Heading {
    pub const NORTH: Heading = Heading(0.0);

    pub fn from_degrees(degrees: f64) -> Self {
        Self(normalize_degrees(degrees))
    }

    pub fn degrees(self) -> f64 {
        self.0
    }

    pub fn turned_by(self, delta: f64) -> Self {
        Self::from_degrees(self.0 + delta)
    }

    /// Unit vector for this heading in turtle space. Quarter turns are exact.
    pub fn direction(self) -> (f64, f64) {
        match self.0 {
            d if d == 0.0 => (0.0, 1.0),
            d if d == 90.0 => (-1.0, 0.0),
            d if d == 180.0 => (0.0, -1.0),
            d if d == 270.0 => (1.0, 0.0),
            d => {
                let (sin, cos) = d.to_radians().sin_cos();
                (-sin, cos)
            }
        }
    }
}

impl From<f64> for Heading {
    fn from(degrees: f64) -> Self {
        Self::from_degrees(degrees)
    }
}

impl From<Heading> for f64 {
    fn from(heading: Heading) -> Self {
        heading.0
    }
}

fn normalize_degrees(degrees: f64) -> f64 {
    if !degrees.is_finite() {
        return 0.0;
    }
    ((degrees % 360.0) + 360.0) % 360.0
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point,
    pub heading: Heading,
}

/// A line left behind by a pen-down move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.from.distance_to(self.to)
    }
}
