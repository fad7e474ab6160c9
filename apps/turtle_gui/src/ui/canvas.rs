//! White drawing surface that owns the turtle and paints its path every frame.

use eframe::egui;
use turtle_core::{Point, Pose, Turtle};

const PEN_COLOR: egui::Color32 = egui::Color32::BLACK;
const PEN_WIDTH: f32 = 1.0;

/// Classic arrowhead as (lateral, along-heading) offsets from the turtle position.
const CURSOR_TIP: (f64, f64) = (0.0, 0.0);
const CURSOR_LEFT: (f64, f64) = (-5.0, -9.0);
const CURSOR_NOTCH: (f64, f64) = (0.0, -7.0);
const CURSOR_RIGHT: (f64, f64) = (5.0, -9.0);

pub struct TurtleCanvas {
    background: egui::Color32,
    turtle: Turtle,
}

impl TurtleCanvas {
    pub fn new(background: egui::Color32) -> Self {
        Self {
            background,
            turtle: Turtle::new(),
        }
    }

    pub fn background(&self) -> egui::Color32 {
        self.background
    }

    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    pub fn turtle_mut(&mut self) -> &mut Turtle {
        &mut self.turtle
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let rect = response.rect;
        let transform = CanvasTransform::centered_in(rect);

        painter.rect_filled(rect, 0.0, self.background);

        let stroke = egui::Stroke::new(PEN_WIDTH, PEN_COLOR);
        for segment in self.turtle().path() {
            painter.line_segment(
                [transform.to_screen(segment.from), transform.to_screen(segment.to)],
                stroke,
            );
        }

        let [tip, left, notch, right] =
            cursor_outline(self.turtle().pose()).map(|p| transform.to_screen(p));
        // Concave at the notch, so it is painted as two convex halves.
        painter.add(egui::Shape::convex_polygon(
            vec![tip, left, notch],
            PEN_COLOR,
            egui::Stroke::NONE,
        ));
        painter.add(egui::Shape::convex_polygon(
            vec![tip, notch, right],
            PEN_COLOR,
            egui::Stroke::NONE,
        ));

        response
    }
}

/// Maps turtle space (origin at the canvas center, +y up) onto screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    center: egui::Pos2,
}

impl CanvasTransform {
    pub fn centered_in(rect: egui::Rect) -> Self {
        Self {
            center: rect.center(),
        }
    }

    pub fn to_screen(self, point: Point) -> egui::Pos2 {
        egui::pos2(
            self.center.x + point.x as f32,
            self.center.y - point.y as f32,
        )
    }
}

fn cursor_outline(pose: Pose) -> [Point; 4] {
    let (dx, dy) = pose.heading.direction();
    let place = |(lateral, along): (f64, f64)| {
        pose.position
            .offset(along * dx + lateral * dy, along * dy - lateral * dx)
    };
    [
        place(CURSOR_TIP),
        place(CURSOR_LEFT),
        place(CURSOR_NOTCH),
        place(CURSOR_RIGHT),
    ]
}
