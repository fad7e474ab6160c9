use super::*;

const EPS: f64 = 1e-9;

fn assert_at(turtle: &Turtle, x: f64, y: f64) {
    let p = turtle.position();
    assert!(
        (p.x - x).abs() < EPS && (p.y - y).abs() < EPS,
        "expected ({x}, {y}), got ({}, {})",
        p.x,
        p.y
    );
}

#[test]
fn starts_at_origin_facing_up_with_pen_down() {
    let turtle = Turtle::new();
    assert_eq!(turtle.position(), Point::ORIGIN);
    assert_eq!(turtle.heading(), Heading::NORTH);
    assert!(turtle.is_pen_down());
    assert_eq!(turtle.speed(), Speed::SLOWEST);
    assert!(turtle.path().is_empty());
}

#[test]
fn forward_right_forward_backward_scenario() {
    let mut turtle = Turtle::new();

    turtle.apply(Command::Forward);
    assert_at(&turtle, 0.0, 10.0);

    turtle.apply(Command::TurnRight);
    assert_eq!(turtle.heading().degrees(), 270.0);
    assert_at(&turtle, 0.0, 10.0);

    turtle.apply(Command::Forward);
    assert_at(&turtle, 10.0, 10.0);

    turtle.apply(Command::Backward);
    assert_at(&turtle, 0.0, 10.0);
}

#[test]
fn turn_left_faces_negative_x() {
    let mut turtle = Turtle::new();
    turtle.turn_left();
    assert_eq!(turtle.heading().degrees(), 90.0);

    turtle.forward();
    assert_at(&turtle, -10.0, 0.0);
}

#[test]
fn turns_leave_position_and_path_untouched() {
    let mut turtle = Turtle::new();
    turtle.forward();
    let before = turtle.position();

    turtle.turn_left();
    turtle.turn_right();
    turtle.turn_right();

    assert_eq!(turtle.position(), before);
    assert_eq!(turtle.path().len(), 1);
}

#[test]
fn four_right_turns_restore_heading_exactly() {
    let mut turtle = Turtle::new();
    turtle.turn_left();
    let start = turtle.heading();

    for _ in 0..4 {
        turtle.turn_right();
    }

    assert_eq!(turtle.heading(), start);
}

#[test]
fn every_move_draws_one_segment_of_step_length() {
    let mut turtle = Turtle::new();
    turtle.forward();
    turtle.turn_right();
    turtle.backward();

    let path = turtle.path();
    assert_eq!(path.len(), 2);
    assert_eq!(path[0].from, Point::ORIGIN);
    assert_eq!(path[1].to, turtle.position());
    for segment in path {
        assert!((segment.length() - STEP_DISTANCE).abs() < EPS);
    }
}

#[test]
fn apply_returns_the_new_pose() {
    let mut turtle = Turtle::new();
    let pose = turtle.apply(Command::TurnRight);
    assert_eq!(pose, turtle.pose());
    assert_eq!(pose.heading.degrees(), 270.0);
}

#[test]
fn heading_normalizes_into_half_open_range() {
    assert_eq!(Heading::from_degrees(-90.0).degrees(), 270.0);
    assert_eq!(Heading::from_degrees(360.0).degrees(), 0.0);
    assert_eq!(Heading::from_degrees(450.0).degrees(), 90.0);
    assert_eq!(Heading::from_degrees(-720.0).degrees(), 0.0);
}

#[test]
fn quarter_turn_moves_land_exactly_on_the_step_grid() {
    let mut turtle = Turtle::new();
    turtle.forward();
    turtle.turn_right();
    turtle.forward();
    assert_eq!(turtle.position(), Point::new(10.0, 10.0));

    turtle.turn_left();
    turtle.turn_left();
    turtle.turn_left();
    turtle.forward();
    assert_eq!(turtle.position(), Point::new(10.0, 0.0));
}

#[test]
fn deserialized_heading_is_normalized() {
    let heading: Heading = serde_json::from_str("720.5").expect("deserialize");
    assert_eq!(heading.degrees(), 0.5);

    let heading: Heading = serde_json::from_str("-90.0").expect("deserialize");
    assert_eq!(heading.degrees(), 270.0);

    let pose: Pose =
        serde_json::from_str(r#"{"position":{"x":1.0,"y":2.0},"heading":450.0}"#).expect("pose");
    assert_eq!(pose.heading.degrees(), 90.0);
    assert_eq!(serde_json::to_string(&pose.heading).expect("serialize"), "90.0");
}

#[test]
fn non_finite_heading_collapses_to_north() {
    assert_eq!(Heading::from_degrees(f64::NAN), Heading::NORTH);
    assert_eq!(Heading::from_degrees(f64::INFINITY), Heading::NORTH);
    assert_eq!(Heading::from(f64::NEG_INFINITY), Heading::NORTH);
}
