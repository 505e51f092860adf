use egui::{Color32, pos2};
use sketchpad::{Drag, Shape, ToolKind};

#[test]
fn line_stores_both_endpoints_verbatim() {
    let shape = Shape::line(pos2(1.0, 2.0), pos2(3.0, 4.0), Color32::BLACK);

    match shape {
        Shape::Line { start, end, color } => {
            assert_eq!(start, pos2(1.0, 2.0));
            assert_eq!(end, pos2(3.0, 4.0));
            assert_eq!(color, Color32::BLACK);
        }
        other => panic!("expected a line, got {:?}", other),
    }
}

#[test]
fn circle_radius_is_euclidean_distance() {
    // 3-4-5 triangle
    let shape = Shape::circle(pos2(0.0, 0.0), pos2(3.0, 4.0), Color32::RED);

    match shape {
        Shape::Circle { center, radius, .. } => {
            assert_eq!(center, pos2(0.0, 0.0));
            assert_eq!(radius, 5.0);
        }
        other => panic!("expected a circle, got {:?}", other),
    }
}

#[test]
fn circle_radius_truncates_toward_zero() {
    // distance is sqrt(2), which truncates to 1
    let shape = Shape::circle(pos2(0.0, 0.0), pos2(1.0, 1.0), Color32::RED);

    match shape {
        Shape::Circle { radius, .. } => assert_eq!(radius, 1.0),
        other => panic!("expected a circle, got {:?}", other),
    }
}

#[test]
fn square_side_uses_only_the_x_delta() {
    let shape = Shape::square(pos2(0.0, 0.0), pos2(5.0, 2.0), Color32::BLUE);

    match shape {
        Shape::Square { top_left, side, .. } => {
            assert_eq!(top_left, pos2(0.0, 0.0));
            assert_eq!(side, 5.0);
        }
        other => panic!("expected a square, got {:?}", other),
    }
}

#[test]
fn square_side_is_the_absolute_x_delta() {
    // Dragging leftwards still yields a positive side
    let shape = Shape::square(pos2(5.0, 0.0), pos2(0.0, 10.0), Color32::BLUE);

    match shape {
        Shape::Square { side, .. } => assert_eq!(side, 5.0),
        other => panic!("expected a square, got {:?}", other),
    }
}

#[test]
fn zero_length_drag_yields_degenerate_shapes() {
    let p = pos2(7.0, 7.0);

    match Shape::circle(p, p, Color32::BLACK) {
        Shape::Circle { radius, .. } => assert_eq!(radius, 0.0),
        other => panic!("expected a circle, got {:?}", other),
    }
    match Shape::square(p, p, Color32::BLACK) {
        Shape::Square { side, .. } => assert_eq!(side, 0.0),
        other => panic!("expected a square, got {:?}", other),
    }
}

#[test]
fn tool_kind_builds_its_own_variant() {
    let drag = Drag {
        start: pos2(0.0, 0.0),
        end: pos2(3.0, 4.0),
    };

    assert!(matches!(
        ToolKind::Line.build_shape(drag, Color32::BLACK),
        Shape::Line { .. }
    ));
    assert!(matches!(
        ToolKind::Circle.build_shape(drag, Color32::BLACK),
        Shape::Circle { .. }
    ));
    assert!(matches!(
        ToolKind::Square.build_shape(drag, Color32::BLACK),
        Shape::Square { .. }
    ));
}

#[test]
fn built_shapes_carry_the_current_color() {
    let drag = Drag {
        start: pos2(0.0, 0.0),
        end: pos2(10.0, 0.0),
    };

    for &tool in ToolKind::all() {
        let shape = tool.build_shape(drag, Color32::GREEN);
        assert_eq!(shape.color(), Color32::GREEN);
    }
}
