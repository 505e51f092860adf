use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

// All shapes are drawn as 1px outlines.
const OUTLINE_WIDTH: f32 = 1.0;

/// A committed shape. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Line {
        start: Pos2,
        end: Pos2,
        color: Color32,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
    Square {
        top_left: Pos2,
        side: f32,
        color: Color32,
    },
}

impl Shape {
    /// Line between two drag endpoints, stored verbatim.
    pub fn line(start: Pos2, end: Pos2, color: Color32) -> Self {
        Self::Line { start, end, color }
    }

    /// Circle centered on the drag start. The radius is the distance to the
    /// release point, truncated toward zero.
    pub fn circle(start: Pos2, end: Pos2, color: Color32) -> Self {
        Self::Circle {
            center: start,
            radius: start.distance(end).trunc(),
            color,
        }
    }

    /// Square anchored at the drag start. The side is the absolute x delta,
    /// truncated toward zero; the y delta is ignored.
    pub fn square(start: Pos2, end: Pos2, color: Color32) -> Self {
        Self::Square {
            top_left: start,
            side: (end.x - start.x).abs().trunc(),
            color,
        }
    }

    pub fn color(&self) -> Color32 {
        match self {
            Self::Line { color, .. } | Self::Circle { color, .. } | Self::Square { color, .. } => {
                *color
            }
        }
    }

    /// Short name for logging and diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::Circle { .. } => "circle",
            Self::Square { .. } => "square",
        }
    }

    /// Draw this shape with its stored color. The stroke is built per call
    /// and dropped right after.
    pub fn draw(&self, painter: &Painter) {
        let stroke = Stroke::new(OUTLINE_WIDTH, self.color());
        match self {
            Self::Line { start, end, .. } => {
                painter.line_segment([*start, *end], stroke);
            }
            Self::Circle { center, radius, .. } => {
                painter.circle_stroke(*center, *radius, stroke);
            }
            Self::Square { top_left, side, .. } => {
                let rect = Rect::from_min_size(*top_left, Vec2::splat(*side));
                painter.rect_stroke(rect, 0.0, stroke);
            }
        }
    }
}
