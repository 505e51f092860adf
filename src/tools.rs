use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::shape::Shape;
use crate::state::Drag;

/// Shape tool selectable from the tools panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Line,
    Circle,
    Square,
}

impl ToolKind {
    pub fn all() -> &'static [ToolKind] {
        &[ToolKind::Line, ToolKind::Circle, ToolKind::Square]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToolKind::Line => "Line",
            ToolKind::Circle => "Circle",
            ToolKind::Square => "Square",
        }
    }

    /// Build the committed shape for a completed drag with this tool.
    pub fn build_shape(&self, drag: Drag, color: Color32) -> Shape {
        match self {
            ToolKind::Line => Shape::line(drag.start, drag.end, color),
            ToolKind::Circle => Shape::circle(drag.start, drag.end, color),
            ToolKind::Square => Shape::square(drag.start, drag.end, color),
        }
    }
}
