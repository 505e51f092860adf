use egui::{Color32, Painter, Rect};

use crate::document::Document;

/// Replays the committed document onto the canvas each repaint.
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the current frame: background first, then every committed
    /// shape in insertion order.
    pub fn render(&self, painter: &Painter, rect: Rect, document: &Document) {
        painter.rect_filled(rect, 0.0, self.background);

        for shape in document.shapes() {
            shape.draw(painter);
        }
    }
}
