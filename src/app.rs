use egui::{Color32, Rect};

use crate::command::Command;
use crate::document::Document;
use crate::input::{InputEvent, InputHandler};
use crate::panels;
use crate::renderer::Renderer;
use crate::state::DragTracker;
use crate::tools::ToolKind;

/// We derive Deserialize/Serialize so we can persist tool settings on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchApp {
    active_tool: ToolKind,
    stroke_color: Color32,
    // Session-only state: the canvas itself is not persisted across runs
    #[serde(skip)]
    document: Document,
    #[serde(skip)]
    drag: DragTracker,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    renderer: Renderer,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            active_tool: ToolKind::Line,
            stroke_color: Color32::BLACK,
            document: Document::new(),
            drag: DragTracker::new(),
            input: InputHandler::default(),
            renderer: Renderer::new(),
        }
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore the last tool and color, if we were persisted
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Default::default()
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    pub fn set_active_tool(&mut self, tool: ToolKind) {
        // Abandon any drag started with the previous tool
        self.drag.reset();
        self.active_tool = tool;
    }

    pub fn stroke_color_mut(&mut self) -> &mut Color32 {
        &mut self.stroke_color
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn execute_command(&mut self, command: Command) {
        log::debug!("Executing command: {:?}", command);
        command.execute(&mut self.document);
    }

    /// Translate this frame's raw input into pointer events and drive the
    /// drag state machine with them.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        self.input.set_canvas_rect(canvas_rect);

        for event in self.input.process_input(ctx) {
            // A moving drag only needs a redraw; committed shapes are
            // rendered, the pending one is not.
            if matches!(event, InputEvent::PointerMove { .. }) && self.drag.is_dragging() {
                ctx.request_repaint();
            }

            if let Some(drag) = self.drag.handle_event(&event) {
                let shape = self.active_tool.build_shape(drag, self.stroke_color);
                log::info!("Committing {} from drag {:?}", shape.kind(), drag);
                self.execute_command(Command::AddShape(shape));
                ctx.request_repaint();
            }
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
