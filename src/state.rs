use egui::{PointerButton, Pos2};

use crate::input::InputEvent;

/// Pointer interaction state for the canvas.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        start: Pos2,
    },
}

/// A completed drag: the press and release points that define a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub start: Pos2,
    pub end: Pos2,
}

/// Tracks a primary-button drag across pointer events.
///
/// Only `Idle -> Dragging -> Idle` transitions exist. A drag starts on a
/// primary press inside the canvas and completes on the matching release;
/// the release point is used verbatim even if it landed outside the canvas.
#[derive(Debug, Default)]
pub struct DragTracker {
    state: DragState,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Abandon any in-progress drag without committing it.
    pub fn reset(&mut self) {
        self.state = DragState::Idle;
    }

    /// Feed one pointer event. Returns the completed drag on release.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<Drag> {
        match (self.state, event) {
            (
                DragState::Idle,
                InputEvent::PointerDown {
                    location,
                    button: PointerButton::Primary,
                },
            ) if location.is_in_canvas => {
                self.state = DragState::Dragging {
                    start: location.position,
                };
                None
            }
            (
                DragState::Dragging { start },
                InputEvent::PointerUp {
                    location,
                    button: PointerButton::Primary,
                },
            ) => {
                self.state = DragState::Idle;
                Some(Drag {
                    start,
                    end: location.position,
                })
            }
            _ => None,
        }
    }
}
