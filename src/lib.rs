#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod renderer;
pub mod document;
pub mod shape;
pub mod state;
pub mod command;
pub mod panels;
pub mod input;
pub mod tools;

pub use app::SketchApp;
pub use renderer::Renderer;
pub use document::Document;
pub use shape::Shape;
pub use state::{Drag, DragState, DragTracker};
pub use command::Command;
pub use input::{InputEvent, InputHandler, InputLocation};
pub use tools::ToolKind;
