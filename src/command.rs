use crate::document::Document;
use crate::shape::Shape;

/// Mutations that can be applied to the document.
///
/// Every change goes through here so the app has a single place to log
/// and dispatch edits.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a committed shape to the document
    AddShape(Shape),
    /// Remove every committed shape
    Clear,
}

impl Command {
    pub fn execute(&self, document: &mut Document) {
        match self {
            Command::AddShape(shape) => {
                document.add_shape(*shape);
            }
            Command::Clear => {
                document.clear();
            }
        }
    }
}
