//! Transient line-scoped values: nothing in here persists past one event.

pub mod change;
pub mod edit_op;
pub mod position;

pub use change::{ContentChange, DocumentChangeEvent};
pub use edit_op::{EditBatch, EditOp};
pub use position::{Position, Selection};
