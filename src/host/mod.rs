//! Narrow ports to the host editing environment.
//!
//! The host owns the text buffer, the selections and the configuration; this
//! crate only reads line text and requests insertions. `ScratchEditor` is a
//! rope-backed in-memory host used by the tests and as a reference
//! implementation of the port.

pub mod scratch;

pub use scratch::ScratchEditor;

use std::borrow::Cow;

use crate::models::{EditBatch, Position, Selection};

/// What the coordinator needs from an editor, and nothing more.
pub trait TextEditor {
    fn line_count(&self) -> usize;

    /// Line content without its trailing line break, or `None` past the end
    /// of the document.
    fn line(&self, line: usize) -> Option<Cow<'_, str>>;

    /// The active selections, one per cursor.
    fn selections(&self) -> Vec<Selection>;

    /// Applies a queued batch atomically. Fire-and-forget: the host may drop
    /// the request (document closed mid-edit) and the outcome is not
    /// inspected here.
    fn apply(&mut self, batch: EditBatch);

    /// End-of-line position of `line`.
    fn line_end(&self, line: usize) -> Option<Position> {
        self.line(line)
            .map(|text| Position::new(line, text.chars().count()))
    }

    /// Text from the start of the line up to `pos`.
    fn text_before(&self, pos: Position) -> Option<String> {
        let line = self.line(pos.line)?;
        Some(line.chars().take(pos.character).collect())
    }

    /// Scoped edit-transaction: `build` queues insertions, and the batch is
    /// applied on exit. An empty batch is discarded without touching the
    /// document.
    fn edit<F>(&mut self, build: F)
    where
        Self: Sized,
        F: FnOnce(&mut EditBatch),
    {
        let mut batch = EditBatch::new();
        build(&mut batch);
        if !batch.is_empty() {
            self.apply(batch);
        }
    }
}
