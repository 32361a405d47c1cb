//! A rope-backed in-memory editor implementing the host port.
//!
//! Doubles as the host side of the auto-indent story: typing a newline here
//! reproduces a host editor's builtin *linear* auto-indent (newline plus a
//! copy of the current line's leading whitespace) and reports the insertion
//! as a content change, exactly the shape the coordinator corrects.

use std::borrow::Cow;

use ropey::{Rope, RopeSlice};

use super::TextEditor;
use crate::models::{ContentChange, DocumentChangeEvent, EditBatch, Position, Selection};

/// Borrow the slice as `&str` when it is contiguous, copy otherwise.
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

fn trim_line_break(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[derive(Clone)]
pub struct ScratchEditor {
    rope: Rope,
    selections: Vec<Selection>,
}

impl ScratchEditor {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            selections: vec![Selection::caret(Position::new(0, 0))],
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selections: vec![Selection::caret(Position::new(0, 0))],
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = selections;
    }

    pub fn place_caret(&mut self, pos: Position) {
        self.selections = vec![Selection::caret(pos)];
    }

    fn pos_to_char(&self, pos: Position) -> usize {
        let last_line = self.rope.len_lines().saturating_sub(1);
        let line = pos.line.min(last_line);
        let line_len = self
            .line(line)
            .map(|text| text.chars().count())
            .unwrap_or(0);
        self.rope.line_to_char(line) + pos.character.min(line_len)
    }

    /// Inserts literal text and reports it as one content change. Test
    /// helper for driving arbitrary change shapes through the pipeline.
    pub fn insert(&mut self, pos: Position, text: &str) -> DocumentChangeEvent {
        let at = self.pos_to_char(pos);
        self.rope.insert(at, text);
        DocumentChangeEvent::single(ContentChange::new(pos, text))
    }

    /// Types a newline at `pos` the way a host with linear auto-indent does:
    /// the new line receives a copy of the current line's leading whitespace
    /// and the caret lands at its end. The whole insertion is reported as a
    /// single content change starting at `pos`.
    pub fn type_newline_auto_indent(&mut self, pos: Position) -> DocumentChangeEvent {
        let indent: String = self
            .line(pos.line)
            .map(|line| {
                line.chars()
                    .take_while(|&c| c == ' ' || c == '\t')
                    .collect()
            })
            .unwrap_or_default();

        let mut inserted = String::with_capacity(1 + indent.len());
        inserted.push('\n');
        inserted.push_str(&indent);

        let at = self.pos_to_char(pos);
        self.rope.insert(at, &inserted);
        self.place_caret(Position::new(pos.line + 1, indent.chars().count()));

        DocumentChangeEvent::single(ContentChange::new(pos, inserted))
    }
}

impl Default for ScratchEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEditor for ScratchEditor {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        if line >= self.rope.len_lines() {
            return None;
        }
        match slice_to_cow(self.rope.line(line)) {
            Cow::Borrowed(s) => Some(Cow::Borrowed(trim_line_break(s))),
            Cow::Owned(s) => Some(Cow::Owned(trim_line_break(&s).to_string())),
        }
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn apply(&mut self, batch: EditBatch) {
        // Latest-first keeps earlier pre-edit positions valid.
        for op in batch.into_ordered_ops() {
            let at = self.pos_to_char(op.at);
            self.rope.insert(at, &op.text);

            // Carets at or after the insertion point ride along, like they
            // do in a real host. Batch text never contains line breaks.
            let added = op.text.chars().count();
            for selection in &mut self.selections {
                for endpoint in [&mut selection.anchor, &mut selection.active] {
                    if endpoint.line == op.at.line && endpoint.character >= op.at.character {
                        endpoint.character += added;
                    }
                }
            }
        }
    }
}
