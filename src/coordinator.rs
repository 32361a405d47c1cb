//! The edit coordinator: bridges host editor events to the indent engine.
//!
//! Two triggers, both stateless and both producing one scoped
//! edit-transaction:
//!
//! - the explicit indent command (Tab-like), which always advances a level;
//! - the auto-indent correction, which rewrites the linear indentation the
//!   host's own newline handling just inserted so it lands on the ladder.

use tracing::{debug, trace};

use crate::engine;
use crate::host::TextEditor;
use crate::models::{DocumentChangeEvent, Position};
use crate::services::config::IndentConfig;

pub struct IndentCoordinator {
    config: IndentConfig,
}

impl IndentCoordinator {
    pub fn new(config: IndentConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndentConfig {
        &self.config
    }

    /// Explicit indent trigger. Every selection is processed independently
    /// against its own line: the earlier endpoint is the effective position,
    /// and the engine is asked to advance a level even when the width already
    /// sits on one. All insertions land in a single atomic batch.
    pub fn run_indent_command<E: TextEditor>(&self, editor: &mut E) {
        let tab_size = self.config.tab_size;
        let plans: Vec<(Position, String)> = editor
            .selections()
            .iter()
            .filter_map(|selection| {
                let pos = selection.earliest();
                let before = editor.text_before(pos)?;
                let text = engine::compute_insertion(&before, pos.character, tab_size, true);
                trace!(
                    line = pos.line,
                    character = pos.character,
                    add = text.len(),
                    "indent command"
                );
                Some((pos, text))
            })
            .collect();

        editor.edit(|batch| {
            for (pos, text) in plans {
                batch.insert(pos, text);
            }
        });
    }

    /// Auto-indent correction trigger, called for every document-change
    /// notification on the active document. Passing `None` for the editor
    /// (no active editor when the event fired) is a benign no-op.
    ///
    /// Each change whose inserted text is autoindent-shaped gets a correction
    /// computed at the end of the line following the change's start line,
    /// this time snapping in place when the width already sits on a ladder
    /// term. Qualifying corrections from one event share one batch.
    pub fn on_document_change<E: TextEditor>(
        &self,
        editor: Option<&mut E>,
        event: &DocumentChangeEvent,
    ) {
        let Some(editor) = editor else {
            return;
        };
        if !self.config.auto_correct {
            return;
        }

        let tab_size = self.config.tab_size;
        let plans: Vec<(Position, String)> = event
            .changes
            .iter()
            .filter(|change| change.is_autoindent())
            .filter_map(|change| {
                let line = change.start.line + 1;
                let end = editor.line_end(line)?;
                let before = editor.text_before(end)?;
                let text = engine::compute_insertion(&before, end.character, tab_size, false);
                if !text.is_empty() {
                    debug!(line, add = text.len(), "autoindent corrected");
                }
                Some((end, text))
            })
            .collect();

        editor.edit(|batch| {
            for (pos, text) in plans {
                batch.insert(pos, text);
            }
        });
    }
}
