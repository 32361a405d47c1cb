//! Host-dispatch glue: owns the open editors, tracks which one is active,
//! and forwards host notifications to the coordinator.
//!
//! Dispatch is single-threaded and cooperative: one notification is handled
//! to completion before the next, so the active-editor reference is a plain
//! field updated only by the focus-change path. The coordinator itself never
//! reads it; the relevant editor is resolved here and passed in explicitly.

use slotmap::{new_key_type, SlotMap};
use tracing::{debug, info};

use crate::commands::{Command, CommandRegistry};
use crate::coordinator::IndentCoordinator;
use crate::host::ScratchEditor;
use crate::models::{DocumentChangeEvent, Position};
use crate::services::config::IndentConfig;

new_key_type! {
    pub struct EditorId;
}

pub struct Workspace {
    editors: SlotMap<EditorId, ScratchEditor>,
    active: Option<EditorId>,
    coordinator: IndentCoordinator,
    commands: CommandRegistry,
}

impl Workspace {
    pub fn new(config: IndentConfig) -> Self {
        let mut commands = CommandRegistry::new();
        commands.register(Command::FibonacciIndent);
        info!(
            command = Command::FibonacciIndent.name(),
            tab_size = config.tab_size,
            "fibonacci indent activated"
        );

        Self {
            editors: SlotMap::with_key(),
            active: None,
            coordinator: IndentCoordinator::new(config),
            commands,
        }
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn active(&self) -> Option<EditorId> {
        self.active
    }

    pub fn editor(&self, id: EditorId) -> Option<&ScratchEditor> {
        self.editors.get(id)
    }

    pub fn editor_mut(&mut self, id: EditorId) -> Option<&mut ScratchEditor> {
        self.editors.get_mut(id)
    }

    /// Opens a new editor on `text` and focuses it.
    pub fn open(&mut self, text: &str) -> EditorId {
        let id = self.editors.insert(ScratchEditor::from_text(text));
        self.focus(Some(id));
        id
    }

    /// The "active editor changed" notification. `None` means no editor has
    /// focus; document-change handling becomes a no-op until focus returns.
    pub fn focus(&mut self, editor: Option<EditorId>) {
        self.active = editor.filter(|id| self.editors.contains_key(*id));
        debug!(focused = self.active.is_some(), "active editor changed");
    }

    pub fn close(&mut self, id: EditorId) {
        self.editors.remove(id);
        if self.active == Some(id) {
            self.active = None;
        }
    }

    /// Invokes a registered command by identifier against the active editor.
    /// Returns false for unknown identifiers or when nothing has focus.
    pub fn invoke(&mut self, name: &str) -> bool {
        let Some(command) = self.commands.resolve(name) else {
            return false;
        };
        match command {
            Command::FibonacciIndent => {
                let Some(editor) = self.active.and_then(|id| self.editors.get_mut(id)) else {
                    return false;
                };
                self.coordinator.run_indent_command(editor);
                true
            }
        }
    }

    /// The "document changed" notification for the active document. The
    /// active editor is resolved here and handed to the coordinator; with no
    /// active editor the event is dropped.
    pub fn notify_document_changed(&mut self, event: &DocumentChangeEvent) {
        let editor = self.active.and_then(|id| self.editors.get_mut(id));
        self.coordinator.on_document_change(editor, event);
    }

    /// Types a newline in editor `id` with the host's builtin linear
    /// auto-indent, then dispatches the resulting change notification. Both
    /// steps run within one serialized handler turn.
    pub fn type_newline(&mut self, id: EditorId, pos: Position) {
        let Some(editor) = self.editors.get_mut(id) else {
            return;
        };
        let event = editor.type_newline_auto_indent(pos);
        self.notify_document_changed(&event);
    }

    /// Shutdown: deregisters the command identifier. Called from `Drop`, but
    /// also invokable explicitly; idempotent.
    pub fn deactivate(&mut self) {
        if self.commands.deregister(Command::FibonacciIndent) {
            info!("fibonacci indent deactivated");
        }
    }
}

impl Drop for Workspace {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::TextEditor;
    use crate::models::ContentChange;

    fn workspace() -> Workspace {
        Workspace::new(IndentConfig::default())
    }

    #[test]
    fn test_open_focuses_editor() {
        let mut ws = workspace();
        let id = ws.open("text");
        assert_eq!(ws.active(), Some(id));
    }

    #[test]
    fn test_focus_rejects_closed_editor() {
        let mut ws = workspace();
        let id = ws.open("text");
        ws.close(id);
        assert_eq!(ws.active(), None);

        ws.focus(Some(id));
        assert_eq!(ws.active(), None);
    }

    #[test]
    fn test_invoke_unknown_command() {
        let mut ws = workspace();
        ws.open("text");
        assert!(!ws.invoke("no.such.command"));
    }

    #[test]
    fn test_invoke_without_focus() {
        let mut ws = workspace();
        let id = ws.open("    text");
        ws.focus(None);
        assert!(!ws.invoke(Command::FibonacciIndent.name()));
        assert_eq!(ws.editor(id).map(ScratchEditor::text), Some("    text".to_string()));
    }

    #[test]
    fn test_change_event_without_focus_is_noop() {
        let mut ws = workspace();
        let id = ws.open("         foo\n         ");
        ws.focus(None);

        let event = DocumentChangeEvent::single(ContentChange::new(Position::new(0, 12), "\n         "));
        ws.notify_document_changed(&event);

        assert_eq!(
            ws.editor(id).map(ScratchEditor::text),
            Some("         foo\n         ".to_string())
        );
    }

    #[test]
    fn test_deactivate_deregisters_command() {
        let mut ws = workspace();
        assert!(ws.commands().is_registered(Command::FibonacciIndent.name()));

        ws.deactivate();
        assert!(!ws.commands().is_registered(Command::FibonacciIndent.name()));
        assert!(!ws.invoke(Command::FibonacciIndent.name()));
    }

    #[test]
    fn test_invoke_indents_active_editor() {
        let mut ws = workspace();
        let id = ws.open("    body");
        ws.editor_mut(id)
            .unwrap()
            .place_caret(Position::new(0, 4));

        assert!(ws.invoke(Command::FibonacciIndent.name()));
        assert_eq!(
            ws.editor(id).map(ScratchEditor::text),
            Some("        body".to_string())
        );
    }

    #[test]
    fn test_type_newline_runs_correction() {
        let mut ws = workspace();
        // 9 leading spaces: host copies them, correction brings them to 12.
        let id = ws.open("         foo");
        ws.type_newline(id, Position::new(0, 12));

        assert_eq!(
            ws.editor(id).map(ScratchEditor::text),
            Some("         foo\n            ".to_string())
        );
        // Caret rides the correction to the end of the indent.
        assert_eq!(
            ws.editor(id).map(|e| e.selections()),
            Some(vec![crate::models::Selection::caret(Position::new(1, 12))])
        );
    }
}
