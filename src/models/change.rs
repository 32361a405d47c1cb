//! Document-change notifications as delivered by the host editor.

use compact_str::CompactString;

use super::Position;

/// One discrete content change: the position it starts at and the literal
/// text the host inserted there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentChange {
    pub start: Position,
    pub text: CompactString,
}

impl ContentChange {
    pub fn new(start: Position, text: impl Into<CompactString>) -> Self {
        Self {
            start,
            text: text.into(),
        }
    }

    /// True when the inserted text is exactly one newline followed by a
    /// non-empty run of tabs/spaces and nothing else: the shape the host's
    /// own linear auto-indent produces for a newline keystroke.
    pub fn is_autoindent(&self) -> bool {
        let mut chars = self.text.chars();
        if chars.next() != Some('\n') {
            return false;
        }
        let rest = chars.as_str();
        !rest.is_empty() && rest.chars().all(|c| c == ' ' || c == '\t')
    }
}

/// An ordered list of discrete changes delivered in one notification.
#[derive(Clone, Debug, Default)]
pub struct DocumentChangeEvent {
    pub changes: Vec<ContentChange>,
}

impl DocumentChangeEvent {
    pub fn single(change: ContentChange) -> Self {
        Self {
            changes: vec![change],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(text: &str) -> ContentChange {
        ContentChange::new(Position::new(0, 0), text)
    }

    #[test]
    fn test_autoindent_shapes() {
        assert!(change("\n    ").is_autoindent());
        assert!(change("\n\t").is_autoindent());
        assert!(change("\n \t ").is_autoindent());
    }

    #[test]
    fn test_non_autoindent_shapes() {
        // Bare newline: the host added no indentation to correct.
        assert!(!change("\n").is_autoindent());
        assert!(!change("").is_autoindent());
        assert!(!change("    ").is_autoindent());
        assert!(!change("x").is_autoindent());
        // Anything beyond the whitespace run disqualifies the change.
        assert!(!change("\n    x").is_autoindent());
        assert!(!change("\n  \n  ").is_autoindent());
        assert!(!change("x\n    ").is_autoindent());
    }
}
