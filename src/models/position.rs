//! Line/character positions and selections, as the host editor reports them.

/// A caret location: zero-based line and character offset within the line.
///
/// Ordering is lexicographic (line first, then character), which is exactly
/// the "earlier position" rule used when collapsing a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// A selection as a pair of endpoints. An empty selection (a bare caret) has
/// both endpoints equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// An empty selection at `pos`.
    pub fn caret(pos: Position) -> Self {
        Self {
            anchor: pos,
            active: pos,
        }
    }

    /// The earlier of the two endpoints by line, then character. For an
    /// empty selection both endpoints are the same position.
    pub fn earliest(&self) -> Position {
        self.anchor.min(self.active)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }
}
