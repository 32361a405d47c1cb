//! Queued insertions and the atomic batch they ride in.
//!
//! This system only ever inserts: the computed target column is always at or
//! above the current indent width, so there is no delete or replace op.

use compact_str::CompactString;

use super::Position;

/// One insertion of a literal string at a position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOp {
    pub at: Position,
    pub text: CompactString,
}

/// Insertions queued against one document within a single edit-transaction.
///
/// All ops are positioned against the pre-edit text. The batch is applied
/// atomically or discarded; it is never partially applied.
#[derive(Clone, Debug, Default)]
pub struct EditBatch {
    ops: Vec<EditOp>,
}

impl EditBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an insertion. Zero-length insertions are dropped here, so a
    /// snap-in-place correction never produces a visible edit.
    pub fn insert(&mut self, at: Position, text: impl Into<CompactString>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.ops.push(EditOp { at, text });
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    /// Consumes the batch, yielding ops sorted latest-position-first.
    /// Applying in that order keeps every remaining pre-edit position valid.
    pub fn into_ordered_ops(self) -> Vec<EditOp> {
        let mut ops = self.ops;
        ops.sort_by(|a, b| b.at.cmp(&a.at));
        ops
    }
}
