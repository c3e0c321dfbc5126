use crate::options::RowAnimation;

/// Direction of a [`RowUpdate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowChangeKind {
    Insert,
    Delete,
}

/// Flat rows to insert or delete after an expand or collapse.
///
/// Insert offsets refer to the layout after the insertion; delete offsets
/// refer to the layout before the removal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowUpdate {
    pub kind: RowChangeKind,
    pub group: usize,
    pub offsets: Vec<usize>,
    pub animation: RowAnimation,
}

impl RowUpdate {
    pub(crate) fn empty(
        kind: RowChangeKind,
        group: usize,
        animation: RowAnimation,
    ) -> Self {
        Self {
            kind,
            group,
            offsets: Vec::new(),
            animation,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Hand the update to the widget that owns the rows. Empty updates are
    /// not forwarded.
    pub fn apply_to<S: RowSink + ?Sized>(&self, sink: &mut S) {
        if self.is_empty() {
            return;
        }

        match self.kind {
            RowChangeKind::Insert => {
                sink.insert_rows(self.group, &self.offsets, self.animation)
            },
            RowChangeKind::Delete => {
                sink.delete_rows(self.group, &self.offsets, self.animation)
            },
        }
    }
}

/// Widget side of the row updates: performs the actual list mutation.
pub trait RowSink {
    fn insert_rows(
        &mut self,
        _group: usize,
        _offsets: &[usize],
        _animation: RowAnimation,
    ) {
    }

    fn delete_rows(
        &mut self,
        _group: usize,
        _offsets: &[usize],
        _animation: RowAnimation,
    ) {
    }
}
