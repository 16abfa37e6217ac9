//! Per-kind pending flag slots.

use crate::kind::MarkupKind;

/// Start offsets of the currently open flag of each kind.
///
/// One slot per [`MarkupKind`]; at most one flag per kind is open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PendingFlags {
    starts: [Option<usize>; 4],
}

impl PendingFlags {
    /// Start offset of the open flag of `kind`, if any.
    pub(crate) fn start(&self, kind: MarkupKind) -> Option<usize> {
        self.starts[kind.index()]
    }

    /// Open a flag of `kind` at output offset `start`.
    pub(crate) fn open(&mut self, kind: MarkupKind, start: usize) {
        self.starts[kind.index()] = Some(start);
    }

    /// Close the open flag of `kind`, returning its start offset.
    pub(crate) fn take(&mut self, kind: MarkupKind) -> Option<usize> {
        self.starts[kind.index()].take()
    }

    /// Iterate over flags still open, in slot order.
    pub(crate) fn open_flags(&self) -> impl Iterator<Item = (MarkupKind, usize)> + '_ {
        MarkupKind::ALL
            .iter()
            .filter_map(|&kind| self.start(kind).map(|start| (kind, start)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_independent() {
        let mut pending = PendingFlags::default();
        pending.open(MarkupKind::Bold, 3);
        pending.open(MarkupKind::Italic, 5);

        assert_eq!(pending.take(MarkupKind::Bold), Some(3));
        assert_eq!(pending.start(MarkupKind::Bold), None);
        assert_eq!(pending.start(MarkupKind::Italic), Some(5));
    }

    #[test]
    fn open_flags_lists_remaining() {
        let mut pending = PendingFlags::default();
        pending.open(MarkupKind::Monospace, 1);
        let open: Vec<_> = pending.open_flags().collect();
        assert_eq!(open, vec![(MarkupKind::Monospace, 1)]);
    }
}
