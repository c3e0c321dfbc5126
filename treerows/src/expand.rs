//! Expanding and collapsing nodes of a [`FlatTree`].
//!
//! Both operations return the exact rows the list widget has to insert or
//! delete, and keep every cached ancestor size in step so that row lookups
//! stay valid without counting the group again.
//!
//! Insertions are listed depth first with a node's descendants ahead of
//! the node's own row, all measured against the layout after the insert.
//! Removals first list every child row in ascending order, then descend
//! into expanded children from the last to the first, all measured against
//! the layout before the removal.

use log::{debug, trace};

use crate::coordinate::Coordinate;
use crate::options::RowAnimation;
use crate::provider::ChildCountProvider;
use crate::tree::FlatTree;
use crate::update::{RowChangeKind, RowSink, RowUpdate};

impl FlatTree {
    /// Expand `coordinate` using the configured animation.
    pub fn expand<P>(
        &mut self,
        provider: &P,
        coordinate: &Coordinate,
    ) -> RowUpdate
    where
        P: ChildCountProvider + ?Sized,
    {
        self.expand_with(provider, coordinate, self.options.animation)
    }

    /// Expand `coordinate`, returning the rows that became visible.
    ///
    /// Already expanded nodes, group roots and nodes hidden under a
    /// collapsed ancestor produce an empty update.
    pub fn expand_with<P>(
        &mut self,
        provider: &P,
        coordinate: &Coordinate,
        animation: RowAnimation,
    ) -> RowUpdate
    where
        P: ChildCountProvider + ?Sized,
    {
        let group = coordinate.group();
        let mut update =
            RowUpdate::empty(RowChangeKind::Insert, group, animation);

        if coordinate.is_group() {
            debug!("group {coordinate} is always expanded");
            return update;
        }
        if self.store.is_expanded(coordinate) {
            debug!("{coordinate} is already expanded");
            return update;
        }
        if !self.is_visible(provider, coordinate) {
            debug!("{coordinate} is hidden under a collapsed ancestor");
            return update;
        }

        let inserted = self.discover(provider, coordinate, true);
        self.store.adjust_ancestor_sizes(coordinate, inserted as isize);
        self.collect_insertions(provider, coordinate, &mut update.offsets);
        debug_assert_eq!(update.offsets.len(), inserted);

        debug!("expanded {coordinate}: {inserted} rows inserted");
        update
    }

    fn collect_insertions<P>(
        &self,
        provider: &P,
        coordinate: &Coordinate,
        offsets: &mut Vec<usize>,
    ) where
        P: ChildCountProvider + ?Sized,
    {
        let count = self.store.direct_child_count(coordinate).unwrap_or(0);
        for index in 0..count {
            let child = coordinate.child(index);
            self.collect_insertions(provider, &child, offsets);
            offsets.push(self.flat_offset(provider, &child));
        }
        trace!("insertions below {coordinate}: {offsets:?}");
    }

    /// Collapse `coordinate` using the configured animation.
    pub fn collapse<P>(
        &mut self,
        provider: &P,
        coordinate: &Coordinate,
    ) -> RowUpdate
    where
        P: ChildCountProvider + ?Sized,
    {
        self.collapse_with(provider, coordinate, self.options.animation)
    }

    /// Collapse `coordinate`, returning the rows that disappeared.
    ///
    /// Nested expanded nodes are collapsed along with it and their cached
    /// state is dropped. Collapsed nodes, group roots and nodes hidden
    /// under a collapsed ancestor produce an empty update.
    pub fn collapse_with<P>(
        &mut self,
        provider: &P,
        coordinate: &Coordinate,
        animation: RowAnimation,
    ) -> RowUpdate
    where
        P: ChildCountProvider + ?Sized,
    {
        let group = coordinate.group();
        let mut update =
            RowUpdate::empty(RowChangeKind::Delete, group, animation);

        if coordinate.is_group() {
            debug!("group {coordinate} cannot be collapsed");
            return update;
        }
        if !self.store.is_expanded(coordinate) {
            debug!("{coordinate} is already collapsed");
            return update;
        }
        if !self.is_visible(provider, coordinate) {
            debug!("{coordinate} is hidden under a collapsed ancestor");
            return update;
        }

        self.collect_removals(provider, coordinate, &mut update.offsets);
        let removed = update.offsets.len();
        debug_assert_eq!(self.store.subtree_size(coordinate), Some(removed));

        self.store.purge_subtree(coordinate);
        self.store.mark_collapsed(coordinate);
        self.store.adjust_ancestor_sizes(coordinate, -(removed as isize));

        debug!("collapsed {coordinate}: {removed} rows removed");
        update
    }

    fn collect_removals<P>(
        &self,
        provider: &P,
        coordinate: &Coordinate,
        offsets: &mut Vec<usize>,
    ) where
        P: ChildCountProvider + ?Sized,
    {
        let count = self.store.direct_child_count(coordinate).unwrap_or(0);
        for index in 0..count {
            offsets.push(self.flat_offset(provider, &coordinate.child(index)));
        }

        // Later subtrees first, so no removal shifts a row still to come.
        for index in (0..count).rev() {
            let child = coordinate.child(index);
            if self.store.is_expanded(&child) {
                self.collect_removals(provider, &child, offsets);
            }
        }
        trace!("removals below {coordinate}: {offsets:?}");
    }

    /// Expand a collapsed node or collapse an expanded one.
    pub fn toggle<P>(
        &mut self,
        provider: &P,
        coordinate: &Coordinate,
    ) -> RowUpdate
    where
        P: ChildCountProvider + ?Sized,
    {
        if self.store.is_expanded(coordinate) {
            self.collapse(provider, coordinate)
        } else {
            self.expand(provider, coordinate)
        }
    }

    /// Expand `coordinate` and hand the inserted rows to `sink`.
    pub fn expand_into<P, S>(
        &mut self,
        provider: &P,
        coordinate: &Coordinate,
        sink: &mut S,
    ) -> RowUpdate
    where
        P: ChildCountProvider + ?Sized,
        S: RowSink + ?Sized,
    {
        let update = self.expand(provider, coordinate);
        update.apply_to(sink);
        update
    }

    /// Collapse `coordinate` and hand the removed rows to `sink`.
    pub fn collapse_into<P, S>(
        &mut self,
        provider: &P,
        coordinate: &Coordinate,
        sink: &mut S,
    ) -> RowUpdate
    where
        P: ChildCountProvider + ?Sized,
        S: RowSink + ?Sized,
    {
        let update = self.collapse(provider, coordinate);
        update.apply_to(sink);
        update
    }
}
