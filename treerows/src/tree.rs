use log::{debug, trace};

use crate::coordinate::Coordinate;
use crate::options::TreeOptions;
use crate::provider::ChildCountProvider;
use crate::store::TreeStateStore;

/// Flattened view of an expandable tree, owned by the list widget that
/// displays it.
///
/// The tree keeps only derived structure (sizes, child counts and the
/// expansion flags) in its [`TreeStateStore`]. Everything else is asked
/// from a [`ChildCountProvider`] passed into each call, so the same
/// `FlatTree` follows the application's model without borrowing it.
#[derive(Debug, Default, Clone)]
pub struct FlatTree {
    pub(crate) store: TreeStateStore,
    pub(crate) options: TreeOptions,
}

impl FlatTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TreeOptions) -> Self {
        Self {
            store: TreeStateStore::new(),
            options,
        }
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    pub fn store(&self) -> &TreeStateStore {
        &self.store
    }

    /// Drop all cached structure, e.g. after the domain tree was replaced.
    pub fn reset(&mut self) {
        debug!("resetting flattened tree state");
        self.store.clear_all();
    }

    /// Total flattened rows of `group`, re-derived from the provider.
    ///
    /// Expanded descendants are walked again so their caches reflect the
    /// provider's current snapshot; collapsed subtrees are not entered.
    pub fn count_rows<P>(&mut self, provider: &P, group: usize) -> usize
    where
        P: ChildCountProvider + ?Sized,
    {
        let root = Coordinate::group_root(group);
        let total = self.discover(provider, &root, true);
        debug!("group {group} flattens to {total} rows");
        total
    }

    /// Row count of `group` as of the last count or expand/collapse.
    pub fn row_count(&self, group: usize) -> Option<usize> {
        self.store.subtree_size(&Coordinate::group_root(group))
    }

    /// Flattened rows below `coordinate`, discovering and caching the
    /// expanded part of its subtree. Collapsed nodes count `0`, and so do
    /// nodes hidden under a collapsed ancestor, which are left uncached.
    pub fn subtree_size_of<P>(
        &mut self,
        provider: &P,
        coordinate: &Coordinate,
    ) -> usize
    where
        P: ChildCountProvider + ?Sized,
    {
        if !coordinate.is_group() && !self.is_visible(provider, coordinate) {
            trace!("{coordinate} is hidden, not discovering");
            return 0;
        }
        self.discover(provider, coordinate, false)
    }

    /// Whether the children of `coordinate` are currently part of the
    /// flattened rows.
    pub fn is_expanded(&self, coordinate: &Coordinate) -> bool {
        self.store.is_expanded(coordinate)
    }

    pub fn parent_of(&self, coordinate: &Coordinate) -> Option<Coordinate> {
        coordinate.parent()
    }

    /// Other children of the parent of `coordinate`, in index order.
    ///
    /// Group roots have no parent and therefore no siblings.
    pub fn siblings_of<P>(
        &self,
        provider: &P,
        coordinate: &Coordinate,
    ) -> Vec<Coordinate>
    where
        P: ChildCountProvider + ?Sized,
    {
        let Some(parent) = coordinate.parent() else {
            return Vec::new();
        };

        let count = self
            .store
            .direct_child_count(&parent)
            .unwrap_or_else(|| provider.child_count(&parent));

        (0..count)
            .filter(|index| *index != coordinate.last())
            .map(|index| parent.child(index))
            .collect()
    }

    /// Whether every ancestor of `coordinate` shows its children, i.e. the
    /// node occupies a row.
    pub fn is_visible<P>(
        &self,
        provider: &P,
        coordinate: &Coordinate,
    ) -> bool
    where
        P: ChildCountProvider + ?Sized,
    {
        !coordinate.is_group()
            && coordinate
                .ancestors()
                .all(|ancestor| self.shows_children(provider, &ancestor))
    }

    /// Coordinates of every row of `group` in flat order, from cached
    /// structure only. Empty until the group has been counted.
    pub fn visible_rows(&self, group: usize) -> Vec<Coordinate> {
        let mut rows = Vec::new();
        self.push_rows(&Coordinate::group_root(group), &mut rows);
        rows
    }

    fn push_rows(&self, root: &Coordinate, rows: &mut Vec<Coordinate>) {
        let Some(count) = self.store.direct_child_count(root) else {
            return;
        };

        for index in 0..count {
            let child = root.child(index);
            rows.push(child.clone());
            self.push_rows(&child, rows);
        }
    }

    /// Walk the visible part of the subtree at `coordinate`, recording
    /// child counts and sizes. `force` treats the node itself as expanded.
    /// Entries for children past the provider's current count are dropped.
    pub(crate) fn discover<P>(
        &mut self,
        provider: &P,
        coordinate: &Coordinate,
        force: bool,
    ) -> usize
    where
        P: ChildCountProvider + ?Sized,
    {
        if !force && !self.shows_children(provider, coordinate) {
            return 0;
        }

        let count = provider.child_count(coordinate);
        let previous = self.store.direct_child_count(coordinate).unwrap_or(0);
        for index in count..previous {
            self.store.purge_subtree(&coordinate.child(index));
        }
        self.store.set_direct_child_count(coordinate, count);

        let mut size = count;
        for index in 0..count {
            size += self.discover(provider, &coordinate.child(index), false);
        }

        self.store.set_subtree_size(coordinate, size);
        size
    }

    /// Expansion as the engine sees it: group roots always, then the
    /// store's flag, then an explicit collapse, then the provider.
    pub(crate) fn shows_children<P>(
        &self,
        provider: &P,
        coordinate: &Coordinate,
    ) -> bool
    where
        P: ChildCountProvider + ?Sized,
    {
        if coordinate.is_group() || self.store.is_expanded(coordinate) {
            return true;
        }
        if self.store.is_marked_collapsed(coordinate) {
            return false;
        }
        provider.is_expanded(coordinate)
    }

    /// Children of `coordinate` that occupy rows right now.
    pub(crate) fn visible_child_count<P>(
        &self,
        provider: &P,
        coordinate: &Coordinate,
    ) -> usize
    where
        P: ChildCountProvider + ?Sized,
    {
        if let Some(count) = self.store.direct_child_count(coordinate) {
            return count;
        }
        if self.shows_children(provider, coordinate) {
            provider.child_count(coordinate)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        TestNode, assert_sizes_consistent, deep_nodes, scenario_nodes,
        sections,
    };

    fn coord(group: usize, path: &[usize]) -> Coordinate {
        Coordinate::new(group, path)
    }

    #[test]
    fn flat_group_counts_its_top_level_nodes() {
        let nodes = vec![
            TestNode::file("a"),
            TestNode::file("b"),
            TestNode::file("c"),
        ];
        let mut tree = FlatTree::new();

        assert_eq!(tree.count_rows(&sections(&nodes), 0), 3);
        assert_eq!(tree.row_count(0), Some(3));
        assert_eq!(tree.store.direct_child_count(&coord(0, &[])), Some(3));
    }

    #[test]
    fn open_folder_contributes_its_children() {
        let nodes = scenario_nodes();
        let mut tree = FlatTree::new();

        assert_eq!(tree.count_rows(&sections(&nodes), 0), 5);
        assert!(tree.is_expanded(&coord(0, &[0])));
        assert!(!tree.is_expanded(&coord(0, &[1])));
        assert_eq!(tree.store.subtree_size(&coord(0, &[0])), Some(2));
        assert_eq!(tree.store.subtree_size(&coord(0, &[1])), None);
    }

    #[test]
    fn counting_records_consistent_sizes_on_every_level() {
        let nodes = deep_nodes();
        let mut tree = FlatTree::new();

        assert_eq!(tree.count_rows(&sections(&nodes), 0), 14);
        assert_sizes_consistent(&tree, 0);
        assert_eq!(tree.store.subtree_size(&coord(0, &[0])), Some(10));
        assert_eq!(tree.store.subtree_size(&coord(0, &[0, 2])), Some(4));
    }

    #[test]
    fn expanded_empty_folder_differs_from_unvisited() {
        let nodes = deep_nodes();
        let mut tree = FlatTree::new();
        tree.count_rows(&sections(&nodes), 0);

        let empty = coord(0, &[2]);
        assert!(tree.is_expanded(&empty));
        assert_eq!(tree.store.subtree_size(&empty), Some(0));
        assert_eq!(tree.store.direct_child_count(&empty), Some(0));

        let closed = coord(0, &[1]);
        assert!(!tree.is_expanded(&closed));
        assert_eq!(tree.store.subtree_size(&closed), None);
    }

    #[test]
    fn absent_provider_yields_empty_groups() {
        let mut tree = FlatTree::new();
        assert_eq!(tree.count_rows(&(), 0), 0);
        assert_eq!(tree.row_count(0), Some(0));
        assert_eq!(tree.row_count(1), None);
    }

    #[test]
    fn groups_are_counted_independently() {
        let first = scenario_nodes();
        let second = vec![TestNode::open("x", 3)];
        let provider = crate::model::NodeSections::new(vec![
            first.as_slice(),
            second.as_slice(),
        ]);
        let mut tree = FlatTree::new();

        assert_eq!(tree.count_rows(&provider, 0), 5);
        assert_eq!(tree.count_rows(&provider, 1), 4);
        assert_eq!(tree.row_count(0), Some(5));
    }

    #[test]
    fn subtree_size_of_a_closed_node_is_zero() {
        let nodes = scenario_nodes();
        let provider = sections(&nodes);
        let mut tree = FlatTree::new();

        assert_eq!(tree.subtree_size_of(&provider, &coord(0, &[1])), 0);
        assert_eq!(tree.subtree_size_of(&provider, &coord(0, &[0])), 2);
        assert!(tree.is_expanded(&coord(0, &[0])));
    }

    #[test]
    fn subtree_size_of_a_hidden_node_is_not_cached() {
        let nodes = vec![
            TestNode::folder("a", false, vec![TestNode::open("b", 1)]),
            TestNode::file("c"),
        ];
        let provider = sections(&nodes);
        let mut tree = FlatTree::new();
        tree.count_rows(&provider, 0);
        let stored = tree.store().len();

        assert_eq!(tree.subtree_size_of(&provider, &coord(0, &[0, 0])), 0);
        assert!(!tree.is_expanded(&coord(0, &[0, 0])));
        assert_eq!(tree.store().len(), stored);
        assert_eq!(tree.subtree_size_of(&provider, &coord(0, &[])), 2);
    }

    #[test]
    fn recount_drops_children_the_provider_no_longer_has() {
        let three = vec![TestNode::folder(
            "a",
            true,
            vec![
                TestNode::file("x"),
                TestNode::file("y"),
                TestNode::closed("z", 1),
            ],
        )];
        let two = vec![TestNode::folder(
            "a",
            true,
            vec![TestNode::file("x"), TestNode::file("y")],
        )];
        let mut tree = FlatTree::new();
        assert_eq!(tree.count_rows(&sections(&three), 0), 4);
        tree.expand(&sections(&three), &coord(0, &[0, 2]));
        assert_eq!(tree.row_count(0), Some(5));

        assert_eq!(tree.count_rows(&sections(&two), 0), 3);
        assert!(!tree.is_expanded(&coord(0, &[0, 2])));
        assert_eq!(tree.store().len(), 2);
        assert_sizes_consistent(&tree, 0);

        // Regrown children start from the provider's state again.
        assert_eq!(tree.count_rows(&sections(&three), 0), 4);
        assert!(!tree.is_expanded(&coord(0, &[0, 2])));
        assert_sizes_consistent(&tree, 0);
    }

    #[test]
    fn siblings_exclude_the_node_itself() {
        let nodes = scenario_nodes();
        let provider = sections(&nodes);
        let mut tree = FlatTree::new();
        tree.count_rows(&provider, 0);

        assert_eq!(
            tree.siblings_of(&provider, &coord(0, &[1])),
            vec![coord(0, &[0]), coord(0, &[2])]
        );
        assert_eq!(
            tree.siblings_of(&provider, &coord(0, &[0, 0])),
            vec![coord(0, &[0, 1])]
        );
        // Collapsed parents fall back to the provider for the count.
        assert_eq!(
            tree.siblings_of(&provider, &coord(0, &[1, 1])),
            vec![coord(0, &[1, 0])]
        );
        assert!(tree.siblings_of(&provider, &coord(0, &[])).is_empty());
        assert_eq!(tree.parent_of(&coord(0, &[])), None);
        assert_eq!(tree.parent_of(&coord(0, &[1, 1])), Some(coord(0, &[1])));
    }

    #[test]
    fn visible_rows_list_the_flat_order() {
        let nodes = scenario_nodes();
        let mut tree = FlatTree::new();
        assert!(tree.visible_rows(0).is_empty());

        tree.count_rows(&sections(&nodes), 0);
        assert_eq!(
            tree.visible_rows(0),
            vec![
                coord(0, &[0]),
                coord(0, &[0, 0]),
                coord(0, &[0, 1]),
                coord(0, &[1]),
                coord(0, &[2]),
            ]
        );
    }

    #[test]
    fn visibility_requires_open_ancestors() {
        let nodes = deep_nodes();
        let provider = sections(&nodes);
        let mut tree = FlatTree::new();
        tree.count_rows(&provider, 0);

        assert!(tree.is_visible(&provider, &coord(0, &[0, 2, 0, 1])));
        assert!(tree.is_visible(&provider, &coord(0, &[1])));
        assert!(!tree.is_visible(&provider, &coord(0, &[1, 0])));
        assert!(!tree.is_visible(&provider, &coord(0, &[])));
    }

    #[test]
    fn reset_forgets_everything() {
        let nodes = scenario_nodes();
        let mut tree = FlatTree::new();
        tree.count_rows(&sections(&nodes), 0);

        tree.reset();

        assert!(tree.store().is_empty());
        assert_eq!(tree.row_count(0), None);
    }
}
