//! Memo of discovered tree structure.
//!
//! [`TreeStateStore`] keeps two maps keyed by [`Coordinate`]:
//! - subtree sizes: flattened rows below a node, for visited nodes;
//! - direct child counts: present only while a node is expanded, so the
//!   presence of an entry is the expansion flag.
//!
//! It also remembers which nodes were collapsed explicitly, so that row
//! counting does not reopen them because the provider reports them open.
//!
//! Keys are kept in [`BTreeMap`]s so that everything below a coordinate is a
//! contiguous key range, which makes subtree purges cheap.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::coordinate::Coordinate;

#[derive(Debug, Default, Clone)]
pub struct TreeStateStore {
    subtree_sizes: BTreeMap<Coordinate, usize>,
    child_counts: BTreeMap<Coordinate, usize>,
    collapsed: BTreeSet<Coordinate>,
}

impl TreeStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subtree_size(&self, coordinate: &Coordinate) -> Option<usize> {
        self.subtree_sizes.get(coordinate).copied()
    }

    pub fn set_subtree_size(&mut self, coordinate: &Coordinate, size: usize) {
        trace!("subtree size of {coordinate} = {size}");
        self.subtree_sizes.insert(coordinate.clone(), size);
    }

    pub fn direct_child_count(&self, coordinate: &Coordinate) -> Option<usize> {
        self.child_counts.get(coordinate).copied()
    }

    /// Record the child count, which marks the node as expanded.
    pub fn set_direct_child_count(
        &mut self,
        coordinate: &Coordinate,
        count: usize,
    ) {
        trace!("child count of {coordinate} = {count}");
        self.collapsed.remove(coordinate);
        self.child_counts.insert(coordinate.clone(), count);
    }

    pub fn is_expanded(&self, coordinate: &Coordinate) -> bool {
        self.child_counts.contains_key(coordinate)
    }

    /// Whether the node was collapsed explicitly and not reopened since.
    pub fn is_marked_collapsed(&self, coordinate: &Coordinate) -> bool {
        self.collapsed.contains(coordinate)
    }

    pub fn mark_collapsed(&mut self, coordinate: &Coordinate) {
        self.collapsed.insert(coordinate.clone());
    }

    /// Remove both cached entries for `coordinate`.
    pub fn clear(&mut self, coordinate: &Coordinate) {
        self.subtree_sizes.remove(coordinate);
        self.child_counts.remove(coordinate);
    }

    /// Remove every entry strictly below `coordinate`, collapse marks
    /// included.
    pub fn purge_descendants(&mut self, coordinate: &Coordinate) {
        let sizes = descendant_keys(self.subtree_sizes.keys(), coordinate);
        let counts = descendant_keys(self.child_counts.keys(), coordinate);
        let marks = descendant_keys(self.collapsed.iter(), coordinate);
        trace!(
            "purging below {coordinate}: {} sizes, {} counts, {} marks",
            sizes.len(),
            counts.len(),
            marks.len()
        );

        for key in sizes {
            self.subtree_sizes.remove(&key);
        }
        for key in counts {
            self.child_counts.remove(&key);
        }
        for key in marks {
            self.collapsed.remove(&key);
        }
    }

    /// Remove `coordinate` and everything below it.
    pub fn purge_subtree(&mut self, coordinate: &Coordinate) {
        self.purge_descendants(coordinate);
        self.clear(coordinate);
        self.collapsed.remove(coordinate);
    }

    /// Add `delta` rows to the cached size of every visited ancestor.
    pub fn adjust_ancestor_sizes(
        &mut self,
        coordinate: &Coordinate,
        delta: isize,
    ) {
        for ancestor in coordinate.ancestors() {
            if let Some(size) = self.subtree_sizes.get_mut(&ancestor) {
                *size = size.saturating_add_signed(delta);
            }
        }
    }

    /// Number of coordinates with any cached entry.
    pub fn len(&self) -> usize {
        let mut keys: BTreeSet<&Coordinate> =
            self.subtree_sizes.keys().collect();
        keys.extend(self.child_counts.keys());
        keys.extend(self.collapsed.iter());
        keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subtree_sizes.is_empty()
            && self.child_counts.is_empty()
            && self.collapsed.is_empty()
    }

    pub fn clear_all(&mut self) {
        self.subtree_sizes.clear();
        self.child_counts.clear();
        self.collapsed.clear();
    }
}

fn descendant_keys<'a>(
    keys: impl Iterator<Item = &'a Coordinate>,
    root: &Coordinate,
) -> Vec<Coordinate> {
    keys.skip_while(|key| *key <= root)
        .take_while(|key| root.is_ancestor_of(key))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(group: usize, path: &[usize]) -> Coordinate {
        Coordinate::new(group, path)
    }

    #[test]
    fn child_count_presence_is_the_expansion_flag() {
        let mut store = TreeStateStore::new();
        let node = coord(0, &[1]);

        assert!(!store.is_expanded(&node));
        store.set_direct_child_count(&node, 0);
        assert!(store.is_expanded(&node));
        assert_eq!(store.direct_child_count(&node), Some(0));

        store.clear(&node);
        assert!(!store.is_expanded(&node));
        assert_eq!(store.subtree_size(&node), None);
    }

    #[test]
    fn expanding_clears_a_collapse_mark() {
        let mut store = TreeStateStore::new();
        let node = coord(0, &[2]);

        store.mark_collapsed(&node);
        assert!(store.is_marked_collapsed(&node));

        store.set_direct_child_count(&node, 3);
        assert!(!store.is_marked_collapsed(&node));
    }

    #[test]
    fn purge_descendants_keeps_siblings_and_the_node_itself() {
        let mut store = TreeStateStore::new();
        for (path, size) in [
            (&[0][..], 4),
            (&[0, 0][..], 1),
            (&[0, 0, 0][..], 0),
            (&[0, 1][..], 0),
            (&[1][..], 2),
        ] {
            store.set_subtree_size(&coord(0, path), size);
            store.set_direct_child_count(&coord(0, path), size);
        }
        store.mark_collapsed(&coord(0, &[0, 2]));

        store.purge_descendants(&coord(0, &[0]));

        assert_eq!(store.subtree_size(&coord(0, &[0])), Some(4));
        assert_eq!(store.subtree_size(&coord(0, &[0, 0])), None);
        assert_eq!(store.subtree_size(&coord(0, &[0, 0, 0])), None);
        assert!(!store.is_expanded(&coord(0, &[0, 1])));
        assert!(!store.is_marked_collapsed(&coord(0, &[0, 2])));
        assert_eq!(store.subtree_size(&coord(0, &[1])), Some(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn purge_subtree_removes_the_node_too() {
        let mut store = TreeStateStore::new();
        store.set_subtree_size(&coord(1, &[3]), 2);
        store.set_direct_child_count(&coord(1, &[3]), 2);
        store.set_direct_child_count(&coord(1, &[3, 1]), 0);

        store.purge_subtree(&coord(1, &[3]));

        assert!(store.is_empty());
    }

    #[test]
    fn ancestor_sizes_follow_the_delta() {
        let mut store = TreeStateStore::new();
        store.set_subtree_size(&coord(0, &[]), 5);
        store.set_subtree_size(&coord(0, &[1]), 2);

        store.adjust_ancestor_sizes(&coord(0, &[1, 0]), 3);
        assert_eq!(store.subtree_size(&coord(0, &[])), Some(8));
        assert_eq!(store.subtree_size(&coord(0, &[1])), Some(5));
        assert_eq!(store.subtree_size(&coord(0, &[1, 0])), None);

        store.adjust_ancestor_sizes(&coord(0, &[1, 0]), -3);
        assert_eq!(store.subtree_size(&coord(0, &[])), Some(5));
        assert_eq!(store.subtree_size(&coord(0, &[1])), Some(2));
    }
}
