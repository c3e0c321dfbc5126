//! Translation between tree coordinates and flat rows.
//!
//! A row offset counts the rows that precede a node within its group: the
//! rows of every earlier sibling subtree on the path from the group root,
//! plus one row per ancestor below the root. The reverse lookup descends
//! using cached subtree sizes only.

use log::trace;

use crate::coordinate::Coordinate;
use crate::error::{Result, TreeError};
use crate::provider::ChildCountProvider;
use crate::tree::FlatTree;

/// Two-level address used by sectioned list widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowPath {
    pub section: usize,
    pub row: usize,
}

impl RowPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

impl FlatTree {
    /// Zero-based row of `coordinate` within its group.
    ///
    /// Structure not yet cached is asked from `provider`, so the result is
    /// meaningful before the group has been counted. The group root itself
    /// has no row and maps to `0`.
    pub fn flat_offset<P>(
        &self,
        provider: &P,
        coordinate: &Coordinate,
    ) -> usize
    where
        P: ChildCountProvider + ?Sized,
    {
        let root = Coordinate::group_root(coordinate.group());
        let offset = self.row_offset(provider, coordinate, &root);
        trace!("flat offset of {coordinate} = {offset}");
        offset
    }

    fn row_offset<P>(
        &self,
        provider: &P,
        target: &Coordinate,
        root: &Coordinate,
    ) -> usize
    where
        P: ChildCountProvider + ?Sized,
    {
        if target == root {
            return 0;
        }

        let mut offset = usize::from(!root.is_group());
        let count = self.visible_child_count(provider, root);
        for index in 0..count {
            let child = root.child(index);
            // Siblings after the target's branch contribute nothing.
            if child > *target {
                break;
            }
            offset += self.row_offset(provider, target, &child);
        }
        offset
    }

    /// Coordinate shown at `row` of `group`.
    ///
    /// Only cached structure is used: the group must have been counted
    /// with [`FlatTree::count_rows`] first.
    pub fn tree_coordinate(
        &self,
        group: usize,
        row: usize,
    ) -> Result<Coordinate> {
        let root = Coordinate::group_root(group);
        let rows = self
            .store
            .subtree_size(&root)
            .ok_or(TreeError::Uncounted { group })?;
        if row >= rows {
            return Err(TreeError::RowOutOfRange { group, row, rows });
        }

        self.coordinate_of_row(row, &root)
            .ok_or(TreeError::Unresolved { row })
    }

    fn coordinate_of_row(
        &self,
        row: usize,
        root: &Coordinate,
    ) -> Option<Coordinate> {
        let count = self.store.direct_child_count(root)?;
        let mut seen = 0;
        for index in 0..count {
            let child = root.child(index);
            if row == seen {
                return Some(child);
            }

            let child_size = self.store.subtree_size(&child).unwrap_or(0);
            seen += 1;
            if row < seen + child_size {
                return self.coordinate_of_row(row - seen, &child);
            }
            seen += child_size;
        }
        None
    }

    /// Section and row of `coordinate`.
    pub fn row_path<P>(
        &self,
        provider: &P,
        coordinate: &Coordinate,
    ) -> RowPath
    where
        P: ChildCountProvider + ?Sized,
    {
        let row = self.flat_offset(provider, coordinate);
        RowPath::new(coordinate.group(), row)
    }

    /// Coordinate shown at a section and row.
    pub fn coordinate_at(&self, path: RowPath) -> Result<Coordinate> {
        self.tree_coordinate(path.section, path.row)
    }
}
