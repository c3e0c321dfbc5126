//! Flattened row indexing for expandable n-ary trees.
//!
//! List widgets only understand a flat row index (optionally scoped to a
//! section). This crate maps a tree onto such rows and keeps the mapping
//! up to date while nodes are expanded and collapsed:
//! - [`Coordinate`] addresses a node by its child indices, the first index
//!   selecting the group (section);
//! - [`ChildCountProvider`] is the only thing the application implements:
//!   child counts and initial expansion, both with defaults;
//! - [`FlatTree`] owns the cached structure, counts rows, translates
//!   between coordinates and rows, and turns expand/collapse requests into
//!   precise [`RowUpdate`]s for the widget.
//!
//! The recommended flow:
//! 1. keep one [`FlatTree`] next to the list widget that displays it;
//! 2. call [`FlatTree::count_rows`] whenever the list asks for its length
//!    or the domain tree changed;
//! 3. resolve rows with [`FlatTree::tree_coordinate`] while rendering;
//! 4. forward user toggles to [`FlatTree::expand`] / [`FlatTree::collapse`]
//!    and apply the returned update to the widget.
//!
//! # Quick Example
//!
//! ```
//! use treerows::{ChildCountProvider, Coordinate, FlatTree};
//!
//! /// Three top-level rows; the first one holds two children.
//! struct Outline;
//!
//! impl ChildCountProvider for Outline {
//!     fn child_count(&self, coordinate: &Coordinate) -> usize {
//!         match coordinate.indices() {
//!             [_] => 3,
//!             [_, 0] | [_, 1] => 2,
//!             _ => 0,
//!         }
//!     }
//!
//!     fn is_expanded(&self, coordinate: &Coordinate) -> bool {
//!         coordinate.indices() == [0, 0]
//!     }
//! }
//!
//! let mut tree = FlatTree::new();
//! assert_eq!(tree.count_rows(&Outline, 0), 5);
//!
//! let update = tree.expand(&Outline, &Coordinate::new(0, &[1]));
//! assert_eq!(update.offsets, vec![4, 5]);
//!
//! let update = tree.collapse(&Outline, &Coordinate::new(0, &[0]));
//! assert_eq!(update.offsets, vec![1, 2]);
//! assert_eq!(tree.tree_coordinate(0, 1), Ok(Coordinate::new(0, &[1])));
//! ```

mod coordinate;
mod error;
mod expand;
mod model;
mod offset;
mod options;
mod provider;
mod store;
mod tree;
mod update;

#[cfg(test)]
mod testing;

pub use coordinate::Coordinate;
pub use error::{Result, TreeError};
pub use model::{
    FlattenedNode, NodeSections, TitlePath, TreeNode, flatten_group,
};
pub use offset::RowPath;
pub use options::{RowAnimation, TreeOptions};
pub use provider::ChildCountProvider;
pub use store::TreeStateStore;
pub use tree::FlatTree;
pub use update::{RowChangeKind, RowSink, RowUpdate};
