use crate::coordinate::Coordinate;

/// Source of tree structure queried on demand by [`crate::FlatTree`].
///
/// Both methods have defaults, so a data source implements only what it
/// knows about: a node has no children unless told otherwise, and is
/// expanded unless told otherwise. Group roots are always treated as
/// expanded regardless of [`ChildCountProvider::is_expanded`].
pub trait ChildCountProvider {
    /// Number of immediate children of `coordinate`.
    fn child_count(&self, _coordinate: &Coordinate) -> usize {
        0
    }

    /// Whether the children of `coordinate` are initially visible.
    fn is_expanded(&self, _coordinate: &Coordinate) -> bool {
        true
    }
}

/// Absent data source: every node is an empty, expanded leaf.
impl ChildCountProvider for () {}

impl<P: ChildCountProvider + ?Sized> ChildCountProvider for &P {
    fn child_count(&self, coordinate: &Coordinate) -> usize {
        (**self).child_count(coordinate)
    }

    fn is_expanded(&self, coordinate: &Coordinate) -> bool {
        (**self).is_expanded(coordinate)
    }
}
