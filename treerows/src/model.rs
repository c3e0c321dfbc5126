use crate::coordinate::Coordinate;
use crate::provider::ChildCountProvider;
use crate::tree::FlatTree;

/// Path of node titles from the group root to a node.
///
/// Built by concatenating [`TreeNode::title`] values while walking down a
/// [`Coordinate`]. Useful for labels and logs; coordinates stay the key.
pub type TitlePath = Vec<String>;

/// Trait implemented by nested node types consumable by [`NodeSections`].
pub trait TreeNode {
    /// Title shown for the node.
    fn title(&self) -> &str;
    /// Children for the node (folders only).
    fn children(&self) -> Option<&[Self]>
    where
        Self: Sized;
    /// Whether the node starts out expanded (folders only).
    fn expanded(&self) -> bool;
    /// Whether this node is a folder.
    fn is_folder(&self) -> bool;
}

/// Child count provider over borrowed node slices, one slice per group.
///
/// Children are reported in slice order; a node is expanded when it is a
/// folder that says so.
pub struct NodeSections<'a, T: TreeNode> {
    sections: Vec<&'a [T]>,
}

impl<'a, T: TreeNode> NodeSections<'a, T> {
    pub fn new(sections: Vec<&'a [T]>) -> Self {
        Self { sections }
    }

    /// Provider with a single group `0`.
    pub fn single(nodes: &'a [T]) -> Self {
        Self {
            sections: vec![nodes],
        }
    }

    pub fn group_count(&self) -> usize {
        self.sections.len()
    }

    /// Top-level nodes of `group`.
    pub fn roots(&self, group: usize) -> Option<&'a [T]> {
        self.sections.get(group).copied()
    }

    /// Node addressed by `coordinate`, `None` for group roots and for
    /// coordinates that do not exist.
    pub fn node(&self, coordinate: &Coordinate) -> Option<&'a T> {
        let (&first, rest) = coordinate.indices()[1..].split_first()?;
        let mut node = self.roots(coordinate.group())?.get(first)?;
        for &index in rest {
            node = node.children()?.get(index)?;
        }
        Some(node)
    }

    /// Titles from the top-level node down to `coordinate`.
    pub fn title_path(&self, coordinate: &Coordinate) -> Option<TitlePath> {
        let mut path = Vec::with_capacity(coordinate.depth());
        let mut nodes = self.roots(coordinate.group())?;
        for &index in &coordinate.indices()[1..] {
            let node = nodes.get(index)?;
            path.push(node.title().to_owned());
            nodes = node.children().unwrap_or(&[]);
        }
        Some(path)
    }
}

impl<T: TreeNode> ChildCountProvider for NodeSections<'_, T> {
    fn child_count(&self, coordinate: &Coordinate) -> usize {
        if coordinate.is_group() {
            return self.roots(coordinate.group()).map_or(0, <[T]>::len);
        }

        self.node(coordinate)
            .and_then(|node| node.children())
            .map_or(0, <[T]>::len)
    }

    fn is_expanded(&self, coordinate: &Coordinate) -> bool {
        if coordinate.is_group() {
            return true;
        }

        self.node(coordinate)
            .map(|node| node.is_folder() && node.expanded())
            .unwrap_or(false)
    }
}

/// Flattened representation of a visible tree node.
pub struct FlattenedNode<'a, T: TreeNode> {
    /// Zero-based tree depth (`0` for top-level rows).
    pub depth: usize,
    /// Borrowed source node.
    pub node: &'a T,
    /// Coordinate of the row.
    pub coordinate: Coordinate,
    /// Whether the row's children are shown below it.
    pub expanded: bool,
}

/// Rows of `group` in flat order, paired with their source nodes.
///
/// Uses the structure cached in `tree`, so the group has to be counted
/// first. Rows whose node cannot be found in `sections` are skipped.
pub fn flatten_group<'a, T: TreeNode>(
    tree: &FlatTree,
    sections: &NodeSections<'a, T>,
    group: usize,
) -> Vec<FlattenedNode<'a, T>> {
    tree.visible_rows(group)
        .into_iter()
        .filter_map(|coordinate| {
            let node = sections.node(&coordinate)?;
            Some(FlattenedNode {
                depth: coordinate.depth() - 1,
                node,
                expanded: tree.is_expanded(&coordinate),
                coordinate,
            })
        })
        .collect()
}
