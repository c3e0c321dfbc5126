//! In-memory fixtures shared by the unit tests.

use crate::coordinate::Coordinate;
use crate::model::{NodeSections, TreeNode};
use crate::tree::FlatTree;

#[derive(Clone, Debug)]
pub(crate) enum TestNode {
    Folder {
        title: String,
        expanded: bool,
        children: Vec<TestNode>,
    },
    File {
        title: String,
    },
}

impl TestNode {
    pub(crate) fn folder(
        title: &str,
        expanded: bool,
        children: Vec<Self>,
    ) -> Self {
        Self::Folder {
            title: title.to_owned(),
            expanded,
            children,
        }
    }

    pub(crate) fn file(title: &str) -> Self {
        Self::File {
            title: title.to_owned(),
        }
    }

    /// Collapsed folder holding `count` files.
    pub(crate) fn closed(title: &str, count: usize) -> Self {
        Self::folder(title, false, files(title, count))
    }

    /// Expanded folder holding `count` files.
    pub(crate) fn open(title: &str, count: usize) -> Self {
        Self::folder(title, true, files(title, count))
    }
}

fn files(prefix: &str, count: usize) -> Vec<TestNode> {
    (0..count)
        .map(|index| TestNode::file(&format!("{prefix}-{index}")))
        .collect()
}

impl TreeNode for TestNode {
    fn title(&self) -> &str {
        match self {
            TestNode::Folder { title, .. } => title,
            TestNode::File { title } => title,
        }
    }

    fn children(&self) -> Option<&[Self]> {
        match self {
            TestNode::Folder { children, .. } => Some(children),
            TestNode::File { .. } => None,
        }
    }

    fn expanded(&self) -> bool {
        match self {
            TestNode::Folder { expanded, .. } => *expanded,
            TestNode::File { .. } => false,
        }
    }

    fn is_folder(&self) -> bool {
        matches!(self, TestNode::Folder { .. })
    }
}

/// Three top-level nodes; node 0 is open with two files, node 1 is closed
/// with two files, node 2 is a plain file.
pub(crate) fn scenario_nodes() -> Vec<TestNode> {
    vec![
        TestNode::open("a", 2),
        TestNode::closed("b", 2),
        TestNode::file("c"),
    ]
}

/// Deeper tree mixing open and closed folders on several levels.
pub(crate) fn deep_nodes() -> Vec<TestNode> {
    vec![
        TestNode::folder(
            "src",
            true,
            vec![
                TestNode::open("core", 3),
                TestNode::closed("ui", 2),
                TestNode::folder(
                    "net",
                    true,
                    vec![TestNode::open("http", 2), TestNode::file("tcp")],
                ),
            ],
        ),
        TestNode::closed("docs", 4),
        TestNode::folder("empty", true, Vec::new()),
        TestNode::file("README"),
    ]
}

pub(crate) fn sections(nodes: &[TestNode]) -> NodeSections<'_, TestNode> {
    NodeSections::single(nodes)
}

/// Every expanded node's size equals its child count plus the sizes of
/// its expanded children, from the group root down.
pub(crate) fn assert_sizes_consistent(tree: &FlatTree, group: usize) {
    check_sizes(tree, &Coordinate::group_root(group));
}

fn check_sizes(tree: &FlatTree, root: &Coordinate) {
    let Some(count) = tree.store.direct_child_count(root) else {
        return;
    };
    let mut expected = count;
    for index in 0..count {
        let child = root.child(index);
        if tree.is_expanded(&child) {
            check_sizes(tree, &child);
            expected += tree.store.subtree_size(&child).unwrap_or(0);
        }
    }
    assert_eq!(tree.store.subtree_size(root), Some(expected), "{root}");
}
