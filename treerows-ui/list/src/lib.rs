//! [`iced`] list view over the flattened rows of a [`treerows::FlatTree`].
//!
//! The crate renders; it does not own tree state. Your application keeps
//! the node model and one `FlatTree` per list, and:
//! 1. recounts the groups with [`treerows::FlatTree::count_rows`] after the
//!    model changes;
//! 2. builds a [`TreeList`] in `view` from the tree and a
//!    [`treerows::NodeSections`] over the model;
//! 3. feeds [`TreeList::on_toggle`] messages into
//!    [`treerows::FlatTree::toggle`].
//!
//! See `examples/tree_list.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::{container, text};
//! use iced::{Element, Length};
//! use treerows::{Coordinate, FlatTree, NodeSections, TreeNode};
//! use treerows_ui_list::TreeList;
//!
//! #[derive(Clone)]
//! enum Node {
//!     Folder { title: String, children: Vec<Node> },
//!     File { title: String },
//! }
//!
//! impl TreeNode for Node {
//!     fn title(&self) -> &str {
//!         match self {
//!             Node::Folder { title, .. } => title,
//!             Node::File { title } => title,
//!         }
//!     }
//!
//!     fn children(&self) -> Option<&[Self]> {
//!         match self {
//!             Node::Folder { children, .. } => Some(children),
//!             Node::File { .. } => None,
//!         }
//!     }
//!
//!     fn expanded(&self) -> bool {
//!         false
//!     }
//!
//!     fn is_folder(&self) -> bool {
//!         matches!(self, Node::Folder { .. })
//!     }
//! }
//!
//! #[derive(Clone)]
//! enum Message {
//!     Toggle(Coordinate),
//! }
//!
//! struct State {
//!     nodes: Vec<Node>,
//!     tree: FlatTree,
//! }
//!
//! fn update(state: &mut State, message: Message) {
//!     let Message::Toggle(coordinate) = message;
//!     let sections = NodeSections::single(&state.nodes);
//!     state.tree.toggle(&sections, &coordinate);
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     let sections = NodeSections::single(&state.nodes);
//!     TreeList::new(&state.tree, sections, |ctx| {
//!         container(text(ctx.entry.node.title()))
//!             .width(Length::Fill)
//!             .into()
//!     })
//!     .on_press(Message::Toggle)
//!     .indent_width(14.0)
//!     .view()
//! }
//! ```

mod view;

pub use view::{TreeList, TreeListRow, TreeListRowContext};
