use iced::widget::{Space, column, container, row, text};
use iced::{Color, Element, Length};
use log::info;
use treerows::{Coordinate, FlatTree, NodeSections, TreeNode};
use treerows_ui_list::{TreeList, TreeListRowContext};

#[derive(Debug, Clone)]
enum Message {
    Select(Coordinate),
    Toggle(Coordinate),
    Hover(Option<Coordinate>),
}

#[derive(Clone)]
enum Node {
    Folder {
        title: String,
        expanded: bool,
        children: Vec<Node>,
    },
    File {
        title: String,
    },
}

impl Node {
    fn folder(title: &str, expanded: bool, children: Vec<Node>) -> Self {
        Node::Folder {
            title: title.to_owned(),
            expanded,
            children,
        }
    }

    fn file(title: &str) -> Self {
        Node::File {
            title: title.to_owned(),
        }
    }
}

impl TreeNode for Node {
    fn title(&self) -> &str {
        match self {
            Node::Folder { title, .. } => title,
            Node::File { title } => title,
        }
    }

    fn children(&self) -> Option<&[Self]> {
        match self {
            Node::Folder { children, .. } => Some(children),
            Node::File { .. } => None,
        }
    }

    fn expanded(&self) -> bool {
        match self {
            Node::Folder { expanded, .. } => *expanded,
            Node::File { .. } => false,
        }
    }

    fn is_folder(&self) -> bool {
        matches!(self, Node::Folder { .. })
    }
}

const SECTION_TITLES: [&str; 2] = ["Settings", "Workspace"];

struct AppState {
    settings: Vec<Node>,
    workspace: Vec<Node>,
    tree: FlatTree,
    selected: Option<Coordinate>,
    hovered: Option<Coordinate>,
}

impl AppState {
    fn recount(&mut self) {
        let sections = sections_of(&self.settings, &self.workspace);
        for group in 0..sections.group_count() {
            self.tree.count_rows(&sections, group);
        }
    }
}

fn sections_of<'a>(
    settings: &'a [Node],
    workspace: &'a [Node],
) -> NodeSections<'a, Node> {
    NodeSections::new(vec![settings, workspace])
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            settings: vec![
                Node::folder(
                    "General",
                    true,
                    vec![Node::file("Terminal"), Node::file("Theme")],
                ),
                Node::folder(
                    "Advanced",
                    false,
                    vec![
                        Node::file("Logging"),
                        Node::folder(
                            "Experimental",
                            false,
                            vec![Node::file("GPU renderer")],
                        ),
                    ],
                ),
                Node::file("About"),
            ],
            workspace: vec![
                Node::folder(
                    "Projects",
                    true,
                    vec![
                        Node::folder(
                            "treerows",
                            false,
                            vec![
                                Node::file("Cargo.toml"),
                                Node::file("src"),
                            ],
                        ),
                        Node::file("notes.md"),
                    ],
                ),
                Node::folder("Archive", false, Vec::new()),
            ],
            tree: FlatTree::new(),
            selected: None,
            hovered: None,
        };
        state.recount();
        state
    }
}

fn update(state: &mut AppState, message: Message) {
    match message {
        Message::Select(coordinate) => {
            state.selected = Some(coordinate);
        },
        Message::Toggle(coordinate) => {
            let sections = sections_of(&state.settings, &state.workspace);
            let update = state.tree.toggle(&sections, &coordinate);
            info!(
                "{:?} rows {:?} in section {}",
                update.kind, update.offsets, update.group
            );
        },
        Message::Hover(coordinate) => {
            state.hovered = coordinate;
        },
    }
}

fn view(state: &AppState) -> Element<'_, Message> {
    let sections = sections_of(&state.settings, &state.workspace);
    TreeList::new(&state.tree, sections, render_row)
        .selected(state.selected.as_ref())
        .hovered(state.hovered.as_ref())
        .on_press(Message::Select)
        .on_toggle(Message::Toggle)
        .on_hover(Message::Hover)
        .section_header(section_header)
        .row_style(row_style)
        .toggle_content(toggle_icon)
        .toggle_width(24.0)
        .indent_width(14.0)
        .spacing(0.0)
        .view()
}

fn section_header<'a>(group: usize) -> Option<Element<'a, Message>> {
    let title = SECTION_TITLES.get(group)?;
    Some(container(text(*title).size(12)).padding([6, 8]).into())
}

fn render_row<'a>(
    context: &TreeListRowContext<'a, Node>,
) -> Element<'a, Message> {
    let label = format!(
        "{}  ({})",
        context.entry.node.title(),
        context.entry.coordinate
    );

    let row = row![text(label)].spacing(6);
    container(column![row])
        .padding([4, 8])
        .width(Length::Fill)
        .into()
}

fn row_style(context: &TreeListRowContext<'_, Node>) -> container::Style {
    let background = if context.is_selected {
        Some(Color::from_rgb(0.12, 0.26, 0.46).into())
    } else if context.is_hovered {
        Some(Color::from_rgb(0.18, 0.18, 0.18).into())
    } else {
        None
    };

    container::Style {
        background,
        text_color: Some(Color::from_rgb(0.9, 0.9, 0.9)),
        ..Default::default()
    }
}

fn toggle_icon<'a>(
    context: &TreeListRowContext<'a, Node>,
) -> Element<'a, Message> {
    if context.is_expandable() {
        let label = if context.entry.expanded { "[-]" } else { "[+]" };
        text(label).into()
    } else {
        Space::new().width(Length::Fixed(16.0)).into()
    }
}

fn main() -> iced::Result {
    env_logger::init();
    iced::run(update, view)
}
