use iced::alignment;
use iced::widget::{Column, Row, Space, container, mouse_area};
use iced::{Element, Length, mouse};
use log::trace;
use treerows::{
    Coordinate, FlatTree, FlattenedNode, NodeSections, TreeNode,
    flatten_group,
};

/// Flattened row handed to [`TreeList`] render callbacks.
pub type TreeListRow<'a, T> = FlattenedNode<'a, T>;

/// Rendering context passed to row callbacks.
pub struct TreeListRowContext<'a, T: TreeNode> {
    pub entry: TreeListRow<'a, T>,
    pub is_selected: bool,
    pub is_hovered: bool,
}

impl<T: TreeNode> TreeListRowContext<'_, T> {
    /// Whether the row can be expanded or collapsed.
    pub fn is_expandable(&self) -> bool {
        self.entry.node.is_folder()
    }
}

type RowRenderer<'a, T, Message> =
    dyn Fn(&TreeListRowContext<'a, T>) -> Element<'a, Message> + 'a;
type RowStyle<'a, T> =
    dyn Fn(&TreeListRowContext<'a, T>) -> container::Style + 'a;
type RowAction<'a, Message> = dyn Fn(Coordinate) -> Message + 'a;
type HoverAction<'a, Message> = dyn Fn(Option<Coordinate>) -> Message + 'a;
type RowPredicate<'a, T> = dyn Fn(&TreeListRowContext<'a, T>) -> bool + 'a;
type SectionHeader<'a, Message> =
    dyn Fn(usize) -> Option<Element<'a, Message>> + 'a;

/// List view over the flattened rows of a [`FlatTree`].
///
/// The view only reads the tree: count the groups with
/// [`FlatTree::count_rows`] in `update`, and feed toggle messages back into
/// [`FlatTree::toggle`].
pub struct TreeList<'a, T: TreeNode, Message: Clone + 'a> {
    tree: &'a FlatTree,
    sections: NodeSections<'a, T>,
    groups: Vec<usize>,
    selected: Option<&'a Coordinate>,
    hovered: Option<&'a Coordinate>,
    on_press: Option<Box<RowAction<'a, Message>>>,
    on_right_press: Option<Box<RowAction<'a, Message>>>,
    on_hover: Option<Box<HoverAction<'a, Message>>>,
    on_toggle: Option<Box<RowAction<'a, Message>>>,
    render_row: Box<RowRenderer<'a, T, Message>>,
    row_style: Option<Box<RowStyle<'a, T>>>,
    toggle_content: Option<Box<RowRenderer<'a, T, Message>>>,
    row_interactive: Option<Box<RowPredicate<'a, T>>>,
    section_header: Option<Box<SectionHeader<'a, Message>>>,
    spacing: f32,
    indent_width: f32,
    toggle_width: f32,
}

impl<'a, T, Message> TreeList<'a, T, Message>
where
    T: TreeNode + 'a,
    Message: Clone + 'a,
{
    /// Create a list over every group of `sections`, rendering each row
    /// with `render_row`.
    pub fn new(
        tree: &'a FlatTree,
        sections: NodeSections<'a, T>,
        render_row: impl Fn(&TreeListRowContext<'a, T>) -> Element<'a, Message>
        + 'a,
    ) -> Self {
        let groups = (0..sections.group_count()).collect();
        Self {
            tree,
            sections,
            groups,
            selected: None,
            hovered: None,
            on_press: None,
            on_right_press: None,
            on_hover: None,
            on_toggle: None,
            render_row: Box::new(render_row),
            row_style: None,
            toggle_content: None,
            row_interactive: None,
            section_header: None,
            spacing: 0.0,
            indent_width: 0.0,
            toggle_width: 0.0,
        }
    }

    /// Render only the given groups, in the given order.
    pub fn groups(mut self, groups: impl IntoIterator<Item = usize>) -> Self {
        self.groups = groups.into_iter().collect();
        self
    }

    /// Provide the currently selected row to inform rendering.
    pub fn selected(mut self, coordinate: Option<&'a Coordinate>) -> Self {
        self.selected = coordinate;
        self
    }

    /// Provide the currently hovered row to inform rendering.
    pub fn hovered(mut self, coordinate: Option<&'a Coordinate>) -> Self {
        self.hovered = coordinate;
        self
    }

    /// Emit a message when a row receives a left press.
    pub fn on_press(
        mut self,
        on_press: impl Fn(Coordinate) -> Message + 'a,
    ) -> Self {
        self.on_press = Some(Box::new(on_press));
        self
    }

    /// Emit a message when a row receives a right press.
    pub fn on_right_press(
        mut self,
        on_right_press: impl Fn(Coordinate) -> Message + 'a,
    ) -> Self {
        self.on_right_press = Some(Box::new(on_right_press));
        self
    }

    /// Emit a message when the pointer enters or leaves a row.
    pub fn on_hover(
        mut self,
        on_hover: impl Fn(Option<Coordinate>) -> Message + 'a,
    ) -> Self {
        self.on_hover = Some(Box::new(on_hover));
        self
    }

    /// Emit a message when the toggle slot of an expandable row is pressed.
    pub fn on_toggle(
        mut self,
        on_toggle: impl Fn(Coordinate) -> Message + 'a,
    ) -> Self {
        self.on_toggle = Some(Box::new(on_toggle));
        self
    }

    /// Provide a row style callback for background/text styling.
    pub fn row_style(
        mut self,
        row_style: impl Fn(&TreeListRowContext<'a, T>) -> container::Style + 'a,
    ) -> Self {
        self.row_style = Some(Box::new(row_style));
        self
    }

    /// Provide content to render inside the toggle slot.
    pub fn toggle_content(
        mut self,
        toggle_content: impl Fn(
            &TreeListRowContext<'a, T>,
        ) -> Element<'a, Message>
        + 'a,
    ) -> Self {
        self.toggle_content = Some(Box::new(toggle_content));
        self
    }

    /// Control whether a row receives mouse interaction handlers.
    pub fn row_interactive(
        mut self,
        row_interactive: impl Fn(&TreeListRowContext<'a, T>) -> bool + 'a,
    ) -> Self {
        self.row_interactive = Some(Box::new(row_interactive));
        self
    }

    /// Insert content before the rows of each group.
    pub fn section_header(
        mut self,
        section_header: impl Fn(usize) -> Option<Element<'a, Message>> + 'a,
    ) -> Self {
        self.section_header = Some(Box::new(section_header));
        self
    }

    /// Set indentation width per tree depth level.
    pub fn indent_width(mut self, width: f32) -> Self {
        self.indent_width = width.max(0.0);
        self
    }

    /// Set the width reserved for the toggle slot.
    pub fn toggle_width(mut self, width: f32) -> Self {
        self.toggle_width = width.max(0.0);
        self
    }

    /// Vertical spacing between rows.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Build the `Element` for the list.
    pub fn view(self) -> Element<'a, Message> {
        let mut column = Column::new().spacing(self.spacing);

        for &group in &self.groups {
            if let Some(ref section_header) = self.section_header {
                if let Some(header) = section_header(group) {
                    column = column.push(header);
                }
            }

            let entries = flatten_group(self.tree, &self.sections, group);
            trace!("rendering {} rows of group {group}", entries.len());

            for entry in entries {
                let context = TreeListRowContext {
                    is_selected: self.selected == Some(&entry.coordinate),
                    is_hovered: self.hovered == Some(&entry.coordinate),
                    entry,
                };
                column = column.push(self.build_row(&context));
            }
        }

        column.into()
    }

    fn build_row(
        &self,
        context: &TreeListRowContext<'a, T>,
    ) -> Element<'a, Message> {
        let coordinate = &context.entry.coordinate;
        let content = (self.render_row)(context);
        let is_interactive = self
            .row_interactive
            .as_ref()
            .map(|predicate| predicate(context))
            .unwrap_or(true);
        let content = if is_interactive {
            wrap_mouse_area(
                content,
                self.on_press.as_deref(),
                self.on_right_press.as_deref(),
                self.on_hover.as_deref(),
                coordinate,
            )
        } else {
            content
        };

        let mut row = Row::new().spacing(0.0);

        let indent = context.entry.depth as f32 * self.indent_width;
        if indent > 0.0 {
            row = row.push(Space::new().width(Length::Fixed(indent)));
        }

        if self.toggle_width > 0.0 || self.toggle_content.is_some() {
            row = row.push(self.build_toggle_slot(context, is_interactive));
        }

        row = row.push(content);

        let mut row_element: Element<'a, Message> = row.into();
        if let Some(ref row_style) = self.row_style {
            let style = row_style(context);
            row_element = container(row_element).style(move |_| style).into();
        }
        row_element
    }

    fn build_toggle_slot(
        &self,
        context: &TreeListRowContext<'a, T>,
        is_interactive: bool,
    ) -> Element<'a, Message> {
        let content = self
            .toggle_content
            .as_ref()
            .map(|toggle| toggle(context))
            .unwrap_or_else(|| Space::new().into());

        let content = container(content)
            .width(Length::Fixed(self.toggle_width))
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into();

        if !is_interactive || !context.is_expandable() {
            return content;
        }

        wrap_mouse_area(
            content,
            self.on_toggle.as_deref(),
            None,
            self.on_hover.as_deref(),
            &context.entry.coordinate,
        )
    }
}

fn wrap_mouse_area<'a, Message: Clone + 'a>(
    element: Element<'a, Message>,
    on_press: Option<&(dyn Fn(Coordinate) -> Message + 'a)>,
    on_right_press: Option<&(dyn Fn(Coordinate) -> Message + 'a)>,
    on_hover: Option<&(dyn Fn(Option<Coordinate>) -> Message + 'a)>,
    coordinate: &Coordinate,
) -> Element<'a, Message> {
    if on_press.is_none() && on_right_press.is_none() && on_hover.is_none() {
        return element;
    }

    let mut area = mouse_area(element);

    if let Some(on_press) = on_press {
        area = area.on_press(on_press(coordinate.clone()));
    }

    if let Some(on_right_press) = on_right_press {
        area = area.on_right_press(on_right_press(coordinate.clone()));
    }

    if let Some(on_hover) = on_hover {
        area = area
            .on_enter(on_hover(Some(coordinate.clone())))
            .on_exit(on_hover(None));
    }

    area.interaction(mouse::Interaction::Pointer).into()
}
