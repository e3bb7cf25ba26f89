//! One bordered panel listing a node's option slots.

use menu_core::{MenuTree, NodeId};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{host::LabelStore, theme::Theme};

/// Render the slot list of `node` into `area`.
///
/// Rows show exactly what the label store holds: a slot whose child was
/// hidden by the core, or an empty slot, draws blank. `highlight` marks
/// the cursor row.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tree: &MenuTree,
    node: NodeId,
    highlight: Option<usize>,
    labels: &LabelStore,
    theme: &Theme,
) {
    let mut lines = Vec::with_capacity(tree.child_count(node));
    for slot in 0..tree.child_count(node) {
        let text = tree
            .child_at(node, slot)
            .and_then(|child| labels.displayed(child))
            .unwrap_or("");

        let (prefix, style) = if highlight == Some(slot) {
            (theme.cursor_glyph(), theme.highlighted_option())
        } else {
            ("  ", theme.option())
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(text.to_string(), style),
        ]));
    }

    let title = tree.label(node).unwrap_or("Menu");
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(format!(" {title} "), theme.title())),
    );

    frame.render_widget(paragraph, area);
}
