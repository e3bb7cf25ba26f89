//! Screen composition: one panel column per open menu level.

use anyhow::Result;
use menu_core::{MenuTree, NodeId};
use ratatui::layout::{Constraint, Direction, Layout};

use crate::{
    config::UiConfig,
    host::{LabelStore, PanelHost},
    state::AppState,
    terminal::Tui,
    theme::Theme,
    widgets,
};

/// Everything the renderer reads; it never mutates state.
pub struct RenderContext<'a> {
    pub tree: &'a MenuTree,
    pub panel: &'a PanelHost,
    pub labels: &'a LabelStore,
    pub app_state: &'a AppState,
    pub ui_config: &'a UiConfig,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| draw(frame, ctx))?;
    Ok(())
}

fn draw(frame: &mut ratatui::Frame, ctx: &RenderContext) {
    let theme = Theme;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(frame.area());

    // One column per node on the root-to-focus chain that actually has
    // option slots (terminal entries contribute no panel of their own).
    let chain: Vec<NodeId> = ctx
        .tree
        .path_from_root(ctx.app_state.focused)
        .into_iter()
        .filter(|&node| ctx.tree.child_count(node) > 0)
        .collect();

    let mut constraints: Vec<Constraint> = chain
        .iter()
        .map(|_| Constraint::Length(ctx.ui_config.panel_width))
        .collect();
    constraints.push(Constraint::Min(0));

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rows[0]);

    for (level, &node) in chain.iter().enumerate() {
        // The active panel's highlight comes from the host signal; parent
        // panels fall back to their own cursor.
        let highlight = if level + 1 == chain.len() {
            Some(ctx.panel.highlight())
        } else {
            Some(ctx.tree.cursor(node))
        };
        widgets::menu_panel::render(
            frame,
            columns[level],
            ctx.tree,
            node,
            highlight,
            ctx.labels,
            &theme,
        );
    }

    widgets::status_bar::render(
        frame,
        rows[1],
        ctx.app_state.status.as_deref(),
        ctx.panel.depth(),
        ctx.ui_config.show_help_bar,
        &theme,
    );
}
