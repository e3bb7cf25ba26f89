//! Bottom status and key-binding bar.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    status: Option<&str>,
    depth: usize,
    show_help: bool,
    theme: &Theme,
) {
    let mut lines = vec![Line::from(Span::styled(
        status.unwrap_or("Choose a command.").to_string(),
        theme.status(),
    ))];

    if show_help {
        lines.push(Line::from(Span::styled(
            "↑/↓ move | Enter/→ select | Esc/← back | q quit",
            theme.help(),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(format!(" depth {depth} "), theme.title())),
    );

    frame.render_widget(paragraph, area);
}
