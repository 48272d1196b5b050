//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use maskdash_core::constants::DASHBOARD_TITLE;
use maskdash_core::{ModelChoice, Section};

use crate::styles::ColorTheme;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, section: Section, model: ModelChoice) {
    let theme = ColorTheme::default();
    let mut spans = vec![
        Span::styled("maskdash", theme.header_style()),
        Span::raw(format!(" | {}", section.label())),
    ];
    if section.requires_model() {
        spans.push(Span::raw(format!(" | Model: {model}")));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(format!(" {DASHBOARD_TITLE} "));

    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}
