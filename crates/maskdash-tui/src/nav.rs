//! Section navigation list.

use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use maskdash_core::Section;

use crate::styles::ColorTheme;

/// Render the section list with `current` highlighted.
pub fn render_nav(frame: &mut Frame, area: Rect, current: Section) {
    let theme = ColorTheme::default();
    let items: Vec<ListItem> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| ListItem::new(format!("{} {}", i + 1, s.label())))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Navigate "))
        .highlight_style(theme.selected_style())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(current.index()));
    frame.render_stateful_widget(list, area, &mut state);
}
