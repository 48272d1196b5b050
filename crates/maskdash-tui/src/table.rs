//! Model comparison table.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;

use maskdash_core::{ComparisonTable, Section};

use crate::styles::ColorTheme;

/// Column widths fitted to the header and cell contents.
#[must_use]
pub fn column_widths(table: &ComparisonTable) -> [u16; 5] {
    let mut widths = ComparisonTable::HEADERS.map(|h| h.chars().count());
    for row in &table.rows {
        for (w, cell) in widths.iter_mut().zip(row.cells()) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths.map(|w| u16::try_from(w).unwrap_or(u16::MAX))
}

/// Render the comparison table followed by the section caption.
pub fn render_comparison(frame: &mut Frame, area: Rect, table: &ComparisonTable) {
    let theme = ColorTheme::default();
    let header = Row::new(ComparisonTable::HEADERS).style(theme.header_style());
    let rows: Vec<Row> = table.rows.iter().map(|r| Row::new(r.cells())).collect();
    let widths = column_widths(table).map(Constraint::Length);

    #[allow(clippy::cast_possible_truncation)]
    let table_height = (table.rows.len() as u16).saturating_add(3);
    let table_area = Rect {
        height: table_height.min(area.height),
        ..area
    };

    let widget = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .block(Block::default().borders(Borders::ALL).title(" Comparison "));
    frame.render_widget(widget, table_area);

    let rest = area.height.saturating_sub(table_area.height);
    if rest > 0 {
        let caption_area = Rect {
            y: area.y + table_area.height,
            height: rest,
            ..area
        };
        let caption = Paragraph::new(Line::styled(
            Section::ModelComparison.caption(),
            theme.muted_style(),
        ));
        frame.render_widget(caption, caption_area);
    }
}
