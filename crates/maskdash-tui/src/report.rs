//! Classification report as a grouped bar chart.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use maskdash_core::ReportChart;

use crate::styles::{to_color, ColorTheme};

const BAR_WIDTH: u16 = 6;

/// Bar height for a score; the chart's maximum is 100.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scaled(value: f64) -> u64 {
    (value.clamp(0.0, 1.0) * 100.0).round() as u64
}

fn groups(report: &ReportChart) -> Vec<BarGroup<'_>> {
    let chart = &report.chart;
    chart
        .categories
        .iter()
        .enumerate()
        .map(|(col, category)| {
            let bars: Vec<Bar> = chart
                .series
                .iter()
                .filter_map(|series| {
                    let value = *series.values.get(col)?;
                    Some(
                        Bar::default()
                            .value(scaled(value))
                            .text_value(format!("{value}"))
                            .style(Style::default().fg(to_color(series.color))),
                    )
                })
                .collect();
            BarGroup::default()
                .label(Line::from(category.as_str()))
                .bars(&bars)
        })
        .collect()
}

fn legend(report: &ReportChart) -> Vec<Line<'_>> {
    let theme = ColorTheme::default();
    let mut lines: Vec<Line> = report
        .chart
        .series
        .iter()
        .map(|s| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(to_color(s.color))),
                Span::raw(s.name.as_str()),
            ])
        })
        .collect();
    lines.push(Line::default());
    for (label, support) in &report.support {
        lines.push(Line::from(vec![
            Span::styled("support ", theme.muted_style()),
            Span::raw(format!("{label}: {support}")),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("accuracy ", theme.muted_style()),
        Span::raw(format!("{}", report.accuracy)),
    ]));
    lines
}

/// Render the report chart with its legend and scalar fields.
pub fn render_report(frame: &mut Frame, area: Rect, report: &ReportChart) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(28)])
        .split(area);

    let chart = &report.chart;
    let title = format!(
        " {} ({} by {}) ",
        chart.title, chart.y_axis_title, chart.x_axis_title
    );
    let mut bar_chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .bar_width(BAR_WIDTH)
        .bar_gap(1)
        .group_gap(3)
        .max(100);
    for group in groups(report) {
        bar_chart = bar_chart.data(group);
    }
    frame.render_widget(bar_chart, chunks[0]);

    let side = Paragraph::new(legend(report))
        .block(Block::default().borders(Borders::ALL).title(" Legend "));
    frame.render_widget(side, chunks[1]);
}
