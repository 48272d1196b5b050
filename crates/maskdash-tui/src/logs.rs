//! In-app event log with scrolling.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

/// Maximum number of retained log lines.
pub const LOG_CAPACITY: usize = 500;

/// Scroll state for the log panel.
#[derive(Debug, Clone)]
pub struct LogScrollState {
    /// First visible line index.
    pub offset: usize,
    /// Follow new lines as they arrive.
    pub auto_scroll: bool,
}

impl LogScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            auto_scroll: true,
        }
    }

    pub fn page_up(&mut self, page_size: usize) {
        self.auto_scroll = false;
        self.offset = self.offset.saturating_sub(page_size);
    }

    pub fn page_down(&mut self, page_size: usize, total: usize) {
        let last = total.saturating_sub(1);
        self.offset = (self.offset + page_size).min(last);
        if self.offset >= last {
            self.auto_scroll = true;
        }
    }

    pub fn home(&mut self) {
        self.auto_scroll = false;
        self.offset = 0;
    }

    pub fn end(&mut self, total: usize) {
        self.auto_scroll = true;
        self.offset = total.saturating_sub(1);
    }
}

impl Default for LogScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounded log lines plus their scroll position.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    lines: Vec<String>,
    pub scroll: LogScrollState,
}

impl LogBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line, evicting the oldest past [`LOG_CAPACITY`].
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        if self.lines.len() > LOG_CAPACITY {
            self.lines.remove(0);
            self.scroll.offset = self.scroll.offset.saturating_sub(1);
        }
        if self.scroll.auto_scroll {
            self.scroll.offset = self.lines.len().saturating_sub(1);
        }
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn line_style(line: &str) -> Style {
    if line.starts_with("[ERROR]") {
        Style::default().fg(Color::Red)
    } else if line.starts_with("[WARN]") {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Render the log panel, keeping the scroll offset line in view.
pub fn render_logs(frame: &mut Frame, area: Rect, logs: &LogBuffer) {
    let visible = area.height.saturating_sub(2) as usize;
    let total = logs.len();
    // Show the page that ends at the offset line.
    let first = (logs.scroll.offset + 1).saturating_sub(visible);

    let items: Vec<ListItem> = logs
        .lines()
        .iter()
        .skip(first)
        .take(visible)
        .map(|l| ListItem::new(Line::raw(l.as_str())).style(line_style(l)))
        .collect();

    let title = if total > visible {
        let pct = (logs.scroll.offset * 100) / total.saturating_sub(1).max(1);
        format!(" Log ({pct}%) ")
    } else {
        " Log ".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, area);
}
