//! TUI application model (Elm architecture).

use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use maskdash_assets::{AssetState, AssetStatus, ImageStore};
use maskdash_core::{
    ArtifactResolver, AssetRef, ModelChoice, ResolvedAssets, Section, SectionView,
};

use crate::footer::render_footer;
use crate::header::render_header;
use crate::images::render_images;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, LogBuffer};
use crate::messages::DashMessage;
use crate::nav::render_nav;
use crate::report::render_report;
use crate::table::render_comparison;

/// Opens an image file in an external viewer.
pub type Opener = Box<dyn Fn(&Path) -> io::Result<()> + Send>;

const PAGE_SIZE: usize = 10;
const NAV_WIDTH: u16 = 28;

/// Dashboard state (Elm Model).
pub struct DashApp {
    pub should_quit: bool,
    pub section: Section,
    /// Model used by the Grad-CAM viewer.
    pub model: ModelChoice,
    pub show_logs: bool,
    pub logs: LogBuffer,
    /// Probe results keyed by asset.
    pub statuses: HashMap<AssetRef, AssetStatus>,
    /// Set once every catalog asset has been probed.
    pub probe_done: bool,
    resolver: ArtifactResolver,
    store: Arc<dyn ImageStore>,
    opener: Opener,
    rx: Receiver<DashMessage>,
}

impl DashApp {
    /// Create a dashboard that opens images with the system viewer.
    #[must_use]
    pub fn new(
        resolver: ArtifactResolver,
        store: Arc<dyn ImageStore>,
        rx: Receiver<DashMessage>,
    ) -> Self {
        Self {
            should_quit: false,
            section: Section::default(),
            model: ModelChoice::default(),
            show_logs: true,
            logs: LogBuffer::new(),
            statuses: HashMap::new(),
            probe_done: false,
            resolver,
            store,
            opener: Box::new(|path: &Path| open::that(path)),
            rx,
        }
    }

    /// Replace the image opener.
    #[must_use]
    pub fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    /// Start on `section`.
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.section = section;
        self
    }

    /// View of the current section with the current model.
    #[must_use]
    pub fn view(&self) -> SectionView {
        SectionView::for_model(&self.resolver, self.section, self.model)
    }

    /// Drain pending messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: DashMessage) {
        match msg {
            DashMessage::AssetStatus(status) => {
                self.statuses.insert(status.asset.clone(), status);
            }
            DashMessage::ProbeFinished { available, total } => {
                self.probe_done = true;
                let level = if available == total { "INFO" } else { "WARN" };
                self.logs
                    .push(format!("[{level}] {available} of {total} assets available"));
            }
            DashMessage::Log(line) => self.logs.push(line),
            DashMessage::KeyPress(action) => self.handle_key_action(action),
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextSection => self.section = self.section.next(),
            KeyAction::PrevSection => self.section = self.section.prev(),
            KeyAction::Select(index) => {
                if let Some(section) = Section::from_index(index) {
                    self.section = section;
                }
            }
            KeyAction::ToggleModel => {
                self.model = self.model.toggle();
                tracing::debug!(model = %self.model, "model toggled");
            }
            KeyAction::OpenImages => self.open_images(),
            KeyAction::ToggleLogs => self.show_logs = !self.show_logs,
            KeyAction::PageUp => self.logs.scroll.page_up(PAGE_SIZE),
            KeyAction::PageDown => {
                let total = self.logs.len();
                self.logs.scroll.page_down(PAGE_SIZE, total);
            }
            KeyAction::Home => self.logs.scroll.home(),
            KeyAction::End => {
                let total = self.logs.len();
                self.logs.scroll.end(total);
            }
            KeyAction::None => {}
        }
    }

    /// Open every available image of the current section.
    fn open_images(&mut self) {
        let view = self.view();
        let assets = view.resolved.asset_refs();
        if assets.is_empty() {
            self.logs
                .push(format!("[WARN] {} has no images to open", view.title));
            return;
        }
        for asset in assets {
            if let Some(AssetState::Missing) = self.statuses.get(asset).map(|s| &s.state) {
                self.logs.push(format!("[WARN] missing {asset}"));
                continue;
            }
            let path = self.store.locate(asset);
            match (self.opener)(&path) {
                Ok(()) => self.logs.push(format!("[INFO] opened {}", path.display())),
                Err(e) => self
                    .logs
                    .push(format!("[ERROR] cannot open {}: {e}", path.display())),
            }
        }
    }

    /// Split the screen into header, navigation, content, optional log and footer.
    #[must_use]
    pub fn compute_layout(area: Rect, show_logs: bool) -> (Rect, Rect, Rect, Option<Rect>, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let (main, logs) = if show_logs {
            let split = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
                .split(outer[1]);
            (split[0], Some(split[1]))
        } else {
            (outer[1], None)
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(NAV_WIDTH), Constraint::Min(20)])
            .split(main);

        (outer[0], columns[0], columns[1], logs, outer[2])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header, nav, content, logs, footer) =
            Self::compute_layout(frame.area(), self.show_logs);

        render_header(frame, header, self.section, self.model);
        render_nav(frame, nav, self.section);

        let view = self.view();
        match &view.resolved {
            ResolvedAssets::Comparison { table } => render_comparison(frame, content, table),
            ResolvedAssets::Report { .. } => {
                if let Some(report) = &view.chart {
                    render_report(frame, content, report);
                }
            }
            _ => render_images(frame, content, &view, &self.statuses),
        }

        if let Some(area) = logs {
            render_logs(frame, area, &self.logs);
        }
        render_footer(frame, footer);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);
        loop {
            terminal.draw(|frame| self.render(frame))?;
            if self.should_quit {
                return Ok(());
            }

            // Resize needs no handling: the next draw picks up the new size.
            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_message(DashMessage::KeyPress(map_key(key)));
                    }
                }
            }

            self.update();
        }
    }
}
