//! CLI section presenters.

use std::fmt::Write;

use maskdash_assets::ImageStore;
use maskdash_core::{SectionPresenter, SectionView};

use crate::output::{render_view, view_json};
use crate::ui::{caption_line, header_line};

/// Human-readable presenter.
pub struct TextPresenter<'a> {
    store: &'a dyn ImageStore,
    quiet: bool,
}

impl<'a> TextPresenter<'a> {
    #[must_use]
    pub fn new(store: &'a dyn ImageStore, quiet: bool) -> Self {
        Self { store, quiet }
    }
}

impl SectionPresenter for TextPresenter<'_> {
    fn render(&self, view: &SectionView) -> String {
        tracing::debug!(section = %view.section, "rendering section as text");
        let mut out = String::new();
        if !self.quiet {
            let _ = writeln!(out, "{}", header_line(view.title));
            let _ = writeln!(out, "{}", caption_line(view.caption));
        }
        out.push_str(&render_view(view, self.store));
        out
    }
}

/// Machine-readable presenter, one JSON document per section.
pub struct JsonPresenter<'a> {
    store: &'a dyn ImageStore,
}

impl<'a> JsonPresenter<'a> {
    #[must_use]
    pub fn new(store: &'a dyn ImageStore) -> Self {
        Self { store }
    }
}

impl SectionPresenter for JsonPresenter<'_> {
    fn render(&self, view: &SectionView) -> String {
        tracing::debug!(section = %view.section, "rendering section as json");
        let doc = view_json(view, self.store);
        let text = serde_json::to_string_pretty(&doc).unwrap_or_else(|_| doc.to_string());
        format!("{text}\n")
    }
}
