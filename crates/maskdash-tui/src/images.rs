//! Image panels: one column per resolved asset.

use std::collections::HashMap;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use maskdash_assets::{AssetState, AssetStatus};
use maskdash_core::{AssetRef, ModelChoice, ResolvedAssets, SectionView};

use crate::styles::ColorTheme;

/// Status text for an asset, `pending` until the probe reports it.
#[must_use]
pub fn status_label(status: Option<&AssetStatus>) -> String {
    match status.map(|s| &s.state) {
        Some(AssetState::Found { bytes }) => format!("ok ({bytes} bytes)"),
        Some(AssetState::Missing) => "missing".to_string(),
        Some(AssetState::Unreadable { reason }) => format!("unreadable: {reason}"),
        None => "pending".to_string(),
    }
}

/// Radio-button row for the model selector.
fn model_radio(current: ModelChoice) -> Line<'static> {
    let theme = ColorTheme::default();
    let mut spans = vec![Span::raw("Model: ")];
    for model in ModelChoice::ALL {
        let (mark, style) = if model == current {
            ("(•) ", theme.header_style())
        } else {
            ("( ) ", theme.muted_style())
        };
        spans.push(Span::styled(format!("{mark}{}", model.label()), style));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

fn render_panel(
    frame: &mut Frame,
    area: Rect,
    caption: &str,
    asset: &AssetRef,
    status: Option<&AssetStatus>,
) {
    let theme = ColorTheme::default();
    let path = status.map_or_else(|| asset.to_string(), |s| s.path.display().to_string());
    let lines = vec![
        Line::from(path),
        Line::from(Span::styled(
            status_label(status),
            theme.asset_style(status.map(|s| &s.state)),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {caption} "),
            theme.header_style().remove_modifier(Modifier::BOLD),
        ));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Render the image section for `view`.
pub fn render_images(
    frame: &mut Frame,
    area: Rect,
    view: &SectionView,
    statuses: &HashMap<AssetRef, AssetStatus>,
) {
    let theme = ColorTheme::default();
    let radio = match &view.resolved {
        ResolvedAssets::GradCam { model, .. } => Some(*model),
        _ => None,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::from(radio.is_some())),
            Constraint::Min(4),
            Constraint::Length(2),
        ])
        .split(area);

    if let Some(model) = radio {
        frame.render_widget(Paragraph::new(model_radio(model)), chunks[0]);
    }

    let panels = view.resolved.captioned_assets();
    if !panels.is_empty() {
        #[allow(clippy::cast_possible_truncation)]
        let count = panels.len() as u32;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(panels.iter().map(|_| Constraint::Ratio(1, count)))
            .split(chunks[1]);
        for ((caption, asset), column) in panels.into_iter().zip(columns.iter()) {
            render_panel(frame, *column, caption, asset, statuses.get(asset));
        }
    }

    let caption = Paragraph::new(Line::from(Span::styled(view.caption, theme.muted_style())))
        .wrap(Wrap { trim: true });
    frame.render_widget(caption, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use maskdash_assets::MemoryImageStore;
    use maskdash_core::{ArtifactResolver, Section};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(view: &SectionView, statuses: &HashMap<AssetRef, AssetStatus>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();
        let frame = terminal
            .draw(|f| render_images(f, f.area(), view, statuses))
            .unwrap();
        let mut text = String::new();
        for y in 0..frame.area.height {
            for x in 0..frame.area.width {
                text.push_str(frame.buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn status_labels() {
        assert_eq!(status_label(None), "pending");
        let store = MemoryImageStore::new().with("a.png", vec![0u8; 3]);
        let found = AssetStatus::probe(&store, &AssetRef::new("a.png"));
        assert_eq!(status_label(Some(&found)), "ok (3 bytes)");
        let missing = AssetStatus::probe(&store, &AssetRef::new("b.png"));
        assert_eq!(status_label(Some(&missing)), "missing");
    }

    #[test]
    fn accuracy_shows_both_models() {
        let view = SectionView::for_model(
            &ArtifactResolver::default(),
            Section::ModelAccuracy,
            ModelChoice::MobileNetV2,
        );
        let text = screen(&view, &HashMap::new());
        assert!(text.contains("MobileNetV2"));
        assert!(text.contains("Custom CNN"));
        assert!(text.contains("accuracy_plot.png"));
        assert!(text.contains("simple_cnn_accuracy.png"));
        assert!(text.contains("pending"));
    }

    #[test]
    fn gradcam_shows_radio_and_status() {
        let view = SectionView::for_model(
            &ArtifactResolver::default(),
            Section::GradCamViewer,
            ModelChoice::CustomCNN,
        );
        let store = MemoryImageStore::new().with("cnn_gradcam_with_mask.jpg", vec![1u8; 8]);
        let statuses: HashMap<AssetRef, AssetStatus> = view
            .resolved
            .asset_refs()
            .into_iter()
            .map(|a| (a.clone(), AssetStatus::probe(&store, a)))
            .collect();
        let text = screen(&view, &statuses);
        assert!(text.contains("(•) Custom CNN"));
        assert!(text.contains("( ) MobileNetV2"));
        assert!(text.contains("With Mask"));
        assert!(text.contains("Without Mask"));
        assert!(text.contains("ok (8 bytes)"));
        assert!(text.contains("missing"));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let view = SectionView::for_model(
            &ArtifactResolver::default(),
            Section::ConfusionMatrix,
            ModelChoice::MobileNetV2,
        );
        let mut terminal = Terminal::new(TestBackend::new(8, 3)).unwrap();
        terminal
            .draw(|f| render_images(f, f.area(), &view, &HashMap::new()))
            .unwrap();
    }
}
