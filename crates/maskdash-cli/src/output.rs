//! Plain-text and JSON formatting of section views.

use std::fmt::Write as _;

use maskdash_assets::{AssetReport, AssetState, AssetStatus, ImageStore};
use maskdash_core::{ComparisonTable, ReportChart, ResolvedAssets, SectionView};

/// Width of the score bars in the report table.
const BAR_WIDTH: usize = 20;

/// Format a byte count for display.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(n: usize) -> String {
    const KB: f64 = 1024.0;
    let bytes = n as f64;
    if bytes < KB {
        format!("{n} B")
    } else if bytes < KB * KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{:.1} MB", bytes / (KB * KB))
    }
}

/// Horizontal bar for a score in [0, 1].
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn score_bar(value: f64, width: usize) -> String {
    let filled = (value.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One line per asset: caption, path and availability.
#[must_use]
pub fn render_asset_line(caption: &str, status: &AssetStatus) -> String {
    let state = match &status.state {
        AssetState::Found { bytes } => format!("[ok, {}]", format_bytes(*bytes)),
        AssetState::Missing => "[missing]".to_string(),
        AssetState::Unreadable { reason } => format!("[unreadable: {reason}]"),
    };
    format!("  {caption:<14} {} {state}", status.path.display())
}

/// Aligned text table of the model comparison.
#[must_use]
pub fn render_comparison(table: &ComparisonTable) -> String {
    let rows: Vec<[String; 5]> = table.rows.iter().map(|r| r.cells()).collect();
    let mut widths = ComparisonTable::HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = ComparisonTable::HEADERS
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    let _ = writeln!(out, "  {}", header.join("  "));
    let total: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    let _ = writeln!(out, "  {:-<total$}", "");
    for row in &rows {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(c, w)| format!("{c:<w$}"))
            .collect();
        let _ = writeln!(out, "  {}", cells.join("  ").trim_end());
    }
    out
}

/// Report chart as a table with score bars, followed by support and accuracy.
#[must_use]
pub fn render_report(report: &ReportChart) -> String {
    let chart = &report.chart;
    let label_width = chart
        .categories
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0)
        .max(5);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {} ({} by {})",
        chart.title, chart.y_axis_title, chart.x_axis_title
    );
    for (col, category) in chart.categories.iter().enumerate() {
        let _ = writeln!(out, "  {category}");
        for series in &chart.series {
            if let Some(value) = series.values.get(col) {
                let _ = writeln!(
                    out,
                    "    {:<label_width$} {} {value}",
                    series.name,
                    score_bar(*value, BAR_WIDTH),
                );
            }
        }
    }
    let _ = writeln!(out);
    for (label, support) in &report.support {
        let _ = writeln!(out, "  support[{label}] = {support}");
    }
    let _ = writeln!(out, "  accuracy = {}", report.accuracy);
    out
}

/// Body of a section view (everything below the heading and caption).
#[must_use]
pub fn render_view(view: &SectionView, store: &dyn ImageStore) -> String {
    let mut out = String::new();
    if let ResolvedAssets::GradCam { model, .. } = &view.resolved {
        let _ = writeln!(out, "  Model: {model}");
    }
    for (caption, asset) in view.resolved.captioned_assets() {
        let status = AssetStatus::probe(store, asset);
        let _ = writeln!(out, "{}", render_asset_line(caption, &status));
    }
    if let ResolvedAssets::Comparison { table } = &view.resolved {
        out.push_str(&render_comparison(table));
    }
    if let Some(report) = &view.chart {
        out.push_str(&render_report(report));
    }
    out
}

/// Availability summary of the whole catalog.
#[must_use]
pub fn render_audit(report: &AssetReport) -> String {
    let mut out = String::new();
    for status in &report.entries {
        let _ = writeln!(out, "{}", render_asset_line(status.asset.as_str(), status));
    }
    let missing = report.missing().len();
    let _ = writeln!(
        out,
        "  {} of {} assets available",
        report.entries.len() - missing,
        report.entries.len()
    );
    out
}

/// JSON document for a section view, with asset availability.
#[must_use]
pub fn view_json(view: &SectionView, store: &dyn ImageStore) -> serde_json::Value {
    let assets: Vec<AssetStatus> = view
        .resolved
        .asset_refs()
        .into_iter()
        .map(|a| AssetStatus::probe(store, a))
        .collect();
    serde_json::json!({
        "view": view,
        "assets": assets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use maskdash_assets::MemoryImageStore;
    use maskdash_core::{build_chart, ArtifactResolver, MetricsTable, ModelChoice, Section};

    fn view(section: Section, model: Option<ModelChoice>) -> SectionView {
        SectionView::build(&ArtifactResolver::default(), section, model).unwrap()
    }

    #[test]
    fn format_bytes_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn score_bar_widths() {
        assert_eq!(score_bar(1.0, 4), "████");
        assert_eq!(score_bar(0.0, 4), "░░░░");
        assert_eq!(score_bar(0.5, 4), "██░░");
        assert_eq!(score_bar(7.0, 4), "████");
    }

    #[test]
    fn gradcam_view_lists_both_images() {
        let store = MemoryImageStore::new().with("cnn_gradcam_with_mask.jpg", vec![0u8; 10]);
        let text = render_view(&view(Section::GradCamViewer, Some(ModelChoice::CustomCNN)), &store);
        assert!(text.contains("Model: Custom CNN"));
        assert!(text.contains("With Mask"));
        assert!(text.contains("cnn_gradcam_with_mask.jpg [ok, 10 B]"));
        assert!(text.contains("cnn_gradcam_without_mask.jpg [missing]"));
    }

    #[test]
    fn comparison_table_text() {
        let text = render_comparison(&ComparisonTable::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Validation Accuracy"));
        assert!(lines[2].contains("MobileNetV2"));
        assert!(lines[2].contains("0.9501"));
        assert!(lines[2].contains("~2.2M"));
        assert!(lines[3].contains("Custom CNN"));
    }

    #[test]
    fn report_text_includes_scalars() {
        let text = render_report(&build_chart(&MetricsTable::default()));
        assert!(text.contains("with_mask"));
        assert!(text.contains("f1_score"));
        assert!(text.contains("support[with_mask] = 290"));
        assert!(text.contains("support[without_mask] = 732"));
        assert!(text.contains("accuracy = 0.96"));
    }

    #[test]
    fn report_view_renders_chart() {
        let store = MemoryImageStore::new();
        let text = render_view(&view(Section::ClassificationReport, None), &store);
        assert!(text.contains("Classification Report"));
        assert!(!text.contains("[missing]"));
    }

    #[test]
    fn audit_summary_counts() {
        let catalog = maskdash_core::AssetCatalog::default();
        let store = MemoryImageStore::new().with(catalog.confusion_matrix.clone(), b"x".to_vec());
        let text = render_audit(&maskdash_assets::audit(&store, &catalog));
        assert!(text.contains("1 of 7 assets available"));
    }

    #[test]
    fn json_includes_asset_states() {
        let store = MemoryImageStore::new().with("accuracy_plot.png", b"abc".to_vec());
        let json = view_json(&view(Section::ModelAccuracy, None), &store);
        assert_eq!(json["view"]["resolved"]["kind"], "accuracy_plots");
        assert_eq!(json["assets"][0]["state"], "found");
        assert_eq!(json["assets"][1]["state"], "missing");
    }

    #[test]
    fn json_report_carries_chart() {
        let json = view_json(&view(Section::ClassificationReport, None), &MemoryImageStore::new());
        assert_eq!(json["view"]["chart"]["chart"]["series"][0]["name"], "precision");
        assert_eq!(json["view"]["chart"]["accuracy"], 0.96);
        assert_eq!(json["assets"].as_array().unwrap().len(), 0);
    }
}
