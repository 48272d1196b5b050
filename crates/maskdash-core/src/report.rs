//! Classification-report chart specification.
//!
//! `build_chart` turns a [`MetricsTable`] into a renderer-agnostic grouped
//! bar chart. Support counts and overall accuracy stay out of the series and
//! are returned as plain scalars for textual display.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{F1_COLOR, PRECISION_COLOR, RECALL_COLOR};
use crate::tables::{ClassMetrics, MetricsTable};

/// An sRGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, String> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(|| format!("invalid color {hex:?}, expected #rrggbb"))?;
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| format!("invalid color {hex:?}, expected #rrggbb"))
        };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Rgb> for String {
    fn from(c: Rgb) -> Self {
        c.to_string()
    }
}

/// One metric across every category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub color: Rgb,
    /// One value per category, in category order.
    pub values: Vec<f64>,
}

/// A grouped bar chart: one group per category, one bar per series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub categories: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartSpec {
    /// Number of plotted values.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.values.len()).sum()
    }

    /// Value of `series` at `category`, if both exist.
    #[must_use]
    pub fn value(&self, series: &str, category: &str) -> Option<f64> {
        let col = self.categories.iter().position(|c| c == category)?;
        self.series
            .iter()
            .find(|s| s.name == series)
            .and_then(|s| s.values.get(col).copied())
    }
}

/// Chart plus the report fields that are not plotted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportChart {
    pub chart: ChartSpec,
    /// `(label, support)` per category.
    pub support: Vec<(String, u32)>,
    pub accuracy: f64,
}

/// Build the grouped bar chart for a classification report.
#[must_use]
pub fn build_chart(table: &MetricsTable) -> ReportChart {
    let categories: Vec<String> = table.rows.iter().map(|r| r.label.clone()).collect();

    let column = |metric: fn(&ClassMetrics) -> f64| -> Vec<f64> {
        table.rows.iter().map(metric).collect()
    };

    let series = [
        ("precision", PRECISION_COLOR, column(|r| r.precision)),
        ("recall", RECALL_COLOR, column(|r| r.recall)),
        ("f1_score", F1_COLOR, column(|r| r.f1_score)),
    ]
    .into_iter()
    .map(|(name, color, values)| ChartSeries {
        name: name.to_string(),
        color,
        values,
    })
    .collect();

    ReportChart {
        chart: ChartSpec {
            title: "Classification Report".to_string(),
            x_axis_title: "Class".to_string(),
            y_axis_title: "Score".to_string(),
            categories,
            series,
        },
        support: table
            .rows
            .iter()
            .map(|r| (r.label.clone(), r.support))
            .collect(),
        accuracy: table.accuracy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_points_three_series_two_categories() {
        let report = build_chart(&MetricsTable::default());
        assert_eq!(report.chart.series.len(), 3);
        assert_eq!(report.chart.categories, vec!["with_mask", "without_mask"]);
        assert_eq!(report.chart.point_count(), 6);
        for s in &report.chart.series {
            for v in &s.values {
                assert!((0.0..=1.0).contains(v));
            }
        }
    }

    #[test]
    fn series_names_in_order() {
        let report = build_chart(&MetricsTable::default());
        let names: Vec<_> = report.chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["precision", "recall", "f1_score"]);
    }

    #[test]
    fn support_and_accuracy_are_separate() {
        let report = build_chart(&MetricsTable::default());
        assert_eq!(
            report.support,
            vec![("with_mask".to_string(), 290), ("without_mask".to_string(), 732)]
        );
        assert!((report.accuracy - 0.96).abs() < f64::EPSILON);
        assert!(report.chart.series.iter().all(|s| s.name != "support"));
    }

    #[test]
    fn values_pass_through_verbatim() {
        let table = MetricsTable::default();
        let report = build_chart(&table);
        for row in &table.rows {
            assert_eq!(report.chart.value("precision", &row.label), Some(row.precision));
            assert_eq!(report.chart.value("recall", &row.label), Some(row.recall));
            assert_eq!(report.chart.value("f1_score", &row.label), Some(row.f1_score));
        }
        assert_eq!(report.chart.value("support", "with_mask"), None);
        assert_eq!(report.chart.value("precision", "unknown"), None);
    }

    #[test]
    fn series_use_palette_colors() {
        let report = build_chart(&MetricsTable::default());
        let colors: Vec<String> = report.chart.series.iter().map(|s| s.color.to_string()).collect();
        assert_eq!(colors, vec!["#1f77b4", "#ff7f0e", "#2ca02c"]);
    }

    #[test]
    fn hex_round_trips_through_display() {
        for hex in ["#1f77b4", "#FF7F0E", "#000000"] {
            assert_eq!(Rgb::from_hex(hex).unwrap().to_string(), hex.to_lowercase());
        }
    }

    #[test]
    fn bad_hex_rejected() {
        assert!(Rgb::from_hex("1f77b4").is_err());
        assert!(Rgb::from_hex("#1f77b").is_err());
        assert!(Rgb::from_hex("#zz77b4").is_err());
        assert!(Rgb::from_hex("#+f+f+f").is_err());
        assert!(Rgb::from_hex("#-1-1-1").is_err());
    }

    #[test]
    fn build_is_idempotent() {
        let table = MetricsTable::default();
        assert_eq!(build_chart(&table), build_chart(&table));
    }

    #[test]
    fn color_serializes_as_hex() {
        let json = serde_json::to_string(&Rgb { r: 255, g: 127, b: 14 }).unwrap();
        assert_eq!(json, "\"#ff7f0e\"");
    }
}
