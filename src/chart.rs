//! Projection of aggregated totals into a bar chart series.

use crate::aggregate::RowTotal;
use crate::model::Amount;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// The payload handed to a chart renderer: one bar per destination, in row
/// order. A series is only ever built from a non-empty set of totals; with
/// nothing to chart, no chart is produced at all.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ChartSeries {
    bars: Vec<Bar>,
}

/// A single bar: the destination label and its total trip cost.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Bar {
    label: String,
    value: Amount,
}

impl Bar {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> Amount {
        self.value
    }
}

impl ChartSeries {
    /// Builds a series from an aggregation payload, or `None` when the
    /// payload is empty.
    pub fn from_totals(totals: &[RowTotal]) -> Option<Self> {
        if totals.is_empty() {
            return None;
        }
        Some(Self {
            bars: totals
                .iter()
                .map(|t| Bar {
                    label: t.label().to_string(),
                    value: t.total(),
                })
                .collect(),
        })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Renders the series as labeled horizontal bars, scaled so the largest
    /// total spans `width` characters. Validated totals are always positive,
    /// so every bar gets at least one mark.
    pub fn render(&self, width: usize) -> String {
        let max = self
            .bars
            .iter()
            .map(|b| b.value.value())
            .max()
            .unwrap_or_default();
        let label_width = self
            .bars
            .iter()
            .map(|b| b.label.chars().count())
            .max()
            .unwrap_or_default();

        let mut out = String::new();
        for bar in &self.bars {
            let ratio = if max.is_zero() {
                0.0
            } else {
                (bar.value.value() / max).to_f64().unwrap_or_default()
            };
            let len = ((width as f64) * ratio).round().max(1.0) as usize;
            let _ = writeln!(
                out,
                "{:<label_width$}  {} {}",
                bar.label,
                "#".repeat(len),
                bar.value
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grid;

    fn totals(lines: &[&str]) -> Vec<RowTotal> {
        let mut grid = Grid::from_lines(lines);
        crate::aggregate(&mut grid).unwrap()
    }

    #[test]
    fn test_empty_payload_produces_no_chart() {
        assert_eq!(ChartSeries::from_totals(&[]), None);
    }

    #[test]
    fn test_bars_preserve_row_order() {
        let series =
            ChartSeries::from_totals(&totals(&["Rome 10 0 0 10", "Paris 100 50 20 10"])).unwrap();
        let labels: Vec<&str> = series.bars().iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["Rome", "Paris"]);
    }

    #[test]
    fn test_render_scales_to_the_largest_total() {
        let series =
            ChartSeries::from_totals(&totals(&["Paris 10 0 0 0", "Rome 5 0 0 0"])).unwrap();
        let rendered = series.render(10);
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].contains(&"#".repeat(10)));
        assert!(lines[1].contains(&"#".repeat(5)));
        assert!(!lines[1].contains(&"#".repeat(6)));
    }

    #[test]
    fn test_render_aligns_labels() {
        let series =
            ChartSeries::from_totals(&totals(&["Li 10 0 0 0", "Bergen 5 0 0 0"])).unwrap();
        let rendered = series.render(10);
        for line in rendered.lines() {
            assert_eq!(line.find("  #"), Some(6));
        }
    }

    #[test]
    fn test_render_shows_comma_decimal_totals() {
        let series = ChartSeries::from_totals(&totals(&["Paris 10,5 0 0 0"])).unwrap();
        assert!(series.render(10).contains("10,5"));
    }
}
