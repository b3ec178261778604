//! Chart.js configuration objects.
//!
//! Field names follow the Chart.js JSON shape so the frontend can hand the
//! serialized value straight to `new Chart(canvas, config)`.

use super::projection::SlotSeries;
use super::slot::{ChartKind, ChartSlot};
use serde::Serialize;

/// Pie colors, in label order
pub const PIE_PALETTE: [&str; 3] = ["#36A2EB", "#FF6384", "#FFCE56"];

pub const PIE_BORDER_WIDTH: f64 = 0.5;
pub const PIE_RADIUS: &str = "70%";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ChartOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub background_color: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOptions {
    pub elements: ElementOptions,
    pub radius: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementOptions {
    pub arc: ArcOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArcOptions {
    pub border_width: f64,
}

impl ChartConfig {
    /// Bar chart of one value per vendor
    pub fn bar(metric: &str, labels: Vec<String>, data: Vec<f64>) -> Self {
        Self {
            kind: ChartKind::Bar,
            data: ChartData {
                labels,
                datasets: vec![ChartDataset {
                    label: Some(metric.to_string()),
                    data,
                    background_color: Vec::new(),
                }],
            },
            options: None,
        }
    }

    /// Pie chart over a fixed label set with the shared palette and thin arcs
    pub fn pie(labels: Vec<String>, data: Vec<f64>) -> Self {
        let background_color = PIE_PALETTE
            .iter()
            .take(labels.len().max(2))
            .map(|c| c.to_string())
            .collect();
        Self {
            kind: ChartKind::Pie,
            data: ChartData {
                labels,
                datasets: vec![ChartDataset {
                    label: None,
                    data,
                    background_color,
                }],
            },
            options: Some(ChartOptions {
                elements: ElementOptions {
                    arc: ArcOptions {
                        border_width: PIE_BORDER_WIDTH,
                    },
                },
                radius: PIE_RADIUS.to_string(),
            }),
        }
    }

    pub fn for_slot(slot: ChartSlot, series: &SlotSeries) -> Self {
        let labels = series.labels().to_vec();
        let data = series.data();
        match slot.kind() {
            ChartKind::Bar => Self::bar(slot.metric(), labels, data),
            ChartKind::Pie => Self::pie(labels, data),
        }
    }
}
