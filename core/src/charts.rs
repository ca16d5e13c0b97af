//! Fixed chart datasets, handed to the view as data.
//!
//! The charting library is an external collaborator; the engine only says
//! what to plot.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Doughnut,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub data: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSpec {
    pub id: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

/// Inventory optimization line chart shown in the commerce module.
pub fn inventory_chart() -> ChartSpec {
    ChartSpec {
        id: "inventory".to_string(),
        kind: ChartKind::Line,
        labels: ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        series: vec![
            ChartSeries {
                label: "AI Optimization".to_string(),
                data: vec![65.0, 78.0, 85.0, 91.0, 94.0, 97.0],
            },
            ChartSeries {
                label: "Traditional Method".to_string(),
                data: vec![45.0, 52.0, 48.0, 61.0, 58.0, 55.0],
            },
        ],
    }
}

/// Automation impact donut shown in the future module.
pub fn impact_chart() -> ChartSpec {
    ChartSpec {
        id: "impact".to_string(),
        kind: ChartKind::Doughnut,
        labels: ["AI Automation", "Human Tasks", "Hybrid Processes"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        series: vec![ChartSeries {
            label: "Share of work".to_string(),
            data: vec![65.0, 15.0, 20.0],
        }],
    }
}
