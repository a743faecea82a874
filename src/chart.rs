//! Plotly.js figure specifications
//!
//! Figures are plain data: the server builds them, serializes them to JSON
//! and the page hands them to `Plotly.react` unchanged.

use serde::{Deserialize, Serialize};

use crate::data::LaunchRecord;

/// A complete figure: traces plus layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

/// One Plotly trace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie {
        labels: Vec<String>,
        values: Vec<u64>,
    },
    Scatter {
        name: String,
        mode: String,
        x: Vec<f64>,
        y: Vec<u8>,
        /// Launch site per point, shown on hover
        text: Vec<String>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FigureLayout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Title {
    pub text: String,
}

impl Title {
    fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Legend {
    pub title: Title,
}

impl Figure {
    /// Pie chart with one slice per label
    pub fn pie<L, I>(slices: I, title: impl Into<String>) -> Self
    where
        L: ToString,
        I: IntoIterator<Item = (L, u64)>,
    {
        let (labels, values) = slices
            .into_iter()
            .map(|(label, value)| (label.to_string(), value))
            .unzip();

        Self {
            data: vec![Trace::Pie { labels, values }],
            layout: FigureLayout {
                title: Title::new(title),
                xaxis: None,
                yaxis: None,
                legend: None,
            },
        }
    }

    /// Payload against outcome, one marker trace per booster version
    /// category in order of first appearance
    pub fn scatter<'a, I>(records: I, title: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = &'a LaunchRecord>,
    {
        let mut traces: Vec<Trace> = Vec::new();

        for record in records {
            let existing = traces.iter().position(|trace| {
                matches!(trace, Trace::Scatter { name, .. } if *name == record.booster_version_category)
            });

            match existing {
                Some(index) => {
                    if let Trace::Scatter { x, y, text, .. } = &mut traces[index] {
                        x.push(record.payload_mass_kg);
                        y.push(record.class);
                        text.push(record.launch_site.clone());
                    }
                }
                None => traces.push(Trace::Scatter {
                    name: record.booster_version_category.clone(),
                    mode: "markers".to_string(),
                    x: vec![record.payload_mass_kg],
                    y: vec![record.class],
                    text: vec![record.launch_site.clone()],
                }),
            }
        }

        Self {
            data: traces,
            layout: FigureLayout {
                title: Title::new(title),
                xaxis: Some(Axis {
                    title: Title::new("Payload Mass (kg)"),
                }),
                yaxis: Some(Axis {
                    title: Title::new("class"),
                }),
                legend: Some(Legend {
                    title: Title::new("Booster Version Category"),
                }),
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    /// Number of points across all scatter traces
    pub fn point_count(&self) -> usize {
        self.data
            .iter()
            .map(|trace| match trace {
                Trace::Pie { .. } => 0,
                Trace::Scatter { x, .. } => x.len(),
            })
            .sum()
    }
}
