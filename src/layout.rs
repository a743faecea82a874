//! Declarative page layout: the widgets, their ids and default values

use serde::{Deserialize, Serialize};

use crate::data::LaunchTable;
use crate::site::{DropdownOption, SiteSelection, ALL_CODE};

/// Component ids shared by the layout, the callbacks and the page script
pub mod ids {
    pub const SITE_DROPDOWN: &str = "site-dropdown";
    pub const PAYLOAD_SLIDER: &str = "payload-slider";
    pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";
    pub const SUCCESS_PAYLOAD_SCATTER_CHART: &str = "success-payload-scatter-chart";
}

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 1000.0;
const SLIDER_MARKS: [f64; 5] = [0.0, 2500.0, 5000.0, 7500.0, 10000.0];

/// Full page layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layout {
    pub title: String,
    pub site_dropdown: Dropdown,
    pub pie_graph: Graph,
    pub slider_label: String,
    pub payload_slider: RangeSlider,
    pub scatter_graph: Graph,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RangeSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initial `[low, high]` selection
    pub value: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Placeholder a figure is drawn into
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Graph {
    pub id: String,
}

impl Layout {
    /// Layout for a loaded table; the slider starts at the table's payload
    /// bounds
    pub fn for_table(table: &LaunchTable) -> Self {
        Self {
            title: "SpaceX Launch Records Dashboard".to_string(),
            site_dropdown: Dropdown {
                id: ids::SITE_DROPDOWN.to_string(),
                options: SiteSelection::dropdown_options(),
                value: ALL_CODE.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            pie_graph: Graph {
                id: ids::SUCCESS_PIE_CHART.to_string(),
            },
            slider_label: "Payload range (Kg):".to_string(),
            payload_slider: RangeSlider {
                id: ids::PAYLOAD_SLIDER.to_string(),
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                marks: SLIDER_MARKS
                    .iter()
                    .map(|&value| SliderMark {
                        value,
                        label: format!("{}", value),
                    })
                    .collect(),
                value: [table.min_payload(), table.max_payload()],
            },
            scatter_graph: Graph {
                id: ids::SUCCESS_PAYLOAD_SCATTER_CHART.to_string(),
            },
        }
    }

    /// Ids of every input widget
    pub fn input_ids(&self) -> [&str; 2] {
        [self.site_dropdown.id.as_str(), self.payload_slider.id.as_str()]
    }

    /// Ids of every graph placeholder
    pub fn output_ids(&self) -> [&str; 2] {
        [self.pie_graph.id.as_str(), self.scatter_graph.id.as_str()]
    }
}
