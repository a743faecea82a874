//! Reactive bindings between input widgets and output graphs
//!
//! A [`Callback`] names the input components that trigger it, the graph it
//! draws into, and a pure function computing the figure. The
//! [`CallbackRegistry`] is the dispatch table consulted when a widget changes.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::chart::Figure;
use crate::data::LaunchTable;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::site::SiteSelection;

/// Recompute one figure from the table and the current widget values
pub type CallbackFn = fn(&LaunchTable, &FilterSelection) -> Figure;

/// Payload bounds chosen on the range slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    /// Build a range, swapping the bounds if they arrive reversed
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }
}

/// Current state of every input widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterSelection {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl FilterSelection {
    /// Resolve raw widget values, falling back to the layout defaults for
    /// anything the client did not send
    pub fn from_values(values: &ComponentValues, layout: &Layout) -> Self {
        let site = values
            .site
            .as_deref()
            .unwrap_or(layout.site_dropdown.value.as_str());
        let [low, high] = values.payload.unwrap_or(layout.payload_slider.value);

        Self {
            site: SiteSelection::from_code(site),
            payload: PayloadRange::new(low, high),
        }
    }
}

/// Widget values as sent by the page, keyed by component id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentValues {
    #[serde(rename = "site-dropdown", default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(rename = "payload-slider", default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<[f64; 2]>,
}

/// A registered binding
#[derive(Clone)]
pub struct Callback {
    pub name: String,
    pub inputs: Vec<String>,
    pub output: String,
    pub handler: CallbackFn,
}

impl Callback {
    pub fn new(name: &str, inputs: &[&str], output: &str, handler: CallbackFn) -> Self {
        Self {
            name: name.to_string(),
            inputs: inputs.iter().map(|id| id.to_string()).collect(),
            output: output.to_string(),
            handler,
        }
    }

    pub fn listens_to(&self, component: &str) -> bool {
        self.inputs.iter().any(|input| input == component)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("name", &self.name)
            .field("inputs", &self.inputs)
            .field("output", &self.output)
            .finish_non_exhaustive()
    }
}

/// A recomputed figure and the graph it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub output: String,
    pub figure: Figure,
}

/// Dispatch table of registered callbacks
#[derive(Debug, Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback. An existing binding for the same output is
    /// replaced.
    pub fn register(&mut self, callback: Callback) {
        debug!(
            name = %callback.name,
            output = %callback.output,
            inputs = ?callback.inputs,
            "Registering callback"
        );
        match self.callbacks.iter_mut().find(|c| c.output == callback.output) {
            Some(existing) => *existing = callback,
            None => self.callbacks.push(callback),
        }
    }

    pub fn callbacks(&self) -> &[Callback] {
        &self.callbacks
    }

    /// Callbacks that list `component` among their inputs
    pub fn triggered_by<'a>(&'a self, component: &'a str) -> impl Iterator<Item = &'a Callback> + 'a {
        self.callbacks.iter().filter(move |c| c.listens_to(component))
    }

    /// Run the callbacks triggered by `changed`, or every callback when
    /// `changed` is `None` (initial page load).
    pub fn dispatch(
        &self,
        table: &LaunchTable,
        changed: Option<&str>,
        selection: &FilterSelection,
    ) -> Result<Vec<Update>> {
        let selected: Vec<&Callback> = match changed {
            None => self.callbacks.iter().collect(),
            Some(component) => {
                let selected: Vec<_> = self.triggered_by(component).collect();
                if selected.is_empty() {
                    return Err(Error::UnknownComponent(component.to_string()));
                }
                selected
            }
        };

        let updates = selected
            .into_iter()
            .map(|callback| {
                debug!(name = %callback.name, ?selection, "Running callback");
                Update {
                    output: callback.output.clone(),
                    figure: (callback.handler)(table, selection),
                }
            })
            .collect();

        Ok(updates)
    }
}
