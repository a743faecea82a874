//! spacex-dash - An interactive dashboard over SpaceX launch records
//!
//! This library loads a CSV of launch records once, then serves a web page
//! whose widgets drive server-side callbacks that filter the table and build
//! Plotly.js figures.
//!
//! # Features
//!
//! - Load and validate launch records from CSV
//! - Resolve dropdown site codes to launch sites
//! - Filter by site and payload range, aggregate by outcome or site
//! - Build pie and scatter figure specifications
//! - Dispatch widget changes through an explicit callback registry
//! - Serve the page and a JSON API with axum
//!
//! # Example
//!
//! ```no_run
//! use spacex_dash::{callback::{ComponentValues, FilterSelection}, dashboard, data::LaunchTable, layout::Layout};
//!
//! let table = LaunchTable::load_from_file("spacex_launch_dash.csv".as_ref()).unwrap();
//! let layout = Layout::for_table(&table);
//! let registry = dashboard::callback_registry();
//!
//! let selection = FilterSelection::from_values(&ComponentValues::default(), &layout);
//! for update in registry.dispatch(&table, None, &selection).unwrap() {
//!     println!("{}: {}", update.output, update.figure.title());
//! }
//! ```

pub mod callback;
pub mod chart;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod html;
pub mod layout;
pub mod query;
pub mod server;
pub mod site;

pub use error::{Error, Result};
