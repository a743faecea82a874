//! Launch records and the in-memory table they are loaded into

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::site::LaunchSite;

/// A single launch, as read from one CSV row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name (e.g. "CCAFS LC-40")
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Booster version category, only used for colouring
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    /// Outcome class: 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub class: u8,
}

impl LaunchRecord {
    /// Whether the launch succeeded
    pub fn is_success(&self) -> bool {
        self.class == 1
    }
}

/// Read-only table of launch records, loaded once at startup
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    loaded_at: DateTime<Utc>,
}

impl LaunchTable {
    /// Build a table from already-parsed records.
    ///
    /// Fails on an empty set, a non-finite payload or a class outside 0/1.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;

        for (index, record) in records.iter().enumerate() {
            let row = index + 1;
            if !record.payload_mass_kg.is_finite() {
                return Err(Error::InvalidRecord {
                    row,
                    message: format!("payload mass {} is not a number", record.payload_mass_kg),
                });
            }
            if record.class > 1 {
                return Err(Error::InvalidRecord {
                    row,
                    message: format!("class must be 0 or 1, got {}", record.class),
                });
            }
            if LaunchSite::from_name(&record.launch_site).is_none() {
                warn!(row, site = %record.launch_site, "Launch record names an unknown site");
            }

            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
        }

        Ok(Self {
            records,
            min_payload,
            max_payload,
            loaded_at: Utc::now(),
        })
    }

    /// Parse launch records from CSV with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = csv_reader
            .deserialize::<LaunchRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!("Parsed {} launch records", records.len());

        Self::from_records(records)
    }

    /// Load launch records from a CSV file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path).map_err(|e| Error::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest payload mass in the table
    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    /// Largest payload mass in the table
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Summarize the table for the CLI and the API
    pub fn summary(&self) -> DatasetSummary {
        let mut launches_per_site: BTreeMap<String, usize> = BTreeMap::new();
        for record in &self.records {
            *launches_per_site
                .entry(record.launch_site.clone())
                .or_default() += 1;
        }

        DatasetSummary {
            records: self.records.len(),
            successes: self.records.iter().filter(|r| r.is_success()).count(),
            min_payload: self.min_payload,
            max_payload: self.max_payload,
            launches_per_site,
            loaded_at: self.loaded_at,
        }
    }
}

/// Aggregate facts about a loaded table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatasetSummary {
    pub records: usize,
    pub successes: usize,
    pub min_payload: f64,
    pub max_payload: f64,
    /// Row count per launch site
    pub launches_per_site: BTreeMap<String, usize>,
    pub loaded_at: DateTime<Utc>,
}

impl DatasetSummary {
    /// Plain-text rendering used by the `summary` command
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} launches ({} successful)\n",
            self.records, self.successes
        ));
        out.push_str(&format!(
            "Payload mass: {:.1} kg .. {:.1} kg\n",
            self.min_payload, self.max_payload
        ));
        out.push_str(&format!(
            "Loaded at: {}\n",
            self.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        for (site, count) in &self.launches_per_site {
            out.push_str(&format!("  - {}: {}\n", site, count));
        }
        out
    }
}
