//! Filters and aggregations over launch records
//!
//! Every operation accepts any iterator of record references, so filters can
//! be chained without copying rows. An empty result is a valid answer, never
//! an error.

use std::collections::BTreeMap;

use crate::data::LaunchRecord;

/// Keep records whose launch site equals `site_name` exactly
pub fn filter_by_site<'a, I>(records: I, site_name: &str) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|record| record.launch_site == site_name)
        .collect()
}

/// Keep records with `low < payload < high`.
///
/// Both bounds are exclusive: a record whose payload equals either bound is
/// dropped.
pub fn filter_by_payload_range<'a, I>(records: I, low: f64, high: f64) -> Vec<&'a LaunchRecord>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    records
        .into_iter()
        .filter(|record| record.payload_mass_kg > low && record.payload_mass_kg < high)
        .collect()
}

/// Number of records per outcome class
pub fn count_by_class<'a, I>(records: I) -> BTreeMap<u8, u64>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.class).or_insert(0) += 1;
    }
    counts
}

/// Sum of the outcome class per launch site, i.e. successful launches per
/// site. Sites with no successes are present with 0.
///
/// This is a sum, not a row count: it differs from [`count_by_class`] in unit
/// as well as grouping key.
pub fn count_by_launch_site<'a, I>(records: I) -> BTreeMap<String, u64>
where
    I: IntoIterator<Item = &'a LaunchRecord>,
{
    let mut sums = BTreeMap::new();
    for record in records {
        *sums.entry(record.launch_site.clone()).or_insert(0) += u64::from(record.class);
    }
    sums
}
