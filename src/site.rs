//! Dropdown site codes and the launch sites they stand for
//!
//! The mapping is total: `ALL` selects every site, `site1`..`site3` select
//! their site, and anything else (including `site4`) falls back to
//! CCAFS SLC-40.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Dropdown code selecting every launch site
pub const ALL_CODE: &str = "ALL";

/// One of the four SpaceX launch sites in the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaunchSite {
    CcafsLc40,
    VafbSlc4e,
    KscLc39a,
    CcafsSlc40,
}

impl LaunchSite {
    /// Every site, in dropdown order
    pub const ALL: [LaunchSite; 4] = [
        LaunchSite::CcafsLc40,
        LaunchSite::VafbSlc4e,
        LaunchSite::KscLc39a,
        LaunchSite::CcafsSlc40,
    ];

    /// Site name as it appears in the `Launch Site` column
    pub fn name(self) -> &'static str {
        match self {
            LaunchSite::CcafsLc40 => "CCAFS LC-40",
            LaunchSite::VafbSlc4e => "VAFB SLC-4E",
            LaunchSite::KscLc39a => "KSC LC-39A",
            LaunchSite::CcafsSlc40 => "CCAFS SLC-40",
        }
    }

    /// Dropdown code for this site
    pub fn code(self) -> &'static str {
        match self {
            LaunchSite::CcafsLc40 => "site1",
            LaunchSite::VafbSlc4e => "site2",
            LaunchSite::KscLc39a => "site3",
            LaunchSite::CcafsSlc40 => "site4",
        }
    }

    /// Look a site up by its exact column name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|site| site.name() == name)
    }
}

impl fmt::Display for LaunchSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Site filter chosen in the dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(LaunchSite),
}

impl SiteSelection {
    /// Resolve a dropdown code. Never fails: unrecognized codes resolve to
    /// CCAFS SLC-40.
    pub fn from_code(code: &str) -> Self {
        match code {
            ALL_CODE => SiteSelection::All,
            "site1" => SiteSelection::Site(LaunchSite::CcafsLc40),
            "site2" => SiteSelection::Site(LaunchSite::VafbSlc4e),
            "site3" => SiteSelection::Site(LaunchSite::KscLc39a),
            "site4" => SiteSelection::Site(LaunchSite::CcafsSlc40),
            other => {
                debug!(code = other, "Unrecognized site code, using CCAFS SLC-40");
                SiteSelection::Site(LaunchSite::CcafsSlc40)
            }
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            SiteSelection::All => ALL_CODE,
            SiteSelection::Site(site) => site.code(),
        }
    }

    /// Resolved site, or `None` for all sites
    pub fn site(self) -> Option<LaunchSite> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(site) => Some(site),
        }
    }

    /// Options offered by the site dropdown
    pub fn dropdown_options() -> Vec<DropdownOption> {
        std::iter::once(DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_CODE.to_string(),
        })
        .chain(LaunchSite::ALL.into_iter().map(|site| DropdownOption {
            label: site.name().to_string(),
            value: site.code().to_string(),
        }))
        .collect()
    }
}

/// A label/value pair in the site dropdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}
