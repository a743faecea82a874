//! The launch dashboard's two callbacks and their bindings

use crate::callback::{Callback, CallbackRegistry, FilterSelection};
use crate::chart::Figure;
use crate::data::LaunchTable;
use crate::layout::ids;
use crate::query;
use crate::site::SiteSelection;

/// Pie chart for the dropdown selection.
///
/// All sites: successful launches per site (sum of `class`). One site: launch
/// count per outcome class at that site.
pub fn success_pie_chart(table: &LaunchTable, selection: &FilterSelection) -> Figure {
    match selection.site {
        SiteSelection::All => Figure::pie(
            query::count_by_launch_site(table.records()),
            "Total success launches by all sites",
        ),
        SiteSelection::Site(site) => {
            let rows = query::filter_by_site(table.records(), site.name());
            Figure::pie(
                query::count_by_class(rows),
                format!("Total success launches for site {}", site.name()),
            )
        }
    }
}

/// Payload/outcome scatter for the dropdown selection and slider range
pub fn success_payload_scatter(table: &LaunchTable, selection: &FilterSelection) -> Figure {
    let in_range =
        query::filter_by_payload_range(table.records(), selection.payload.low, selection.payload.high);

    match selection.site {
        SiteSelection::All => Figure::scatter(
            in_range,
            "Correlation between Payload and Success for all Sites",
        ),
        SiteSelection::Site(site) => Figure::scatter(
            query::filter_by_site(in_range, site.name()),
            format!("Correlation between Payload and Success for Site {}", site.name()),
        ),
    }
}

/// Register the dashboard's bindings:
///
/// - `site-dropdown` -> `success-pie-chart`
/// - `site-dropdown`, `payload-slider` -> `success-payload-scatter-chart`
pub fn register_callbacks(registry: &mut CallbackRegistry) {
    registry.register(Callback::new(
        "success_pie_chart",
        &[ids::SITE_DROPDOWN],
        ids::SUCCESS_PIE_CHART,
        success_pie_chart,
    ));
    registry.register(Callback::new(
        "success_payload_scatter",
        &[ids::SITE_DROPDOWN, ids::PAYLOAD_SLIDER],
        ids::SUCCESS_PAYLOAD_SCATTER_CHART,
        success_payload_scatter,
    ));
}

/// A registry holding just the dashboard's bindings
pub fn callback_registry() -> CallbackRegistry {
    let mut registry = CallbackRegistry::new();
    register_callbacks(&mut registry);
    registry
}
