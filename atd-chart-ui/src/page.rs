//! Server-side rendering of the dashboard page.

use crate::components::DashboardLayout;
use crate::js_bridge::{self, BridgeConfig};
use atd_utils::numbers::format_thousands;
use dioxus::prelude::*;

/// Heading shown at the top of the control pane.
pub const PAGE_TITLE: &str = "Airport Traffic Data";

/// Render the complete dashboard document.
///
/// `states` become the dropdown options and `selected` the initial value the
/// browser requests figures for.
pub fn render_dashboard_page(
    states: &[String],
    selected: &str,
    record_count: usize,
) -> anyhow::Result<String> {
    let subtitle = format!(
        "{} records across {} states",
        format_thousands(record_count as u64),
        states.len()
    );
    let body = dioxus_ssr::render_element(rsx! {
        DashboardLayout {
            title: PAGE_TITLE.to_string(),
            subtitle: subtitle,
            states: states.to_vec(),
            selected: selected.to_string(),
        }
    });
    js_bridge::render_document(PAGE_TITLE, &body, &BridgeConfig::new(selected))
}
