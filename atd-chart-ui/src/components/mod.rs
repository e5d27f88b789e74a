//! RSX components for the dashboard page.
//!
//! These are rendered once on the server with `dioxus-ssr`; interactivity is
//! wired up in the browser by `assets/js/dashboard.js` using the DOM ids below.

mod chart_container;
mod chart_header;
mod dashboard_layout;
mod state_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use dashboard_layout::DashboardLayout;
pub use state_selector::StateSelector;

/// DOM id of the state dropdown.
pub const SELECT_ID: &str = "select_state";
/// DOM id of the map chart container.
pub const MAP_CHART_ID: &str = "map_chart";
/// DOM id of the bar chart container.
pub const BAR_CHART_ID: &str = "bar_chart";
