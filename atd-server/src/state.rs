//! Shared, read-only server state.

use atd_chart_ui::views::MapSettings;
use atd_db::TrafficDataset;

/// Everything the handlers need, built once at startup and shared via `Arc`.
pub struct AppState {
    pub dataset: TrafficDataset,
    pub map_settings: MapSettings,
    /// Dropdown value on first page load; always one of the dataset's states
    pub default_state: String,
}

impl AppState {
    /// Falls back to the first dropdown option if `requested_default` is not in
    /// the dataset.
    pub fn new(
        dataset: TrafficDataset,
        map_settings: MapSettings,
        requested_default: &str,
    ) -> Self {
        let default_state = if dataset.contains_state(requested_default) {
            requested_default.to_string()
        } else {
            let fallback = dataset.states().first().cloned().unwrap_or_default();
            log::warn!(
                "Default state '{}' not in dataset, using '{}'",
                requested_default,
                fallback
            );
            fallback
        };
        Self {
            dataset,
            map_settings,
            default_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> TrafficDataset {
        TrafficDataset::from_csv(
            "state,airport,city,lat,long,cnt\nGA,ATL,Atlanta,33.64,-84.43,2500\nFL,MIA,Miami,25.79,-80.29,1000\n",
        )
        .unwrap()
    }

    #[test]
    fn keeps_default_present_in_dataset() {
        let state = AppState::new(dataset(), MapSettings::default(), "FL");
        assert_eq!(state.default_state, "FL");
    }

    #[test]
    fn falls_back_to_first_option() {
        let state = AppState::new(dataset(), MapSettings::default(), "TX");
        assert_eq!(state.default_state, "GA");
    }
}
