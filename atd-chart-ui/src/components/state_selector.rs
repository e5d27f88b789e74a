//! Dropdown selector for choosing a state.

use super::SELECT_ID;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StateSelectorProps {
    /// Options, taken from the loaded dataset
    pub states: Vec<String>,
    /// Initially selected state code
    pub selected: String,
}

/// State dropdown. Only codes present in the dataset are offered, so every
/// option has a centroid to center the map on.
#[component]
pub fn StateSelector(props: StateSelectorProps) -> Element {
    rsx! {
        div {
            class: "fix_dropdown",
            label {
                r#for: SELECT_ID,
                "Select State"
            }
            select {
                id: SELECT_ID,
                for state in props.states.iter() {
                    option {
                        value: "{state}",
                        selected: *state == props.selected,
                        "{state}"
                    }
                }
            }
        }
    }
}
