//! Two-pane dashboard layout: controls on the left, charts on the right.

use super::{ChartContainer, ChartHeader, StateSelector, BAR_CHART_ID, MAP_CHART_ID};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardLayoutProps {
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
    pub states: Vec<String>,
    pub selected: String,
}

#[component]
pub fn DashboardLayout(props: DashboardLayoutProps) -> Element {
    rsx! {
        div {
            class: "row",
            div {
                class: "three columns left_pane",
                ChartHeader {
                    title: props.title.clone(),
                    subtitle: props.subtitle.clone(),
                }
                StateSelector {
                    states: props.states.clone(),
                    selected: props.selected.clone(),
                }
                div {
                    id: "dashboard-error",
                    class: "error-display",
                    hidden: true,
                }
            }
            div {
                class: "nine columns fix_charts charts_bg",
                ChartContainer { id: MAP_CHART_ID.to_string() }
                ChartContainer { id: BAR_CHART_ID.to_string() }
            }
        }
    }
}
