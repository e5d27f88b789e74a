//! Chart container component with loading overlay.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id Plotly renders into
    pub id: String,
    /// Show the "Loading chart..." overlay until the first figure arrives
    #[props(default = true)]
    pub loading: bool,
    /// Minimum height in pixels
    #[props(default = 450)]
    pub min_height: u32,
}

/// A container div for a Plotly chart. The overlay is removed client-side
/// once the chart has been drawn.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            class: "chart-frame",
            style: "{style}",
            if props.loading {
                div {
                    class: "chart-loading",
                    "data-chart": "{props.id}",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                class: "chart",
            }
        }
    }
}
