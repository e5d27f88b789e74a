//! Page heading component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Heading text
    pub title: String,
    /// Optional line under the heading (e.g. dataset size)
    #[props(default = String::new())]
    pub subtitle: String,
}

/// Centered dashboard heading with an optional subtitle.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            class: "chart-header",
            h2 {
                style: "text-align: center;",
                "{props.title}"
            }
            if !props.subtitle.is_empty() {
                p {
                    class: "chart-subtitle",
                    "{props.subtitle}"
                }
            }
        }
    }
}
