//! Bridge between the server-rendered page and Plotly.js in the browser.
//!
//! The chart adapter script and stylesheet are embedded at compile time and
//! served by the HTTP layer. Plotly itself is loaded from its CDN. The page
//! hands the adapter its settings through a `window.__atdConfig` global.

use crate::components::{BAR_CHART_ID, MAP_CHART_ID, SELECT_ID};
use serde::Serialize;

/// Dropdown-to-chart adapter: fetches figures and calls `Plotly.react`.
pub static DASHBOARD_JS: &str = include_str!("../assets/js/dashboard.js");
/// Page styles (two-pane layout, dark chart background).
pub static DASHBOARD_CSS: &str = include_str!("../assets/css/dashboard.css");

/// Plotly.js build with `scattermapbox` support.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// URL paths the page references. The HTTP router must serve these.
pub const DASHBOARD_JS_PATH: &str = "/assets/dashboard.js";
pub const DASHBOARD_CSS_PATH: &str = "/assets/dashboard.css";
pub const FIGURES_ENDPOINT: &str = "/api/figures";

/// Settings read by `dashboard.js` from `window.__atdConfig`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    pub figures_endpoint: String,
    pub select_id: String,
    pub map_chart_id: String,
    pub bar_chart_id: String,
    pub initial_state: String,
}

impl BridgeConfig {
    pub fn new(initial_state: &str) -> Self {
        Self {
            figures_endpoint: FIGURES_ENDPOINT.to_string(),
            select_id: SELECT_ID.to_string(),
            map_chart_id: MAP_CHART_ID.to_string(),
            bar_chart_id: BAR_CHART_ID.to_string(),
            initial_state: initial_state.to_string(),
        }
    }
}

/// Serialize a value for embedding inside an inline `<script>` element.
///
/// `<`, `>` and `&` are written as unicode escapes so data can never close the
/// script tag early.
pub fn script_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(value)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026"))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Wrap a rendered body fragment in a complete HTML document that loads
/// Plotly, the stylesheet and the adapter script.
pub fn render_document(title: &str, body: &str, config: &BridgeConfig) -> anyhow::Result<String> {
    let config_json = script_json(config)?;
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width">
<title>{title}</title>
<link rel="stylesheet" href="{css}">
<script src="{plotly}"></script>
</head>
<body>
<div id="dashboard-root">{body}</div>
<script>window.__atdConfig = {config_json};</script>
<script src="{js}"></script>
</body>
</html>
"#,
        title = escape_html(title),
        css = DASHBOARD_CSS_PATH,
        plotly = PLOTLY_CDN,
        body = body,
        config_json = config_json,
        js = DASHBOARD_JS_PATH,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_json_escapes_tag_characters() {
        let json = script_json(&"</script><b>&").unwrap();
        assert!(!json.contains('<'));
        assert!(!json.contains('>'));
        assert!(!json.contains('&'));
        let back: String = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "</script><b>&");
    }

    #[test]
    fn bridge_config_uses_camel_case() {
        let json = serde_json::to_value(BridgeConfig::new("FL")).unwrap();
        assert_eq!(json["figuresEndpoint"], FIGURES_ENDPOINT);
        assert_eq!(json["selectId"], "select_state");
        assert_eq!(json["mapChartId"], "map_chart");
        assert_eq!(json["barChartId"], "bar_chart");
        assert_eq!(json["initialState"], "FL");
    }

    #[test]
    fn document_references_assets() {
        let html =
            render_document("Airport <Traffic>", "<p>body</p>", &BridgeConfig::new("FL")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Airport &lt;Traffic&gt;</title>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains(DASHBOARD_JS_PATH));
        assert!(html.contains(DASHBOARD_CSS_PATH));
        assert!(html.contains("<p>body</p>"));
        assert!(html.contains("window.__atdConfig = {"));
    }

    #[test]
    fn embedded_assets_are_present() {
        assert!(DASHBOARD_JS.contains("Plotly.react"));
        assert!(DASHBOARD_CSS.contains(".left_pane"));
    }

    #[test]
    fn adapter_skips_stale_responses() {
        assert!(DASHBOARD_JS.contains("var request = ++latestRequest;"));
        assert_eq!(
            DASHBOARD_JS
                .matches("if (request !== latestRequest) return;")
                .count(),
            2
        );
    }
}
