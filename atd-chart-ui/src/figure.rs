//! Plotly-compatible figure types.
//!
//! A figure is a declarative chart description (`data` traces + `layout`)
//! serialized to JSON and handed to `Plotly.react` in the browser. Field
//! names follow Plotly's attribute names so no client-side mapping is needed.

use serde::Serialize;

/// A complete chart: one or more traces plus a layout.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure<T, L> {
    pub data: Vec<T>,
    pub layout: L,
}

/// Map of airports: one `scattermapbox` trace.
pub type MapFigure = Figure<ScatterMapbox, MapLayout>;

/// Arrivals per airport: one `bar` trace.
pub type BarFigure = Figure<BarTrace, BarLayout>;

/// Continuous color scale as `[position, color]` stops from 0.0 to 1.0.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorScale(pub Vec<(f64, String)>);

impl ColorScale {
    /// Spread `colors` evenly over [0, 1].
    pub fn evenly_spaced(colors: &[&str]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f64;
        Self(
            colors
                .iter()
                .enumerate()
                .map(|(i, c)| (i as f64 / last, c.to_string()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Per-point values mapped through `colorscale`
    pub color: Vec<u64>,
    pub colorscale: ColorScale,
    pub showscale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterMapbox {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub mode: &'static str,
    pub marker: Marker,
    pub hoverinfo: &'static str,
    pub hovertext: Vec<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    /// Airport identifiers
    pub x: Vec<String>,
    /// Arrival counts (bar heights)
    pub y: Vec<u64>,
    /// Value labels drawn on the bars
    pub text: Vec<String>,
    pub textposition: &'static str,
    pub marker: Marker,
    pub hoverinfo: &'static str,
    pub hovertext: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Margin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<u32>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapCenter {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Mapbox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accesstoken: Option<String>,
    pub center: MapCenter,
    pub style: String,
    pub zoom: f64,
    pub bearing: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapLayout {
    pub margin: Margin,
    pub hovermode: &'static str,
    pub mapbox: Mapbox,
    pub autosize: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<&'static str>,
    pub size: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AxisTitle {
    pub text: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    pub title: AxisTitle,
    pub color: &'static str,
    pub showline: bool,
    pub showgrid: bool,
    pub showticklabels: bool,
    pub linecolor: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linewidth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickfont: Option<Font>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Legend {
    pub orientation: &'static str,
    pub bgcolor: &'static str,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarLayout {
    pub plot_bgcolor: &'static str,
    pub paper_bgcolor: &'static str,
    pub title: Title,
    pub hovermode: &'static str,
    pub margin: Margin,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
    pub font: Font,
}
