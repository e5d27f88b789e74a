//! Map and bar view builders.
//!
//! `build_map_figure` and `build_bar_figure` are pure: aggregated rows in,
//! figure out. `map_view`, `bar_view` and `dashboard_view` fetch the rows for
//! a selected state from a [`TrafficDataset`] and call the builders. Every
//! call recomputes from the dataset.

use crate::figure::{
    Axis, AxisTitle, BarFigure, BarLayout, BarTrace, Figure, Font, Legend, MapCenter, MapFigure,
    MapLayout, Mapbox, Margin, Marker, ScatterMapbox, Title,
};
use crate::theme;
use atd_core::centroid::Coordinate;
use atd_db::models::AirportTotal;
use atd_db::TrafficDataset;
use atd_utils::numbers::{format_coordinate, format_thousands};
use serde::Serialize;

/// Tile provider settings for the map view.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    /// Mapbox/Plotly style name, e.g. "open-street-map" or "dark"
    pub style: String,
    /// Only needed for Mapbox-hosted styles
    pub access_token: Option<String>,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            style: theme::DEFAULT_MAP_STYLE.to_string(),
            access_token: None,
        }
    }
}

/// Both figures for one selected state.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardFigures {
    pub map: MapFigure,
    pub bar: BarFigure,
}

fn map_hover_text(t: &AirportTotal) -> String {
    format!(
        "<b>State</b>: {}<br><b>City</b>: {}<br><b>Airport</b>: {}<br><b>Lat</b>: {}<br><b>Long</b>: {}<br><b>Arrivals</b>: {}<br>",
        t.state,
        t.city,
        t.airport,
        format_coordinate(t.latitude),
        format_coordinate(t.longitude),
        format_thousands(t.count),
    )
}

fn bar_hover_text(t: &AirportTotal) -> String {
    format!(
        "<b>State</b>: {}<br><b>City</b>: {}<br><b>Airport</b>: {}<br><b>Arrivals</b>: {}<br>",
        t.state,
        t.city,
        t.airport,
        format_thousands(t.count),
    )
}

/// Title shown above the bar chart.
pub fn bar_title(state: &str) -> String {
    format!("Total Arrivals in {} State", state)
}

/// Build the airport map for one state.
///
/// One marker per row, colored by count. The view is centered on `centroid`,
/// or on the continental U.S. when the state has none.
pub fn build_map_figure(
    totals: &[AirportTotal],
    centroid: Option<Coordinate>,
    settings: &MapSettings,
) -> MapFigure {
    let center = centroid.unwrap_or(Coordinate::CONTINENTAL_US);

    let trace = ScatterMapbox {
        trace_type: "scattermapbox",
        lat: totals.iter().map(|t| t.latitude).collect(),
        lon: totals.iter().map(|t| t.longitude).collect(),
        mode: "markers",
        marker: Marker {
            size: Some(theme::MARKER_SIZE),
            color: totals.iter().map(|t| t.count).collect(),
            colorscale: theme::hsv(),
            showscale: false,
            sizemode: Some("area"),
        },
        hoverinfo: "text",
        hovertext: totals.iter().map(map_hover_text).collect(),
    };

    Figure {
        data: vec![trace],
        layout: MapLayout {
            margin: Margin {
                r: Some(0),
                t: Some(0),
                l: Some(0),
                b: Some(0),
            },
            hovermode: "closest",
            mapbox: Mapbox {
                accesstoken: settings.access_token.clone(),
                center: MapCenter {
                    lat: center.latitude,
                    lon: center.longitude,
                },
                style: settings.style.clone(),
                zoom: theme::MAP_ZOOM,
                bearing: theme::MAP_BEARING,
            },
            autosize: true,
        },
    }
}

/// Build the arrivals bar chart for one state.
///
/// One bar per row, height = count, labelled with the count.
pub fn build_bar_figure(state: &str, totals: &[AirportTotal]) -> BarFigure {
    let trace = BarTrace {
        trace_type: "bar",
        x: totals.iter().map(|t| t.airport.clone()).collect(),
        y: totals.iter().map(|t| t.count).collect(),
        text: totals.iter().map(|t| format_thousands(t.count)).collect(),
        textposition: "auto",
        marker: Marker {
            size: None,
            color: totals.iter().map(|t| t.count).collect(),
            colorscale: theme::phase(),
            showscale: false,
            sizemode: None,
        },
        hoverinfo: "text",
        hovertext: totals.iter().map(bar_hover_text).collect(),
    };

    let hidden_title = AxisTitle { text: "<b></b>" };

    Figure {
        data: vec![trace],
        layout: BarLayout {
            plot_bgcolor: theme::BACKGROUND,
            paper_bgcolor: theme::BACKGROUND,
            title: Title {
                text: bar_title(state),
                x: 0.17,
                y: 0.95,
                xanchor: "center",
                yanchor: "top",
                font: Font {
                    family: None,
                    size: theme::FONT_SIZE,
                    color: theme::FOREGROUND,
                },
            },
            hovermode: "x",
            margin: Margin {
                b: Some(140),
                t: Some(0),
                ..Default::default()
            },
            xaxis: Axis {
                title: hidden_title.clone(),
                color: theme::FOREGROUND,
                showline: true,
                showgrid: false,
                showticklabels: true,
                linecolor: theme::FOREGROUND,
                linewidth: Some(1),
                ticks: Some("outside"),
                tickfont: Some(Font {
                    family: Some(theme::TICK_FONT_FAMILY),
                    size: theme::TICK_FONT_SIZE,
                    color: theme::FOREGROUND,
                }),
            },
            yaxis: Axis {
                title: hidden_title,
                color: theme::FOREGROUND,
                showline: false,
                showgrid: false,
                showticklabels: false,
                linecolor: theme::FOREGROUND,
                linewidth: None,
                ticks: None,
                tickfont: None,
            },
            legend: Legend {
                orientation: "h",
                bgcolor: theme::LEGEND_BACKGROUND,
                x: 0.5,
                y: 1.25,
                xanchor: "center",
                yanchor: "top",
            },
            font: Font {
                family: Some(theme::FONT_FAMILY),
                size: theme::FONT_SIZE,
                color: theme::FOREGROUND,
            },
        },
    }
}

fn centroid_for(dataset: &TrafficDataset, state: &str) -> Option<Coordinate> {
    let centroid = dataset.centroid(state);
    if centroid.is_none() && !state.is_empty() {
        log::warn!(
            "No centroid for state '{}', centering map on the continental U.S.",
            state
        );
    }
    centroid
}

/// Map figure for `state`, aggregated from the dataset.
pub fn map_view(
    dataset: &TrafficDataset,
    state: &str,
    settings: &MapSettings,
) -> anyhow::Result<MapFigure> {
    let totals = dataset.airport_totals(state)?;
    Ok(build_map_figure(&totals, centroid_for(dataset, state), settings))
}

/// Bar figure for `state`, aggregated from the dataset.
pub fn bar_view(dataset: &TrafficDataset, state: &str) -> anyhow::Result<BarFigure> {
    let totals = dataset.airport_totals(state)?;
    Ok(build_bar_figure(state, &totals))
}

/// Both figures for `state` from a single aggregation.
pub fn dashboard_view(
    dataset: &TrafficDataset,
    state: &str,
    settings: &MapSettings,
) -> anyhow::Result<DashboardFigures> {
    let totals = dataset.airport_totals(state)?;
    Ok(DashboardFigures {
        map: build_map_figure(&totals, centroid_for(dataset, state), settings),
        bar: build_bar_figure(state, &totals),
    })
}
