//! Fixed styling for both charts. Nothing here is derived from the data.

use crate::figure::ColorScale;

/// Background of the bar chart plot and paper.
pub const BACKGROUND: &str = "#343332";
/// Text, axis and tick color on the dark background.
pub const FOREGROUND: &str = "white";
pub const LEGEND_BACKGROUND: &str = "#F2F2F2";
pub const FONT_FAMILY: &str = "sans-serif";
pub const TICK_FONT_FAMILY: &str = "Arial";
pub const FONT_SIZE: u32 = 15;
pub const TICK_FONT_SIZE: u32 = 12;

/// Map marker size in pixels (area sizing).
pub const MARKER_SIZE: u32 = 12;
pub const MAP_ZOOM: f64 = 3.0;
pub const MAP_BEARING: f64 = 0.0;
/// Tile style that needs no access token.
pub const DEFAULT_MAP_STYLE: &str = "open-street-map";

/// Cyclical HSV scale used for map marker colors.
pub fn hsv() -> ColorScale {
    ColorScale::evenly_spaced(&[
        "#ff0000", "#ffa700", "#afff00", "#08ff00", "#00ff9f", "#00b7ff", "#0010ff", "#9700ff",
        "#ff00bf", "#ff0000",
    ])
}

/// Cyclical "phase" scale used for bar colors.
pub fn phase() -> ColorScale {
    ColorScale::evenly_spaced(&[
        "rgb(167, 119, 12)",
        "rgb(197, 96, 51)",
        "rgb(217, 67, 96)",
        "rgb(221, 38, 163)",
        "rgb(196, 59, 224)",
        "rgb(153, 97, 244)",
        "rgb(95, 127, 228)",
        "rgb(40, 144, 183)",
        "rgb(15, 151, 136)",
        "rgb(39, 153, 79)",
        "rgb(119, 141, 17)",
        "rgb(167, 119, 12)",
    ])
}
