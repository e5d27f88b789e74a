//! Chart figures, page components and the Plotly.js bridge for the
//! airport traffic dashboard.
//!
//! This crate provides:
//! - `figure`: serializable Plotly figure types
//! - `theme`: fixed styling constants and color scales
//! - `views`: pure builders turning aggregated rows into map and bar figures
//! - `components`: RSX components rendered server-side into the page shell
//! - `js_bridge`: embedded JS/CSS and the HTML document wrapper
//! - `page`: renders the full dashboard page

pub mod components;
pub mod figure;
pub mod js_bridge;
pub mod page;
pub mod theme;
pub mod views;
