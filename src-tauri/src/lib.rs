//! Native core of the engineering metrics dashboard: DORA/SPACE metric catalog, info-tooltip
//! resolution, rendering and placement, and the UI session controller the webview talks to.

pub mod errors;
pub mod filters;
pub mod heatmap;
pub mod learn_more;
pub mod logging;
pub mod models;
pub mod pages;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod settings;
pub mod thresholds;
pub mod tooltip;

#[cfg(feature = "desktop")]
mod desktop;

#[cfg(feature = "desktop")]
pub use desktop::run;
