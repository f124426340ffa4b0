//! datazoom-rs: zoom-window slider interaction engine.
//!
//! This crate provides the non-visual core of a chart data-zoom slider: a
//! percentage window over a data extent, pixel-space geometry for the slider
//! track and its handles, pointer hit testing, drag/wheel gesture control,
//! and the filter policy consumed by the host's data layer.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ZoomEngine, ZoomEngineConfig};
pub use error::{ZoomError, ZoomResult};
