//! quadchart-rs: quadrant bubble chart engine.
//!
//! This crate projects a mutable chart aggregate (bubbles, groups, axes,
//! quadrant styling) onto a pixel surface through a deterministic scene
//! builder, and supports direct-manipulation editing via a pointer gesture
//! state machine that disambiguates clicks from drags.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod scene;
pub mod store;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
