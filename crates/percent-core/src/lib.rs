//! Core types for the percent-layout engine.
//!
//! This crate provides the layout parameter vocabulary shared between a host
//! container and the resolution engine:
//! - Declared sizes and spacing: [`Dimension`], [`Edges`], [`Margins`], [`Rect`]
//! - Measurement: [`MeasureSpec`], [`MeasuredState`]
//! - Display configuration: [`ScreenMetrics`]

mod geometry;
mod measure;
mod screen;

pub use geometry::{Axis, Dimension, Edges, LayoutDirection, Margins, Rect};
pub use measure::{AxisState, MeasureMode, MeasureSpec, MeasuredState};
pub use screen::ScreenMetrics;
