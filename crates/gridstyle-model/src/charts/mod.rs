//! Chart element models.
//!
//! A chart is built from the same value-model contract as cell styles: every
//! element has documented defaults, merges against a named template chart,
//! and accepts sparse patches. Formatting primitives (lines, fills, shadows,
//! markers) live in [`formatting`]; the chart tree itself in [`model`].

mod formatting;
mod model;

pub use formatting::{
    FormatError, LineDash, LineStyle, LineStylePatch, MarkerShape, MarkerStyle, MarkerStylePatch,
    ShapeFill, ShapeStyle, ShapeStylePatch, Shadow, ShadowPatch, MARKER_SIZE_MAX_PT,
    MARKER_SIZE_MIN_PT,
};
pub use model::{
    Axis, AxisKind, AxisPosition, Chart, ChartError, ChartKind, ChartPatch, ChartText,
    ChartTextPatch, DataLabels, Legend, LegendPatch, LegendPosition, Series,
};
