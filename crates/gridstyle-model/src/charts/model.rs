use serde::{Deserialize, Serialize};
use thiserror::Error;

use gridstyle_cascade::{fill, patch, ApplyPatch, Defaulted, Inherit, Inherits, Keyed, Scope, ScopeError};

use crate::{Font, SheetRange, StyleError};

use super::{FormatError, LineStyle, MarkerStyle, ShapeStyle};

/// Errors raised by chart operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Precondition for template resolution: an unnamed chart would merge
    /// into an unidentifiable result, so the merge is refused up front.
    #[error("chart has no name; set a name before resolving its template")]
    MissingName,
    #[error("chart template lookup failed: {0}")]
    Template(#[from] ScopeError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Style(#[from] StyleError),
}

/// Chart family.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Area,
    Bar,
    #[default]
    Column,
    Line,
    Pie,
    Doughnut,
    Scatter,
    Radar,
}

/// A chart text element (title, axis title).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChartText {
    /// Plain text content; empty means "not set" for merge purposes.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_style: Option<ShapeStyle>,
}

impl ChartText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            box_style: None,
        }
    }

    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for ChartText {
    fn is_default(&self) -> bool {
        ChartText::is_default(self)
    }
}

impl Inherit for ChartText {
    fn inherit_from(&mut self, reference: &Self) {
        fill::text(&mut self.text, &reference.text);
        fill::node(&mut self.font, &reference.font);
        fill::node(&mut self.box_style, &reference.box_style);
    }
}

/// Partial update payload for [`ChartText`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartTextPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<crate::FontPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_style: Option<super::ShapeStylePatch>,
}

impl ChartTextPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for ChartText {
    type Patch = ChartTextPatch;
    type Error = ChartError;

    fn apply_patch(&mut self, p: &ChartTextPatch) -> Result<(), ChartError> {
        patch::set(&mut self.text, &p.text);
        patch::node(&mut self.font, &p.font)?;
        patch::node(&mut self.box_style, &p.box_style)?;
        Ok(())
    }
}

/// Legend placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LegendPosition {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
    TopRight,
}

/// Chart legend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    #[serde(default)]
    pub position: LegendPosition,
    #[serde(default, skip_serializing_if = "is_false")]
    pub overlay: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ShapeStyle>,
}

fn is_false(v: &bool) -> bool {
    !*v
}

impl Legend {
    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for Legend {
    fn is_default(&self) -> bool {
        Legend::is_default(self)
    }
}

impl Inherit for Legend {
    fn inherit_from(&mut self, reference: &Self) {
        let defaults = Self::default();
        fill::value(&mut self.position, &reference.position, &defaults.position);
        fill::value(&mut self.overlay, &reference.overlay, &defaults.overlay);
        fill::node(&mut self.font, &reference.font);
        fill::node(&mut self.style, &reference.style);
    }
}

/// Partial update payload for [`Legend`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<LegendPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<crate::FontPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<super::ShapeStylePatch>,
}

impl LegendPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for Legend {
    type Patch = LegendPatch;
    type Error = ChartError;

    fn apply_patch(&mut self, p: &LegendPatch) -> Result<(), ChartError> {
        patch::set(&mut self.position, &p.position);
        patch::set(&mut self.overlay, &p.overlay);
        patch::node(&mut self.font, &p.font)?;
        patch::node(&mut self.style, &p.style)?;
        Ok(())
    }
}

/// Axis role.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum AxisKind {
    #[default]
    Category,
    Value,
}

/// Axis placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisPosition {
    Left,
    Right,
    Top,
    Bottom,
}

/// One chart axis.
///
/// The `key` is the axis's stable identity within the chart ("category",
/// "value", "secondary"), used to pair axes during a template merge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub key: String,
    #[serde(default)]
    pub kind: AxisKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<AxisPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_unit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor_unit: Option<f64>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub major_gridlines: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<ChartText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gridline_style: Option<LineStyle>,
    /// Number format code for tick labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
}

impl Keyed for Axis {
    fn key(&self) -> &str {
        &self.key
    }
}

impl Inherit for Axis {
    fn inherit_from(&mut self, reference: &Self) {
        let defaults = Self::default();
        fill::value(&mut self.kind, &reference.kind, &defaults.kind);
        fill::option(&mut self.position, &reference.position);
        fill::option(&mut self.min, &reference.min);
        fill::option(&mut self.max, &reference.max);
        fill::option(&mut self.major_unit, &reference.major_unit);
        fill::option(&mut self.minor_unit, &reference.minor_unit);
        fill::value(
            &mut self.major_gridlines,
            &reference.major_gridlines,
            &defaults.major_gridlines,
        );
        fill::node(&mut self.title, &reference.title);
        fill::node(&mut self.line_style, &reference.line_style);
        fill::node(&mut self.gridline_style, &reference.gridline_style);
        fill::option(&mut self.number_format, &reference.number_format);
    }
}

/// Series data label switches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DataLabels {
    #[serde(default, skip_serializing_if = "is_false")]
    pub show_value: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub show_category: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub show_series_name: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
}

impl DataLabels {
    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for DataLabels {
    fn is_default(&self) -> bool {
        DataLabels::is_default(self)
    }
}

impl Inherit for DataLabels {
    fn inherit_from(&mut self, reference: &Self) {
        let defaults = Self::default();
        fill::value(&mut self.show_value, &reference.show_value, &defaults.show_value);
        fill::value(
            &mut self.show_category,
            &reference.show_category,
            &defaults.show_category,
        );
        fill::value(
            &mut self.show_series_name,
            &reference.show_series_name,
            &defaults.show_series_name,
        );
        fill::option(&mut self.number_format, &reference.number_format);
    }
}

/// One data series, keyed by name within its chart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<SheetRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<SheetRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ShapeStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub smooth: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_labels: Option<DataLabels>,
}

impl Keyed for Series {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Inherit for Series {
    /// `name` is the pairing key and is not merged.
    fn inherit_from(&mut self, reference: &Self) {
        fill::option(&mut self.categories, &reference.categories);
        fill::option(&mut self.values, &reference.values);
        fill::node(&mut self.style, &reference.style);
        fill::node(&mut self.marker, &reference.marker);
        fill::value(&mut self.smooth, &reference.smooth, &false);
        fill::node(&mut self.data_labels, &reference.data_labels);
    }
}

/// A chart: identity, plot shape, and the styling of its parts.
///
/// Charts are value models like styles: building one does not render
/// anything. A chart may declare `inherits = "<template name>"`; the link is
/// resolved against a template scope before the chart is considered final.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherits: Option<String>,
    #[serde(default)]
    pub kind: ChartKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<ChartText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub axes: Vec<Axis>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub series: Vec<Series>,
    /// Chart area (outer frame) formatting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_style: Option<ShapeStyle>,
    /// Plot area formatting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_area_style: Option<ShapeStyle>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub vary_colors: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub rounded_corners: bool,
}

impl Chart {
    pub fn new(name: impl Into<String>, kind: ChartKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    /// Resolve this chart's `inherits` link against `templates` and merge the
    /// template in.
    ///
    /// Fails fast with [`ChartError::MissingName`] before touching anything
    /// when the chart has no name, and with a lookup error when the link
    /// does not resolve; the chart is unchanged in both cases. A chart
    /// without an `inherits` link is left as-is.
    pub fn resolve_template(&mut self, templates: &Scope<Chart>) -> Result<(), ChartError> {
        if self.name.trim().is_empty() {
            return Err(ChartError::MissingName);
        }
        let Some(base_name) = Inherits::inherits(self).map(str::to_owned) else {
            return Ok(());
        };
        let base = templates.resolve(&base_name)?.clone();
        self.inherit_from(&base);
        Ok(())
    }
}

impl Keyed for Chart {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Inherits for Chart {
    fn inherits(&self) -> Option<&str> {
        self.inherits.as_deref().filter(|name| !name.trim().is_empty())
    }
}

impl Inherit for Chart {
    /// `name` is identity and `inherits` is a link; neither is merged.
    fn inherit_from(&mut self, reference: &Self) {
        let defaults = Self::default();
        fill::value(&mut self.kind, &reference.kind, &defaults.kind);
        fill::node(&mut self.title, &reference.title);
        fill::node(&mut self.legend, &reference.legend);
        fill::keyed(&mut self.axes, &reference.axes);
        fill::keyed(&mut self.series, &reference.series);
        fill::node(&mut self.area_style, &reference.area_style);
        fill::node(&mut self.plot_area_style, &reference.plot_area_style);
        fill::value(&mut self.vary_colors, &reference.vary_colors, &defaults.vary_colors);
        fill::value(
            &mut self.rounded_corners,
            &reference.rounded_corners,
            &defaults.rounded_corners,
        );
    }
}

/// Partial update payload for [`Chart`].
///
/// Collections are replaced wholesale when present; per-element patching
/// goes through the elements directly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ChartKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<ChartTextPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<LegendPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axes: Option<Vec<Axis>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<Series>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_style: Option<super::ShapeStylePatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_area_style: Option<super::ShapeStylePatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vary_colors: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounded_corners: Option<bool>,
}

impl ChartPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for Chart {
    type Patch = ChartPatch;
    type Error = ChartError;

    fn apply_patch(&mut self, p: &ChartPatch) -> Result<(), ChartError> {
        patch::set(&mut self.kind, &p.kind);
        patch::node(&mut self.title, &p.title)?;
        patch::node(&mut self.legend, &p.legend)?;
        if let Some(axes) = &p.axes {
            self.axes = axes.clone();
        }
        if let Some(series) = &p.series {
            self.series = series.clone();
        }
        patch::node(&mut self.area_style, &p.area_style)?;
        patch::node(&mut self.plot_area_style, &p.plot_area_style)?;
        patch::set(&mut self.vary_colors, &p.vary_colors);
        patch::set(&mut self.rounded_corners, &p.rounded_corners);
        Ok(())
    }
}
