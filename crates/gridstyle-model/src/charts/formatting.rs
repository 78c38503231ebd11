use serde::{Deserialize, Serialize};
use thiserror::Error;

use gridstyle_cascade::{fill, patch, ApplyPatch, Defaulted, Inherit};

use crate::{Color, FillPattern};

/// Largest accepted marker size, in points.
pub const MARKER_SIZE_MAX_PT: u8 = 72;
/// Smallest accepted marker size, in points.
pub const MARKER_SIZE_MIN_PT: u8 = 2;

/// Errors raised by constrained drawing-format setters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("shadow angle {value} must be 0..360 degrees")]
    ShadowAngle { value: u16 },
    #[error(
        "marker size {value} is out of range ({min}..={max} points)",
        min = MARKER_SIZE_MIN_PT,
        max = MARKER_SIZE_MAX_PT
    )]
    MarkerSize { value: u8 },
}

/// Line dash style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineDash {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
    LongDash,
    SysDash,
    SysDot,
}

/// Line (stroke) formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Width in 1/100 points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_100pt: Option<u32>,
    #[serde(default)]
    pub dash: LineDash,
}

impl LineStyle {
    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for LineStyle {
    fn is_default(&self) -> bool {
        LineStyle::is_default(self)
    }
}

impl Inherit for LineStyle {
    fn inherit_from(&mut self, reference: &Self) {
        fill::option(&mut self.color, &reference.color);
        fill::option(&mut self.width_100pt, &reference.width_100pt);
        fill::value(&mut self.dash, &reference.dash, &LineDash::default());
    }
}

/// Partial update payload for [`LineStyle`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStylePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_100pt: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<LineDash>,
}

impl LineStylePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for LineStyle {
    type Patch = LineStylePatch;
    type Error = FormatError;

    fn apply_patch(&mut self, p: &LineStylePatch) -> Result<(), FormatError> {
        patch::set_option(&mut self.color, &p.color);
        patch::set_option(&mut self.width_100pt, &p.width_100pt);
        patch::set(&mut self.dash, &p.dash);
        Ok(())
    }
}

/// Shape fill formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ShapeFill {
    /// Inherit the application's automatic fill.
    #[default]
    Auto,
    /// Explicitly no fill.
    None,
    Solid {
        color: Color,
    },
    Pattern {
        pattern: FillPattern,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fg_color: Option<Color>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bg_color: Option<Color>,
    },
}

/// Outer shadow formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    /// Shadow color; defaults to black at ~60% alpha.
    #[serde(default = "default_shadow_color")]
    pub color: Color,
    /// Blur radius in 1/100 points.
    #[serde(default, skip_serializing_if = "is_zero_u16")]
    pub blur_100pt: u16,
    /// Offset distance in 1/100 points.
    #[serde(default, skip_serializing_if = "is_zero_u16")]
    pub offset_100pt: u16,
    /// Offset direction in degrees, `0..360`, clockwise from east.
    #[serde(default, skip_serializing_if = "is_zero_u16")]
    pub angle_degrees: u16,
}

fn default_shadow_color() -> Color {
    Color::BLACK.with_alpha(0x99)
}

fn is_zero_u16(v: &u16) -> bool {
    *v == 0
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: default_shadow_color(),
            blur_100pt: 0,
            offset_100pt: 0,
            angle_degrees: 0,
        }
    }
}

impl Shadow {
    pub fn set_angle_degrees(&mut self, value: u16) -> Result<(), FormatError> {
        if value >= 360 {
            return Err(FormatError::ShadowAngle { value });
        }
        self.angle_degrees = value;
        Ok(())
    }

    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for Shadow {
    fn is_default(&self) -> bool {
        Shadow::is_default(self)
    }
}

impl Inherit for Shadow {
    fn inherit_from(&mut self, reference: &Self) {
        let defaults = Self::default();
        fill::value(&mut self.color, &reference.color, &defaults.color);
        fill::value(&mut self.blur_100pt, &reference.blur_100pt, &defaults.blur_100pt);
        fill::value(
            &mut self.offset_100pt,
            &reference.offset_100pt,
            &defaults.offset_100pt,
        );
        fill::value(
            &mut self.angle_degrees,
            &reference.angle_degrees,
            &defaults.angle_degrees,
        );
    }
}

/// Partial update payload for [`Shadow`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_100pt: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_100pt: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_degrees: Option<u16>,
}

impl ShadowPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for Shadow {
    type Patch = ShadowPatch;
    type Error = FormatError;

    fn apply_patch(&mut self, p: &ShadowPatch) -> Result<(), FormatError> {
        patch::set(&mut self.color, &p.color);
        patch::set(&mut self.blur_100pt, &p.blur_100pt);
        patch::set(&mut self.offset_100pt, &p.offset_100pt);
        if let Some(angle) = p.angle_degrees {
            self.set_angle_degrees(angle)?;
        }
        Ok(())
    }
}

/// Marker symbol.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    #[default]
    Auto,
    None,
    Circle,
    Square,
    Diamond,
    Triangle,
    X,
    Plus,
}

/// Series marker formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    #[serde(default)]
    pub shape: MarkerShape,
    /// Marker size in points.
    #[serde(default = "default_marker_size", skip_serializing_if = "is_default_marker_size")]
    pub size_pt: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
}

const MARKER_SIZE_DEFAULT_PT: u8 = 7;

fn default_marker_size() -> u8 {
    MARKER_SIZE_DEFAULT_PT
}

fn is_default_marker_size(v: &u8) -> bool {
    *v == MARKER_SIZE_DEFAULT_PT
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            shape: MarkerShape::default(),
            size_pt: MARKER_SIZE_DEFAULT_PT,
            fill_color: None,
            line: None,
        }
    }
}

impl MarkerStyle {
    pub fn set_size_pt(&mut self, value: u8) -> Result<(), FormatError> {
        if !(MARKER_SIZE_MIN_PT..=MARKER_SIZE_MAX_PT).contains(&value) {
            return Err(FormatError::MarkerSize { value });
        }
        self.size_pt = value;
        Ok(())
    }

    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for MarkerStyle {
    fn is_default(&self) -> bool {
        MarkerStyle::is_default(self)
    }
}

impl Inherit for MarkerStyle {
    fn inherit_from(&mut self, reference: &Self) {
        let defaults = Self::default();
        fill::value(&mut self.shape, &reference.shape, &defaults.shape);
        fill::value(&mut self.size_pt, &reference.size_pt, &defaults.size_pt);
        fill::option(&mut self.fill_color, &reference.fill_color);
        fill::node(&mut self.line, &reference.line);
    }
}

/// Partial update payload for [`MarkerStyle`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStylePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<MarkerShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_pt: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStylePatch>,
}

impl MarkerStylePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for MarkerStyle {
    type Patch = MarkerStylePatch;
    type Error = FormatError;

    fn apply_patch(&mut self, p: &MarkerStylePatch) -> Result<(), FormatError> {
        patch::set(&mut self.shape, &p.shape);
        if let Some(size) = p.size_pt {
            self.set_size_pt(size)?;
        }
        patch::set_option(&mut self.fill_color, &p.fill_color);
        patch::node(&mut self.line, &p.line)?;
        Ok(())
    }
}

/// Shape properties: fill, stroke, and shadow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<ShapeFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

impl ShapeStyle {
    pub fn is_empty(&self) -> bool {
        self.fill.is_none() && self.line.is_none() && self.shadow.is_none()
    }

    pub fn is_default(v: &Self) -> bool {
        v.is_empty()
    }
}

impl Defaulted for ShapeStyle {
    fn is_default(&self) -> bool {
        self.is_empty()
    }
}

impl Inherit for ShapeStyle {
    fn inherit_from(&mut self, reference: &Self) {
        fill::option(&mut self.fill, &reference.fill);
        fill::node(&mut self.line, &reference.line);
        fill::node(&mut self.shadow, &reference.shadow);
    }
}

/// Partial update payload for [`ShapeStyle`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeStylePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<ShapeFill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStylePatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowPatch>,
}

impl ShapeStylePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for ShapeStyle {
    type Patch = ShapeStylePatch;
    type Error = FormatError;

    fn apply_patch(&mut self, p: &ShapeStylePatch) -> Result<(), FormatError> {
        patch::set_option(&mut self.fill, &p.fill);
        patch::node(&mut self.line, &p.line)?;
        patch::node(&mut self.shadow, &p.shadow)?;
        Ok(())
    }
}
