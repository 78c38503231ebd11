use serde::{Deserialize, Serialize};
use thiserror::Error;

use gridstyle_cascade::{fill, patch, ApplyPatch, Defaulted, Inherit};

use crate::Color;

/// Smallest accepted font size, in 1/100 points (1pt).
pub const FONT_SIZE_MIN_100PT: u16 = 100;
/// Largest accepted font size, in 1/100 points (409pt, Excel's cap).
pub const FONT_SIZE_MAX_100PT: u16 = 40900;
/// Largest accepted alignment indent level (Excel's cap).
pub const INDENT_MAX: u8 = 250;
/// Text rotation sentinel for vertically stacked text.
pub const TEXT_ROTATION_STACKED: i16 = 255;

/// Default font size: 11pt, matching a freshly created workbook.
const FONT_SIZE_DEFAULT_100PT: u16 = 1100;

fn is_false(v: &bool) -> bool {
    !*v
}

fn is_zero_u8(v: &u8) -> bool {
    *v == 0
}

fn is_zero_i16(v: &i16) -> bool {
    *v == 0
}

fn default_font_size() -> u16 {
    FONT_SIZE_DEFAULT_100PT
}

fn is_default_font_size(v: &u16) -> bool {
    *v == FONT_SIZE_DEFAULT_100PT
}

/// Errors raised by constrained style setters.
///
/// Raised immediately at the point of assignment, including assignments made
/// on behalf of a patch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error(
        "font size {value} is out of range ({min}..={max} hundredths of a point)",
        min = FONT_SIZE_MIN_100PT,
        max = FONT_SIZE_MAX_100PT
    )]
    FontSize { value: u16 },
    #[error("alignment indent {value} exceeds the maximum of {max}", max = INDENT_MAX)]
    Indent { value: u8 },
    #[error(
        "text rotation {value} must be -90..=90 degrees, or {stacked} for stacked text",
        stacked = TEXT_ROTATION_STACKED
    )]
    TextRotation { value: i16 },
    #[error("number format cannot be empty")]
    EmptyNumberFormat,
}

/// Font formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Font {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Font size in 1/100 points (e.g. 1100 = 11pt).
    #[serde(
        default = "default_font_size",
        skip_serializing_if = "is_default_font_size"
    )]
    pub size_100pt: u16,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            name: None,
            size_100pt: FONT_SIZE_DEFAULT_100PT,
            bold: false,
            italic: false,
            underline: false,
            strikethrough: false,
            color: None,
        }
    }
}

impl Font {
    /// Set the font size, in 1/100 points.
    pub fn set_size_100pt(&mut self, value: u16) -> Result<(), StyleError> {
        if !(FONT_SIZE_MIN_100PT..=FONT_SIZE_MAX_100PT).contains(&value) {
            return Err(StyleError::FontSize { value });
        }
        self.size_100pt = value;
        Ok(())
    }

    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for Font {
    fn is_default(&self) -> bool {
        Font::is_default(self)
    }
}

impl Inherit for Font {
    fn inherit_from(&mut self, reference: &Self) {
        let defaults = Self::default();
        fill::option(&mut self.name, &reference.name);
        fill::value(
            &mut self.size_100pt,
            &reference.size_100pt,
            &defaults.size_100pt,
        );
        fill::value(&mut self.bold, &reference.bold, &defaults.bold);
        fill::value(&mut self.italic, &reference.italic, &defaults.italic);
        fill::value(&mut self.underline, &reference.underline, &defaults.underline);
        fill::value(
            &mut self.strikethrough,
            &reference.strikethrough,
            &defaults.strikethrough,
        );
        fill::option(&mut self.color, &reference.color);
    }
}

/// Partial update payload for [`Font`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_100pt: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl FontPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for Font {
    type Patch = FontPatch;
    type Error = StyleError;

    fn apply_patch(&mut self, p: &FontPatch) -> Result<(), StyleError> {
        patch::set_option(&mut self.name, &p.name);
        if let Some(size) = p.size_100pt {
            self.set_size_100pt(size)?;
        }
        patch::set(&mut self.bold, &p.bold);
        patch::set(&mut self.italic, &p.italic);
        patch::set(&mut self.underline, &p.underline);
        patch::set(&mut self.strikethrough, &p.strikethrough);
        patch::set_option(&mut self.color, &p.color);
        Ok(())
    }
}

/// Fill pattern kind (subset of the OOXML pattern table).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FillPattern {
    #[default]
    None,
    Solid,
    Gray125,
    Gray0625,
    LightHorizontal,
    LightVertical,
}

/// Fill (background) formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Fill {
    #[serde(default)]
    pub pattern: FillPattern,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl Fill {
    /// Solid fill of the given color.
    pub fn solid(color: Color) -> Self {
        Self {
            pattern: FillPattern::Solid,
            foreground: Some(color),
            background: None,
        }
    }

    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for Fill {
    fn is_default(&self) -> bool {
        Fill::is_default(self)
    }
}

impl Inherit for Fill {
    fn inherit_from(&mut self, reference: &Self) {
        fill::value(&mut self.pattern, &reference.pattern, &FillPattern::default());
        fill::option(&mut self.foreground, &reference.foreground);
        fill::option(&mut self.background, &reference.background);
    }
}

/// Partial update payload for [`Fill`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<FillPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
}

impl FillPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for Fill {
    type Patch = FillPatch;
    type Error = StyleError;

    fn apply_patch(&mut self, p: &FillPatch) -> Result<(), StyleError> {
        patch::set(&mut self.pattern, &p.pattern);
        patch::set_option(&mut self.foreground, &p.foreground);
        patch::set_option(&mut self.background, &p.background);
        Ok(())
    }
}

/// Border line style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    #[default]
    None,
    Hair,
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
}

/// One edge of a cell border.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BorderEdge {
    #[serde(default)]
    pub style: BorderStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl BorderEdge {
    pub fn new(style: BorderStyle, color: Color) -> Self {
        Self {
            style,
            color: Some(color),
        }
    }

    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for BorderEdge {
    fn is_default(&self) -> bool {
        BorderEdge::is_default(self)
    }
}

impl Inherit for BorderEdge {
    fn inherit_from(&mut self, reference: &Self) {
        fill::value(&mut self.style, &reference.style, &BorderStyle::default());
        fill::option(&mut self.color, &reference.color);
    }
}

/// Partial update payload for [`BorderEdge`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderEdgePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl BorderEdgePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for BorderEdge {
    type Patch = BorderEdgePatch;
    type Error = StyleError;

    fn apply_patch(&mut self, p: &BorderEdgePatch) -> Result<(), StyleError> {
        patch::set(&mut self.style, &p.style);
        patch::set_option(&mut self.color, &p.color);
        Ok(())
    }
}

/// Border formatting, one edge per side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Border {
    #[serde(default, skip_serializing_if = "BorderEdge::is_default")]
    pub top: BorderEdge,
    #[serde(default, skip_serializing_if = "BorderEdge::is_default")]
    pub bottom: BorderEdge,
    #[serde(default, skip_serializing_if = "BorderEdge::is_default")]
    pub left: BorderEdge,
    #[serde(default, skip_serializing_if = "BorderEdge::is_default")]
    pub right: BorderEdge,
}

impl Border {
    /// The same edge on all four sides.
    pub fn uniform(edge: BorderEdge) -> Self {
        Self {
            top: edge.clone(),
            bottom: edge.clone(),
            left: edge.clone(),
            right: edge,
        }
    }

    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for Border {
    fn is_default(&self) -> bool {
        Border::is_default(self)
    }
}

impl Inherit for Border {
    fn inherit_from(&mut self, reference: &Self) {
        self.top.inherit_from(&reference.top);
        self.bottom.inherit_from(&reference.bottom);
        self.left.inherit_from(&reference.left);
        self.right.inherit_from(&reference.right);
    }
}

/// Partial update payload for [`Border`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<BorderEdgePatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<BorderEdgePatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<BorderEdgePatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<BorderEdgePatch>,
}

impl BorderPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for Border {
    type Patch = BorderPatch;
    type Error = StyleError;

    fn apply_patch(&mut self, p: &BorderPatch) -> Result<(), StyleError> {
        if let Some(edge) = &p.top {
            self.top.apply_patch(edge)?;
        }
        if let Some(edge) = &p.bottom {
            self.bottom.apply_patch(edge)?;
        }
        if let Some(edge) = &p.left {
            self.left.apply_patch(edge)?;
        }
        if let Some(edge) = &p.right {
            self.right.apply_patch(edge)?;
        }
        Ok(())
    }
}

/// Horizontal alignment options.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAlignment {
    #[default]
    General,
    Left,
    Center,
    Right,
    Justify,
}

/// Vertical alignment options.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAlignment {
    Top,
    Center,
    /// Excel's default for new cells.
    #[default]
    Bottom,
}

/// Alignment formatting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Alignment {
    #[serde(default)]
    pub horizontal: HorizontalAlignment,
    #[serde(default)]
    pub vertical: VerticalAlignment,
    #[serde(default, skip_serializing_if = "is_false")]
    pub wrap_text: bool,
    /// Indent level, `0..=250`.
    #[serde(default, skip_serializing_if = "is_zero_u8")]
    pub indent: u8,
    /// Text rotation in degrees: `-90..=90`, or `255` for stacked text.
    #[serde(default, skip_serializing_if = "is_zero_i16")]
    pub text_rotation: i16,
}

impl Alignment {
    pub fn set_indent(&mut self, value: u8) -> Result<(), StyleError> {
        if value > INDENT_MAX {
            return Err(StyleError::Indent { value });
        }
        self.indent = value;
        Ok(())
    }

    pub fn set_text_rotation(&mut self, value: i16) -> Result<(), StyleError> {
        if !(-90..=90).contains(&value) && value != TEXT_ROTATION_STACKED {
            return Err(StyleError::TextRotation { value });
        }
        self.text_rotation = value;
        Ok(())
    }

    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for Alignment {
    fn is_default(&self) -> bool {
        Alignment::is_default(self)
    }
}

impl Inherit for Alignment {
    fn inherit_from(&mut self, reference: &Self) {
        let defaults = Self::default();
        fill::value(&mut self.horizontal, &reference.horizontal, &defaults.horizontal);
        fill::value(&mut self.vertical, &reference.vertical, &defaults.vertical);
        fill::value(&mut self.wrap_text, &reference.wrap_text, &defaults.wrap_text);
        fill::value(&mut self.indent, &reference.indent, &defaults.indent);
        fill::value(
            &mut self.text_rotation,
            &reference.text_rotation,
            &defaults.text_rotation,
        );
    }
}

/// Partial update payload for [`Alignment`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HorizontalAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VerticalAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap_text: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_rotation: Option<i16>,
}

impl AlignmentPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for Alignment {
    type Patch = AlignmentPatch;
    type Error = StyleError;

    fn apply_patch(&mut self, p: &AlignmentPatch) -> Result<(), StyleError> {
        patch::set(&mut self.horizontal, &p.horizontal);
        patch::set(&mut self.vertical, &p.vertical);
        patch::set(&mut self.wrap_text, &p.wrap_text);
        if let Some(indent) = p.indent {
            self.set_indent(indent)?;
        }
        if let Some(rotation) = p.text_rotation {
            self.set_text_rotation(rotation)?;
        }
        Ok(())
    }
}

/// Complete cell style.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<Fill>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    /// Number format code (e.g. `0.00%`). Never empty when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
}

impl Style {
    pub fn set_number_format(&mut self, code: impl Into<String>) -> Result<(), StyleError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(StyleError::EmptyNumberFormat);
        }
        self.number_format = Some(code);
        Ok(())
    }

    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for Style {
    fn is_default(&self) -> bool {
        Style::is_default(self)
    }
}

impl Inherit for Style {
    fn inherit_from(&mut self, reference: &Self) {
        fill::node(&mut self.font, &reference.font);
        fill::node(&mut self.fill, &reference.fill);
        fill::node(&mut self.border, &reference.border);
        fill::node(&mut self.alignment, &reference.alignment);
        fill::option(&mut self.number_format, &reference.number_format);
    }
}

/// Partial update payload for [`Style`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StylePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<FillPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alignment: Option<AlignmentPatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_format: Option<String>,
}

impl StylePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for Style {
    type Patch = StylePatch;
    type Error = StyleError;

    fn apply_patch(&mut self, p: &StylePatch) -> Result<(), StyleError> {
        patch::node(&mut self.font, &p.font)?;
        patch::node(&mut self.fill, &p.fill)?;
        patch::node(&mut self.border, &p.border)?;
        patch::node(&mut self.alignment, &p.alignment)?;
        if let Some(code) = &p.number_format {
            self.set_number_format(code.clone())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_size_setter_validates_range() {
        let mut font = Font::default();
        font.set_size_100pt(900).unwrap();
        assert_eq!(font.size_100pt, 900);

        assert_eq!(
            font.set_size_100pt(99),
            Err(StyleError::FontSize { value: 99 })
        );
        assert_eq!(
            font.set_size_100pt(50000),
            Err(StyleError::FontSize { value: 50000 })
        );
        // Failed sets leave the previous value in place.
        assert_eq!(font.size_100pt, 900);
    }

    #[test]
    fn text_rotation_accepts_stacked_sentinel() {
        let mut alignment = Alignment::default();
        alignment.set_text_rotation(-90).unwrap();
        alignment.set_text_rotation(TEXT_ROTATION_STACKED).unwrap();
        assert_eq!(
            alignment.set_text_rotation(120),
            Err(StyleError::TextRotation { value: 120 })
        );
    }

    #[test]
    fn indent_cap() {
        let mut alignment = Alignment::default();
        alignment.set_indent(INDENT_MAX).unwrap();
        assert_eq!(
            alignment.set_indent(251),
            Err(StyleError::Indent { value: 251 })
        );
    }

    #[test]
    fn number_format_must_be_non_empty() {
        let mut style = Style::default();
        assert_eq!(
            style.set_number_format("  "),
            Err(StyleError::EmptyNumberFormat)
        );
        style.set_number_format("0.00%").unwrap();
        assert_eq!(style.number_format.as_deref(), Some("0.00%"));
    }

    #[test]
    fn default_style_reports_default() {
        use gridstyle_cascade::Defaulted as _;
        assert!(Style::default().is_default());

        let bold = Style {
            font: Some(Font {
                bold: true,
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(!bold.is_default());
    }
}
