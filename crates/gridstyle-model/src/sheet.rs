use serde::{Deserialize, Serialize};
use thiserror::Error;

use gridstyle_cascade::{fill, patch, ApplyPatch, Defaulted, Inherit, Keyed};

use crate::serde_defaults::{default_true, is_true};
use crate::{CellRef, Color};

/// Smallest accepted sheet zoom, in percent.
pub const ZOOM_MIN_PERCENT: u16 = 10;
/// Largest accepted sheet zoom, in percent.
pub const ZOOM_MAX_PERCENT: u16 = 400;

const ZOOM_DEFAULT_PERCENT: u16 = 100;

/// Errors raised by constrained sheet-settings setters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    #[error(
        "sheet zoom {value}% is out of range ({min}%..={max}%)",
        min = ZOOM_MIN_PERCENT,
        max = ZOOM_MAX_PERCENT
    )]
    Zoom { value: u16 },
}

/// Sheet visibility state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SheetVisibility {
    #[default]
    Visible,
    Hidden,
    /// Hidden and not listed in the unhide dialog.
    VeryHidden,
}

/// Whether generated columns are sized to their content.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AutoFitColumns {
    #[default]
    Disabled,
    Enabled,
}

/// Presentation settings for one sheet, keyed by sheet name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSettings {
    pub name: String,
    #[serde(default)]
    pub visibility: SheetVisibility,
    #[serde(default)]
    pub auto_fit_columns: AutoFitColumns,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_color: Option<Color>,
    /// Zoom in percent, `10..=400`.
    #[serde(default = "default_zoom", skip_serializing_if = "is_default_zoom")]
    pub zoom_percent: u16,
    #[serde(default = "default_true", skip_serializing_if = "is_true")]
    pub show_grid_lines: bool,
    /// Top-left cell of the scrollable region when panes are frozen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeze_panes: Option<CellRef>,
    /// Default column width in 1/100 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_col_width_100ch: Option<u32>,
}

fn default_zoom() -> u16 {
    ZOOM_DEFAULT_PERCENT
}

fn is_default_zoom(v: &u16) -> bool {
    *v == ZOOM_DEFAULT_PERCENT
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            visibility: SheetVisibility::default(),
            auto_fit_columns: AutoFitColumns::default(),
            tab_color: None,
            zoom_percent: ZOOM_DEFAULT_PERCENT,
            show_grid_lines: true,
            freeze_panes: None,
            default_col_width_100ch: None,
        }
    }
}

impl SheetSettings {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn set_zoom_percent(&mut self, value: u16) -> Result<(), SheetError> {
        if !(ZOOM_MIN_PERCENT..=ZOOM_MAX_PERCENT).contains(&value) {
            return Err(SheetError::Zoom { value });
        }
        self.zoom_percent = value;
        Ok(())
    }

    pub fn auto_fit_enabled(&self) -> bool {
        self.auto_fit_columns == AutoFitColumns::Enabled
    }

    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for SheetSettings {
    fn is_default(&self) -> bool {
        SheetSettings::is_default(self)
    }
}

impl Keyed for SheetSettings {
    fn key(&self) -> &str {
        &self.name
    }
}

impl Inherit for SheetSettings {
    /// `name` is the pairing key and is not merged.
    fn inherit_from(&mut self, reference: &Self) {
        let defaults = Self::default();
        fill::value(&mut self.visibility, &reference.visibility, &defaults.visibility);
        fill::value(
            &mut self.auto_fit_columns,
            &reference.auto_fit_columns,
            &defaults.auto_fit_columns,
        );
        fill::option(&mut self.tab_color, &reference.tab_color);
        fill::value(&mut self.zoom_percent, &reference.zoom_percent, &defaults.zoom_percent);
        fill::value(
            &mut self.show_grid_lines,
            &reference.show_grid_lines,
            &defaults.show_grid_lines,
        );
        fill::option(&mut self.freeze_panes, &reference.freeze_panes);
        fill::option(
            &mut self.default_col_width_100ch,
            &reference.default_col_width_100ch,
        );
    }
}

/// Partial update payload for [`SheetSettings`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<SheetVisibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_fit_columns: Option<AutoFitColumns>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_percent: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_grid_lines: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeze_panes: Option<CellRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_col_width_100ch: Option<u32>,
}

impl SheetSettingsPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl ApplyPatch for SheetSettings {
    type Patch = SheetSettingsPatch;
    type Error = SheetError;

    fn apply_patch(&mut self, p: &SheetSettingsPatch) -> Result<(), SheetError> {
        patch::set(&mut self.visibility, &p.visibility);
        patch::set(&mut self.auto_fit_columns, &p.auto_fit_columns);
        patch::set_option(&mut self.tab_color, &p.tab_color);
        if let Some(zoom) = p.zoom_percent {
            self.set_zoom_percent(zoom)?;
        }
        patch::set(&mut self.show_grid_lines, &p.show_grid_lines);
        patch::set_option(&mut self.freeze_panes, &p.freeze_panes);
        patch::set_option(&mut self.default_col_width_100ch, &p.default_col_width_100ch);
        Ok(())
    }
}
