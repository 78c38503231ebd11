//! `gridstyle-model` defines the declarative style/document model for
//! spreadsheet generation.
//!
//! Everything here is a plain value model: cell styles, named styles, chart
//! elements, sheet and document settings. Models carry documented defaults,
//! merge against named reference models (`inherits = "<name>"`, resolved in
//! a [`gridstyle_cascade::Scope`] by the document's [`Document::resolve`]
//! pass), and accept sparse patches. The crate is self-contained so it can
//! be consumed by:
//! - output layers that read finalized models to drive emission
//! - IPC/JSON boundaries via `serde`
//!
//! No file formats are produced here and nothing does I/O.

pub mod charts;
mod color;
mod document;
mod range;
mod serde_defaults;
mod sheet;
mod style;
mod stylesheet;

pub use color::{Color, ColorParseError};
pub use document::{Document, DocumentError, DocumentProperties, SCHEMA_VERSION};
pub use range::{CellRef, RangeParseError, SheetRange, MAX_COLS, MAX_ROWS};
pub use sheet::{
    AutoFitColumns, SheetError, SheetSettings, SheetSettingsPatch, SheetVisibility,
    ZOOM_MAX_PERCENT, ZOOM_MIN_PERCENT,
};
pub use style::{
    Alignment, AlignmentPatch, Border, BorderEdge, BorderEdgePatch, BorderPatch, BorderStyle,
    Fill, FillPatch, FillPattern, Font, FontPatch, HorizontalAlignment, Style, StyleError,
    StylePatch, VerticalAlignment, FONT_SIZE_MAX_100PT, FONT_SIZE_MIN_100PT, INDENT_MAX,
    TEXT_ROTATION_STACKED,
};
pub use stylesheet::{
    validate_style_name, NamedStyle, StyleNameError, StyleSheet, STYLE_NAME_MAX_LEN,
};

// The merge contracts are part of this crate's public surface: callers name
// them to drive merges and patches over the model types.
pub use gridstyle_cascade::{ApplyPatch, Defaulted, Inherit, Inherits, Keyed, Scope, ScopeError};
