use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gridstyle_cascade::{fill, Defaulted, Inherit, Scope, ScopeError};

use crate::charts::{Chart, ChartError};
use crate::{SheetSettings, StyleSheet};

/// Current serialization schema version, embedded into [`Document`].
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Errors raised by the document finalization pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("style inheritance failed: {0}")]
    Styles(ScopeError),
    #[error("chart {name:?}: {source}")]
    Chart { name: String, source: ChartError },
}

/// Document core properties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DocumentProperties {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub company: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    pub fn is_default(v: &Self) -> bool {
        v == &Self::default()
    }
}

impl Defaulted for DocumentProperties {
    fn is_default(&self) -> bool {
        DocumentProperties::is_default(self)
    }
}

impl Inherit for DocumentProperties {
    fn inherit_from(&mut self, reference: &Self) {
        fill::text(&mut self.title, &reference.title);
        fill::text(&mut self.author, &reference.author);
        fill::text(&mut self.company, &reference.company);
        fill::text(&mut self.subject, &reference.subject);
        fill::option(&mut self.created, &reference.created);
        fill::option(&mut self.modified, &reference.modified);
    }
}

/// The root model: everything needed to describe a generated workbook's
/// styling and layout, without any cell data or file emission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Serialization schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default, skip_serializing_if = "DocumentProperties::is_default")]
    pub properties: DocumentProperties,

    /// Per-sheet presentation settings, keyed by sheet name.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sheets: Vec<SheetSettings>,

    /// Named cell styles.
    #[serde(default, skip_serializing_if = "Scope::is_empty")]
    pub styles: StyleSheet,

    /// Charts and chart templates, keyed by chart name.
    #[serde(default, skip_serializing_if = "Scope::is_empty")]
    pub charts: Scope<Chart>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            properties: DocumentProperties::default(),
            sheets: Vec::new(),
            styles: StyleSheet::new(),
            charts: Scope::new(),
        }
    }

    /// Fill this document's gaps from a template document.
    ///
    /// Properties merge field-wise; sheets merge by name; named styles and
    /// charts merge by key, adopting template entries this document lacks.
    /// `schema_version` is not merged.
    pub fn apply_template(&mut self, template: &Document) {
        self.properties.inherit_from(&template.properties);
        fill::keyed(&mut self.sheets, &template.sheets);
        self.styles.inherit_from(&template.styles);
        self.charts.inherit_from(&template.charts);
    }

    /// Resolve every `inherits` link, in place.
    ///
    /// Run once, after the document is assembled and before its models are
    /// read for output. Styles resolve first, then charts; the pass stops at
    /// the first failure, leaving entries resolved so far in their resolved
    /// state (in-place mutation, no rollback).
    pub fn resolve(&mut self) -> Result<(), DocumentError> {
        self.styles
            .resolve_inheritance()
            .map_err(DocumentError::Styles)?;

        for index in 0..self.charts.len() {
            let name = self.charts.entries()[index].name.clone();
            // Work on a clone so a failed lookup leaves the entry untouched.
            let mut chart = self.charts.entries()[index].clone();
            chart
                .resolve_template(&self.charts)
                .map_err(|source| DocumentError::Chart {
                    name: name.clone(),
                    source,
                })?;
            if let Some(entry) = self.charts.get_mut(&name) {
                *entry = chart;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_fills_properties_and_adopts_sheets() {
        let mut doc = Document::new();
        doc.properties.title = "Quarterly report".into();
        doc.sheets.push(SheetSettings::new("Summary"));

        let mut template = Document::new();
        template.properties.title = "Untitled".into();
        template.properties.company = "Acme".into();
        template.sheets.push(SheetSettings::new("Data"));

        doc.apply_template(&template);

        assert_eq!(doc.properties.title, "Quarterly report");
        assert_eq!(doc.properties.company, "Acme");
        let names: Vec<&str> = doc.sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Summary", "Data"]);
    }

    #[test]
    fn schema_version_is_not_merged() {
        let mut doc = Document::new();
        doc.schema_version = 0;
        let template = Document::new();
        doc.apply_template(&template);
        assert_eq!(doc.schema_version, 0);
    }
}
