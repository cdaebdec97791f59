//! The declarative column mapping: source column -> destination action.
//!
//! Every column observed in the source header must have exactly one entry.
//! The mapping is data, not code: it can be loaded from a JSON file so
//! operators can adjust it without a rebuild. The default reproduces the
//! mapping used for the Grinnell MODS export.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MigrateError, Result};

/// Identifiers for the closed set of transform functions.
///
/// Dispatch is by variant, never by string lookup, so an unrecognized
/// identifier in a mapping file is a load-time error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformId {
    /// Not yet designed; always suppresses and logs what was dropped.
    Tbd,
    /// Replace every character outside `[A-Za-z0-9_-]` with `_`.
    Sanitize,
    /// Sanitize and remember the value as the record's canonical id.
    IdentifierPassthrough,
    /// Build the full-object URL and stash the thumbnail URL for later.
    ObjectReference,
    /// Consume the stashed thumbnail URL, filling two destination columns.
    ThumbnailReference,
    /// Controlled-vocabulary lookup; a miss is an error, not a blank.
    VocabularyLookup,
    /// Join a delimited list into one cell. Undefined so far; acts as `Tbd`.
    SimpleList,
}

impl TransformId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tbd => "tbd",
            Self::Sanitize => "sanitize",
            Self::IdentifierPassthrough => "identifier_passthrough",
            Self::ObjectReference => "object_reference",
            Self::ThumbnailReference => "thumbnail_reference",
            Self::VocabularyLookup => "vocabulary_lookup",
            Self::SimpleList => "simple_list",
        }
    }
}

/// What to do with one source column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ColumnAction {
    /// Copy the value verbatim under a new name, including empty strings.
    Rename { target: String },
    /// Discard the value.
    Drop,
    /// Pass the value to a transform function. `target: None` means the
    /// function's return value has no fixed destination and is discarded
    /// after side effects.
    Invoke {
        transform: TransformId,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
    },
}

impl ColumnAction {
    /// The destination column this action writes its primary value to.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Rename { target } => Some(target.as_str()),
            Self::Drop => None,
            Self::Invoke { target, .. } => target.as_deref(),
        }
    }
}

/// The full source-column -> action table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnMapping {
    entries: BTreeMap<String, ColumnAction>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, action: ColumnAction) {
        self.entries.insert(column.into(), action);
    }

    pub fn get(&self, column: &str) -> Option<&ColumnAction> {
        self.entries.get(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnAction)> {
        self.entries
            .iter()
            .map(|(column, action)| (column.as_str(), action))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a mapping from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|error| MigrateError::Config(format!("{}: {error}", path.display())))
    }

    /// The built-in mapping for the Grinnell MODS spreadsheet export.
    pub fn default_mods() -> Self {
        use ColumnAction::{Drop, Invoke, Rename};
        use TransformId as T;

        let rename = |target: &str| Rename {
            target: target.to_string(),
        };
        let invoke = |transform: T, target: &str| Invoke {
            transform,
            target: Some(target.to_string()),
        };
        let hold = |transform: T| Invoke {
            transform,
            target: None,
        };

        let mut mapping = Self::new();
        mapping.insert("PID", invoke(T::IdentifierPassthrough, "objectid"));
        mapping.insert("WORKSPACE", Drop);
        mapping.insert("Import_Index", hold(T::Tbd));
        mapping.insert("PARENT", rename("parentid"));
        mapping.insert("CMODEL", invoke(T::VocabularyLookup, "display_template"));
        mapping.insert("SEQUENCE", hold(T::Tbd));
        mapping.insert("OBJ", invoke(T::ObjectReference, "object_location"));
        mapping.insert("TRANSCRIPT", rename("transcript"));
        mapping.insert("THUMBNAIL", invoke(T::ThumbnailReference, "image_thumb"));
        mapping.insert("Title", rename("title"));
        mapping.insert("Alternative_Titles", hold(T::Tbd));
        mapping.insert("Personal_Names~Roles", invoke(T::Tbd, "creator"));
        mapping.insert("Corporate_Names~Roles", hold(T::Tbd));
        mapping.insert("Abstract", rename("description"));
        mapping.insert("Index_Date", rename("date"));
        mapping.insert("Date_Issued", hold(T::Tbd));
        mapping.insert("Date_Captured", hold(T::Tbd));
        mapping.insert("Other_Date~Display_Label", hold(T::Tbd));
        mapping.insert("Publisher", hold(T::Tbd));
        mapping.insert("Place_Of_Publication", hold(T::Tbd));
        mapping.insert("Public_Notes~Types", hold(T::Tbd));
        mapping.insert("Notes~Display_Label", hold(T::Tbd));
        mapping.insert("Dates_as_Notes~Display_Label", hold(T::Tbd));
        mapping.insert("Citations", hold(T::Tbd));
        mapping.insert("Table_of_Contents", hold(T::Tbd));
        mapping.insert("LCSH_Subjects", hold(T::Tbd));
        mapping.insert("Subjects_Names~Types", hold(T::Tbd));
        mapping.insert("Subjects_Geographic", invoke(T::SimpleList, "location"));
        mapping.insert("Subjects_Temporal", hold(T::Tbd));
        mapping.insert("Keywords", invoke(T::SimpleList, "subject"));
        mapping.insert("Coordinate", hold(T::Tbd));
        mapping.insert("Related_Items~Types", hold(T::Tbd));
        mapping.insert("Type_of_Resource~AuthorityURI", invoke(T::Tbd, "type"));
        mapping.insert("Genre~AuthorityURI", hold(T::Tbd));
        mapping.insert("Extent", hold(T::Tbd));
        mapping.insert("Form~AuthorityURI", hold(T::Tbd));
        mapping.insert("MIME_Type", rename("format"));
        mapping.insert("Digital_Origin", hold(T::Tbd));
        mapping.insert("Classifications~Authorities", hold(T::Tbd));
        mapping.insert("Language_Names~Codes", rename("language"));
        mapping.insert("Local_Identifier", rename("identifier"));
        mapping.insert("Handle", hold(T::Tbd));
        mapping.insert("Physical_Location", hold(T::Tbd));
        mapping.insert("Shelf_Locator", hold(T::Tbd));
        mapping.insert("Access_Condition", rename("rightsstatement"));
        mapping.insert("Import_Source", Drop);
        mapping.insert("Primary_Sort", Drop);
        mapping.insert("Hidden_Creator", hold(T::Tbd));
        mapping.insert("Pull_Quotes", hold(T::Tbd));
        mapping.insert("Private_Notes~Types", hold(T::Tbd));
        mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mapping_covers_key_columns() {
        let mapping = ColumnMapping::default_mods();
        assert_eq!(
            mapping.get("PID"),
            Some(&ColumnAction::Invoke {
                transform: TransformId::IdentifierPassthrough,
                target: Some("objectid".to_string()),
            })
        );
        assert_eq!(mapping.get("WORKSPACE"), Some(&ColumnAction::Drop));
        assert_eq!(
            mapping.get("Title"),
            Some(&ColumnAction::Rename {
                target: "title".to_string()
            })
        );
        assert!(mapping.get("No_Such_Column").is_none());
    }

    #[test]
    fn action_round_trips_through_json() {
        let action = ColumnAction::Invoke {
            transform: TransformId::VocabularyLookup,
            target: Some("display_template".to_string()),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"action\":\"invoke\""));
        assert!(json.contains("vocabulary_lookup"));
        let back: ColumnAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn unknown_transform_id_is_rejected_at_load() {
        let raw = r#"{"OBJ": {"action": "invoke", "transform": "globals_lookup"}}"#;
        assert!(serde_json::from_str::<ColumnMapping>(raw).is_err());
    }

    #[test]
    fn drop_has_no_target() {
        assert_eq!(ColumnAction::Drop.target(), None);
        let held = ColumnAction::Invoke {
            transform: TransformId::Tbd,
            target: None,
        };
        assert_eq!(held.target(), None);
    }
}
