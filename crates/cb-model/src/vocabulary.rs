//! Controlled vocabulary: content-model codes -> display templates.
//!
//! A closed, static code table. Lookups either hit or miss; a miss is never
//! silently turned into a blank cell.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MigrateError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    entries: BTreeMap<String, String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: impl Into<String>, label: impl Into<String>) {
        self.entries.insert(code.into(), label.into());
    }

    /// Resolve a source code to its destination label.
    ///
    /// Codes are matched after trimming and with the Fedora URI prefix
    /// stripped, so `info:fedora/islandora:sp_pdf` and `islandora:sp_pdf`
    /// resolve identically.
    pub fn resolve(&self, code: &str) -> Option<&str> {
        let trimmed = code.trim();
        let bare = trimmed.strip_prefix("info:fedora/").unwrap_or(trimmed);
        self.entries.get(bare).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a vocabulary from a JSON object of code -> label.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|error| MigrateError::Config(format!("{}: {error}", path.display())))
    }

    /// Islandora content models -> CollectionBuilder display templates.
    pub fn default_display_templates() -> Self {
        let mut vocabulary = Self::new();
        vocabulary.insert("islandora:sp_basic_image", "image");
        vocabulary.insert("islandora:sp_large_image_cmodel", "image");
        vocabulary.insert("islandora:pageCModel", "image");
        vocabulary.insert("islandora:sp_pdf", "pdf");
        vocabulary.insert("islandora:sp-audioCModel", "audio");
        vocabulary.insert("islandora:sp_videoCModel", "video");
        vocabulary.insert("islandora:bookCModel", "compound_object");
        vocabulary.insert("islandora:compoundCModel", "compound_object");
        vocabulary
    }
}
