//! Per-record carry-over state.

/// State threaded between sibling columns of one record.
///
/// A fresh context is built at the start of every record; nothing in here
/// survives a record boundary, so a stashed thumbnail URL can never leak
/// into the next record.
#[derive(Debug, Clone, Default)]
pub struct RecordContext {
    /// Canonical id captured while processing the identifier column.
    pub object_id: Option<String>,
    /// Thumbnail URL stashed by the object column for the thumbnail column.
    pub thumbnail_url: Option<String>,
}

impl RecordContext {
    pub fn new() -> Self {
        Self::default()
    }
}
