//! The fixed CollectionBuilder destination schema.
//!
//! Column order is part of the downstream CSV contract and must be preserved
//! exactly when emitting rows.

/// Destination column names, in emission order.
pub const DESTINATION_COLUMNS: [&str; 18] = [
    "objectid",
    "parentid",
    "display_template",
    "object_location",
    "image_small",
    "image_thumb",
    "title",
    "description",
    "date",
    "creator",
    "type",
    "format",
    "language",
    "identifier",
    "rightsstatement",
    "location",
    "subject",
    "transcript",
];

/// Columns CollectionBuilder requires to be non-empty per record.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "objectid",
    "title",
    "display_template",
    "object_location",
    "image_small",
    "image_thumb",
    "format",
];

/// Returns true when `name` belongs to the destination schema.
pub fn is_destination_column(name: &str) -> bool {
    DESTINATION_COLUMNS.contains(&name)
}
