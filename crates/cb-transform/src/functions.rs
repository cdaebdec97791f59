//! The built-in transform functions.
//!
//! Each function receives the raw value, the source column it came from and
//! its declared target column, and produces either a value for that target
//! or an explicit suppression. Writes to any *other* destination column go
//! through the side-effect channel: a direct write into the current
//! [`DestinationRecord`].

use tracing::{debug, warn};

use cb_model::{
    DestinationRecord, Result, RunReport, ThumbnailMismatch, TransformId, Vocabulary,
    VocabularyMiss,
};

use crate::context::RecordContext;

/// Datastream suffix for the full object.
pub const OBJECT_SUFFIX: &str = "/OBJ/view";
/// Datastream suffix for the thumbnail derivative.
pub const THUMBNAIL_SUFFIX: &str = "/TN/view";

/// Outcome of one transform-function call.
///
/// `Suppressed` is the single "no value" sentinel: a legitimately empty
/// value is `Value(String::new())`, never `Suppressed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformValue {
    Value(String),
    Suppressed,
}

/// Arguments common to every transform-function call.
#[derive(Debug, Clone, Copy)]
pub struct FunctionCall<'a> {
    pub value: &'a str,
    pub from_column: &'a str,
    pub target: Option<&'a str>,
    /// 1-based data row, for diagnostics.
    pub row: usize,
}

/// Replace every character outside `[A-Za-z0-9_.-]` with `_`, 1:1.
///
/// Dots are kept so filename extensions survive sanitization.
pub fn sanitize(value: &str) -> String {
    value
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || ch == '.' {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

/// Strip a known datastream suffix and trailing slashes to get the base URL.
fn object_base(value: &str) -> &str {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_suffix(OBJECT_SUFFIX).unwrap_or(trimmed);
    trimmed.trim_end_matches('/')
}

/// Dispatch one transform-function call by identifier.
pub fn apply(
    transform: TransformId,
    call: FunctionCall<'_>,
    ctx: &mut RecordContext,
    dest: &mut DestinationRecord,
    vocabulary: &Vocabulary,
    report: &mut RunReport,
) -> Result<TransformValue> {
    match transform {
        TransformId::Tbd | TransformId::SimpleList => {
            debug!(
                transform = transform.as_str(),
                column = call.from_column,
                value = call.value,
                "transform not implemented; value dropped"
            );
            Ok(TransformValue::Suppressed)
        }
        TransformId::Sanitize => Ok(TransformValue::Value(sanitize(call.value))),
        TransformId::IdentifierPassthrough => {
            let id = sanitize(call.value);
            ctx.object_id = Some(id.clone());
            Ok(TransformValue::Value(id))
        }
        TransformId::ObjectReference => {
            let base = object_base(call.value);
            if base.is_empty() {
                return Ok(TransformValue::Suppressed);
            }
            ctx.thumbnail_url = Some(format!("{base}{THUMBNAIL_SUFFIX}"));
            Ok(TransformValue::Value(format!("{base}{OBJECT_SUFFIX}")))
        }
        TransformId::ThumbnailReference => {
            let value = call.value.trim();
            let stashed = ctx.thumbnail_url.take();
            match stashed {
                Some(expected) if value == expected => {
                    // One source column fills both image columns: the
                    // declared target takes the return value, image_small
                    // is written through the side-effect channel.
                    dest.set("image_small", expected.clone())?;
                    Ok(TransformValue::Value(expected))
                }
                None if value.is_empty() => Ok(TransformValue::Suppressed),
                other => {
                    warn!(
                        row = call.row,
                        column = call.from_column,
                        value,
                        expected = other.as_deref().unwrap_or(""),
                        "thumbnail value does not match the stashed object reference"
                    );
                    report.thumbnail_mismatches.push(ThumbnailMismatch {
                        row: call.row,
                        column: call.from_column.to_string(),
                        value: value.to_string(),
                        expected: other,
                    });
                    Ok(TransformValue::Suppressed)
                }
            }
        }
        TransformId::VocabularyLookup => {
            let code = call.value.trim();
            if code.is_empty() {
                // Nothing to look up; the required-field check catches the
                // resulting blank downstream.
                return Ok(TransformValue::Suppressed);
            }
            match vocabulary.resolve(code) {
                Some(label) => Ok(TransformValue::Value(label.to_string())),
                None => {
                    warn!(
                        row = call.row,
                        column = call.from_column,
                        code,
                        "controlled vocabulary has no entry for code"
                    );
                    report.vocabulary_misses.push(VocabularyMiss {
                        row: call.row,
                        column: call.from_column.to_string(),
                        code: code.to_string(),
                    });
                    Ok(TransformValue::Suppressed)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_replaces_each_character_one_to_one() {
        assert_eq!(sanitize("My File (2).jpg"), "My_File__2_.jpg");
    }

    #[test]
    fn sanitize_keeps_safe_characters() {
        assert_eq!(sanitize("grinnell_1-a"), "grinnell_1-a");
        assert_eq!(sanitize("grinnell:1"), "grinnell_1");
    }

    #[test]
    fn object_base_strips_suffix_and_slashes() {
        assert_eq!(
            object_base("https://d.g.e/islandora/object/grinnell:1/OBJ/view"),
            "https://d.g.e/islandora/object/grinnell:1"
        );
        assert_eq!(
            object_base("https://d.g.e/islandora/object/grinnell:1/"),
            "https://d.g.e/islandora/object/grinnell:1"
        );
    }
}
