pub mod context;
pub mod engine;
pub mod functions;

pub use context::RecordContext;
pub use engine::{TransformEngine, TransformRun};
pub use functions::{FunctionCall, OBJECT_SUFFIX, THUMBNAIL_SUFFIX, TransformValue, sanitize};
