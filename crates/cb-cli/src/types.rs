use std::path::PathBuf;

use cb_model::RunReport;

/// Everything a finished (or dry) migration run produced.
#[derive(Debug)]
pub struct MigrateOutcome {
    /// Name of the dated output tab.
    pub tab_name: String,
    /// Written destination CSV, `None` on a dry run.
    pub destination: Option<PathBuf>,
    /// Written run-report JSON, `None` on a dry run.
    pub report_path: Option<PathBuf>,
    pub report: RunReport,
}
