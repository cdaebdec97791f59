pub mod sink;

pub use sink::{dated_tab_name, write_destination_csv, write_report_json};
