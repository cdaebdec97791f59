pub mod csv_table;

pub use csv_table::{CsvTable, read_csv_table};
