//! Dataset Core
//!
//! CSV table source implementation and the process-wide table store.

mod csv_source;
mod store;

pub use csv_source::CsvTableSource;
pub use store::{shared_table, TableStore};
