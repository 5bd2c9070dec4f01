// ABOUTME: Dump extraction engine module
// ABOUTME: Recovers table rows from SQL dump text without executing SQL

pub mod insert;
pub mod loader;
pub mod schema;
pub mod table;
pub mod values;

pub use insert::insert_value_lists;
pub use loader::{extract_from_file, extract_tables, read_dump, DumpData};
pub use schema::table_columns;
pub use table::{extract_table, Record, TableData};
pub use values::{clean_value, parse_value_rows, Value};
