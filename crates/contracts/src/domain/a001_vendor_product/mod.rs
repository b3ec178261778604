pub mod dataset;
pub mod measure;
pub mod schema;
pub mod sort;

pub use dataset::{Dataset, CSV_PATH};
pub use measure::{parse_float_prefix, parse_measure, Unit};
pub use schema::{Column, Row, COLUMN_COUNT};
pub use sort::{compare_by_column, sorted_rows};
