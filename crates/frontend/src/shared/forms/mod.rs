pub mod reconcile;
pub mod rows;

pub use reconcile::{completion_percent, FieldSelection};
pub use rows::{CustomRow, RowList};
