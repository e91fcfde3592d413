pub mod ansi;
pub mod cell;
pub mod table;

pub use cell::Cell;
pub use table::{Alignment, Table, TableError};
