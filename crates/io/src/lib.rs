// File I/O operations

pub mod load;
pub mod sheet;
pub mod text;
pub mod write;

pub use load::load_table;
pub use write::{write_apply, write_audit};
