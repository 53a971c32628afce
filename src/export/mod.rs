// src/export/mod.rs
pub mod table;
pub mod xlsx;

pub use table::business_rows;
pub use xlsx::write_workbook;
