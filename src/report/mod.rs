//! Presentation of calculation results: tables, CSV export and text summaries

pub mod export;
pub mod summary;
pub mod table;

pub use export::*;
pub use summary::*;
pub use table::*;
