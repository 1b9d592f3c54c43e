pub mod clinic;
pub mod table;

pub use clinic::{AppState, ClinicDatabase, StoreCounts};
pub use table::{Record, Table};
