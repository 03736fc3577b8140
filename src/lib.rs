pub mod calc;
pub mod config;
pub mod error;
pub mod report;
pub mod table;
pub mod types;

pub use calc::{compute_ranked, compute_ranked_custom};
pub use error::{CalcError, Result};
pub use table::TimingTable;
