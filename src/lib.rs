//! Extract full-size preview JPEGs from Lightroom `.lrprev` cache files,
//! optionally filed under their original folders using the catalog.

pub mod error;
pub mod extract;
pub mod lrprev;
pub mod output;
pub mod state;

pub use error::{ExtractError, Result};
pub use extract::{extract_directory, extract_preview, run, ExtractConfig, ExtractSummary};
pub use output::OutputOptions;
pub use state::Catalog;
