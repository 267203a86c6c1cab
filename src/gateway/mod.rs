//! Food record retrieval across the composition tables.
//!
//! The scoring core never performs I/O itself; everything it reads arrives
//! through [`FoodLookupGateway`]. Each composition table is one
//! [`SourceTable`], and [`MultiSourceGateway`] dispatches on [`FoodSource`].

pub mod memory;
pub mod multi;

use thiserror::Error;

use crate::types::{ConfigurationError, FoodKey, FoodRecord, FoodSource};
pub use memory::InMemoryTable;
pub use multi::MultiSourceGateway;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("No food record {0}")]
    NotFound(FoodKey),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

pub trait FoodLookupGateway {
    fn get(&self, source: FoodSource, id: u32) -> Result<FoodRecord, LookupError>;

    fn search_by_name_prefix(
        &self,
        source: FoodSource,
        text: &str,
        limit: usize,
    ) -> Result<Vec<FoodRecord>, LookupError>;
}

/// One composition table.
pub trait SourceTable {
    fn source(&self) -> FoodSource;

    fn get(&self, id: u32) -> Option<FoodRecord>;

    fn search_by_name_prefix(&self, text: &str, limit: usize) -> Vec<FoodRecord>;
}
