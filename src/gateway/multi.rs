use std::collections::BTreeMap;

use crate::gateway::{FoodLookupGateway, LookupError, SourceTable};
use crate::types::{ConfigurationError, FoodKey, FoodRecord, FoodSource};

/// Dispatches lookups to the table registered for each source.
#[derive(Default)]
pub struct MultiSourceGateway {
    tables: BTreeMap<FoodSource, Box<dyn SourceTable + Send + Sync>>,
}

impl MultiSourceGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `table` under its own source, replacing any previous table.
    pub fn with_table(mut self, table: impl SourceTable + Send + Sync + 'static) -> Self {
        self.register(table);
        self
    }

    pub fn register(&mut self, table: impl SourceTable + Send + Sync + 'static) {
        self.tables.insert(table.source(), Box::new(table));
    }

    pub fn sources(&self) -> impl Iterator<Item = FoodSource> + '_ {
        self.tables.keys().copied()
    }

    fn table(&self, source: FoodSource) -> Result<&(dyn SourceTable + Send + Sync), LookupError> {
        self.tables
            .get(&source)
            .map(|t| &**t)
            .ok_or_else(|| ConfigurationError::UnregisteredSource(source).into())
    }
}

impl FoodLookupGateway for MultiSourceGateway {
    fn get(&self, source: FoodSource, id: u32) -> Result<FoodRecord, LookupError> {
        self.table(source)?
            .get(id)
            .ok_or(LookupError::NotFound(FoodKey::new(source, id)))
    }

    fn search_by_name_prefix(
        &self,
        source: FoodSource,
        text: &str,
        limit: usize,
    ) -> Result<Vec<FoodRecord>, LookupError> {
        Ok(self.table(source)?.search_by_name_prefix(text, limit))
    }
}
