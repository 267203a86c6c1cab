use std::collections::BTreeMap;

use crate::gateway::SourceTable;
use crate::text::fold;
use crate::types::{FoodRecord, FoodSource};

/// A composition table held in memory, keyed by id.
#[derive(Debug, Clone)]
pub struct InMemoryTable {
    source: FoodSource,
    records: BTreeMap<u32, FoodRecord>,
    /// Folded, whitespace-collapsed names, aligned with `records`.
    folded_names: BTreeMap<u32, String>,
}

impl InMemoryTable {
    pub fn new(source: FoodSource) -> Self {
        Self {
            source,
            records: BTreeMap::new(),
            folded_names: BTreeMap::new(),
        }
    }

    /// Builds a table from `records`, keeping only those that belong to `source`.
    /// A later record with a repeated id replaces the earlier one.
    pub fn from_records(source: FoodSource, records: impl IntoIterator<Item = FoodRecord>) -> Self {
        let mut table = Self::new(source);
        for record in records.into_iter().filter(|r| r.source == source) {
            table.insert(record);
        }
        table
    }

    pub fn insert(&mut self, record: FoodRecord) {
        self.folded_names.insert(record.id, fold_name(&record.name));
        self.records.insert(record.id, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &FoodRecord> {
        self.records.values()
    }
}

impl SourceTable for InMemoryTable {
    fn source(&self) -> FoodSource {
        self.source
    }

    fn get(&self, id: u32) -> Option<FoodRecord> {
        self.records.get(&id).cloned()
    }

    fn search_by_name_prefix(&self, text: &str, limit: usize) -> Vec<FoodRecord> {
        let prefix = fold_name(text);
        if prefix.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<&FoodRecord> = self
            .folded_names
            .iter()
            .filter(|(_, name)| name.starts_with(&prefix))
            .filter_map(|(id, _)| self.records.get(id))
            .collect();

        hits.sort_by(|a, b| {
            a.name
                .chars()
                .count()
                .cmp(&b.name.chars().count())
                .then_with(|| a.id.cmp(&b.id))
        });

        hits.into_iter().take(limit).cloned().collect()
    }
}

fn fold_name(name: &str) -> String {
    fold(name).split_whitespace().collect::<Vec<_>>().join(" ")
}
