//! Merge statistic bundles into one wide sheet.
//!
//! Column names are `{prefix}-{series}`. Callers keep prefixes unique
//! (`full`, `p{poolId}`); reusing one overwrites the earlier columns.

use crate::aggregator::bundle::{Series, StatisticBundle};
use log::debug;

/// Column-keyed table, one entry per snapshot row
///
/// Columns keep insertion order. Replacing a column keeps its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    columns: Vec<(String, Series)>,
}

impl Sheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column, replacing any existing column with the same name
    pub fn insert(&mut self, name: impl Into<String>, values: Series) {
        let name = name.into();
        match self.columns.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => {
                debug!("Overwriting sheet column {}", name);
                *existing = values;
            }
            None => self.columns.push((name, values)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.columns.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    /// Column names in insertion order
    pub fn fields(&self) -> Vec<String> {
        self.columns.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Add every series of `bundle` to `sheet` as `{prefix}-{key}`
///
/// **Public** - called once for the full dataset and once per pool
pub fn add_to_sheet(sheet: &mut Sheet, bundle: StatisticBundle, prefix: &str) {
    debug!("Adding {} series with prefix {}", bundle.len(), prefix);

    for (key, values) in bundle {
        sheet.insert(format!("{}-{}", prefix, key), values);
    }
}
