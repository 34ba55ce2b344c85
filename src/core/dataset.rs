use crate::core::property::PropertyRecord;
use crate::core::source::{MockSource, PropertySource};
use anyhow::Result;
use std::fmt::Display;
use tracing::info;

/// Where the current working set came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    Default,
    Upload { name: String, rows: usize },
}

impl Display for DataOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataOrigin::Default => write!(f, "sample data"),
            DataOrigin::Upload { name, rows } => write!(f, "{name} ({rows} rows)"),
        }
    }
}

/// The in-memory working set of property records.
///
/// The set is only ever replaced as a whole; records are never edited in place.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<PropertyRecord>,
    origin: DataOrigin,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            records: MockSource.records(),
            origin: DataOrigin::Default,
        }
    }
}

impl Dataset {
    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn origin(&self) -> &DataOrigin {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn replace(&mut self, records: Vec<PropertyRecord>, origin: DataOrigin) {
        info!("Replacing {} records with {}", self.records.len(), origin);
        self.records = records;
        self.origin = origin;
    }

    /// Restores the built-in portfolio.
    pub async fn reset(&mut self) -> Result<()> {
        self.load_from(&MockSource).await?;
        Ok(())
    }

    /// Loads a source and swaps it in. On error the current set is kept.
    pub async fn load_from(&mut self, source: &dyn PropertySource) -> Result<DataOrigin> {
        let records = source.load().await?;
        let origin = source.origin(records.len());
        self.replace(records, origin.clone());
        Ok(origin)
    }
}
