use jiff::civil::Date;

use tamare_storage::InMemoryStore;
use tamare_storage::fixtures::Fixtures;

use crate::config::TamareConfig;

/// Everything a screen needs: the loaded config, the record store, and the
/// evaluation date used for expiry and "today" comparisons.
#[derive(Debug)]
pub struct ShellState {
    pub config: TamareConfig,
    pub store: InMemoryStore,
    pub today: Date,
}

impl ShellState {
    /// Seed the store from the configured records file, or from the
    /// built-in sample records when none is configured.
    pub fn load(config: TamareConfig, today: Date) -> eyre::Result<Self> {
        let fixtures = match &config.records_path {
            Some(path) => Fixtures::load(path)?,
            None => Fixtures::sample(),
        };
        Ok(Self {
            config,
            store: InMemoryStore::from_fixtures(fixtures),
            today,
        })
    }

    /// Write the entity collections back to the configured records file.
    /// Returns `false` when running on sample records.
    pub fn persist(&self) -> eyre::Result<bool> {
        match &self.config.records_path {
            Some(path) => {
                self.store.to_fixtures().save(path)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
