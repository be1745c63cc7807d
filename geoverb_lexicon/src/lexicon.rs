//! Entry-point facade over the store and the query operations.

use std::path::Path;

use tracing::info;

use crate::config::{LexiconConfig, SearchConfig};
use crate::detail::{VerbDetail, assemble_verb_detail};
use crate::error::Result;
use crate::loader;
use crate::search::{SearchHit, search};
use crate::store::RecordStore;

/// The loaded lexicon: a read-only record snapshot plus query settings.
pub struct Lexicon {
    store: RecordStore,
    config: SearchConfig,
}

impl Lexicon {
    /// Wrap an already-built store.
    #[must_use]
    pub const fn new(store: RecordStore, config: SearchConfig) -> Self {
        Self { store, config }
    }

    /// Load the four sources from a directory with default settings.
    pub async fn load_dir(dir: &Path) -> Self {
        info!("loading lexicon from {}", dir.display());
        Self::new(loader::load_dir(dir).await, SearchConfig::default())
    }

    /// Load according to a [`LexiconConfig`].
    pub async fn from_config(config: &LexiconConfig) -> Self {
        info!("loading lexicon from {}", config.data_dir.display());
        Self::new(
            loader::load_dir(&config.data_dir).await,
            config.search.clone(),
        )
    }

    #[must_use]
    pub const fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Search conjugated forms by normalized text.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        search(&self.store, query, &self.config)
    }

    /// Assemble the detail page structure for one verb.
    pub fn verb_detail(&self, verb_id: i64) -> Result<VerbDetail> {
        assemble_verb_detail(&self.store, verb_id)
    }
}
