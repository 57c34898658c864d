//! The main entry point for interacting with the prompt store.

use chrono::Utc;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::core::state::{Prompt, PromptState, SaveOutcome};
use crate::core::storage::StoreFile;

use super::error::StoreError;

/// How the store came up: from a valid persisted payload, or freshly seeded
/// because nothing usable was on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Seeded,
}

/// The main entry point for interacting with the prompt store.
///
/// Owns the in-memory state and the store file, and persists the full state
/// after every successful mutation. Designed to be created once per process;
/// there is no shared global instance.
pub struct PromptPad {
    file: StoreFile,
    state: PromptState,
}

impl PromptPad {
    /// Opens the store at the default location (`~/.prompt-pad/prompts.json`)
    /// and loads it, seeding when nothing valid is persisted.
    pub fn init() -> Result<(Self, LoadOutcome), StoreError> {
        let file = StoreFile::init().map_err(StoreError::Init)?;
        Ok(Self::load(file))
    }

    /// Opens the store at an explicit path. Useful for scripting and tests.
    pub fn open(path: impl Into<PathBuf>) -> (Self, LoadOutcome) {
        Self::load(StoreFile::at(path))
    }

    /// Loading never fails outward: anything unusable on disk falls back to
    /// the seed set, which is persisted immediately. A failed seed write is
    /// only logged; the in-memory seed still stands.
    fn load(file: StoreFile) -> (Self, LoadOutcome) {
        let now = Utc::now().timestamp_millis();
        match file.read_prompts(now) {
            Some(prompts) => (
                Self {
                    file,
                    state: PromptState::from_prompts(prompts),
                },
                LoadOutcome::Loaded,
            ),
            None => {
                info!(path = %file.path().display(), "seeding prompt store with default prompts");
                let pad = Self {
                    file,
                    state: PromptState::seed(now),
                };
                if let Err(e) = pad.persist() {
                    warn!(error = %e, "unable to persist seed state");
                }
                (pad, LoadOutcome::Seeded)
            }
        }
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.file
            .write_state(self.state.prompts(), self.state.selected_id())
            .map_err(StoreError::Persistence)
    }

    /// Saves the editor contents, then persists. On a persistence failure
    /// the mutation is kept in memory and the error is surfaced.
    pub fn save(&mut self, title: &str, content_html: &str) -> Result<SaveOutcome, StoreError> {
        let now = Utc::now().timestamp_millis();
        let outcome = self.state.save(title, content_html, now)?;
        self.persist()?;
        Ok(outcome)
    }

    /// Deletes a prompt, persisting when something was actually removed.
    /// Returns whether a prompt was removed; an unknown id is not an error.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        if !self.state.delete(id) {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Sets the selection. Ids are validated eagerly: selecting an unknown
    /// id is rejected and leaves the current selection alone. Selection is
    /// session-local, so nothing is persisted here.
    pub fn select(&mut self, id: Option<&str>) -> Result<(), StoreError> {
        if !self.state.select(id) {
            return Err(StoreError::UnknownId(id.unwrap_or_default().to_string()));
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.state.get(id)
    }

    pub fn selected(&self) -> Option<&Prompt> {
        self.state.selected()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.state.selected_id()
    }

    pub fn list_ordered(&self) -> Vec<&Prompt> {
        self.state.list_ordered()
    }

    pub fn search(&self, query: &str) -> Vec<&Prompt> {
        self.state.search(query)
    }
}
