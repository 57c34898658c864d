//! In-memory prompt list state.
//!
//! [`PromptState`] owns the canonical prompt collection and the current
//! selection. It is pure state: persistence is layered on top by
//! [`crate::api::PromptPad`], and timestamps are passed in so behaviour
//! stays deterministic under test.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::text;

/// A single stored prompt. `content` is an HTML fragment; timestamps are
/// epoch milliseconds. `id` and `created_at` never change after creation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Save rejection: the prompt would be empty once trimmed/rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Content cannot be empty")]
    EmptyContent,
}

/// What a successful save did, with the id of the prompt it touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(String),
    Updated(String),
}

impl SaveOutcome {
    pub fn id(&self) -> &str {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        }
    }
}

/// The prompt collection plus the editor selection.
///
/// Vector order is insertion order and is never the display order; display
/// order is derived in [`PromptState::list_ordered`].
#[derive(Debug, Default, Clone)]
pub struct PromptState {
    prompts: Vec<Prompt>,
    selected_id: Option<String>,
}

impl PromptState {
    /// Wraps an already-loaded prompt list. Selection never survives a
    /// reload, so it starts cleared.
    pub fn from_prompts(prompts: Vec<Prompt>) -> Self {
        Self {
            prompts,
            selected_id: None,
        }
    }

    /// The fixed four-prompt starter set used when no valid persisted state
    /// exists. Timestamps are staggered so the list has a stable order.
    pub fn seed(now: i64) -> Self {
        let example = |title: &str, content: &str, offset: i64| Prompt {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: now - offset,
            updated_at: now - offset,
        };

        Self::from_prompts(vec![
            example(
                "Weekly task planning",
                "Help me organize my week in a balanced way.<br>Spread my professional and personal tasks...",
                3000,
            ),
            example(
                "Idea generation",
                "List 10 creative and focused ideas for ...",
                2000,
            ),
            example(
                "Refactoring",
                "Refactor the following code to make it more ...",
                1000,
            ),
            example(
                "Checklist",
                "Put together a checklist of the steps needed to ...",
                0,
            ),
        ])
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The selected prompt, or `None` when nothing is selected or the
    /// selection dangles (deleted out from under us).
    pub fn selected(&self) -> Option<&Prompt> {
        let id = self.selected_id.as_deref()?;
        self.get(id)
    }

    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == id)
    }

    /// Sets the selection. Returns `false` (state untouched) when the id is
    /// not a member of the collection.
    pub fn select(&mut self, id: Option<&str>) -> bool {
        match id {
            None => {
                self.selected_id = None;
                true
            }
            Some(id) => {
                if self.get(id).is_none() {
                    return false;
                }
                self.selected_id = Some(id.to_string());
                true
            }
        }
    }

    /// Saves the editor contents: updates the selected prompt in place, or
    /// creates (and selects) a new one when nothing is selected. A dangling
    /// selection behaves like no selection. No mutation on validation
    /// failure.
    pub fn save(
        &mut self,
        title: &str,
        content_html: &str,
        now: i64,
    ) -> Result<SaveOutcome, SaveError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(SaveError::EmptyTitle);
        }
        let content = content_html.trim();
        if text::plain_text(content).trim().is_empty() {
            return Err(SaveError::EmptyContent);
        }

        if let Some(selected) = self.selected_id.clone() {
            if let Some(prompt) = self.prompts.iter_mut().find(|p| p.id == selected) {
                prompt.title = title.to_string();
                prompt.content = content.to_string();
                prompt.updated_at = now;
                return Ok(SaveOutcome::Updated(selected));
            }
        }

        let prompt = Prompt {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        let id = prompt.id.clone();
        self.prompts.push(prompt);
        self.selected_id = Some(id.clone());
        Ok(SaveOutcome::Created(id))
    }

    /// Removes a prompt. Returns whether anything was removed; an unknown id
    /// is a silent no-op. Deleting the selected prompt clears the selection.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.prompts.len();
        self.prompts.retain(|p| p.id != id);
        let removed = self.prompts.len() != before;
        if removed && self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        removed
    }

    /// Prompts whose title contains the trimmed query, case-insensitively,
    /// in display order. An empty query matches everything. Content is
    /// never searched.
    pub fn search(&self, query: &str) -> Vec<&Prompt> {
        let q = query.trim().to_lowercase();
        let mut hits: Vec<&Prompt> = self
            .prompts
            .iter()
            .filter(|p| p.title.to_lowercase().contains(&q))
            .collect();
        hits.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        hits
    }

    /// Prompts sorted by `updated_at` descending. The sort is stable, so
    /// equal timestamps keep insertion order.
    pub fn list_ordered(&self) -> Vec<&Prompt> {
        let mut out: Vec<&Prompt> = self.prompts.iter().collect();
        out.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        out
    }
}
