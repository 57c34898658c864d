//! On-disk persistence for the prompt store.
//!
//! The whole state is one JSON blob: `{ "prompts": [...], "selectedId": ... }`,
//! written in full after every mutation. Reads are tolerant: a missing file,
//! invalid JSON or a payload without a well-formed `prompts` array all read
//! as "nothing persisted", and the caller falls back to the seed set.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::state::Prompt;
use super::utils::ensure_dir;

/// Persisted payload as written. Prompts serialize with camelCase keys.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateRecord<'a> {
    prompts: &'a [Prompt],
    selected_id: Option<&'a str>,
}

/// Persisted payload as read. Timestamps are optional so payloads written
/// before they existed still load; missing ones are backfilled at load time.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredState {
    prompts: Vec<StoredPrompt>,
    #[serde(default)]
    #[allow(dead_code)]
    selected_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredPrompt {
    id: String,
    title: String,
    content: String,
    #[serde(default)]
    created_at: Option<i64>,
    #[serde(default)]
    updated_at: Option<i64>,
}

/// Handle to the single store file.
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    /// Locates `~/.prompt-pad/prompts.json`, creating the directory on first
    /// use.
    pub fn init() -> Result<Self, String> {
        let home =
            env::var("HOME").map_err(|_| "Unable to determine HOME directory".to_string())?;
        let base_dir = PathBuf::from(home).join(".prompt-pad");
        ensure_dir(&base_dir)?;
        Ok(Self {
            path: base_dir.join("prompts.json"),
        })
    }

    /// Uses an explicit store file instead of the default location.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted prompt list. `None` means nothing usable was
    /// persisted; a malformed payload is logged and treated the same as an
    /// absent one. Missing timestamps are backfilled with `now`.
    pub fn read_prompts(&self, now: i64) -> Option<Vec<Prompt>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no persisted prompt store");
            return None;
        }
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unable to read prompt store");
                return None;
            }
        };
        let stored: StoredState = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "persisted prompt store is malformed");
                return None;
            }
        };
        Some(
            stored
                .prompts
                .into_iter()
                .map(|p| Prompt {
                    id: p.id,
                    title: p.title,
                    content: p.content,
                    created_at: p.created_at.unwrap_or(now),
                    updated_at: p.updated_at.unwrap_or(now),
                })
                .collect(),
        )
    }

    /// Writes the full state. The in-memory state is the source of truth;
    /// on failure the caller keeps it and reports the error.
    pub fn write_state(&self, prompts: &[Prompt], selected_id: Option<&str>) -> Result<(), String> {
        let record = StateRecord {
            prompts,
            selected_id,
        };
        let json =
            serde_json::to_string(&record).map_err(|e| format!("Serialize error: {}", e))?;
        fs::write(&self.path, json).map_err(|e| format!("Write error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn prompt(id: &str, ts: i64) -> Prompt {
        Prompt {
            id: id.to_string(),
            title: format!("title {}", id),
            content: format!("<p>content {}</p>", id),
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let file = StoreFile::at(dir.path().join("prompts.json"));
        assert!(file.read_prompts(0).is_none());
    }

    #[test]
    fn invalid_json_reads_as_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prompts.json");
        fs::write(&path, "{not json").unwrap();
        assert!(StoreFile::at(&path).read_prompts(0).is_none());
    }

    #[test]
    fn malformed_prompts_field_reads_as_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prompts.json");
        fs::write(&path, r#"{"prompts": "oops", "selectedId": null}"#).unwrap();
        assert!(StoreFile::at(&path).read_prompts(0).is_none());
    }

    #[test]
    fn round_trips_prompts_with_camel_case_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prompts.json");
        let file = StoreFile::at(&path);
        let prompts = vec![prompt("a", 100), prompt("b", 200)];

        file.write_state(&prompts, Some("a")).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"createdAt\":100"));
        assert!(raw.contains("\"selectedId\":\"a\""));

        let loaded = file.read_prompts(999).unwrap();
        assert_eq!(loaded, prompts);
    }

    #[test]
    fn backfills_missing_timestamps() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prompts.json");
        fs::write(
            &path,
            r#"{"prompts":[{"id":"x","title":"t","content":"c"}],"selectedId":null}"#,
        )
        .unwrap();

        let loaded = StoreFile::at(&path).read_prompts(777).unwrap();
        assert_eq!(loaded[0].created_at, 777);
        assert_eq!(loaded[0].updated_at, 777);
    }

    #[test]
    fn write_to_unwritable_path_fails() {
        let dir = tempdir().unwrap();
        // The store path is a directory, so the write cannot succeed.
        let file = StoreFile::at(dir.path());
        assert!(file.write_state(&[prompt("a", 1)], None).is_err());
    }
}
