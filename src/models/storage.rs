use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::{Snippet, codec};

/// Where the store persists itself when no explicit path is given,
/// relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "snippets.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snippet title and code must both be non-empty")]
    EmptySnippet,

    #[error("malformed snippet document: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode snippet document: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The authoritative in-memory store of snippets, keyed by title and backed
/// by a JSON document on disk. Every mutation writes the full document back.
///
/// The file is not locked: if something else rewrites it between our load
/// and the next save, that edit is lost. Acceptable for a single-user local
/// tool, so left as a documented limitation.
#[derive(Debug)]
pub struct SnippetStore {
    snippets: HashMap<String, Snippet>,
    store_file: PathBuf,
}

impl SnippetStore {
    /// Loads the store from `path`. A missing file is not an error and
    /// yields an empty store; an unreadable or malformed file is surfaced
    /// so the caller can decide whether to recover.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store_file = path.into();

        if !store_file.exists() {
            return Ok(Self {
                snippets: HashMap::new(),
                store_file,
            });
        }

        let document =
            fs::read_to_string(&store_file).map_err(|e| StoreError::io(&store_file, e))?;
        let snippets = codec::decode(&document)?;

        Ok(Self {
            snippets,
            store_file,
        })
    }

    /// Legacy startup behavior: any load failure is logged and an empty
    /// store is substituted, so the application always comes up.
    pub fn load_or_default(path: impl Into<PathBuf>) -> Self {
        let store_file = path.into();

        match Self::load(&store_file) {
            Ok(store) => store,
            Err(err) => {
                log::warn!(
                    "could not load snippet store from {}, starting empty: {err}",
                    store_file.display()
                );
                Self {
                    snippets: HashMap::new(),
                    store_file,
                }
            }
        }
    }

    /// Inserts a snippet, overwriting any existing entry with the same
    /// title, then persists the store. A snippet with an empty title or
    /// empty code is rejected before anything is touched.
    pub fn add(&mut self, snippet: Snippet) -> Result<(), StoreError> {
        if snippet.title.is_empty() || snippet.code.is_empty() {
            return Err(StoreError::EmptySnippet);
        }

        self.snippets.insert(snippet.title.clone(), snippet);
        self.save()
    }

    /// Removes the snippet with the given title. Returns `Ok(false)` when
    /// no such title exists; the store is only persisted after an actual
    /// removal.
    pub fn delete_by_title(&mut self, title: &str) -> Result<bool, StoreError> {
        if self.snippets.remove(title).is_none() {
            return Ok(false);
        }

        self.save()?;
        Ok(true)
    }

    /// Pure lookup, no side effects.
    pub fn get(&self, title: &str) -> Option<&Snippet> {
        self.snippets.get(title)
    }

    /// Writes the full store to its backing file, replacing the previous
    /// document.
    pub fn save(&self) -> Result<(), StoreError> {
        let document = codec::encode(&self.snippets)?;
        fs::write(&self.store_file, document).map_err(|e| StoreError::io(&self.store_file, e))
    }

    /// Writes the same document shape to an arbitrary path, leaving the
    /// backing file alone. Unlike `save`, callers are expected to show this
    /// result to the user.
    pub fn export_to(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let document = codec::encode(&self.snippets)?;
        fs::write(path, document).map_err(|e| StoreError::io(path, e))
    }

    pub fn snippets(&self) -> &HashMap<String, Snippet> {
        &self.snippets
    }

    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }
}
