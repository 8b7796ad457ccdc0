use crate::constants::{DATA_DIR_NAME, DRAFTS_DIR_NAME};
use crate::document;
use crate::models::Request;
use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Autosaved draft documents, one JSON file per draft
pub struct Storage {
    drafts_dir: PathBuf,
}

impl Storage {
    /// Drafts live under `~/.ravens-rock/drafts`
    pub fn new() -> Self {
        let drafts_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_DIR_NAME)
            .join(DRAFTS_DIR_NAME);
        Storage { drafts_dir }
    }

    pub fn with_dir(drafts_dir: impl Into<PathBuf>) -> Self {
        Storage {
            drafts_dir: drafts_dir.into(),
        }
    }

    pub fn drafts_dir(&self) -> &Path {
        &self.drafts_dir
    }

    /// Ensure drafts directory exists
    fn ensure_dir(&self) -> Result<()> {
        if !self.drafts_dir.exists() {
            fs::create_dir_all(&self.drafts_dir)?;
        }
        Ok(())
    }

    fn draft_path(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(anyhow!("Invalid draft name: {:?}", name));
        }
        Ok(self.drafts_dir.join(format!("{}.json", name)))
    }

    /// Autosave a request under `name`, replacing any earlier draft
    pub fn autosave(&self, name: &str, request: &Request) -> Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.draft_path(name)?;
        document::save(&path, request)?;
        Ok(path)
    }

    pub fn load_draft(&self, name: &str) -> Result<Request> {
        let path = self.draft_path(name)?;
        Ok(document::load(&path)?)
    }

    pub fn discard_draft(&self, name: &str) -> Result<()> {
        let path = self.draft_path(name)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Load every readable draft, sorted by name
    pub fn load_all(&self) -> Result<Vec<(String, Request)>> {
        let mut drafts = Vec::new();
        if !self.drafts_dir.exists() {
            return Ok(drafts);
        }

        for entry in fs::read_dir(&self.drafts_dir)? {
            let path = entry?.path();
            let Some(name) = path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.strip_suffix(".json"))
            else {
                continue;
            };

            match document::load(&path) {
                Ok(request) => drafts.push((name.to_string(), request)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable draft");
                }
            }
        }

        drafts.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(drafts)
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self::new()
    }
}
