//! Where post drafts come from.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use zenx_core::PostDraft;

/// Errors that can occur while loading drafts.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A draft loaded from a source.
#[derive(Debug, Clone)]
pub struct LoadedPost {
    /// Where the draft was read from.
    pub origin: PathBuf,

    /// The draft itself.
    pub draft: PostDraft,
}

/// A draft that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    /// Where the draft was read from.
    pub origin: PathBuf,

    /// Why it failed.
    pub error: SourceError,
}

/// Outcome of loading a batch. Failures never abort the batch.
#[derive(Debug, Default)]
pub struct LoadedBatch {
    /// Drafts that parsed.
    pub posts: Vec<LoadedPost>,

    /// Files that did not.
    pub failures: Vec<LoadFailure>,
}

/// A provider of post drafts.
#[async_trait]
pub trait PostSource: Send + Sync {
    /// Load every available draft.
    async fn load_all(&self) -> Result<LoadedBatch, SourceError>;
}

/// Every `*.json` file in one directory, in path order.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a new source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory being read.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl PostSource for DirectorySource {
    async fn load_all(&self) -> Result<LoadedBatch, SourceError> {
        let mut paths = Vec::new();
        let mut rd = fs::read_dir(&self.root).await?;
        while let Some(entry) = rd.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut batch = LoadedBatch::default();
        for path in paths {
            match read_draft(&path).await {
                Ok(draft) => batch.posts.push(LoadedPost { origin: path, draft }),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "Skipping unreadable draft");
                    batch.failures.push(LoadFailure { origin: path, error });
                }
            }
        }

        tracing::debug!(
            root = %self.root.display(),
            loaded = batch.posts.len(),
            failed = batch.failures.len(),
            "Loaded drafts"
        );
        Ok(batch)
    }
}

/// Read one draft file.
pub async fn read_draft(path: &Path) -> Result<PostDraft, SourceError> {
    let json = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&json)?)
}
