//! On-disk store for canvases and image media.
//!
//! DESIGN
//! ======
//! Everything lives under one data directory:
//!
//! ```text
//! <data_dir>/canvases/<name>.json   {"canvas": CanvasModel}
//! <data_dir>/media/<image id>.png   raw image bytes
//! ```
//!
//! Canvas files are written to a temporary sibling and renamed into place,
//! so a crash mid-write never leaves a truncated canvas behind.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns [`StoreError`]. `load_all` is the one exception
//! to fail-fast: a canvas that cannot be read or decoded is logged and
//! skipped so one bad file never hides the rest of the collection.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use canvas::doc::CanvasModel;
use tracing::{info, warn};

const CANVAS_DIR: &str = "canvases";
const MEDIA_DIR: &str = "media";
const CANVAS_EXT: &str = "json";
const MEDIA_EXT: &str = "png";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("i/o error at {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to decode {}: {source}", .path.display())]
    Decode { path: PathBuf, source: serde_json::Error },
    #[error("failed to encode canvas {name}: {source}")]
    Encode { name: String, source: serde_json::Error },
    #[error("invalid name: {0:?}")]
    InvalidName(String),
    #[error("canvas not found: {0}")]
    NotFound(String),
    #[error("canvas already exists: {0}")]
    AlreadyExists(String),
    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("persistence worker failed: {0}")]
    Worker(String),
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io { path: path.to_path_buf(), source }
}

/// Names become file stems, so they must not escape their directory.
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0'])
        || name.starts_with('.');
    if invalid {
        return Err(StoreError::InvalidName(name.to_owned()));
    }
    Ok(())
}

/// Filesystem-backed store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn canvas_dir(&self) -> PathBuf {
        self.root.join(CANVAS_DIR)
    }

    #[must_use]
    pub fn media_dir(&self) -> PathBuf {
        self.root.join(MEDIA_DIR)
    }

    /// Path of the canvas file for `name`.
    pub fn canvas_path(&self, name: &str) -> Result<PathBuf, StoreError> {
        validate_name(name)?;
        Ok(self.canvas_dir().join(format!("{name}.{CANVAS_EXT}")))
    }

    /// Path of the media file for image `id`.
    pub fn image_path(&self, id: &str) -> Result<PathBuf, StoreError> {
        validate_name(id)?;
        Ok(self.media_dir().join(format!("{id}.{MEDIA_EXT}")))
    }

    // =========================================================================
    // Canvases
    // =========================================================================

    /// Whether a canvas file exists for `name`.
    pub async fn exists(&self, name: &str) -> Result<bool, StoreError> {
        let path = self.canvas_path(name)?;
        tokio::fs::try_exists(&path).await.map_err(|e| io_error(&path, e))
    }

    /// Write `model` to `canvases/<model.name>.json`, replacing any previous file.
    pub async fn save(&self, model: &CanvasModel) -> Result<PathBuf, StoreError> {
        let path = self.canvas_path(&model.name)?;
        let json = model.to_json().map_err(|source| StoreError::Encode { name: model.name.clone(), source })?;

        let dir = self.canvas_dir();
        tokio::fs::create_dir_all(&dir).await.map_err(|e| io_error(&dir, e))?;

        let tmp = path.with_extension(format!("{CANVAS_EXT}.tmp"));
        tokio::fs::write(&tmp, json).await.map_err(|e| io_error(&tmp, e))?;
        tokio::fs::rename(&tmp, &path).await.map_err(|e| io_error(&path, e))?;

        info!(name = %model.name, widgets = model.widget_count(), "canvas saved");
        Ok(path)
    }

    /// Read and decode the canvas called `name`.
    pub async fn load(&self, name: &str) -> Result<CanvasModel, StoreError> {
        let path = self.canvas_path(name)?;
        let model = read_canvas(&path).await.map_err(|e| match e {
            StoreError::Io { source, .. } if source.kind() == ErrorKind::NotFound => StoreError::NotFound(name.to_owned()),
            other => other,
        })?;
        info!(name, widgets = model.widget_count(), "canvas loaded");
        Ok(model)
    }

    /// Names of every stored canvas, sorted. Files whose stem is not a valid
    /// canvas name are skipped.
    pub async fn list(&self) -> Result<Vec<String>, StoreError> {
        let dir = self.canvas_dir();
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&dir, e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(&dir, e))? {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == CANVAS_EXT) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    match validate_name(stem) {
                        Ok(()) => names.push(stem.to_owned()),
                        Err(e) => warn!(path = %path.display(), error = %e, "skipping canvas file"),
                    }
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Decode every stored canvas, skipping files that fail.
    pub async fn load_all(&self) -> Result<Vec<CanvasModel>, StoreError> {
        let mut models = Vec::new();
        for name in self.list().await? {
            let path = match self.canvas_path(&name) {
                Ok(path) => path,
                Err(e) => {
                    warn!(name, error = %e, "skipping canvas");
                    continue;
                }
            };
            match read_canvas(&path).await {
                Ok(model) => models.push(model),
                Err(e) => warn!(name, error = %e, "skipping unreadable canvas"),
            }
        }
        info!(count = models.len(), "canvases loaded");
        Ok(models)
    }

    /// Remove the canvas file for `name`.
    pub async fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.canvas_path(name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                info!(name, "canvas deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound(name.to_owned())),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    // =========================================================================
    // Media
    // =========================================================================

    /// Write raw PNG bytes for image `id`.
    pub async fn save_image(&self, id: &str, bytes: &[u8]) -> Result<PathBuf, StoreError> {
        let path = self.image_path(id)?;
        let dir = self.media_dir();
        tokio::fs::create_dir_all(&dir).await.map_err(|e| io_error(&dir, e))?;
        tokio::fs::write(&path, bytes).await.map_err(|e| io_error(&path, e))?;
        info!(id, bytes = bytes.len(), "image saved");
        Ok(path)
    }

    /// Read raw PNG bytes for image `id`.
    pub async fn load_image(&self, id: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.image_path(id)?;
        tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == ErrorKind::NotFound { StoreError::NotFound(id.to_owned()) } else { io_error(&path, e) }
        })
    }

    /// Remove the media file for image `id`. A missing file is not an error.
    pub async fn delete_image(&self, id: &str) -> Result<(), StoreError> {
        let path = self.image_path(id)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path, e)),
        }
    }
}

async fn read_canvas(path: &Path) -> Result<CanvasModel, StoreError> {
    let json = tokio::fs::read_to_string(path).await.map_err(|e| io_error(path, e))?;
    CanvasModel::from_json(&json).map_err(|source| StoreError::Decode { path: path.to_path_buf(), source })
}
