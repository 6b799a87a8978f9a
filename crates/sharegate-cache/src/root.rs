//! Containment-checked access to a directory tree on disk.

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use bytes::Bytes;
use tokio::fs;

use sharegate_core::error::{AppError, ErrorKind};
use sharegate_core::result::AppResult;

use crate::store::CacheEntry;

/// A directory that request paths are resolved against.
///
/// Resolution follows symlinks and rejects anything whose real location is
/// outside the root, reporting it as not found.
#[derive(Debug, Clone)]
pub struct ContentRoot {
    /// Canonical absolute path of the root directory.
    root: PathBuf,
}

impl ContentRoot {
    /// Opens `path` as a content root. It must exist and be a directory.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let root = std::fs::canonicalize(path).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to open content root: {}", path.display()),
                e,
            )
        })?;
        if !root.is_dir() {
            return Err(AppError::configuration(format!(
                "Content root is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self { root })
    }

    /// Canonical location of the root directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Resolves a cleaned, `/`-rooted request path to a real path inside
    /// the root.
    pub async fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let joined = self.root.join(path.trim_start_matches('/'));
        let real = fs::canonicalize(&joined).await.map_err(|e| {
            // Interior NUL bytes surface as InvalidInput.
            if matches!(
                e.kind(),
                std::io::ErrorKind::NotFound | std::io::ErrorKind::InvalidInput
            ) {
                AppError::not_found(format!("File not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to resolve path: {path}"),
                    e,
                )
            }
        })?;

        if !real.starts_with(&self.root) {
            return Err(AppError::not_found(format!(
                "Path resolves outside content root: {path}"
            )));
        }
        Ok(real)
    }

    /// Returns metadata for the resource at `path`.
    pub async fn metadata(&self, path: &str) -> AppResult<Metadata> {
        let real = self.resolve(path).await?;
        Ok(fs::metadata(&real).await?)
    }

    /// Reads the full content and modification time of the file at `path`.
    pub async fn load(&self, path: &str) -> AppResult<CacheEntry> {
        let real = self.resolve(path).await?;
        let data = fs::read(&real).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("File not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read file: {path}"),
                    e,
                )
            }
        })?;

        let modified = fs::metadata(&real)
            .await?
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH);

        Ok(CacheEntry {
            content: Bytes::from(data),
            modified,
        })
    }
}
