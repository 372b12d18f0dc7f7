//! Problem archive download
//!
//! One-shot fetch of the compressed problem archive, skipped when the file
//! is already cached on disk.

use std::path::Path;

use anyhow::{Context, Result};

/// Download the archive to `path` unless it already exists
pub async fn ensure_dataset(path: &Path, url: &str) -> Result<()> {
    if path.exists() {
        tracing::info!(path = %path.display(), "problem archive already present, skipping download");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    tracing::info!(url, path = %path.display(), "downloading problem archive");

    let response = reqwest::get(url)
        .await
        .with_context(|| format!("failed to fetch {}", url))?
        .error_for_status()
        .with_context(|| format!("server rejected request for {}", url))?;

    let bytes = response
        .bytes()
        .await
        .context("failed to read archive body")?;

    tokio::fs::write(path, &bytes)
        .await
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(bytes = bytes.len(), "download complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_existing_file_skips_download() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.jsonl.gz");
        std::fs::write(&path, b"cached").unwrap();

        // An unroutable URL proves no network request is made
        ensure_dataset(&path, "http://invalid.invalid/archive.gz")
            .await
            .unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"cached");
    }
}
