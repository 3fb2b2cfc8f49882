use std::io::ErrorKind;
use std::path::Path;
use thiserror::Error;

/// Extensions accepted for an uploaded credential file.
pub const ALLOWED_EXTENSIONS: &[&str] = &["json"];

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No file part.")]
    MissingFilePart,
    #[error("No selected file.")]
    EmptyFilename,
    #[error("Invalid file format. File must be of type {0}")]
    InvalidExtension(String),
    #[error("No credentials file is installed.")]
    NotInstalled,
    #[error("Could not access the credentials file: {0}")]
    Io(#[from] std::io::Error),
}

/// Checks that `filename` has one of `extensions`, compared case-insensitively.
pub fn validate_filename(filename: &str, extensions: &[&str]) -> Result<(), StoreError> {
    if filename.is_empty() {
        return Err(StoreError::EmptyFilename);
    }
    let allowed = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| extensions.contains(&ext.as_str()));
    if allowed {
        Ok(())
    } else {
        Err(StoreError::InvalidExtension(extensions.join(",")))
    }
}

pub async fn exists(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

pub async fn replace(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    tokio::fs::write(path, contents).await?;
    Ok(())
}

pub async fn remove(path: &Path) -> Result<(), StoreError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotInstalled),
        Err(e) => Err(e.into()),
    }
}
