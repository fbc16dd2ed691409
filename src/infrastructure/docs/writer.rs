use std::path::{Path, PathBuf};

use error_stack::ResultExt;
use thiserror::Error;
use tracing::instrument;

#[derive(Error, Debug)]
pub enum DocsWriteError {
    #[error("failed to create directory {0}")]
    CreateDir(PathBuf),
    #[error("failed to write {0}")]
    Write(PathBuf),
}

/// Overwrites `path` with `contents`, creating missing parent directories.
#[instrument(skip(contents), fields(bytes = contents.len()))]
pub async fn write_docs(path: &Path, contents: &str) -> error_stack::Result<(), DocsWriteError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .change_context_lazy(|| DocsWriteError::CreateDir(parent.to_path_buf()))?;
    }

    tokio::fs::write(path, contents)
        .await
        .change_context_lazy(|| DocsWriteError::Write(path.to_path_buf()))?;

    tracing::info!(path = %path.display(), "Wrote docs");
    Ok(())
}
