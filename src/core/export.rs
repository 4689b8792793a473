//! Template export to the local file system

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write exported template contents to `path`
pub fn write_template(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Exported template to: {}", path.display());
    Ok(())
}

/// Ask the platform for a destination and write the template there.
///
/// Returns `Ok(None)` when the dialog is cancelled.
pub fn save_with_dialog(
    filename: &str,
    contents: &str,
    start_dir: Option<&Path>,
) -> Result<Option<PathBuf>, ExportError> {
    let extension = Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .unwrap_or_else(|| "yaml".to_string());

    let mut dialog = rfd::FileDialog::new()
        .set_file_name(filename)
        .add_filter("Helm template", &[extension.as_str()]);
    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }

    let Some(path) = dialog.save_file() else {
        tracing::debug!("Export of {} cancelled", filename);
        return Ok(None);
    };

    write_template(&path, contents)?;
    Ok(Some(path))
}
