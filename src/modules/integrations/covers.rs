use std::path::{Path, PathBuf};

use crate::domain::{CoverSource, DomainError};

/// Download a cover into `dir` as `<identifier>.<ext>`.
///
/// The extension is taken from the image bytes, not from the server. Only
/// ASCII alphanumerics of the identifier make it into the file name.
pub async fn download_cover(
    source: &dyn CoverSource,
    identifier: &str,
    dir: &Path,
) -> Result<PathBuf, DomainError> {
    let name = file_stem(identifier)?;
    let bytes = source.fetch_cover(identifier).await?;

    let format = image::guess_format(&bytes).map_err(|e| {
        DomainError::External(format!("Cover for {} is not an image: {}", identifier, e))
    })?;
    let extension = format.extensions_str().first().copied().unwrap_or("img");

    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(format!("{}.{}", name, extension));
    tokio::fs::write(&path, &bytes).await?;

    tracing::info!("Cover for {} written to {:?}", identifier, path);
    Ok(path)
}

fn file_stem(identifier: &str) -> Result<String, DomainError> {
    let name: String = identifier
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    if name.is_empty() {
        return Err(DomainError::Validation(format!(
            "Identifier {:?} yields no file name",
            identifier
        )));
    }
    Ok(name)
}
