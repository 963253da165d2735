/// Path inspection for the upload queue
///
/// Picked or dropped paths become FileHandles here: byte size from the
/// filesystem metadata, media type guessed from the extension. Folders are
/// walked recursively so a dropped directory enqueues its contents. Only
/// metadata is read; file bytes never leave the disk.

use std::path::{Path, PathBuf};

use tokio::task;
use walkdir::WalkDir;

use crate::state::upload::FileHandle;

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("could not read metadata for {path}: {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Build handles for a batch of paths, expanding directories. Unreadable
/// entries are skipped with a warning; the rest of the batch proceeds.
pub async fn inspect_paths(paths: Vec<PathBuf>) -> Vec<FileHandle> {
    let mut handles = Vec::new();
    for path in paths {
        if path.is_dir() {
            handles.extend(collect_folder(path).await);
            continue;
        }
        match inspect_file(path).await {
            Ok(handle) => handles.push(handle),
            Err(e) => eprintln!("⚠️  Skipping entry: {e}"),
        }
    }
    handles
}

/// Build a handle for a single regular file.
async fn inspect_file(path: PathBuf) -> Result<FileHandle, IntakeError> {
    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|source| IntakeError::Metadata {
            path: path.clone(),
            source,
        })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    Ok(FileHandle {
        name,
        size_bytes: metadata.len(),
        media_type: guess_media_type(&path).to_string(),
        path: Some(path),
    })
}

/// Walk a folder recursively and build handles for every regular file.
async fn collect_folder(root: PathBuf) -> Vec<FileHandle> {
    println!("🔍 Scanning folder: {}", root.display());

    // Walking is blocking work, so it runs off the interaction thread
    let files = task::spawn_blocking(move || {
        WalkDir::new(&root)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .collect::<Vec<_>>()
    })
    .await
    .unwrap_or_else(|e| {
        eprintln!("⚠️  Folder scan failed: {e}");
        Vec::new()
    });

    let mut handles = Vec::new();
    for path in files {
        match inspect_file(path).await {
            Ok(handle) => handles.push(handle),
            Err(e) => eprintln!("⚠️  Skipping entry: {e}"),
        }
    }
    handles
}

/// Guess a media type from the file extension. The uploads list shows this
/// next to the size; "unknown" mirrors what a browser reports for files it
/// cannot classify.
pub fn guess_media_type(path: &Path) -> &'static str {
    let Some(ext) = path.extension() else {
        return "unknown";
    };
    match ext.to_string_lossy().to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "ogg" => "audio/ogg",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "json" => "application/json",
        "txt" => "text/plain",
        "md" => "text/markdown",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_media_type_by_extension() {
        assert_eq!(guess_media_type(Path::new("photo.JPG")), "image/jpeg");
        assert_eq!(guess_media_type(Path::new("clip.mp4")), "video/mp4");
        assert_eq!(guess_media_type(Path::new("notes.txt")), "text/plain");
        assert_eq!(guess_media_type(Path::new("archive.tar.gz")), "unknown");
        assert_eq!(guess_media_type(Path::new("no_extension")), "unknown");
    }

    #[tokio::test]
    async fn test_inspect_file_errors_on_missing_path() {
        let result = inspect_file(PathBuf::from("/nonexistent/upload.png")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_inspect_paths_skips_unreadable_entries() {
        let handles = inspect_paths(vec![PathBuf::from("/nonexistent/upload.png")]).await;
        assert!(handles.is_empty());
    }
}
