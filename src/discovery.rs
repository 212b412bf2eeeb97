use crate::constants::GLOB_METACHARACTERS;
use crate::error::{ResizeError, Result};
use crate::formats::is_image_file;
use glob::glob;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// How the positional arguments were understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSelection {
    /// More than one argument, usually a glob the shell already expanded
    Explicit(Vec<PathBuf>),
    /// A single argument containing `*`, `?` or `[`
    Pattern(String),
    /// A single file or directory path
    Path(PathBuf),
}

/// Whether the resolved files form a single-file run or a batch.
///
/// Single-file runs report per-file detail and treat a failure as fatal;
/// batches only report the aggregate unless verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Single,
    Batch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    pub files: Vec<PathBuf>,
    pub mode: RunMode,
}

impl ResolvedInputs {
    /// One file is a single-file run, anything more is a batch.
    fn from_matches(files: Vec<PathBuf>) -> Self {
        let mode = if files.len() == 1 {
            RunMode::Single
        } else {
            RunMode::Batch
        };
        Self { files, mode }
    }
}

impl InputSelection {
    pub fn classify(args: &[String]) -> Self {
        match args {
            [single] if contains_glob_pattern(single) => InputSelection::Pattern(single.clone()),
            [single] => InputSelection::Path(PathBuf::from(single)),
            many => InputSelection::Explicit(many.iter().map(PathBuf::from).collect()),
        }
    }

    pub fn resolve(self, batch_requested: bool) -> Result<ResolvedInputs> {
        match self {
            InputSelection::Explicit(paths) => resolve_explicit(paths),
            InputSelection::Pattern(pattern) => resolve_pattern(&pattern),
            InputSelection::Path(path) => resolve_path(path, batch_requested),
        }
    }
}

/// Turns the positional arguments into the de-duplicated list of files to
/// process.
///
/// # Arguments
/// * `args` - Raw positional arguments
/// * `batch_requested` - `--batch`: walk a single path even if it is a file
///
/// # Returns
/// * `Ok(ResolvedInputs)` - Files plus single/batch classification
/// * `Err(PathNotFound)` - The single given path does not exist
/// * `Err(PathInaccessible)` - The single given path exists but cannot be stat'ed
/// * `Err(NoImagesFound)` - Nothing eligible was selected
/// * `Err(DirectoryWalkFailed)` - The recursive walk hit an unreadable entry
/// * `Err(InvalidPattern)` - The glob pattern could not be parsed
pub fn resolve_inputs(args: &[String], batch_requested: bool) -> Result<ResolvedInputs> {
    InputSelection::classify(args).resolve(batch_requested)
}

pub fn contains_glob_pattern(input: &str) -> bool {
    input.contains(GLOB_METACHARACTERS)
}

fn resolve_explicit(paths: Vec<PathBuf>) -> Result<ResolvedInputs> {
    let listing = paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" ");

    let mut image_files = Vec::new();
    for path in paths {
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("Cannot access file: {}, error: {}", path.display(), e);
                continue;
            }
        };

        if metadata.is_dir() || !is_image_file(&path) {
            debug!("Skipping non-image argument: {}", path.display());
            continue;
        }
        image_files.push(path);
    }

    let image_files = dedup_paths(image_files);
    if image_files.is_empty() {
        return Err(ResizeError::NoImagesFound(listing));
    }
    Ok(ResolvedInputs::from_matches(image_files))
}

/// Expands `pattern` and keeps existing regular files with an image extension.
pub fn expand_glob_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob(pattern).map_err(|source| ResizeError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut image_files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() && is_image_file(&path) => image_files.push(path),
            Ok(_) => {}
            Err(e) => debug!("Skipping unreadable glob match: {}", e),
        }
    }

    Ok(dedup_paths(image_files))
}

fn resolve_pattern(pattern: &str) -> Result<ResolvedInputs> {
    let files = expand_glob_pattern(pattern)?;
    if files.is_empty() {
        return Err(ResizeError::NoImagesFound(pattern.to_string()));
    }
    Ok(ResolvedInputs::from_matches(files))
}

fn resolve_path(path: PathBuf, batch_requested: bool) -> Result<ResolvedInputs> {
    let metadata = fs::metadata(&path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ResizeError::PathNotFound(path.clone()),
        _ => ResizeError::PathInaccessible {
            path: path.clone(),
            source,
        },
    })?;

    if metadata.is_dir() || batch_requested {
        let files = collect_image_files(&path)?;
        if files.is_empty() {
            return Err(ResizeError::NoImagesFound(path.display().to_string()));
        }
        return Ok(ResolvedInputs {
            files,
            mode: RunMode::Batch,
        });
    }

    Ok(ResolvedInputs {
        files: vec![path],
        mode: RunMode::Single,
    })
}

/// Recursively collects every image file under `root`.
///
/// Directories are always descended. Any walk error aborts the whole walk.
/// Symlinks resolving to a file already collected are dropped.
pub fn collect_image_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| ResizeError::DirectoryWalkFailed {
            path: root.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        if path.is_file() && is_image_file(path) {
            image_files.push(path.to_path_buf());
        }
    }

    debug!("Collected {} image files under {}", image_files.len(), root.display());
    Ok(dedup_paths(image_files))
}

/// Drops repeated files, keeping the first occurrence. Two paths are the
/// same file when they canonicalize to the same location.
pub fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::with_capacity(paths.len());
    paths
        .into_iter()
        .filter(|path| {
            let key = path.canonicalize().unwrap_or_else(|_| path.clone());
            let first = seen.insert(key);
            if !first {
                debug!("Skipping duplicate input: {}", path.display());
            }
            first
        })
        .collect()
}
