use crate::error::EnumerationError;
use git2::{ErrorCode, Repository, Status, StatusOptions};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Get git repository for a given path
fn get_repository(path: &Path) -> Result<Option<Repository>, EnumerationError> {
    match Repository::discover(path) {
        Ok(repo) => Ok(Some(repo)),
        // Not a git repository - this is okay
        Err(e) if e.code() == ErrorCode::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Whether `path` sits inside a git working tree
///
/// A `.git` marker in `path` is enough; otherwise repository discovery
/// walks up the parents.
pub fn is_work_tree(path: &Path) -> bool {
    if path.join(".git").exists() {
        return true;
    }

    matches!(Repository::discover(path), Ok(repo) if !repo.is_bare())
}

/// List tracked and untracked-but-not-ignored files below `path`
///
/// Paths are relative to `path`, `/`-separated and sorted. Files deleted from
/// the working tree are left out even when the index still tracks them.
pub fn list_working_set(path: &Path) -> Result<Vec<String>, EnumerationError> {
    let repo = get_repository(path)?
        .ok_or_else(|| EnumerationError::NotAWorkTree(path.to_path_buf()))?;
    let workdir = repo
        .workdir()
        .ok_or_else(|| EnumerationError::BareRepository(repo.path().to_path_buf()))?
        .canonicalize()?;
    let prefix = scope_prefix(&workdir, &path.canonicalize()?);

    let mut files = BTreeSet::new();

    // Tracked: every index entry. Conflict stages collapse in the set.
    let index = repo.index()?;
    for entry in index.iter() {
        if let Ok(p) = std::str::from_utf8(&entry.path) {
            files.insert(p.to_string());
        }
    }

    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false)
        .include_unmodified(false);

    for status in repo.statuses(Some(&mut opts))?.iter() {
        let Some(p) = status.path() else { continue };
        let flags = status.status();

        if flags.contains(Status::WT_DELETED) {
            files.remove(p);
        } else if flags.contains(Status::WT_NEW) {
            files.insert(p.to_string());
        }
    }

    Ok(files
        .into_iter()
        .filter_map(|p| strip_scope(&prefix, p))
        .collect())
}

/// `/`-terminated path of `dir` inside `workdir`, empty at the top level
fn scope_prefix(workdir: &Path, dir: &Path) -> String {
    let relative: PathBuf = dir.strip_prefix(workdir).map(Path::to_path_buf).unwrap_or_default();

    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!("{}/", parts.join("/"))
    }
}

fn strip_scope(prefix: &str, path: String) -> Option<String> {
    if prefix.is_empty() {
        return Some(path);
    }
    path.strip_prefix(prefix).map(str::to_string)
}
