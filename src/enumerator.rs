use crate::cli::SearchMode;
use crate::error::EnumerationError;
use crate::git;
use ignore::WalkBuilder;
use std::path::{Component, Path};
use tracing::{debug, trace};

/// Resolve `default` to `git` inside a working tree and `find` elsewhere
pub fn resolve_mode(mode: SearchMode, root: &Path) -> SearchMode {
    match mode {
        SearchMode::Default => {
            if git::is_work_tree(root) {
                SearchMode::Git
            } else {
                SearchMode::Find
            }
        }
        explicit => explicit,
    }
}

/// List candidate files below `root`, sorted, relative and `/`-separated
pub fn enumerate(mode: SearchMode, root: &Path) -> Result<Vec<String>, EnumerationError> {
    let resolved = resolve_mode(mode, root);
    debug!(requested = ?mode, resolved = ?resolved, "search mode");

    let paths = match resolved {
        SearchMode::Git => git::list_working_set(root)?,
        _ => walk_files(root),
    };

    debug!(count = paths.len(), "enumerated candidate files");
    Ok(paths)
}

/// Every regular file reachable from `root`, hidden and ignored ones included
pub fn walk_files(root: &Path) -> Vec<String> {
    let mut walker = WalkBuilder::new(root);
    walker.standard_filters(false).follow_links(false);

    let mut files = Vec::new();
    for result in walker.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                trace!(error = %err, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        if let Some(relative) = relative_path(root, entry.path()) {
            files.push(relative);
        }
    }

    files.sort();
    files
}

/// `path` relative to `root` with `/` separators and no `./` components
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);

    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command;
    use tempfile::TempDir;

    fn create_tree() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("b.txt"), "b").unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::create_dir_all(root.join("sub/deeper")).unwrap();
        fs::write(root.join("sub/deeper/z.md"), "z").unwrap();
        fs::write(root.join(".hidden"), "h").unwrap();
        fs::write(root.join(".gitignore"), "a.txt\n").unwrap();
        fs::create_dir_all(root.join("empty")).unwrap();

        temp_dir
    }

    #[test]
    fn test_walk_files_lists_every_regular_file() {
        let temp_dir = create_tree();
        let files = walk_files(temp_dir.path());

        assert_eq!(files, vec![".gitignore", ".hidden", "a.txt", "b.txt", "sub/deeper/z.md"]);
    }

    #[test]
    fn test_walk_files_from_dot_has_no_dot_prefix() {
        assert_eq!(relative_path(Path::new("."), Path::new("./a.txt")), Some("a.txt".to_string()));
        assert_eq!(
            relative_path(Path::new("."), Path::new("./sub/b.rs")),
            Some("sub/b.rs".to_string())
        );
        assert_eq!(relative_path(Path::new("."), Path::new(".")), None);
    }

    #[test]
    fn test_resolve_mode_outside_repo() {
        let temp_dir = create_tree();
        assert_eq!(resolve_mode(SearchMode::Default, temp_dir.path()), SearchMode::Find);
        assert_eq!(resolve_mode(SearchMode::Git, temp_dir.path()), SearchMode::Git);
        assert_eq!(resolve_mode(SearchMode::Find, temp_dir.path()), SearchMode::Find);
    }

    #[test]
    fn test_default_mode_uses_git_inside_repo() {
        let temp_dir = create_tree();
        let root = temp_dir.path();
        for args in [["init", "-q"], ["add", "b.txt"]] {
            Command::new("git")
                .args(args)
                .current_dir(root)
                .output()
                .unwrap();
        }

        assert_eq!(resolve_mode(SearchMode::Default, root), SearchMode::Git);

        // a.txt is ignored and .git/ internals are never listed
        let files = enumerate(SearchMode::Default, root).unwrap();
        assert_eq!(files, vec![".gitignore", ".hidden", "b.txt", "sub/deeper/z.md"]);

        // find mode still sees everything, including .git internals
        let found = enumerate(SearchMode::Find, root).unwrap();
        assert!(found.contains(&"a.txt".to_string()));
        assert!(found.iter().any(|p| p.starts_with(".git/")));
    }

    #[test]
    fn test_forced_git_mode_fails_outside_repo() {
        let temp_dir = create_tree();
        assert!(enumerate(SearchMode::Git, temp_dir.path()).is_err());
    }
}
