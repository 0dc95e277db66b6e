// src/discovery.rs
use crate::config::{Config, PRUNE_DIRS};
use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expands the given roots into the list of files to scan.
///
/// Directories are walked and filtered by extension; explicit file arguments
/// are kept as-is. Exclude patterns apply to both. The result is sorted and
/// deduplicated.
///
/// # Errors
/// Returns error if a root does not exist.
pub fn discover(roots: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for root in roots {
        let meta = std::fs::metadata(root).map_err(|source| crate::error::CscanError::Io {
            source,
            path: root.clone(),
        })?;
        if meta.is_dir() {
            found.extend(walk_dir(root, config));
        } else {
            found.push(root.clone());
        }
    }
    // Excludes are written against `src/..`, not `./src/..`.
    let mut files: Vec<PathBuf> = found.into_iter().map(strip_cur_dir).collect();

    files.retain(|p| !is_excluded(p, config));
    files.sort();
    files.dedup();
    Ok(files)
}

fn walk_dir(root: &Path, config: &Config) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy()));

    let (paths, error_count) = accumulate_walker(walker);
    if error_count > 0 && config.verbose {
        eprintln!("WARN: Encountered {error_count} errors during file walk");
    }
    paths
        .into_iter()
        .filter(|p| has_source_ext(p, config))
        .collect()
}

fn accumulate_walker<I>(walker: I) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}

fn strip_cur_dir(path: PathBuf) -> PathBuf {
    match path.strip_prefix(".") {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => path,
    }
}

fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

fn has_source_ext(path: &Path, config: &Config) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| config.is_source_ext(e))
}

/// Normalizes a path to use forward slashes (cross-platform pattern matching).
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn is_excluded(path: &Path, config: &Config) -> bool {
    let s = normalize_path(path);
    config.exclude_patterns.iter().any(|re| re.is_match(&s))
}
