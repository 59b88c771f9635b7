//! File selection by glob pattern.
//!
//! Uses the glob crate. `*` and `?` stay within one path component,
//! `**` recurses, and matching is case-sensitive. Results are sorted by
//! path string so the merge order never depends on directory enumeration
//! order.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use crate::error::{MergeError, Result};
use crate::util::canonicalize_lenient;

/// List regular files under `directory` matching `pattern`.
///
/// `pattern` is interpreted relative to `directory`; the directory itself is
/// escaped, so glob metacharacters in its name match literally. Anything in
/// `excluded` is dropped, compared by canonicalized path. Directories and
/// other non-regular entries that match are skipped.
///
/// An empty result is not an error.
///
/// # Errors
///
/// Returns `InvalidPattern` if `pattern` is not a valid glob or is not
/// relative to `directory`.
pub fn select_files<P: AsRef<Path>>(
    directory: &Path,
    pattern: &str,
    excluded: &[P],
) -> Result<Vec<PathBuf>> {
    let pattern_path = Path::new(pattern);
    let anchored = pattern_path.has_root()
        || matches!(pattern_path.components().next(), Some(Component::Prefix(_)));
    if anchored {
        return Err(MergeError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: "pattern must be relative to the input directory".to_string(),
        });
    }

    let excluded: HashSet<PathBuf> = excluded
        .iter()
        .map(|path| canonicalize_lenient(path.as_ref()))
        .collect();

    let escaped_dir = glob::Pattern::escape(&directory.to_string_lossy());
    let full_pattern = Path::new(&escaped_dir).join(pattern);

    let entries = glob::glob(&full_pattern.to_string_lossy()).map_err(|e| {
        MergeError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry {}: {}", e.path().display(), e);
                None
            }
        })
        .filter(|path| path.is_file())
        .filter(|path| {
            let keep = !excluded.contains(&canonicalize_lenient(path));
            if !keep {
                tracing::debug!("Excluding output file {}", path.display());
            }
            keep
        })
        .collect();

    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    tracing::debug!(
        "Pattern '{}' in {} matched {} file(s)",
        pattern,
        directory.display(),
        files.len()
    );

    Ok(files)
}
