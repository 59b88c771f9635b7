//! Path utilities.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Canonicalize a path that may not exist yet.
///
/// Existing paths are resolved with `dunce::canonicalize` (absolute,
/// symlinks resolved, no `\\?\` prefix on Windows). For a missing path the
/// nearest existing ancestor is canonicalized and the remaining components
/// are appended unchanged, so `out/unified_train.json` and
/// `./out/../out/unified_train.json` compare equal before the file exists.
#[must_use]
pub fn canonicalize_lenient(path: &Path) -> PathBuf {
    if let Ok(resolved) = dunce::canonicalize(path) {
        return resolved;
    }

    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    let mut base = absolute.clone();
    let mut tail: Vec<OsString> = Vec::new();

    loop {
        if let Ok(mut resolved) = dunce::canonicalize(&base) {
            for component in tail.iter().rev() {
                if component == ".." {
                    resolved.pop();
                } else {
                    resolved.push(component);
                }
            }
            return resolved;
        }

        let Some(last) = base
            .components()
            .next_back()
            .map(|c| c.as_os_str().to_os_string())
        else {
            break;
        };
        if !base.pop() {
            break;
        }
        if last != "." {
            tail.push(last);
        }
    }

    absolute
}
