//! Path helpers for roster files and export targets.

use std::path::{Path, PathBuf};

/// Expand a leading `~/` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

/// `path` as-is when absolute, otherwise joined onto `base`. Both sides get
/// `~` expansion.
pub fn resolve_against(base: &str, path: &str) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() {
        p
    } else {
        expand_tilde(base).join(p)
    }
}

pub fn is_absolute(path: &Path) -> bool {
    path.is_absolute()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_ignore_base() {
        assert_eq!(
            resolve_against("/srv", "/data/a.csv"),
            PathBuf::from("/data/a.csv")
        );
        assert_eq!(resolve_against("/srv", "a.csv"), PathBuf::from("/srv/a.csv"));
    }
}
