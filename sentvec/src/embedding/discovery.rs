//! Model cache discovery
//!
//! Decides where fastembed downloads and looks up ONNX model files. The
//! `SENTVEC_CACHE_DIR` override is read by `GeneratorConfig` and arrives here
//! as the explicit directory.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Directory used when nothing else is available (fastembed's own default)
pub const FALLBACK_CACHE_DIR: &str = ".fastembed_cache";

/// Find the model cache directory with priority:
/// 1. Explicit directory passed by the caller
/// 2. User home directory (~/.sentvec/models)
/// 3. `.fastembed_cache` in the working directory
pub fn find_model_cache_dir(explicit: Option<&Path>) -> PathBuf {
    find_model_cache_dir_with(explicit, |key| std::env::var_os(key))
}

/// Same as [`find_model_cache_dir`], reading environment values from `lookup`
pub fn find_model_cache_dir_with<F>(explicit: Option<&Path>, lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(dir) = explicit {
        log::info!("Using model cache dir: {}", dir.display());
        return dir.to_path_buf();
    }

    let home = lookup("HOME")
        .or_else(|| lookup("USERPROFILE"))
        .filter(|h| !h.is_empty());
    if let Some(home) = home {
        let user_path = PathBuf::from(home).join(".sentvec").join("models");
        log::debug!("Using user model cache: {}", user_path.display());
        return user_path;
    }

    log::warn!("No home directory, using {}", FALLBACK_CACHE_DIR);
    PathBuf::from(FALLBACK_CACHE_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_dir_wins() {
        let dir = Path::new("/tmp/sentvec-models");
        let found = find_model_cache_dir_with(Some(dir), lookup(&[("HOME", "/home/ana")]));
        assert_eq!(found, dir.to_path_buf());
    }

    #[test]
    fn test_home_dir() {
        let found = find_model_cache_dir_with(None, lookup(&[("HOME", "/home/ana")]));
        assert_eq!(found, PathBuf::from("/home/ana/.sentvec/models"));
    }

    #[test]
    fn test_userprofile_when_no_home() {
        let found = find_model_cache_dir_with(None, lookup(&[("USERPROFILE", "/users/ana")]));
        assert_eq!(found, PathBuf::from("/users/ana/.sentvec/models"));
    }

    #[test]
    fn test_home_preferred_over_userprofile() {
        let found = find_model_cache_dir_with(
            None,
            lookup(&[("HOME", "/home/ana"), ("USERPROFILE", "/users/ana")]),
        );
        assert_eq!(found, PathBuf::from("/home/ana/.sentvec/models"));
    }

    #[test]
    fn test_fallback_without_home() {
        assert_eq!(
            find_model_cache_dir_with(None, lookup(&[])),
            PathBuf::from(FALLBACK_CACHE_DIR)
        );
        assert_eq!(
            find_model_cache_dir_with(None, lookup(&[("HOME", "")])),
            PathBuf::from(FALLBACK_CACHE_DIR)
        );
    }
}
