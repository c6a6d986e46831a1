use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{
    CASCADE_DIR_ENV, DEFAULT_CASCADE_NAME, DEFAULT_CASCADE_URL, SYSTEM_CASCADE_DIRS,
};

#[derive(Error, Debug)]
pub enum CascadeResolveError {
    #[error("cascade {name} not found (searched: {})", format_paths(.searched))]
    NotFound { name: String, searched: Vec<PathBuf> },
    #[error("failed to create cache directory: {0}")]
    CacheDir(#[source] std::io::Error),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write cascade to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn format_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "nothing".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Candidate locations for a cascade file, in lookup order.
#[derive(Clone, Debug, Default)]
pub struct CascadeLocations {
    /// Explicit file chosen by the user. Used only if it exists.
    pub explicit: Option<PathBuf>,
    /// Directories searched for the default cascade by name.
    pub search_dirs: Vec<PathBuf>,
    /// Download target directory. `None` when no cache dir is known.
    pub cache_dir: Option<PathBuf>,
    /// Source to fetch from when nothing local matches. `None` means offline.
    pub download_url: Option<String>,
}

impl CascadeLocations {
    /// Locations as seen from the current process environment:
    /// `$FACECAM_CASCADE_DIR`, the user cache, then the OpenCV install dirs.
    pub fn from_environment(explicit: Option<PathBuf>, offline: bool) -> Self {
        let cache_dir = cascade_cache_dir();

        let mut search_dirs = Vec::new();
        if let Some(dir) = std::env::var_os(CASCADE_DIR_ENV) {
            search_dirs.push(PathBuf::from(dir));
        }
        search_dirs.extend(cache_dir.iter().cloned());
        search_dirs.extend(SYSTEM_CASCADE_DIRS.iter().map(PathBuf::from));

        Self {
            explicit,
            search_dirs,
            cache_dir,
            download_url: (!offline).then(|| DEFAULT_CASCADE_URL.to_string()),
        }
    }
}

/// Resolves the default frontal-face cascade unless `locations.explicit`
/// points at an existing file.
pub fn resolve(locations: &CascadeLocations) -> Result<PathBuf, CascadeResolveError> {
    resolve_named(DEFAULT_CASCADE_NAME, locations)
}

/// Resolution order:
/// 1. Explicit path, if it exists
/// 2. `name` inside each search directory
/// 3. Download into the cache directory
pub fn resolve_named(
    name: &str,
    locations: &CascadeLocations,
) -> Result<PathBuf, CascadeResolveError> {
    if let Some(path) = &locations.explicit {
        if path.is_file() {
            return Ok(path.clone());
        }
        log::warn!(
            "Cascade {} does not exist, falling back to {name}",
            path.display()
        );
    }

    let mut searched = Vec::with_capacity(locations.search_dirs.len());
    for dir in &locations.search_dirs {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
        searched.push(candidate);
    }

    match (&locations.download_url, &locations.cache_dir) {
        (Some(url), Some(cache_dir)) => {
            fs::create_dir_all(cache_dir).map_err(CascadeResolveError::CacheDir)?;
            let dest = cache_dir.join(name);
            log::info!("Downloading {name} from {url}");
            download(url, &dest)?;
            Ok(dest)
        }
        _ => Err(CascadeResolveError::NotFound {
            name: name.to_string(),
            searched,
        }),
    }
}

/// Platform-specific cascade cache directory.
///
/// - macOS: `~/Library/Application Support/facecam/cascades/`
/// - Linux: `$XDG_CACHE_HOME/facecam/cascades/` or `~/.cache/facecam/cascades/`
/// - Windows: `%LOCALAPPDATA%/facecam/cascades/`
pub fn cascade_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    let base = dirs::data_dir();
    #[cfg(not(target_os = "macos"))]
    let base = dirs::cache_dir();

    base.map(|d| d.join("facecam").join("cascades"))
}

fn download(url: &str, dest: &Path) -> Result<(), CascadeResolveError> {
    let temp_path = dest.with_extension("part");

    let result = download_inner(url, dest, &temp_path);
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn download_inner(url: &str, dest: &Path, temp_path: &Path) -> Result<(), CascadeResolveError> {
    let download_err = |source| CascadeResolveError::Download {
        url: url.to_string(),
        source,
    };
    let write_err = |path: &Path, source| CascadeResolveError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(download_err)?;

    let mut file = fs::File::create(temp_path).map_err(|e| write_err(temp_path, e))?;
    response.copy_to(&mut file).map_err(download_err)?;
    file.sync_all().map_err(|e| write_err(temp_path, e))?;
    drop(file);

    fs::rename(temp_path, dest).map_err(|e| write_err(dest, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NAME: &str = "cascade.xml";

    fn offline(explicit: Option<PathBuf>, search_dirs: Vec<PathBuf>) -> CascadeLocations {
        CascadeLocations {
            explicit,
            search_dirs,
            cache_dir: None,
            download_url: None,
        }
    }

    #[test]
    fn test_explicit_existing_file_wins() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("custom.xml");
        fs::write(&explicit, b"<opencv_storage/>").unwrap();
        fs::write(tmp.path().join(NAME), b"<opencv_storage/>").unwrap();

        let locations = offline(Some(explicit.clone()), vec![tmp.path().to_path_buf()]);
        assert_eq!(resolve_named(NAME, &locations).unwrap(), explicit);
    }

    #[test]
    fn test_missing_explicit_falls_back_to_search_dirs() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(NAME), b"<opencv_storage/>").unwrap();

        let locations = offline(
            Some(tmp.path().join("missing.xml")),
            vec![tmp.path().to_path_buf()],
        );
        assert_eq!(
            resolve_named(NAME, &locations).unwrap(),
            tmp.path().join(NAME)
        );
    }

    #[test]
    fn test_explicit_directory_is_not_a_cascade() {
        let tmp = TempDir::new().unwrap();
        let locations = offline(Some(tmp.path().to_path_buf()), vec![]);
        assert!(resolve_named(NAME, &locations).is_err());
    }

    #[test]
    fn test_search_dirs_checked_in_order() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        fs::write(first.path().join(NAME), b"first").unwrap();
        fs::write(second.path().join(NAME), b"second").unwrap();

        let locations = offline(
            None,
            vec![first.path().to_path_buf(), second.path().to_path_buf()],
        );
        assert_eq!(
            resolve_named(NAME, &locations).unwrap(),
            first.path().join(NAME)
        );
    }

    #[test]
    fn test_offline_not_found_lists_searched_paths() {
        let tmp = TempDir::new().unwrap();
        let locations = offline(None, vec![tmp.path().to_path_buf()]);

        let err = resolve_named(NAME, &locations).unwrap_err();
        match &err {
            CascadeResolveError::NotFound { name, searched } => {
                assert_eq!(name, NAME);
                assert_eq!(searched, &vec![tmp.path().join(NAME)]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains(NAME));
    }

    #[test]
    fn test_download_without_cache_dir_is_not_found() {
        let locations = CascadeLocations {
            download_url: Some("http://invalid.nonexistent.example.com/c.xml".into()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_named(NAME, &locations),
            Err(CascadeResolveError::NotFound { .. })
        ));
    }

    #[test]
    fn test_failed_download_leaves_no_partial_file() {
        let tmp = TempDir::new().unwrap();
        let cache = tmp.path().join("cache");
        let locations = CascadeLocations {
            explicit: None,
            search_dirs: vec![],
            cache_dir: Some(cache.clone()),
            download_url: Some("http://invalid.nonexistent.example.com/c.xml".into()),
        };

        let result = resolve_named(NAME, &locations);
        assert!(matches!(result, Err(CascadeResolveError::Download { .. })));
        assert!(!cache.join(NAME).exists());
        assert!(!cache.join(NAME).with_extension("part").exists());
    }

    #[test]
    fn test_offline_environment_has_no_download_url() {
        let locations = CascadeLocations::from_environment(None, true);
        assert!(locations.download_url.is_none());
        assert!(locations
            .search_dirs
            .iter()
            .any(|d| d == Path::new("/usr/share/opencv4/haarcascades")));
    }

    #[test]
    fn test_cache_dir_is_namespaced() {
        if let Some(dir) = cascade_cache_dir() {
            assert!(dir.ends_with("facecam/cascades"));
        }
    }
}
