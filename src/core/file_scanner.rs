use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning for catalog files.
pub struct ScanResult {
    /// Candidate `.ts` files, sorted.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

pub fn scan_files(base_dir: &Path, includes: &[String], ignore_patterns: &[String]) -> ScanResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => tracing::warn!("Invalid ignore pattern '{}': {}", p, e),
            }
        } else {
            literal_ignore_paths.push(base_dir.join(p));
        }
    }

    let dirs_to_scan: Vec<PathBuf> = if includes.is_empty() {
        vec![base_dir.to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                let full_pattern = base_dir.join(inc);
                let pattern_str = full_pattern.to_string_lossy();
                match glob(&pattern_str) {
                    Ok(entries) => {
                        // A glob may name catalog files directly (`i18n/*.ts`)
                        // as well as directories to walk.
                        paths.extend(entries.flatten());
                    }
                    Err(e) => tracing::warn!("Invalid glob pattern '{}': {}", inc, e),
                }
            } else {
                let path = base_dir.join(inc);
                if path.exists() {
                    paths.push(path);
                } else {
                    tracing::warn!("Include path does not exist: {}", path.display());
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    tracing::warn!("Cannot access path: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && is_catalog_file(path) {
                tracing::debug!("found catalog candidate {}", path_str);
                files.insert(path_str.into());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_catalog_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("ts")
}
