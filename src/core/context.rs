use std::{
    cell::OnceCell,
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        catalog::Catalog,
        error::{TsError, TsResult},
        file_scanner::scan_files,
        parsers::ts::{looks_like_ts, parse_ts_str},
    },
    issues::ParseErrorIssue,
};

/// A catalog together with the file it was read from.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub path: String,
    pub catalog: Catalog,
}

impl LoadedCatalog {
    /// Directory that `<location filename>` references are relative to.
    pub fn base_dir(&self) -> &Path {
        Path::new(&self.path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

struct LoadedData {
    catalogs: Vec<LoadedCatalog>,
    parse_errors: Vec<ParseErrorIssue>,
}

/// Shared state for commands that work on every catalog of a project.
///
/// Configuration is resolved eagerly; catalogs are parsed on first access
/// (in parallel) so commands that only need the file list stay cheap.
pub struct CheckContext {
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Candidate catalog files, sorted.
    pub files: Vec<String>,

    /// Contexts to skip in checks (from config `ignoreContexts`).
    pub ignore_contexts: HashSet<String>,

    /// Source texts to skip in checks (from config `ignoreTexts`).
    pub ignore_texts: HashSet<String>,

    pub verbose: bool,

    loaded: OnceCell<LoadedData>,
}

impl CheckContext {
    /// Create a new `CheckContext` from command line arguments.
    ///
    /// # Errors
    ///
    /// Returns error if the root directory does not exist or the config
    /// file is invalid.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args.path.clone();
        if !root_dir.is_dir() {
            bail!("Path is not a directory: {}", root_dir.display());
        }

        let config_result = load_config(&root_dir)?;
        if !config_result.from_file {
            tracing::info!(
                "No {} found, using default configuration",
                crate::config::CONFIG_FILE_NAME
            );
        }
        let config = config_result.config;

        let scan_result = scan_files(&root_dir, &config.includes, &config.ignores);
        if scan_result.skipped_count > 0 {
            tracing::warn!(
                "{} path(s) skipped due to access errors",
                scan_result.skipped_count
            );
        }

        let ignore_contexts = config.ignore_contexts.iter().cloned().collect();
        let ignore_texts = config.ignore_texts.iter().cloned().collect();

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files.into_iter().collect(),
            ignore_contexts,
            ignore_texts,
            verbose: common_args.verbose,
            loaded: OnceCell::new(),
        })
    }

    /// Parsed catalogs, in file path order.
    ///
    /// `.ts` files that are not XML (TypeScript sources) are skipped
    /// silently; XML files that fail to parse are reported through
    /// [`CheckContext::parse_errors`].
    pub fn catalogs(&self) -> &[LoadedCatalog] {
        &self.loaded().catalogs
    }

    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.loaded().parse_errors
    }

    /// Whether checks should skip this message.
    pub fn is_ignored(&self, context: &str, source: &str) -> bool {
        self.ignore_contexts.contains(context) || self.ignore_texts.contains(source)
    }

    fn loaded(&self) -> &LoadedData {
        self.loaded.get_or_init(|| {
            let results: Vec<_> = self
                .files
                .par_iter()
                .map(|file_path| (file_path, load_catalog(file_path)))
                .collect();

            let mut catalogs = Vec::new();
            let mut parse_errors = Vec::new();
            for (file_path, result) in results {
                match result {
                    Ok(Some(catalog)) => {
                        tracing::debug!(
                            "parsed {} ({} messages)",
                            file_path,
                            catalog.message_count()
                        );
                        catalogs.push(LoadedCatalog {
                            path: file_path.clone(),
                            catalog,
                        });
                    }
                    Ok(None) => tracing::debug!("skipped non-catalog file {}", file_path),
                    Err(error) => {
                        tracing::debug!("failed to parse {}: {}", file_path, error);
                        parse_errors.push(ParseErrorIssue::new(file_path.clone(), error));
                    }
                }
            }

            LoadedData {
                catalogs,
                parse_errors,
            }
        })
    }
}

/// Read and parse one candidate file; `Ok(None)` for non-catalog `.ts` files.
fn load_catalog(file_path: &str) -> TsResult<Option<Catalog>> {
    let content = fs::read_to_string(file_path).map_err(|source| TsError::Io {
        path: file_path.to_string(),
        source,
    })?;
    if !looks_like_ts(&content) {
        return Ok(None);
    }
    parse_ts_str(&content).map(Some)
}
