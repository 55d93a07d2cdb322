//! Stale provenance detection rule.
//!
//! `<location filename>` is relative to the directory of the catalog. A
//! reference is stale when the file is gone or the line is past its end,
//! which usually means `lupdate` has not been re-run after a refactor.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::{CheckContext, LoadedCatalog},
    issues::{LocationIssue, LocationProblem},
    rules::helpers::{message_context, sort_by_location},
};

pub fn check_location_issues(ctx: &CheckContext) -> Vec<LocationIssue> {
    if !ctx.config.check_locations {
        return Vec::new();
    }
    ctx.catalogs()
        .iter()
        .flat_map(|loaded| check_locations(loaded, |c, s| ctx.is_ignored(c, s)))
        .collect()
}

pub fn check_locations(
    loaded: &LoadedCatalog,
    is_ignored: impl Fn(&str, &str) -> bool,
) -> Vec<LocationIssue> {
    let base_dir = loaded.base_dir();
    // Resolved path -> line count, `None` when the file cannot be read.
    let mut line_counts: HashMap<PathBuf, Option<usize>> = HashMap::new();
    let mut issues = Vec::new();

    for entry in loaded.catalog.entries() {
        if is_ignored(entry.context, &entry.message.source) {
            continue;
        }

        for location in &entry.message.locations {
            if location.filename.is_empty() {
                continue;
            }
            let path = base_dir.join(&location.filename);
            let line_count = *line_counts
                .entry(path)
                .or_insert_with_key(|path| count_lines(path));

            let problem = match (line_count, location.line) {
                (None, _) => Some(LocationProblem::MissingFile),
                (Some(count), Some(line)) if line > count => {
                    Some(LocationProblem::LineOutOfRange { line_count: count })
                }
                _ => None,
            };

            if let Some(problem) = problem {
                issues.push(LocationIssue {
                    context: message_context(loaded, entry),
                    location: location.clone(),
                    problem,
                });
            }
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}

fn count_lines(path: &Path) -> Option<usize> {
    let bytes = fs::read(path).ok()?;
    let newlines = bytes.iter().filter(|&&b| b == b'\n').count();
    let unterminated = !bytes.is_empty() && bytes.last() != Some(&b'\n');
    Some(newlines + usize::from(unterminated))
}
