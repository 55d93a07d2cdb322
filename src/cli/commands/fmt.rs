use std::{fs, path::Path};

use anyhow::{Context as _, Result};

use super::super::args::FmtCommand;
use super::{CommandResult, CommandSummary, FmtSummary, SkippedCatalog, helper::finish};
use crate::core::{CheckContext, write_ts_file, write_ts_string};
use crate::issues::Issue;

/// Re-serialize every catalog in `lupdate` layout.
///
/// Dry-run by default: files whose canonical form differs are listed but
/// left untouched. Catalogs that fail to parse are reported and skipped, and
/// so are catalogs with elements the writer cannot reproduce.
pub fn fmt(cmd: FmtCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let mut changed_files = Vec::new();
    let mut unchanged_count = 0;
    let mut skipped = Vec::new();

    for loaded in ctx.catalogs() {
        if !loaded.catalog.unknown_elements.is_empty() {
            tracing::debug!(
                "not rewriting {}: unknown elements {:?}",
                loaded.path,
                loaded.catalog.unknown_elements
            );
            skipped.push(SkippedCatalog {
                path: loaded.path.clone(),
                elements: loaded.catalog.unknown_elements.clone(),
            });
            continue;
        }

        let current = fs::read_to_string(&loaded.path)
            .with_context(|| format!("Failed to read {}", loaded.path))?;
        let formatted = write_ts_string(&loaded.catalog);

        if current == formatted {
            unchanged_count += 1;
            continue;
        }

        if args.apply {
            write_ts_file(Path::new(&loaded.path), &loaded.catalog)
                .with_context(|| format!("Failed to write {}", loaded.path))?;
            tracing::debug!("rewrote {}", loaded.path);
        }
        changed_files.push(loaded.path.clone());
    }

    let issues: Vec<Issue> = ctx
        .parse_errors()
        .iter()
        .map(|i| Issue::ParseError(i.clone()))
        .collect();

    let messages_checked = ctx
        .catalogs()
        .iter()
        .map(|loaded| loaded.catalog.message_count())
        .sum();

    Ok(finish(
        CommandSummary::Fmt(FmtSummary {
            changed_files,
            unchanged_count,
            skipped,
            is_apply: args.apply,
        }),
        issues,
        ctx.catalogs().len(),
        messages_checked,
        true,
    ))
}
