use std::fs;

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::super::args::ExportCommand;
use super::{CommandResult, CommandSummary, ExportSummary, helper::finish};
use crate::core::{EntryRecord, parse_ts_file};

/// One exported message: the stored record plus what an application shows.
#[derive(Debug, Serialize)]
struct ExportedEntry {
    #[serde(flatten)]
    record: EntryRecord,
    displayed: String,
}

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let catalog = parse_ts_file(&cmd.file)
        .with_context(|| format!("Failed to load catalog {}", cmd.file.display()))?;

    let entries: Vec<ExportedEntry> = catalog
        .entries()
        .map(|entry| ExportedEntry {
            displayed: entry.message.displayed().to_string(),
            record: entry.into(),
        })
        .collect();

    let mut json = serde_json::to_string_pretty(&entries)?;
    json.push('\n');

    let output = match &cmd.output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            Some(path.display().to_string())
        }
        None => None,
    };

    Ok(finish(
        CommandSummary::Export(ExportSummary {
            entry_count: entries.len(),
            output,
            json,
        }),
        Vec::new(),
        1,
        catalog.message_count(),
        true,
    ))
}
