use anyhow::{Context as _, Result};

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};
use crate::core::{Translator, parse_ts_file};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let catalog = parse_ts_file(&cmd.file)
        .with_context(|| format!("Failed to load catalog {}", cmd.file.display()))?;
    let translator = Translator::from_catalog(&catalog);

    let comment = cmd.comment.as_deref();
    let found = translator.lookup(&cmd.context, &cmd.source, comment);
    tracing::debug!(
        "lookup {}::{:?} (comment {:?}) -> {:?}",
        cmd.context,
        cmd.source,
        comment,
        found
    );

    let summary = LookupSummary {
        displayed: found.unwrap_or(&cmd.source).to_string(),
        translated: found.is_some(),
    };

    Ok(finish(
        CommandSummary::Lookup(summary),
        Vec::new(),
        1,
        catalog.message_count(),
        true,
    ))
}
