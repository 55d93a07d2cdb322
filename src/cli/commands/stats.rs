use anyhow::Result;

use super::super::args::StatsCommand;
use super::{
    CatalogStats, CommandResult, CommandSummary, ContextStats, StatsSummary, StatusCounts,
    helper::finish,
};
use crate::core::{CheckContext, Context, TranslationStatus};
use crate::issues::Issue;

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let catalogs: Vec<CatalogStats> = ctx
        .catalogs()
        .iter()
        .map(|loaded| {
            let contexts: Vec<ContextStats> =
                loaded.catalog.contexts.iter().map(context_stats).collect();
            let mut totals = StatusCounts::default();
            for context in &contexts {
                totals += context.counts;
            }
            CatalogStats {
                path: loaded.path.clone(),
                language: loaded.catalog.language.clone(),
                contexts,
                totals,
            }
        })
        .collect();

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
        CommandSummary::Stats(StatsSummary { catalogs }),
        issues,
        ctx.catalogs().len(),
        messages_checked,
        true,
    ))
}

fn context_stats(context: &Context) -> ContextStats {
    let mut counts = StatusCounts::default();
    for message in &context.messages {
        match message.translation.status {
            TranslationStatus::Finished => counts.finished += 1,
            TranslationStatus::Unfinished => counts.unfinished += 1,
            TranslationStatus::Obsolete | TranslationStatus::Vanished => counts.obsolete += 1,
        }
    }
    ContextStats {
        name: context.name.clone(),
        counts,
    }
}
