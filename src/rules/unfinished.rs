//! Unfinished translation detection rule.
//!
//! Messages flagged `type="unfinished"` are displayed in the source
//! language at runtime. The draft text, if any, is reported so translators
//! can see how close the entry is to done.

use crate::{
    core::{CheckContext, LoadedCatalog, TranslationStatus},
    issues::UnfinishedIssue,
    rules::helpers::{message_context, sort_by_location},
};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    ctx.catalogs()
        .iter()
        .flat_map(|loaded| check_unfinished(loaded, |c, s| ctx.is_ignored(c, s)))
        .collect()
}

pub fn check_unfinished(
    loaded: &LoadedCatalog,
    is_ignored: impl Fn(&str, &str) -> bool,
) -> Vec<UnfinishedIssue> {
    let mut issues: Vec<UnfinishedIssue> = loaded
        .catalog
        .entries()
        .filter(|entry| entry.message.translation.status == TranslationStatus::Unfinished)
        .filter(|entry| !is_ignored(entry.context, &entry.message.source))
        .map(|entry| UnfinishedIssue {
            context: message_context(loaded, entry),
            draft: entry.message.translation.primary_text().to_string(),
        })
        .collect();

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
