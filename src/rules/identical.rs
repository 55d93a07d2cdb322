//! Identical translation detection rule.
//!
//! Detects finished translations whose text equals the source text, which
//! may indicate the string was copied over instead of translated. Sources
//! without alphabetic characters (numbers, symbols) are skipped.

use crate::{
    core::{CheckContext, LoadedCatalog},
    issues::IdenticalIssue,
    rules::helpers::{message_context, sort_by_location},
    utils::contains_alphabetic,
};

pub fn check_identical_issues(ctx: &CheckContext) -> Vec<IdenticalIssue> {
    ctx.catalogs()
        .iter()
        .flat_map(|loaded| check_identical(loaded, |c, s| ctx.is_ignored(c, s)))
        .collect()
}

pub fn check_identical(
    loaded: &LoadedCatalog,
    is_ignored: impl Fn(&str, &str) -> bool,
) -> Vec<IdenticalIssue> {
    let mut issues: Vec<IdenticalIssue> = loaded
        .catalog
        .entries()
        .filter(|entry| {
            let message = entry.message;
            message.translation.status.is_usable()
                && contains_alphabetic(&message.source)
                && message.translation.primary_text() == message.source
        })
        .filter(|entry| !is_ignored(entry.context, &entry.message.source))
        .map(|entry| IdenticalIssue {
            context: message_context(loaded, entry),
        })
        .collect();

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
