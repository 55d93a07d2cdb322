//! Repeated message key detection.
//!
//! Within a context, `(source, comment)` must be unique. A repeated key with
//! a different translation is a conflict (the loader keeps only the first
//! one); a repeat with the same translation is merely redundant.

use std::collections::HashMap;

use crate::{
    core::{CheckContext, LoadedCatalog, Message},
    issues::{ConflictIssue, DuplicateIssue},
    rules::helpers::{message_context, sort_by_location},
};

#[derive(Debug, Default)]
pub struct DuplicateResult {
    pub conflicts: Vec<ConflictIssue>,
    pub duplicates: Vec<DuplicateIssue>,
}

pub fn check_duplicate_issues(ctx: &CheckContext) -> DuplicateResult {
    let mut result = DuplicateResult::default();
    for loaded in ctx.catalogs() {
        let found = check_duplicates(loaded, |c, s| ctx.is_ignored(c, s));
        result.conflicts.extend(found.conflicts);
        result.duplicates.extend(found.duplicates);
    }
    result
}

pub fn check_duplicates(
    loaded: &LoadedCatalog,
    is_ignored: impl Fn(&str, &str) -> bool,
) -> DuplicateResult {
    let mut first_seen: HashMap<(&str, &str, &str), &Message> = HashMap::new();
    let mut result = DuplicateResult::default();

    for entry in loaded.catalog.entries() {
        let message = entry.message;
        if is_ignored(entry.context, &message.source) {
            continue;
        }

        let key = (entry.context, message.source.as_str(), message.comment_str());
        let Some(first) = first_seen.get(&key).copied() else {
            first_seen.insert(key, message);
            continue;
        };

        if first.translation == message.translation {
            result.duplicates.push(DuplicateIssue {
                context: message_context(loaded, entry),
                first_line: first.line,
            });
        } else {
            result.conflicts.push(ConflictIssue {
                context: message_context(loaded, entry),
                first_line: first.line,
                first_translation: first.translation.primary_text().to_string(),
                translation: message.translation.primary_text().to_string(),
            });
        }
    }

    sort_by_location(&mut result.conflicts, |i| &i.context);
    sort_by_location(&mut result.duplicates, |i| &i.context);
    result
}
