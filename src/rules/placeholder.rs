//! Placeholder mismatch detection rule.
//!
//! Qt fills `%1`..`%99` through `QString::arg()` and `%n` with the plural
//! count; `%L1` is the locale-aware variant of `%1`. A finished translation
//! must use the same set of markers as its source, otherwise arguments are
//! dropped or printed literally at runtime.

use std::{collections::BTreeSet, sync::LazyLock};

use regex::Regex;

use crate::{
    core::{CheckContext, LoadedCatalog},
    issues::PlaceholderIssue,
    rules::helpers::{message_context, sort_by_location},
};

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?(\d{1,2}|n)").unwrap());

/// Distinct markers in `text`, with the `L` modifier folded away.
pub fn placeholders(text: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .map(|caps| format!("%{}", &caps[1]))
        .collect()
}

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderIssue> {
    ctx.catalogs()
        .iter()
        .flat_map(|loaded| check_placeholders(loaded, |c, s| ctx.is_ignored(c, s)))
        .collect()
}

pub fn check_placeholders(
    loaded: &LoadedCatalog,
    is_ignored: impl Fn(&str, &str) -> bool,
) -> Vec<PlaceholderIssue> {
    let mut issues = Vec::new();

    for entry in loaded.catalog.entries() {
        let message = entry.message;
        let translation = &message.translation;
        if !translation.status.is_usable() || is_ignored(entry.context, &message.source) {
            continue;
        }

        let expected = placeholders(&message.source);
        let texts: Vec<&str> = if message.numerus {
            translation.numerus_forms.iter().map(String::as_str).collect()
        } else {
            vec![translation.text.as_str()]
        };

        let mut missing = BTreeSet::new();
        let mut unexpected = BTreeSet::new();
        for text in texts.into_iter().filter(|t| !t.is_empty()) {
            let found = placeholders(text);
            missing.extend(expected.difference(&found).cloned());
            unexpected.extend(found.difference(&expected).cloned());
        }

        if !missing.is_empty() || !unexpected.is_empty() {
            issues.push(PlaceholderIssue {
                context: message_context(loaded, entry),
                missing: missing.into_iter().collect(),
                unexpected: unexpected.into_iter().collect(),
            });
        }
    }

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
