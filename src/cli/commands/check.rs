use std::collections::HashSet;

use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};

use crate::{
    core::CheckContext,
    issues::Issue,
    rules::{
        duplicates::check_duplicate_issues, identical::check_identical_issues,
        location::check_location_issues, placeholder::check_placeholder_issues,
        unfinished::check_unfinished_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    /// Translations still flagged unfinished
    Unfinished,
    /// Finished translations equal to their source
    Identical,
    /// Repeated (context, source, comment) keys
    Duplicates,
    /// `%1`/`%n` markers that differ between source and translation
    Placeholder,
    /// Locations pointing at missing files or lines
    Location,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Unfinished,
            CheckRule::Identical,
            CheckRule::Duplicates,
            CheckRule::Placeholder,
            CheckRule::Location,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let args = &cmd.args;
    let ctx = CheckContext::new(&args.common)?;

    let mut checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };
    let mut seen = HashSet::new();
    checks.retain(|check| seen.insert(*check));

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        tracing::debug!("running {:?} check", check);
        match check {
            CheckRule::Unfinished => {
                let issues = check_unfinished_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Unfinished));
            }
            CheckRule::Identical => {
                let issues = check_identical_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Identical));
            }
            CheckRule::Duplicates => {
                let result = check_duplicate_issues(&ctx);
                all_issues.extend(result.conflicts.into_iter().map(Issue::Conflict));
                all_issues.extend(result.duplicates.into_iter().map(Issue::Duplicate));
            }
            CheckRule::Placeholder => {
                let issues = check_placeholder_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Placeholder));
            }
            CheckRule::Location => {
                let issues = check_location_issues(&ctx);
                all_issues.extend(issues.into_iter().map(Issue::Location));
            }
        }
    }

    let parse_errors = ctx.parse_errors();
    all_issues.extend(parse_errors.iter().map(|i| Issue::ParseError(i.clone())));

    let messages_checked = ctx
        .catalogs()
        .iter()
        .map(|loaded| loaded.catalog.message_count())
        .sum();

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        ctx.catalogs().len(),
        messages_checked,
        true,
    ))
}
