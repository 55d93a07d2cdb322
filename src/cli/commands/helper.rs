use std::cmp::Ordering;

use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Report, ReportLocation, Severity};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    catalogs_checked: usize,
    messages_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort_by(compare_issues);

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        exit_on_errors,
        issues,
        parse_error_count,
        catalogs_checked,
        messages_checked,
    }
}

/// Sort key for issues: file, line, column, then rule.
pub fn issue_position(issue: &Issue) -> (&str, usize, usize) {
    match issue.location() {
        ReportLocation::Message(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
        ReportLocation::File { path } => (path, 0, 0),
    }
}

pub fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    issue_position(a)
        .cmp(&issue_position(b))
        .then_with(|| a.rule().cmp(&b.rule()))
}
