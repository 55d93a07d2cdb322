//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow tsglot to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CatalogStats, CommandResult, CommandSummary, ExportSummary, FmtSummary, InitSummary,
    LookupSummary, StatsSummary, StatusCounts,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Issues are expected to be sorted already (see `commands::helper::finish`).
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);

    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalogs: usize, messages: usize) {
    print_success_to(catalogs, messages, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(catalogs: usize, messages: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} {}, {} {} - no issues found",
            catalogs,
            if catalogs == 1 { "catalog" } else { "catalogs" },
            messages,
            if messages == 1 { "message" } else { "messages" }
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(result.catalogs_checked, result.messages_checked);
            }
        }
        CommandSummary::Lookup(summary) => print_lookup(summary),
        CommandSummary::Fmt(summary) => {
            report(&result.issues);
            print_fmt(summary);
        }
        CommandSummary::Stats(summary) => {
            report(&result.issues);
            print_stats_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Export(summary) => print_export(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_parse_warning(result.parse_error_count, verbose);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        issue.message(),
        issue.report_rule().to_string().dimmed().cyan()
    );

    match issue.location() {
        ReportLocation::Message(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    if let Some(details) = issue.details() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "note:".bold(),
            details,
            width = max_line_width
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            if total_problems == 1 {
                "problem"
            } else {
                "problems"
            },
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .filter_map(|i| match i.location() {
            ReportLocation::Message(ctx) => Some(ctx.line()),
            ReportLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

fn print_lookup(summary: &LookupSummary) {
    println!("{}", summary.displayed);
    if !summary.translated {
        tracing::info!("no finished translation, showing source text");
    }
}

fn print_fmt(summary: &FmtSummary) {
    print_fmt_to(summary, &mut io::stdout().lock());
}

fn print_fmt_to<W: Write>(summary: &FmtSummary, writer: &mut W) {
    if summary.changed_files.is_empty() {
        if summary.unchanged_count > 0 || summary.skipped.is_empty() {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                format!("{} catalog(s) already formatted", summary.unchanged_count).green()
            );
        }
    } else {
        let verb = if summary.is_apply {
            "Reformatted".green().bold()
        } else {
            "Would reformat".yellow().bold()
        };
        let _ = writeln!(writer, "{} {} catalog(s):", verb, summary.changed_files.len());
        for path in &summary.changed_files {
            let _ = writeln!(writer, "  - {}", path);
        }
        if !summary.is_apply {
            let _ = writeln!(writer, "Run with {} to rewrite these files.", "--apply".cyan());
        }
    }

    if !summary.skipped.is_empty() {
        let _ = writeln!(
            writer,
            "{} left {} catalog(s) unchanged, rewriting would drop unknown elements:",
            "warning:".bold().yellow(),
            summary.skipped.len()
        );
        for skipped in &summary.skipped {
            let _ = writeln!(
                writer,
                "  - {} (<{}>)",
                skipped.path,
                skipped.elements.join(">, <")
            );
        }
    }
}

fn print_export(summary: &ExportSummary) {
    match &summary.output {
        Some(path) => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Exported {} entries to {}", summary.entry_count, path).green()
        ),
        None => print!("{}", summary.json),
    }
}

fn print_init(summary: &InitSummary) {
    match &summary.error {
        Some(error) => eprintln!("{} {}", "error:".bold().red(), error),
        None => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        ),
    }
}

fn print_stats_to<W: Write>(summary: &StatsSummary, writer: &mut W) {
    if summary.catalogs.is_empty() {
        let _ = writeln!(writer, "No catalogs found");
        return;
    }

    for (index, catalog) in summary.catalogs.iter().enumerate() {
        if index > 0 {
            let _ = writeln!(writer);
        }
        print_catalog_stats(catalog, writer);
    }
}

fn print_catalog_stats<W: Write>(catalog: &CatalogStats, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} ({})",
        catalog.path.bold(),
        catalog.language.as_deref().unwrap_or("unknown language")
    );

    let name_width = catalog
        .contexts
        .iter()
        .map(|c| UnicodeWidthStr::width(c.name.as_str()))
        .chain(std::iter::once("total".len()))
        .max()
        .unwrap_or(0);

    for context in &catalog.contexts {
        let _ = writeln!(
            writer,
            "  {}",
            stats_row(&context.name, &context.counts, name_width)
        );
    }
    let _ = writeln!(
        writer,
        "  {}",
        stats_row("total", &catalog.totals, name_width).bold()
    );
}

/// One aligned stats line; names are padded by display width so CJK
/// context names line up.
fn stats_row(name: &str, counts: &StatusCounts, name_width: usize) -> String {
    let padding = name_width.saturating_sub(UnicodeWidthStr::width(name));
    format!(
        "{}{}  {:>5.1}%  {:>4} finished  {:>4} unfinished  {:>4} obsolete",
        name,
        " ".repeat(padding),
        counts.percent_finished(),
        counts.finished,
        counts.unfinished,
        counts.obsolete
    )
}
