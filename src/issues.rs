//! Issue types for translation catalog checks.
//!
//! Each issue is self-contained with all information needed by the
//! reporter to display it to users.

use std::sync::Arc;

use enum_dispatch::enum_dispatch;

use crate::core::{catalog::Location, error::TsError};
use crate::utils::single_line;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Conflict,
    Placeholder,
    Duplicate,
    Unfinished,
    Identical,
    Location,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Conflict => write!(f, "conflict"),
            Rule::Placeholder => write!(f, "placeholder"),
            Rule::Duplicate => write!(f, "duplicate"),
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::Identical => write!(f, "identical"),
            Rule::Location => write!(f, "location"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Context
// ============================================================

/// Position inside a catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl MessageLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// A message as seen by a rule: where it is, and its lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageContext {
    pub location: MessageLocation,
    /// Name of the owning `<context>`.
    pub context_name: String,
    pub source: String,
    pub comment: Option<String>,
}

impl MessageContext {
    pub fn new(
        location: MessageLocation,
        context_name: impl Into<String>,
        source: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            location,
            context_name: context_name.into(),
            source: source.into(),
            comment,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }

    /// `in context "X"` plus the disambiguating comment, if any.
    fn describe(&self) -> String {
        match &self.comment {
            Some(comment) => format!(
                "in context {} (comment \"{}\")",
                self.context_name,
                single_line(comment)
            ),
            None => format!("in context {}", self.context_name),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Translation flagged unfinished; the source text is displayed instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub context: MessageContext,
    /// Draft text left in the unfinished translation, possibly empty.
    pub draft: String,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Finished translation identical to its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdenticalIssue {
    pub context: MessageContext,
}

impl IdenticalIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Identical
    }
}

/// Same key defined twice with different translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictIssue {
    /// The later definition.
    pub context: MessageContext,
    /// Catalog line of the first definition.
    pub first_line: usize,
    pub first_translation: String,
    pub translation: String,
}

impl ConflictIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Conflict
    }
}

/// Same key defined twice with the same translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIssue {
    pub context: MessageContext,
    pub first_line: usize,
}

impl DuplicateIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Duplicate
    }
}

/// `%1`-style markers differ between source and translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderIssue {
    pub context: MessageContext,
    /// Markers in the source but not in the translation.
    pub missing: Vec<String>,
    /// Markers in the translation but not in the source.
    pub unexpected: Vec<String>,
}

impl PlaceholderIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Placeholder
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationProblem {
    MissingFile,
    LineOutOfRange { line_count: usize },
}

/// Provenance reference that no longer matches the source tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationIssue {
    pub context: MessageContext,
    pub location: Location,
    pub problem: LocationProblem,
}

impl LocationIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Location
    }
}

/// File could not be read or parsed.
///
/// The error is shared so issues stay cheap to clone; two issues are equal
/// when they name the same file and render the same message.
#[derive(Debug, Clone)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: Arc<TsError>,
}

impl PartialEq for ParseErrorIssue {
    fn eq(&self, other: &Self) -> bool {
        self.file_path == other.file_path && self.error.to_string() == other.error.to_string()
    }
}

impl Eq for ParseErrorIssue {}

impl ParseErrorIssue {
    pub fn new(file_path: impl Into<String>, error: TsError) -> Self {
        Self {
            file_path: file_path.into(),
            error: Arc::new(error),
        }
    }

    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found in a translation catalog.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Unfinished(UnfinishedIssue),
    Identical(IdenticalIssue),
    Conflict(ConflictIssue),
    Duplicate(DuplicateIssue),
    Placeholder(PlaceholderIssue),
    Location(LocationIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog.
    Message(&'a MessageContext),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (usually the source text).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        if self.draft.is_empty() {
            Some(self.context.describe())
        } else {
            Some(format!(
                "{} (draft \"{}\")",
                self.context.describe(),
                single_line(&self.draft)
            ))
        }
    }
}

impl Report for IdenticalIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{}, translation equals source", self.context.describe()))
    }
}

impl Report for ConflictIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}, \"{}\" here but \"{}\" at line {}",
            self.context.describe(),
            single_line(&self.translation),
            single_line(&self.first_translation),
            self.first_line
        ))
    }

    fn hint(&self) -> Option<String> {
        Some("add a <comment> to disambiguate or remove one definition".to_string())
    }
}

impl Report for DuplicateIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}, first defined at line {}",
            self.context.describe(),
            self.first_line
        ))
    }
}

impl Report for PlaceholderIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = vec![self.context.describe()];
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected {}", self.unexpected.join(", ")));
        }
        Some(parts.join(", "))
    }
}

impl Report for LocationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        single_line(&self.context.source)
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let problem = match self.problem {
            LocationProblem::MissingFile => format!("{} does not exist", self.location.filename),
            LocationProblem::LineOutOfRange { line_count } => format!(
                "{} has only {} line(s)",
                self.location, line_count
            ),
        };
        Some(format!("{}, {}", self.context.describe(), problem))
    }

    fn hint(&self) -> Option<String> {
        Some("re-run lupdate to refresh locations".to_string())
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    /// The error followed by its causes, `: `-separated.
    fn message(&self) -> String {
        let mut message = self.error.to_string();
        let mut source = std::error::Error::source(&*self.error);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        message
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
