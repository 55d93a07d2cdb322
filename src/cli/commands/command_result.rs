use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Lookup(LookupSummary),
    Fmt(FmtSummary),
    Stats(StatsSummary),
    Export(ExportSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct LookupSummary {
    pub displayed: String,
    /// False when the source text was returned as a fallback.
    pub translated: bool,
}

#[derive(Debug)]
pub struct FmtSummary {
    /// Catalogs whose canonical form differs from the file on disk.
    pub changed_files: Vec<String>,
    pub unchanged_count: usize,
    /// Catalogs left untouched because rewriting would drop elements.
    pub skipped: Vec<SkippedCatalog>,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct SkippedCatalog {
    pub path: String,
    /// Unrecognized element names.
    pub elements: Vec<String>,
}

/// Message counts by translation status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub finished: usize,
    pub unfinished: usize,
    /// Obsolete and vanished messages.
    pub obsolete: usize,
}

impl StatusCounts {
    /// Messages still present in code.
    pub fn active(&self) -> usize {
        self.finished + self.unfinished
    }

    /// Finished share of active messages, in percent.
    pub fn percent_finished(&self) -> f64 {
        if self.active() == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / self.active() as f64
        }
    }
}

impl std::ops::AddAssign for StatusCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.finished += rhs.finished;
        self.unfinished += rhs.unfinished;
        self.obsolete += rhs.obsolete;
    }
}

#[derive(Debug)]
pub struct ContextStats {
    pub name: String,
    pub counts: StatusCounts,
}

#[derive(Debug)]
pub struct CatalogStats {
    pub path: String,
    pub language: Option<String>,
    pub contexts: Vec<ContextStats>,
    pub totals: StatusCounts,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub catalogs: Vec<CatalogStats>,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub entry_count: usize,
    /// Destination file; `None` means `json` goes to stdout.
    pub output: Option<String>,
    pub json: String,
}

#[derive(Debug)]
pub struct InitSummary {
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running tsglot commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found during the check.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalogs that were loaded.
    pub catalogs_checked: usize,
    /// Number of messages across those catalogs.
    pub messages_checked: usize,
}
