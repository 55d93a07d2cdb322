//! In-memory model of a Qt Linguist translation catalog.
//!
//! A [`Catalog`] mirrors the `<TS>` document: an ordered list of
//! [`Context`]s, each owning an ordered list of [`Message`]s. Order is kept
//! as read so that writing a catalog back reproduces the original layout.

use serde::Serialize;

/// Default `version` attribute written by current `lupdate` releases.
pub const DEFAULT_TS_VERSION: &str = "2.1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// `version` attribute of the `<TS>` root.
    pub version: Option<String>,
    /// Target language, e.g. `zh_CN`.
    pub language: Option<String>,
    /// Language of the source texts, if declared.
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
    /// How `<location>` lines were written; the writer keeps the same form.
    pub location_mode: LocationMode,
    /// Elements the reader did not recognize and skipped, in first-seen
    /// order. Writing such a catalog loses them.
    pub unknown_elements: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            version: Some(DEFAULT_TS_VERSION.to_string()),
            language: None,
            source_language: None,
            contexts: Vec::new(),
            location_mode: LocationMode::default(),
            unknown_elements: Vec::new(),
        }
    }
}

/// Form of `line` attributes in `<location>` elements.
///
/// `lupdate -locations relative` writes `line="+N"` deltas against the
/// previous line in the same file and omits a `filename` that repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LocationMode {
    #[default]
    Absolute,
    Relative,
}

/// A group of messages owned by one UI component (usually a class name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    /// Context-level `<comment>`.
    pub comment: Option<String>,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: None,
            messages: Vec::new(),
        }
    }
}

/// Place in application code where a source text appears.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Location {
    pub filename: String,
    pub line: Option<usize>,
}

impl Location {
    pub fn new(filename: impl Into<String>, line: usize) -> Self {
        Self {
            filename: filename.into(),
            line: Some(line),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.filename, line),
            None => write!(f, "{}", self.filename),
        }
    }
}

/// Value of the `type` attribute on `<translation>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    #[default]
    Finished,
    Unfinished,
    /// Source text no longer found by an old `lupdate`.
    Obsolete,
    /// Source text no longer found by `lupdate` 5+.
    Vanished,
}

impl TranslationStatus {
    /// Attribute value, `None` for finished translations (no attribute).
    pub fn as_attr(self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            TranslationStatus::Unfinished => Some("unfinished"),
            TranslationStatus::Obsolete => Some("obsolete"),
            TranslationStatus::Vanished => Some("vanished"),
        }
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(TranslationStatus::Unfinished),
            "obsolete" => Some(TranslationStatus::Obsolete),
            "vanished" => Some(TranslationStatus::Vanished),
            _ => None,
        }
    }

    /// Whether a loader should use the translation text at all.
    pub fn is_usable(self) -> bool {
        self == TranslationStatus::Finished
    }
}

impl std::fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationStatus::Finished => write!(f, "finished"),
            TranslationStatus::Unfinished => write!(f, "unfinished"),
            TranslationStatus::Obsolete => write!(f, "obsolete"),
            TranslationStatus::Vanished => write!(f, "vanished"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub status: TranslationStatus,
    /// Singular text. Empty for numerus messages.
    pub text: String,
    /// Plural forms of a numerus message, in the target language's order.
    pub numerus_forms: Vec<String>,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Finished,
            text: text.into(),
            numerus_forms: Vec::new(),
        }
    }

    pub fn unfinished(text: impl Into<String>) -> Self {
        Self {
            status: TranslationStatus::Unfinished,
            text: text.into(),
            numerus_forms: Vec::new(),
        }
    }

    /// The text a loader would pick: singular text, or the first plural form.
    pub fn primary_text(&self) -> &str {
        if self.text.is_empty() {
            self.numerus_forms.first().map(String::as_str).unwrap_or("")
        } else {
            &self.text
        }
    }
}

/// `<extra-NAME>` element carried by a message (e.g. `extra-po-flags`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extra {
    /// Element name without the `extra-` prefix.
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// 1-based line of the `<message>` start tag in the catalog file.
    /// Zero for messages built in memory.
    pub line: usize,
    /// `id` attribute for id-based translations (`qtTrId`).
    pub id: Option<String>,
    pub numerus: bool,
    pub locations: Vec<Location>,
    pub source: String,
    /// Source text before the last `lupdate` merge.
    pub old_source: Option<String>,
    /// Disambiguating comment; part of the lookup key.
    pub comment: Option<String>,
    pub old_comment: Option<String>,
    /// Note for translators extracted from code (`//:` comments).
    pub extra_comment: Option<String>,
    /// Note written by a translator.
    pub translator_comment: Option<String>,
    pub translation: Translation,
    pub user_data: Option<String>,
    pub extras: Vec<Extra>,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: Translation) -> Self {
        Self {
            source: source.into(),
            translation,
            ..Default::default()
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn comment_str(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// The string an application shows for this message: the translation when
    /// it is finished and non-empty, the source text otherwise.
    pub fn displayed(&self) -> &str {
        let text = self.translation.primary_text();
        if self.translation.status.is_usable() && !text.is_empty() {
            text
        } else {
            &self.source
        }
    }
}

/// Borrowed view of one message together with its owning context name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub context: &'a str,
    pub message: &'a Message,
}

/// Owned snapshot of the data that must survive a write/read cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    pub context: String,
    pub source: String,
    pub comment: Option<String>,
    pub translation: String,
    pub numerus_forms: Vec<String>,
    pub status: TranslationStatus,
    pub locations: Vec<Location>,
}

impl From<Entry<'_>> for EntryRecord {
    fn from(entry: Entry<'_>) -> Self {
        let message = entry.message;
        Self {
            context: entry.context.to_string(),
            source: message.source.clone(),
            comment: message.comment.clone(),
            translation: message.translation.text.clone(),
            numerus_forms: message.translation.numerus_forms.clone(),
            status: message.translation.status,
            locations: message.locations.clone(),
        }
    }
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Default::default()
        }
    }

    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Return the named context, appending an empty one if missing.
    pub fn context_mut(&mut self, name: &str) -> &mut Context {
        let index = match self.contexts.iter().position(|c| c.name == name) {
            Some(index) => index,
            None => {
                self.contexts.push(Context::new(name));
                self.contexts.len() - 1
            }
        };
        &mut self.contexts[index]
    }

    /// Iterate over all messages in document order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.contexts.iter().flat_map(|context| {
            context.messages.iter().map(move |message| Entry {
                context: &context.name,
                message,
            })
        })
    }

    pub fn records(&self) -> Vec<EntryRecord> {
        self.entries().map(EntryRecord::from).collect()
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }
}
