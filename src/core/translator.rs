//! Read-only lookup table built from a loaded catalog.
//!
//! Lookup follows the order an application loader uses:
//! 1. `(context, source, comment)`
//! 2. `(context, source, "")` when the comment is non-empty
//!
//! A hit only counts when the translation is finished and non-empty;
//! otherwise [`Translator::translate`] returns the source text unchanged.

use std::collections::HashMap;

use crate::core::catalog::Catalog;

/// comment -> displayable translation, `None` for a message that exists but
/// has nothing to show
type CommentMap = HashMap<String, Option<String>>;

#[derive(Debug, Default, Clone)]
pub struct Translator {
    language: Option<String>,
    /// context -> source -> comment -> translation
    table: HashMap<String, HashMap<String, CommentMap>>,
    len: usize,
}

impl Translator {
    /// Build the table. When a key occurs more than once the first
    /// occurrence wins, even if it is unfinished.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let mut table: HashMap<String, HashMap<String, CommentMap>> = HashMap::new();
        let mut len = 0;

        for entry in catalog.entries() {
            let message = entry.message;
            let comments = table
                .entry(entry.context.to_string())
                .or_default()
                .entry(message.source.clone())
                .or_default();
            if comments.contains_key(message.comment_str()) {
                continue;
            }

            let text = message.translation.primary_text();
            let usable = message.translation.status.is_usable() && !text.is_empty();
            if usable {
                len += 1;
            }
            comments.insert(
                message.comment_str().to_string(),
                usable.then(|| text.to_string()),
            );
        }

        tracing::debug!(
            entries = len,
            language = catalog.language.as_deref().unwrap_or("?"),
            "built translation table"
        );

        Self {
            language: catalog.language.clone(),
            table,
            len,
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Number of usable translations.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Find a usable translation, without falling back to the source text.
    ///
    /// The empty-comment entry is only consulted when no message carries
    /// `comment` itself.
    pub fn lookup(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&str> {
        let comments = self.table.get(context)?.get(source)?;
        let comment = comment.unwrap_or("");
        let found = match comments.get(comment) {
            Some(found) => found,
            None if !comment.is_empty() => comments.get("")?,
            None => return None,
        };
        found.as_deref()
    }

    /// The string to display: the translation when one is usable, otherwise
    /// `source` itself.
    pub fn translate<'a>(&'a self, context: &str, source: &'a str, comment: Option<&str>) -> &'a str {
        self.lookup(context, source, comment).unwrap_or(source)
    }
}
