//! Helper functions shared by rule implementations.

use crate::{
    core::{Entry, LoadedCatalog},
    issues::{MessageContext, MessageLocation},
};

/// Build the issue context for a message of `loaded`.
pub fn message_context(loaded: &LoadedCatalog, entry: Entry<'_>) -> MessageContext {
    MessageContext::new(
        MessageLocation::new(&loaded.path, entry.message.line, 1),
        entry.context,
        entry.message.source.clone(),
        entry.message.comment.clone(),
    )
}

/// Sort by catalog file, then line, for deterministic output.
pub fn sort_by_location<T>(issues: &mut [T], context_of: impl Fn(&T) -> &MessageContext) {
    issues.sort_by(|a, b| {
        let (a, b) = (context_of(a), context_of(b));
        a.file_path()
            .cmp(b.file_path())
            .then_with(|| a.line().cmp(&b.line()))
    });
}
