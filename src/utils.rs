//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use tsglot::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Align"));
/// assert!(contains_alphabetic("对齐"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("..."));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Render multi-line catalog text on one line for terminal output.
///
/// ```
/// use tsglot::utils::single_line;
///
/// assert_eq!(single_line("Click on options,\nOk to accept."), "Click on options,\\nOk to accept.");
/// ```
pub fn single_line(text: &str) -> String {
    text.replace('\r', "\\r")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}
