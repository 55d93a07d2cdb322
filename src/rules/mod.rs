//! Rule implementations for tsglot.
//!
//! Each rule is a pure function over one loaded catalog plus the ignore
//! predicate, wrapped by a `check_*_issues` function that runs it over every
//! catalog of a [`CheckContext`](crate::core::CheckContext).
//!
//! ## Module Structure
//!
//! - `helpers`: Shared conversions from catalog entries to issue contexts
//! - `unfinished`: Translations flagged unfinished
//! - `identical`: Finished translations equal to their source
//! - `duplicates`: Repeated keys (conflicting or identical)
//! - `placeholder`: `%1`/`%n` marker mismatches
//! - `location`: Stale provenance references

pub mod duplicates;
pub mod helpers;
pub mod identical;
pub mod location;
pub mod placeholder;
pub mod unfinished;
