//! File parsers for translation catalogs.
//!
//! - `ts`: Qt Linguist `.ts` XML reader

pub mod ts;
