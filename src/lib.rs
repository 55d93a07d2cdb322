//! Tsglot - Qt Linguist translation catalog toolkit
//!
//! Tsglot is a CLI tool and library for Qt `.ts` translation catalogs. It
//! loads a catalog into a read-only lookup table that falls back to the
//! source text, writes catalogs back in `lupdate` layout, and checks them
//! for unfinished, conflicting or inconsistent translations.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, reader, writer and translator
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Checks over loaded catalogs
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
pub mod utils;
