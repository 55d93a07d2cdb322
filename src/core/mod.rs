//! Core catalog engine: data model, reader, writer, lookup and project
//! loading. Usable as a library without the CLI layer.

pub mod catalog;
pub mod context;
pub mod error;
pub mod file_scanner;
pub mod parsers;
pub mod translator;
pub mod writer;

pub use catalog::{
    Catalog, Context, Entry, EntryRecord, Extra, Location, LocationMode, Message, Translation,
    TranslationStatus,
};
pub use context::{CheckContext, LoadedCatalog};
pub use error::{TsError, TsResult};
pub use parsers::ts::{parse_ts_file, parse_ts_str};
pub use translator::Translator;
pub use writer::{write_ts_file, write_ts_string};
