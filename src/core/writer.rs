//! Serializer producing the layout written by `lupdate`.
//!
//! Output of [`write_ts_string`] for a catalog read from an `lupdate` file is
//! byte-identical to the input, which keeps `tsglot fmt` diffs empty for
//! files that were already canonical. Locations are written in the
//! catalog's [`LocationMode`].

use std::{collections::HashMap, fmt::Write as _, fs, io, path::Path};

use quick_xml::escape::escape;

use crate::core::catalog::{Catalog, Context, Location, LocationMode, Message, Translation};

const INDENT: &str = "    ";

pub fn write_ts_string(catalog: &Catalog) -> String {
    let mut writer = TsWriter::new(catalog.location_mode);
    writer.write_catalog(catalog);
    writer.out
}

pub fn write_ts_file(path: &Path, catalog: &Catalog) -> io::Result<()> {
    fs::write(path, write_ts_string(catalog))
}

/// Escape character data the way `lupdate` does.
///
/// Control characters other than `\n` and `\t`, and non-ASCII whitespace,
/// become `<byte value="xNN"/>` elements.
pub fn protect(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '>' => out.push_str("&gt;"),
            '<' => out.push_str("&lt;"),
            '\'' => out.push_str("&apos;"),
            '\n' | '\t' => out.push(c),
            c if c < ' ' || (!c.is_ascii() && c.is_whitespace()) => {
                write!(out, "<byte value=\"x{:x}\"/>", c as u32).ok();
            }
            c => out.push(c),
        }
    }
    out
}

struct TsWriter {
    out: String,
    mode: LocationMode,
    /// File of the first location of the last message that named one.
    current_file: String,
    /// Last line written per file, the base of the next relative line.
    current_lines: HashMap<String, usize>,
}

impl TsWriter {
    fn new(mode: LocationMode) -> Self {
        Self {
            out: String::new(),
            mode,
            current_file: String::new(),
            current_lines: HashMap::new(),
        }
    }

    fn write_catalog(&mut self, catalog: &Catalog) {
        self.out
            .push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        self.out.push_str("<!DOCTYPE TS>\n");

        self.out.push_str("<TS");
        self.push_attr("version", catalog.version.as_deref());
        self.push_attr("language", catalog.language.as_deref());
        self.push_attr("sourcelanguage", catalog.source_language.as_deref());
        self.out.push_str(">\n");

        for context in &catalog.contexts {
            self.write_context(context);
        }

        self.out.push_str("</TS>\n");
    }

    fn write_context(&mut self, context: &Context) {
        self.out.push_str("<context>\n");
        self.push_element(1, "name", &context.name);
        if let Some(comment) = &context.comment {
            self.push_element(1, "comment", comment);
        }
        for message in &context.messages {
            self.write_message(message);
        }
        self.out.push_str("</context>\n");
    }

    fn write_message(&mut self, message: &Message) {
        self.indent(1);
        self.out.push_str("<message");
        self.push_attr("id", message.id.as_deref());
        if message.numerus {
            self.out.push_str(" numerus=\"yes\"");
        }
        self.out.push_str(">\n");

        self.write_locations(&message.locations);
        self.push_element(2, "source", &message.source);
        let optional = [
            ("oldsource", &message.old_source),
            ("comment", &message.comment),
            ("oldcomment", &message.old_comment),
            ("extracomment", &message.extra_comment),
            ("translatorcomment", &message.translator_comment),
        ];
        for (name, text) in optional {
            if let Some(text) = text {
                self.push_element(2, name, text);
            }
        }
        self.write_translation(&message.translation, message.numerus);
        if let Some(user_data) = &message.user_data {
            self.push_element(2, "userdata", user_data);
        }
        for extra in &message.extras {
            self.push_element(2, &format!("extra-{}", extra.name), &extra.value);
        }

        self.indent(1);
        self.out.push_str("</message>\n");
    }

    fn write_locations(&mut self, locations: &[Location]) {
        let mut message_file = self.current_file.clone();
        for (index, location) in locations.iter().enumerate() {
            let (filename, line) = match self.mode {
                LocationMode::Absolute => (
                    Some(location.filename.as_str()),
                    location.line.map(|line| line.to_string()),
                ),
                LocationMode::Relative => {
                    let line = location.line.map(|line| {
                        let previous = self
                            .current_lines
                            .insert(location.filename.clone(), line)
                            .unwrap_or(0);
                        relative_line(previous, line)
                    });
                    let filename = if location.filename == message_file {
                        None
                    } else {
                        if index == 0 {
                            self.current_file = location.filename.clone();
                        }
                        message_file = location.filename.clone();
                        Some(location.filename.as_str())
                    };
                    (filename, line)
                }
            };

            self.indent(2);
            self.out.push_str("<location");
            self.push_attr("filename", filename);
            self.push_attr("line", line.as_deref());
            self.out.push_str("/>\n");
        }
    }

    fn write_translation(&mut self, translation: &Translation, numerus: bool) {
        self.indent(2);
        self.out.push_str("<translation");
        self.push_attr("type", translation.status.as_attr());
        self.out.push('>');

        if numerus {
            self.out.push('\n');
            for form in &translation.numerus_forms {
                self.push_element(3, "numerusform", form);
            }
            self.indent(2);
        } else {
            self.out.push_str(&protect(&translation.text));
        }
        self.out.push_str("</translation>\n");
    }

    fn push_element(&mut self, level: usize, name: &str, text: &str) {
        self.indent(level);
        writeln!(self.out, "<{name}>{}</{name}>", protect(text)).ok();
    }

    fn push_attr(&mut self, name: &str, value: Option<&str>) {
        if let Some(value) = value {
            write!(self.out, " {}=\"{}\"", name, escape(value)).ok();
        }
    }

    fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.out.push_str(INDENT);
        }
    }
}

/// `+N` or `-N` from `previous` to `line`.
fn relative_line(previous: usize, line: usize) -> String {
    if line >= previous {
        format!("+{}", line - previous)
    } else {
        format!("-{}", previous - line)
    }
}
