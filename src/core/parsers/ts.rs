//! Reader for Qt Linguist `.ts` catalogs.
//!
//! The reader is a small recursive-descent walk over `quick-xml` events.
//! Elements it does not model are skipped so that catalogs produced by newer
//! `lupdate` versions still load; their names are kept in
//! [`Catalog::unknown_elements`] so callers can refuse to rewrite the file.

use std::{borrow::Cow, collections::HashMap, fs, path::Path};

use quick_xml::{
    Reader,
    escape::unescape,
    events::{BytesStart, Event},
};

use crate::core::{
    catalog::{
        Catalog, Context, Extra, Location, LocationMode, Message, Translation, TranslationStatus,
    },
    error::{TsError, TsResult},
};

pub fn parse_ts_file(path: &Path) -> TsResult<Catalog> {
    let content = fs::read_to_string(path).map_err(|source| TsError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    parse_ts_str(&content)
}

pub fn parse_ts_str(content: &str) -> TsResult<Catalog> {
    TsReader::new(content).read_document()
}

/// Cheap sniff used during discovery: TypeScript sources share the `.ts`
/// extension, so only files that start like an XML document are parsed.
pub fn looks_like_ts(content: &str) -> bool {
    let head = content.trim_start_matches('\u{feff}').trim_start();
    head.starts_with("<?xml") || head.starts_with("<!DOCTYPE TS") || head.starts_with("<TS")
}

/// Build an index of line start byte offsets for O(log n) line lookups.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Returns the 1-based line containing `offset`.
fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// XML end-of-line handling: `\r\n` and lone `\r` read as `\n`.
///
/// Runs on raw character data, so `&#13;` still yields a carriage return.
fn normalize_newlines(raw: &str) -> Cow<'_, str> {
    if raw.contains('\r') {
        Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(raw)
    }
}

struct TsReader<'a> {
    reader: Reader<&'a [u8]>,
    line_index: Vec<usize>,
    /// File of the first location of the last message that named one.
    /// A message's locations without `filename` start from it.
    current_file: String,
    /// Line reached by relative locations, per file.
    current_lines: HashMap<String, usize>,
    relative: bool,
    unknown: Vec<String>,
}

impl<'a> TsReader<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            reader: Reader::from_str(content),
            line_index: build_line_index(content),
            current_file: String::new(),
            current_lines: HashMap::new(),
            relative: false,
            unknown: Vec::new(),
        }
    }

    fn line(&self) -> usize {
        offset_to_line(&self.line_index, self.reader.buffer_position() as usize)
    }

    fn next_event(&mut self) -> TsResult<Event<'a>> {
        self.reader.read_event().map_err(|e| {
            let line = offset_to_line(&self.line_index, self.reader.error_position() as usize);
            TsError::Xml {
                line,
                message: e.to_string(),
            }
        })
    }

    fn xml_error(&self, err: impl std::fmt::Display) -> TsError {
        TsError::Xml {
            line: self.line(),
            message: err.to_string(),
        }
    }

    fn attributes(&self, start: &BytesStart<'_>) -> TsResult<HashMap<String, String>> {
        let mut attrs = HashMap::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| self.xml_error(e))?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr.unescape_value().map_err(|e| self.xml_error(e))?;
            attrs.insert(key, value.into_owned());
        }
        Ok(attrs)
    }

    fn read_document(mut self) -> TsResult<Catalog> {
        let mut catalog = loop {
            match self.next_event()? {
                Event::Start(start) => {
                    let mut catalog = self.read_root(&start)?;
                    self.read_ts_body(&mut catalog)?;
                    break catalog;
                }
                // `<TS/>`: valid, empty catalog.
                Event::Empty(start) => break self.read_root(&start)?,
                Event::Eof => {
                    return Err(TsError::NotATranslationFile {
                        found: String::new(),
                    });
                }
                _ => {}
            }
        };

        if self.relative {
            catalog.location_mode = LocationMode::Relative;
        }
        if !self.unknown.is_empty() {
            tracing::debug!(elements = ?self.unknown, "skipped unknown elements");
        }
        catalog.unknown_elements = self.unknown;
        Ok(catalog)
    }

    fn read_root(&self, start: &BytesStart<'_>) -> TsResult<Catalog> {
        let name = element_name(start);
        if name != "TS" {
            return Err(TsError::NotATranslationFile {
                found: name.into_owned(),
            });
        }
        let mut attrs = self.attributes(start)?;
        Ok(Catalog {
            version: attrs.remove("version"),
            language: attrs.remove("language"),
            source_language: attrs.remove("sourcelanguage"),
            ..Catalog::default()
        })
    }

    fn read_ts_body(&mut self, catalog: &mut Catalog) -> TsResult<()> {
        loop {
            match self.next_event()? {
                Event::Start(start) => match start.name().as_ref() {
                    b"context" => {
                        let context = self.read_context()?;
                        catalog.contexts.push(context);
                    }
                    _ => self.skip_unknown(&start)?,
                },
                Event::Empty(start) => self.record_unknown(&start),
                Event::End(_) => return Ok(()),
                Event::Eof => {
                    return Err(TsError::UnexpectedEof {
                        element: "TS".to_string(),
                    });
                }
                _ => {}
            }
        }
    }

    fn read_context(&mut self) -> TsResult<Context> {
        let start_line = self.line();
        let mut name: Option<String> = None;
        let mut comment = None;
        let mut messages = Vec::new();

        loop {
            match self.next_event()? {
                Event::Start(start) => match start.name().as_ref() {
                    b"name" => name = Some(self.read_text("name")?),
                    b"comment" => comment = Some(self.read_text("comment")?),
                    b"message" => {
                        let message = self.read_message(&start)?;
                        messages.push(message);
                    }
                    _ => self.skip_unknown(&start)?,
                },
                Event::Empty(start) => match start.name().as_ref() {
                    b"name" => name = Some(String::new()),
                    b"comment" => comment = Some(String::new()),
                    _ => self.record_unknown(&start),
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(TsError::UnexpectedEof {
                        element: "context".to_string(),
                    });
                }
                _ => {}
            }
        }

        let name = name.ok_or(TsError::MissingElement {
            element: "name",
            parent: "context",
            line: start_line,
        })?;
        Ok(Context {
            name,
            comment,
            messages,
        })
    }

    fn read_message(&mut self, start: &BytesStart<'_>) -> TsResult<Message> {
        let line = self.line();
        let mut attrs = self.attributes(start)?;
        let numerus = attrs.get("numerus").is_some_and(|v| v == "yes");

        let mut message = Message {
            line,
            id: attrs.remove("id"),
            numerus,
            ..Default::default()
        };
        let mut has_source = false;
        let mut message_file = self.current_file.clone();

        loop {
            match self.next_event()? {
                Event::Empty(start) => match start.name().as_ref() {
                    b"location" => {
                        let first = message.locations.is_empty();
                        let location = self.read_location(&start, &mut message_file, first)?;
                        message.locations.push(location);
                    }
                    b"translation" => {
                        message.translation.status = self.read_status(&start)?;
                    }
                    b"source" => has_source = true,
                    b"oldsource" => message.old_source = Some(String::new()),
                    b"comment" => message.comment = Some(String::new()),
                    b"oldcomment" => message.old_comment = Some(String::new()),
                    b"extracomment" => message.extra_comment = Some(String::new()),
                    b"translatorcomment" => message.translator_comment = Some(String::new()),
                    b"userdata" => message.user_data = Some(String::new()),
                    name if name.starts_with(b"extra-") => {
                        message.extras.push(Extra {
                            name: extra_name(&start),
                            value: String::new(),
                        });
                    }
                    _ => self.record_unknown(&start),
                },
                Event::Start(start) => match start.name().as_ref() {
                    b"location" => {
                        let first = message.locations.is_empty();
                        let location = self.read_location(&start, &mut message_file, first)?;
                        message.locations.push(location);
                        self.skip_element(&start)?;
                    }
                    b"source" => {
                        message.source = self.read_text("source")?;
                        has_source = true;
                    }
                    b"oldsource" => message.old_source = Some(self.read_text("oldsource")?),
                    b"comment" => message.comment = Some(self.read_text("comment")?),
                    b"oldcomment" => message.old_comment = Some(self.read_text("oldcomment")?),
                    b"extracomment" => {
                        message.extra_comment = Some(self.read_text("extracomment")?);
                    }
                    b"translatorcomment" => {
                        message.translator_comment = Some(self.read_text("translatorcomment")?);
                    }
                    b"translation" => {
                        message.translation = self.read_translation(&start, numerus)?;
                    }
                    b"userdata" => message.user_data = Some(self.read_text("userdata")?),
                    name if name.starts_with(b"extra-") => {
                        let name = extra_name(&start);
                        let value = self.read_text(&format!("extra-{name}"))?;
                        message.extras.push(Extra { name, value });
                    }
                    _ => self.skip_unknown(&start)?,
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(TsError::UnexpectedEof {
                        element: "message".to_string(),
                    });
                }
                _ => {}
            }
        }

        if !has_source {
            return Err(TsError::MissingElement {
                element: "source",
                parent: "message",
                line,
            });
        }
        Ok(message)
    }

    /// Read one `<location>`.
    ///
    /// A missing `filename` means the file of the previous location in the
    /// same message (or of the previous message, for the first one). A named
    /// file on the first location becomes the default for later messages.
    fn read_location(
        &mut self,
        start: &BytesStart<'_>,
        message_file: &mut String,
        first: bool,
    ) -> TsResult<Location> {
        let mut attrs = self.attributes(start)?;
        let filename = match attrs.remove("filename") {
            Some(filename) => {
                if first {
                    self.current_file = filename.clone();
                }
                *message_file = filename.clone();
                filename
            }
            None => {
                self.relative = true;
                message_file.clone()
            }
        };

        let line = match attrs.remove("line") {
            None => None,
            Some(raw) => Some(self.resolve_line(&filename, &raw)?),
        };
        Ok(Location { filename, line })
    }

    /// Resolve `N`, or `+N`/`-N` against the line the previous relative
    /// location reached in the same file.
    fn resolve_line(&mut self, filename: &str, raw: &str) -> TsResult<usize> {
        let invalid = || TsError::InvalidAttribute {
            attribute: "line",
            value: raw.to_string(),
            line: self.line(),
        };

        let (sign, digits) = match raw.as_bytes().first() {
            Some(b'+') => (1, &raw[1..]),
            Some(b'-') => (-1, &raw[1..]),
            _ => return raw.parse().map_err(|_| invalid()),
        };
        let delta: usize = digits.parse().map_err(|_| invalid())?;
        let base = self.current_lines.get(filename).copied().unwrap_or(0);
        let line = if sign > 0 {
            base + delta
        } else {
            base.checked_sub(delta).ok_or_else(invalid)?
        };

        self.relative = true;
        self.current_lines.insert(filename.to_string(), line);
        Ok(line)
    }

    fn read_status(&self, start: &BytesStart<'_>) -> TsResult<TranslationStatus> {
        let attrs = self.attributes(start)?;
        match attrs.get("type") {
            None => Ok(TranslationStatus::Finished),
            Some(value) => {
                TranslationStatus::from_attr(value).ok_or_else(|| TsError::InvalidAttribute {
                    attribute: "type",
                    value: value.clone(),
                    line: self.line(),
                })
            }
        }
    }

    fn read_translation(&mut self, start: &BytesStart<'_>, numerus: bool) -> TsResult<Translation> {
        let status = self.read_status(start)?;
        if !numerus {
            let text = self.read_text("translation")?;
            return Ok(Translation {
                status,
                text,
                numerus_forms: Vec::new(),
            });
        }

        let mut numerus_forms = Vec::new();
        loop {
            match self.next_event()? {
                Event::Start(start) if start.name().as_ref() == b"numerusform" => {
                    numerus_forms.push(self.read_text("numerusform")?);
                }
                Event::Empty(start) if start.name().as_ref() == b"numerusform" => {
                    numerus_forms.push(String::new());
                }
                Event::Start(start) => self.skip_unknown(&start)?,
                Event::Empty(start) => self.record_unknown(&start),
                Event::End(_) => break,
                Event::Eof => {
                    return Err(TsError::UnexpectedEof {
                        element: "translation".to_string(),
                    });
                }
                _ => {}
            }
        }
        Ok(Translation {
            status,
            text: String::new(),
            numerus_forms,
        })
    }

    /// Collect character data up to the matching end tag.
    ///
    /// `<byte value="x1b"/>` is how `lupdate` stores control characters.
    fn read_text(&mut self, element: &str) -> TsResult<String> {
        let mut text = String::new();
        loop {
            match self.next_event()? {
                Event::Text(t) => {
                    let raw = std::str::from_utf8(&t).map_err(|e| self.xml_error(e))?;
                    let normalized = normalize_newlines(raw);
                    let unescaped = unescape(&normalized).map_err(|e| self.xml_error(e))?;
                    text.push_str(&unescaped);
                }
                Event::CData(data) => {
                    let raw = std::str::from_utf8(&data).map_err(|e| self.xml_error(e))?;
                    text.push_str(&normalize_newlines(raw));
                }
                Event::Empty(start) if start.name().as_ref() == b"byte" => {
                    let attrs = self.attributes(&start)?;
                    let raw = attrs.get("value").map(String::as_str).unwrap_or("");
                    text.push(self.decode_byte(raw)?);
                }
                Event::Start(start) | Event::Empty(start) => {
                    return Err(TsError::UnexpectedElement {
                        element: element_name(&start).into_owned(),
                        parent: element.to_string(),
                        line: self.line(),
                    });
                }
                Event::End(_) => return Ok(text),
                Event::Eof => {
                    return Err(TsError::UnexpectedEof {
                        element: element.to_string(),
                    });
                }
                _ => {}
            }
        }
    }

    fn decode_byte(&self, raw: &str) -> TsResult<char> {
        let value = match raw.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => raw.parse().ok(),
        };
        value
            .and_then(char::from_u32)
            .ok_or_else(|| TsError::InvalidAttribute {
                attribute: "value",
                value: raw.to_string(),
                line: self.line(),
            })
    }

    fn record_unknown(&mut self, start: &BytesStart<'_>) {
        let name = element_name(start);
        if !self.unknown.iter().any(|known| *known == name) {
            self.unknown.push(name.into_owned());
        }
    }

    fn skip_unknown(&mut self, start: &BytesStart<'_>) -> TsResult<()> {
        self.record_unknown(start);
        self.skip_element(start)
    }

    fn skip_element(&mut self, start: &BytesStart<'_>) -> TsResult<()> {
        let name = element_name(start).into_owned();
        let mut depth = 1usize;
        while depth > 0 {
            match self.next_event()? {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::Eof => return Err(TsError::UnexpectedEof { element: name }),
                _ => {}
            }
        }
        Ok(())
    }
}

fn element_name<'b>(start: &'b BytesStart<'_>) -> Cow<'b, str> {
    String::from_utf8_lossy(start.name().into_inner())
}

/// `extra-po-flags` -> `po-flags`
fn extra_name(start: &BytesStart<'_>) -> String {
    let name = element_name(start);
    name.strip_prefix("extra-").unwrap_or(&name).to_string()
}
