//! Cobertura XML format parser

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

use super::{CoverageSummary, ReportError};

/// Root attribute carrying the aggregate line-coverage ratio
pub const LINE_RATE_ATTR: &str = "line-rate";

/// Parse a Cobertura XML file
pub fn parse_cobertura(path: &Path) -> Result<CoverageSummary, ReportError> {
    let content = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_cobertura_string(&content)
}

/// Parse Cobertura XML content from a string.
///
/// The whole document is scanned, so a truncated or otherwise malformed
/// report is rejected even when its root already carried a usable
/// `line-rate`. Only the root element's attributes are kept; the rest of
/// the structure (packages, classes, lines) is ignored.
pub fn parse_cobertura_string(content: &str) -> Result<CoverageSummary, ReportError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut root = RootElement::default();
    let mut depth = 0usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                root.open(e, depth)?;
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => root.open(e, depth)?,
            Ok(Event::End(_)) => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| malformed("closing tag without matching opening tag"))?;
            }
            Ok(Event::Text(ref t)) => {
                // Bare `&` and undefined entities fail here
                t.unescape().map_err(|err| malformed(err.to_string()))?;
                if depth == 0 && t.iter().any(|b| !b.is_ascii_whitespace()) {
                    return Err(malformed(outside_root_message(root.seen)));
                }
            }
            Ok(Event::CData(_)) => {
                if depth == 0 {
                    return Err(malformed(outside_root_message(root.seen)));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(malformed(format!(
                    "{} (at byte {})",
                    e,
                    reader.buffer_position()
                )))
            }
            // Declaration, comments, processing instructions, doctype
            _ => {}
        }
        buf.clear();
    }

    if depth > 0 {
        return Err(malformed("unexpected end of document, unclosed element"));
    }
    if !root.seen {
        return Err(malformed("no root element found"));
    }

    let raw = root.line_rate.ok_or(ReportError::MissingLineRate)?;
    Ok(CoverageSummary {
        line_rate: parse_rate(&raw)?,
    })
}

#[derive(Debug, Default)]
struct RootElement {
    seen: bool,
    line_rate: Option<String>,
}

impl RootElement {
    /// Record an opening (or self-closing) tag found at `depth`
    fn open(&mut self, e: &BytesStart, depth: usize) -> Result<(), ReportError> {
        check_name(e.name().as_ref(), "element")?;
        let line_rate = scan_attributes(e)?;

        if depth == 0 {
            if self.seen {
                return Err(malformed("junk after document element"));
            }
            self.seen = true;
            self.line_rate = line_rate;
        }

        Ok(())
    }
}

/// Validate every attribute of an element, returning its `line-rate` if present
fn scan_attributes(e: &BytesStart) -> Result<Option<String>, ReportError> {
    let mut line_rate = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|err| malformed(err.to_string()))?;
        check_name(attr.key.as_ref(), "attribute")?;

        let value = attr
            .unescape_value()
            .map_err(|err| malformed(err.to_string()))?;
        if attr.key.as_ref() == LINE_RATE_ATTR.as_bytes() {
            line_rate = Some(value.into_owned());
        }
    }

    Ok(line_rate)
}

/// Reject names that are not XML names. Non-ASCII bytes are let through
/// without checking their Unicode class.
fn check_name(name: &[u8], kind: &str) -> Result<(), ReportError> {
    let is_start = |b: u8| b.is_ascii_alphabetic() || b == b'_' || b == b':' || !b.is_ascii();
    let is_rest = |b: u8| is_start(b) || b.is_ascii_digit() || b == b'-' || b == b'.';

    match name.split_first() {
        Some((&first, rest)) if is_start(first) && rest.iter().all(|&b| is_rest(b)) => Ok(()),
        _ => Err(malformed(format!(
            "invalid {} name {:?}",
            kind,
            String::from_utf8_lossy(name)
        ))),
    }
}

fn parse_rate(raw: &str) -> Result<f64, ReportError> {
    match raw.trim().parse::<f64>() {
        Ok(rate) if rate.is_finite() => Ok(rate),
        _ => Err(ReportError::InvalidLineRate(raw.to_string())),
    }
}

fn outside_root_message(root_seen: bool) -> &'static str {
    if root_seen {
        "junk after document element"
    } else {
        "text before root element"
    }
}

fn malformed(message: impl Into<String>) -> ReportError {
    ReportError::Malformed(message.into())
}
