use std::io::{Cursor, Read};

use lazy_static::lazy_static;
use regex::Regex;
use zip::ZipArchive;

use crate::decode::DecodeError;

const DOCUMENT_PART: &str = "word/document.xml";
/// Upper bound on the inflated size of any single XML part.
const MAX_PART_BYTES: u64 = 16 * 1024 * 1024;

lazy_static! {
    // Paragraph properties hold tab-stop definitions that look like `<w:tab/>` runs.
    static ref PARAGRAPH_PROPS_RE: Regex =
        Regex::new(r"(?s)<w:pPr\b[^>]*/>|<w:pPr\b[^>]*>.*?</w:pPr>").unwrap();
    static ref LINE_BREAK_RE: Regex =
        Regex::new(r"<w:(?:br|cr)\b[^>]*/>|<w:p\b[^>]*/>|</w:p>").unwrap();
    static ref TAB_RE: Regex = Regex::new(r"<w:tab\b[^>]*/>").unwrap();
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref HEADER_PART_RE: Regex = Regex::new(r"^word/header\d*\.xml$").unwrap();
    static ref FOOTER_PART_RE: Regex = Regex::new(r"^word/footer\d*\.xml$").unwrap();
}

/// Extracts text from a DOCX container: headers, then the main body, then footers.
pub fn extract_text(bytes: &[u8]) -> Result<String, DecodeError> {
    extract_text_bounded(bytes, MAX_PART_BYTES)
}

fn extract_text_bounded(bytes: &[u8], part_limit: u64) -> Result<String, DecodeError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| DecodeError::Docx(format!("not a valid DOCX archive: {e}")))?;

    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    if !names.iter().any(|n| n == DOCUMENT_PART) {
        return Err(DecodeError::Docx(format!("{DOCUMENT_PART} not found in archive")));
    }

    let headers = names.iter().filter(|n| HEADER_PART_RE.is_match(n));
    let footers = names.iter().filter(|n| FOOTER_PART_RE.is_match(n));
    let parts: Vec<&String> = headers
        .chain(names.iter().filter(|n| *n == DOCUMENT_PART))
        .chain(footers)
        .collect();

    let mut text = String::new();
    for part in parts {
        let xml = read_part(&mut archive, part, part_limit)?;
        text.push_str(&xml_to_text(&xml));
    }
    Ok(text)
}

fn read_part(
    archive: &mut ZipArchive<Cursor<&[u8]>>,
    name: &str,
    limit: u64,
) -> Result<String, DecodeError> {
    let file = archive
        .by_name(name)
        .map_err(|e| DecodeError::Docx(format!("failed to open {name}: {e}")))?;
    let mut raw = Vec::new();
    file.take(limit + 1)
        .read_to_end(&mut raw)
        .map_err(|e| DecodeError::Docx(format!("failed to read {name}: {e}")))?;
    if raw.len() as u64 > limit {
        return Err(DecodeError::Docx(format!("{name} inflates beyond {limit} bytes")));
    }
    String::from_utf8(raw).map_err(|e| DecodeError::Docx(format!("{name} is not UTF-8: {e}")))
}

/// Converts WordprocessingML to plain text. Paragraph ends (including empty
/// `<w:p/>` paragraphs) and breaks become newlines, run tabs become `\t`, and
/// paragraph properties along with all other markup are dropped.
fn xml_to_text(xml: &str) -> String {
    let text = PARAGRAPH_PROPS_RE.replace_all(xml, "");
    let text = LINE_BREAK_RE.replace_all(&text, "\n");
    let text = TAB_RE.replace_all(&text, "\t");
    let text = TAG_RE.replace_all(&text, "");
    unescape_xml(&text)
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
