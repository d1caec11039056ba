/// Android string-resource parser.
///
/// Only `<string name="...">` elements contribute entries. Character data
/// is accumulated chunk by chunk with surrounding whitespace trimmed and
/// committed when the element closes; markup nested inside a string
/// element is dropped while its text is kept. Missing or malformed input
/// yields an empty catalog so callers can treat absent translations as
/// "nothing to compare against".
use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::catalog::Catalog;

const STRING_TAG: &[u8] = b"string";

pub fn parse_resources(xml: &str) -> Catalog {
    let mut reader = Reader::from_str(xml);
    let mut catalog = Catalog::new();
    let mut current_key: Option<String> = None;
    let mut value = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) if tag.name().as_ref() == STRING_TAG => {
                current_key = name_attribute(&tag);
                value.clear();
            }
            Ok(Event::Empty(tag)) if tag.name().as_ref() == STRING_TAG => {
                if let Some(key) = name_attribute(&tag) {
                    catalog.insert(key, "");
                }
            }
            Ok(Event::End(tag)) if tag.name().as_ref() == STRING_TAG => {
                if let Some(key) = current_key.take() {
                    catalog.insert(key, value.clone());
                }
                value.clear();
            }
            Ok(Event::Text(text)) => {
                if current_key.is_some() {
                    let chunk = text.unescape().unwrap_or_default();
                    let trimmed = chunk.trim();
                    if !trimmed.is_empty() {
                        value.push_str(trimmed);
                    }
                }
            }
            Ok(Event::CData(data)) => {
                if current_key.is_some() {
                    let chunk = String::from_utf8_lossy(&data.into_inner()).into_owned();
                    let trimmed = chunk.trim();
                    if !trimmed.is_empty() {
                        value.push_str(trimmed);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => {
                log::warn!("malformed resource markup: {err}");
                return Catalog::new();
            }
        }
    }
    catalog
}

/// Read and parse a resource file; a locale with no translation file yet
/// is an empty catalog, not an error.
pub fn parse_resources_file(path: &Path) -> Catalog {
    match fs::read_to_string(path) {
        Ok(xml) => parse_resources(&xml),
        Err(err) => {
            log::debug!("no resource file at {}: {err}", path.display());
            Catalog::new()
        }
    }
}

fn name_attribute(tag: &BytesStart<'_>) -> Option<String> {
    for attr in tag.attributes().flatten() {
        if attr.key.as_ref() == b"name" {
            return attr.unescape_value().ok().map(|value| value.into_owned());
        }
    }
    None
}
