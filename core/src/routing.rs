/// Routing and rendering attribute extraction.
///
/// The alternate mode: instead of reconciling whole catalogs, pull the
/// routing/rendering attribute entries out of each Android catalog and
/// replace the matching block of the language's `.strings` file
/// wholesale. The reference language is included here since its catalog
/// carries the attribute strings too.
use std::collections::BTreeMap;
use std::fs;

use crate::config::SyncConfig;
use crate::formats::{strings, xml};
use crate::languages;
use crate::report::{LanguageSummary, SyncReport};
use crate::sync::write_atomic;

/// Key prefixes marking routing and rendering attribute entries.
pub const ROUTING_KEY_PREFIXES: &[&str] = &[
    "routeInfo_",
    "routing_attr_",
    "rendering_attr_",
    "rendering_value_",
];

pub fn is_routing_key(key: &str) -> bool {
    ROUTING_KEY_PREFIXES
        .iter()
        .any(|prefix| key.starts_with(prefix))
}

pub fn run_routing(config: &SyncConfig) -> SyncReport {
    let mut report = SyncReport::new();
    for language in languages::all_languages() {
        report.push(extract_language(config, language));
    }
    report
}

fn extract_language(config: &SyncConfig, language: &str) -> LanguageSummary {
    let path = config.ios_strings_path(language);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("{language}: skipping, cannot read {}: {err}", path.display());
            return LanguageSummary::failed(language, err.to_string());
        }
    };

    let android = match config.android_strings_path(language) {
        Some(path) => xml::parse_resources_file(&path),
        None => return LanguageSummary::failed(language, "language not in table"),
    };
    let attributes: BTreeMap<&str, &str> = android
        .iter()
        .filter(|(key, _)| is_routing_key(key))
        .collect();

    let mut document = strings::parse(&text);
    document.retain(|record| {
        record
            .key()
            .map(|key| !is_routing_key(key))
            .unwrap_or(true)
    });
    document.trim_trailing_blanks();
    for (key, value) in &attributes {
        document.append_entry(key, value);
    }

    log::info!("{language}: extracted {} attributes", attributes.len());
    match write_atomic(&path, document.to_text().as_bytes()) {
        Ok(()) => LanguageSummary {
            language: language.to_string(),
            added: attributes.len(),
            updated: 0,
            duplicates_removed: 0,
            error: None,
        },
        Err(err) => {
            log::error!("{language}: {err}");
            LanguageSummary::failed(language, err.to_string())
        }
    }
}
