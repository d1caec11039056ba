/// Run summaries and their JSON export
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::patch::PatchSummary;

/// Outcome of one language's pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSummary {
    pub language: String,
    pub added: usize,
    pub updated: usize,
    pub duplicates_removed: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl LanguageSummary {
    pub fn from_patch(language: &str, summary: PatchSummary) -> Self {
        Self {
            language: language.to_string(),
            added: summary.added,
            updated: summary.updated,
            duplicates_removed: summary.duplicates_removed,
            error: None,
        }
    }

    pub fn failed(language: &str, error: impl Into<String>) -> Self {
        Self {
            language: language.to_string(),
            added: 0,
            updated: 0,
            duplicates_removed: 0,
            error: Some(error.into()),
        }
    }
}

/// Whole-batch summary, one entry per language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncReport {
    pub generated_at: DateTime<Utc>,
    pub languages: Vec<LanguageSummary>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self {
            generated_at: Utc::now(),
            languages: Vec::new(),
        }
    }

    pub fn push(&mut self, summary: LanguageSummary) {
        self.languages.push(summary);
    }

    pub fn total_added(&self) -> usize {
        self.languages.iter().map(|summary| summary.added).sum()
    }

    pub fn total_updated(&self) -> usize {
        self.languages.iter().map(|summary| summary.updated).sum()
    }

    pub fn failures(&self) -> usize {
        self.languages
            .iter()
            .filter(|summary| summary.error.is_some())
            .count()
    }

    pub fn export_json(&self, path: &Path) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl Default for SyncReport {
    fn default() -> Self {
        Self::new()
    }
}
