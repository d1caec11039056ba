/// Batch translation sync across the language table.
///
/// Two phases. The bootstrap reconciles the reference-language catalogs
/// of both trees once; the resulting verified key set seeds every other
/// language. The cascade then walks the table sequentially, one
/// read/reconcile/write cycle per language, with no state shared between
/// iterations beyond the seed. A failing language aborts with a
/// diagnostic and the batch moves on.
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::SyncConfig;
use crate::formats::{strings, xml};
use crate::languages;
use crate::patch::{self, PatchSummary};
use crate::placeholder;
use crate::reconcile::{self, Reconciliation};
use crate::report::{LanguageSummary, SyncReport};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Establish the verified key set from the reference-language catalogs.
pub fn bootstrap(config: &SyncConfig) -> Reconciliation {
    let ios = load_ios_catalog(&config.ios_strings_path(languages::REFERENCE_LANGUAGE));
    let android = load_android_catalog(config, languages::REFERENCE_LANGUAGE);
    reconcile::reconcile(&ios, &android)
}

/// Run the full batch and collect per-language summaries.
pub fn run_sync(config: &SyncConfig) -> SyncReport {
    let seed = bootstrap(config);
    log::info!(
        "verified {} keys, {} value joins",
        seed.verified.len(),
        seed.by_value.len()
    );

    let mut report = SyncReport::new();
    for language in languages::sync_languages() {
        report.push(sync_language(config, &seed, language));
    }
    report
}

/// One language's cycle: load both catalogs, build the patch, rewrite.
pub fn sync_language(
    config: &SyncConfig,
    seed: &Reconciliation,
    language: &str,
) -> LanguageSummary {
    let android = load_android_catalog(config, language);
    let path = config.ios_strings_path(language);
    let content = fs::read_to_string(&path);
    let ios = match &content {
        Ok(text) => strings::parse(text).catalog(),
        Err(_) => Catalog::new(),
    };

    let patch = patch::build_patch(seed, &ios, &android);
    if patch.is_empty() {
        let summary = LanguageSummary::from_patch(language, PatchSummary::default());
        log_summary(&summary);
        return summary;
    }

    // From here the file itself is the patch target; not being able to
    // read it back is a hard failure for this language.
    let text = match content {
        Ok(text) => text,
        Err(source) => {
            let err = SyncError::Read {
                path: path.clone(),
                source,
            };
            log::error!("{language}: {err}");
            return LanguageSummary::failed(language, err.to_string());
        }
    };

    let mut document = strings::parse(&text);
    let applied = patch::apply_patch(&mut document, &patch);

    if let Err(err) = write_atomic(&path, document.to_text().as_bytes()) {
        log::error!("{language}: {err}");
        return LanguageSummary::failed(language, err.to_string());
    }

    let summary = LanguageSummary::from_patch(language, applied);
    log_summary(&summary);
    summary
}

fn load_ios_catalog(path: &Path) -> Catalog {
    match fs::read_to_string(path) {
        Ok(content) => strings::parse(&content).catalog(),
        Err(err) => {
            log::debug!("no catalog at {}: {err}", path.display());
            Catalog::new()
        }
    }
}

fn load_android_catalog(config: &SyncConfig, language: &str) -> Catalog {
    match config.android_strings_path(language) {
        Some(path) => placeholder::normalize_catalog(&xml::parse_resources_file(&path)),
        None => Catalog::new(),
    }
}

fn log_summary(summary: &LanguageSummary) {
    log::info!(
        "{}: added {}, updated {}, deduplicated {}",
        summary.language,
        summary.added,
        summary.updated,
        summary.duplicates_removed
    );
}

/// Whole-file replace through a sibling temporary file.
pub(crate) fn write_atomic(target: &Path, contents: &[u8]) -> Result<(), SyncError> {
    let temp = temp_path(target);
    let result: std::io::Result<()> = (|| {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&temp)?;
        file.write_all(contents)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&temp, target)
    })();
    if result.is_err() {
        let _ = fs::remove_file(&temp);
    }
    result.map_err(|source| SyncError::Write {
        path: target.to_path_buf(),
        source,
    })
}

fn temp_path(target: &Path) -> PathBuf {
    let pid = std::process::id();
    match target.file_name() {
        Some(name) => target.with_file_name(format!("{}.tmp.{pid}", name.to_string_lossy())),
        None => target.with_file_name(format!(".tmp.{pid}")),
    }
}
