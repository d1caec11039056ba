/// Checkout layout configuration
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::languages;

/// Where the two resource trees live relative to the working directory.
///
/// The defaults encode the conventional two-repository checkout: the tool
/// runs from a directory next to `Resources/` inside the iOS repository,
/// with the Android repository checked out as a sibling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncConfig {
    pub ios_localizations_root: PathBuf,
    pub android_res_root: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            ios_localizations_root: PathBuf::from("../Resources/Localizations"),
            android_res_root: PathBuf::from("../../android/res"),
        }
    }
}

impl SyncConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {}", e))
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }

    /// `<root>/<language>.lproj/Localizable.strings`
    pub fn ios_strings_path(&self, language: &str) -> PathBuf {
        self.ios_localizations_root
            .join(format!("{language}.lproj"))
            .join("Localizable.strings")
    }

    /// `<root>/values[-<suffix>]/strings.xml`, None outside the table.
    pub fn android_strings_path(&self, language: &str) -> Option<PathBuf> {
        languages::android_values_dir(language)
            .map(|dir| self.android_res_root.join(dir).join("strings.xml"))
    }
}
