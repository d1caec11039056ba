/// Patch computation and application for `.strings` documents.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::formats::strings::StringsDocument;
use crate::reconcile::Reconciliation;

/// New and updated entries to merge into one language's catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Patch {
    pub added: BTreeMap<String, String>,
    pub updated: BTreeMap<String, String>,
}

impl Patch {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.updated.is_empty()
    }
}

/// Counters reported after applying a patch.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PatchSummary {
    pub added: usize,
    pub updated: usize,
    pub duplicates_removed: usize,
}

/// A candidate value still carrying a raw parameter escape is an
/// untranslated placeholder template and must never be patched in.
fn is_acceptable(value: &str) -> bool {
    !value.is_empty() && !value.contains('$')
}

/// Resolve the reconciliation artifacts against one language's catalogs.
///
/// Verified keys resolve through `target` by key. Value joins resolve to
/// the smallest candidate key present in `target`; the candidate lists
/// are sorted, so the pick is reproducible. Entries classify as updated
/// when `reference` already has the key, otherwise as added.
pub fn build_patch(
    reconciliation: &Reconciliation,
    reference: &Catalog,
    target: &Catalog,
) -> Patch {
    let mut patch = Patch::default();

    for key in reconciliation.verified.keys() {
        if let Some(value) = target.get(key) {
            classify(&mut patch, reference, key, value);
        }
    }

    for (key, candidates) in &reconciliation.by_value {
        let resolved = candidates
            .iter()
            .find_map(|candidate| target.get(candidate));
        if let Some(value) = resolved {
            classify(&mut patch, reference, key, value);
        }
    }
    patch
}

fn classify(patch: &mut Patch, reference: &Catalog, key: &str, value: &str) {
    if !is_acceptable(value) {
        return;
    }
    if reference.contains_key(key) {
        patch.updated.insert(key.to_string(), value.to_string());
    } else {
        patch.added.insert(key.to_string(), value.to_string());
    }
}

/// Apply a patch to a parsed document.
///
/// Duplicate-key records collapse first (the count is kept for the
/// per-language summary), trailing blank records are trimmed, updated
/// values are spliced in place, and new entries land at the end. An
/// empty patch therefore only performs the two normalizations.
pub fn apply_patch(document: &mut StringsDocument, patch: &Patch) -> PatchSummary {
    let duplicates_removed = document.dedup_keys();
    document.trim_trailing_blanks();

    let mut updated = 0;
    for (key, value) in &patch.updated {
        if document.replace_value(key, value) {
            updated += 1;
        }
    }
    for (key, value) in &patch.added {
        document.append_entry(key, value);
    }

    PatchSummary {
        added: patch.added.len(),
        updated,
        duplicates_removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::strings;
    use crate::reconcile::reconcile;

    #[test]
    fn test_verified_key_updates_existing_entry() {
        let english_ios = Catalog::from_pairs(&[("a", "One")]);
        let english_android = Catalog::from_pairs(&[("a", "One")]);
        let seed = reconcile(&english_ios, &english_android);

        let language_ios = Catalog::from_pairs(&[("a", "Old")]);
        let language_android = Catalog::from_pairs(&[("a", "Uno")]);
        let patch = build_patch(&seed, &language_ios, &language_android);
        assert_eq!(patch.updated.get("a").map(String::as_str), Some("Uno"));
        assert!(patch.added.is_empty());
    }

    #[test]
    fn test_verified_key_adds_missing_entry() {
        let seed = reconcile(
            &Catalog::from_pairs(&[("a", "One")]),
            &Catalog::from_pairs(&[("a", "One")]),
        );
        let patch = build_patch(
            &seed,
            &Catalog::new(),
            &Catalog::from_pairs(&[("a", "Uno")]),
        );
        assert_eq!(patch.added.get("a").map(String::as_str), Some("Uno"));
        assert!(patch.updated.is_empty());
    }

    #[test]
    fn test_value_join_resolves_through_divergent_key() {
        // Keys differ between the catalogs, values agree in English; the
        // second language then supplies the translation under its key.
        let seed = reconcile(
            &Catalog::from_pairs(&[("a", "One")]),
            &Catalog::from_pairs(&[("x", "One")]),
        );
        assert_eq!(seed.by_value.get("a"), Some(&vec!["x".to_string()]));

        let language_ios = Catalog::from_pairs(&[("a", "One")]);
        let language_android = Catalog::from_pairs(&[("x", "Uno")]);
        let patch = build_patch(&seed, &language_ios, &language_android);
        assert_eq!(patch.updated.get("a").map(String::as_str), Some("Uno"));
    }

    #[test]
    fn test_value_join_picks_smallest_present_candidate() {
        let seed = reconcile(
            &Catalog::from_pairs(&[("a", "Shared")]),
            &Catalog::from_pairs(&[("m_key", "Shared"), ("z_key", "Shared")]),
        );
        // Only the later candidate exists in this language.
        let sparse = Catalog::from_pairs(&[("z_key", "Compartido")]);
        let patch = build_patch(&seed, &Catalog::new(), &sparse);
        assert_eq!(
            patch.added.get("a").map(String::as_str),
            Some("Compartido")
        );

        // Both candidates exist: the lexicographically smaller one wins.
        let full = Catalog::from_pairs(&[("z_key", "Wrong"), ("m_key", "Right")]);
        let patch = build_patch(&seed, &Catalog::new(), &full);
        assert_eq!(patch.added.get("a").map(String::as_str), Some("Right"));
    }

    #[test]
    fn test_empty_value_rejected() {
        let seed = reconcile(
            &Catalog::from_pairs(&[("a", "One")]),
            &Catalog::from_pairs(&[("a", "One")]),
        );
        let patch = build_patch(
            &seed,
            &Catalog::new(),
            &Catalog::from_pairs(&[("a", "")]),
        );
        assert!(patch.is_empty());
    }

    #[test]
    fn test_unresolved_parameter_escape_rejected() {
        let seed = reconcile(
            &Catalog::from_pairs(&[("a", "One")]),
            &Catalog::from_pairs(&[("a", "One")]),
        );
        let patch = build_patch(
            &seed,
            &Catalog::new(),
            &Catalog::from_pairs(&[("a", "Un %1$s intacto")]),
        );
        assert!(patch.is_empty());
    }

    #[test]
    fn test_apply_patch_counts() {
        let mut doc = strings::parse("\"a\" = \"Old\";\n\"a\" = \"Dup\";\n\"a\" = \"Dup2\";");
        let mut patch = Patch::default();
        patch.updated.insert("a".into(), "New".into());
        patch.added.insert("b".into(), "Fresh".into());
        let summary = apply_patch(&mut doc, &patch);
        assert_eq!(summary.added, 1);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.duplicates_removed, 2);
        assert_eq!(doc.to_text(), "\"a\" = \"New\";\n\"b\" = \"Fresh\";");
    }

    #[test]
    fn test_empty_patch_only_normalizes() {
        let text = "/* header */\n\"a\" = \"One\";\n\"b\" = \"Two\";";
        let mut doc = strings::parse(text);
        let summary = apply_patch(&mut doc, &Patch::default());
        assert_eq!(summary, PatchSummary::default());
        assert_eq!(doc.to_text(), text);
    }

    #[test]
    fn test_apply_patch_is_idempotent() {
        let mut patch = Patch::default();
        patch.updated.insert("a".into(), "Uno".into());
        let mut doc = strings::parse("\"a\" = \"One\";");
        apply_patch(&mut doc, &patch);
        let once = doc.to_text();
        apply_patch(&mut doc, &patch);
        assert_eq!(doc.to_text(), once);
    }
}
