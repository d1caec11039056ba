/// Cross-catalog key reconciliation.
///
/// Joins a reference catalog against a target catalog keyed by
/// possibly-divergent identifiers. A correspondence is established either
/// by identical key, by identical value, or by value equality modulo one
/// trailing full stop, never by substring. The result is plain data:
/// nothing here touches the filesystem or any shared state.
use std::collections::BTreeMap;

use crate::catalog::Catalog;

/// Reference key to candidate target keys. Several candidates appear when
/// multiple target keys hold the same value; all of them are preserved,
/// sorted.
pub type CorrespondenceMap = BTreeMap<String, Vec<String>>;

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Keys present in both catalogs with matching values. These are the
    /// keys trusted enough to carry foreign-language values later.
    pub verified: BTreeMap<String, String>,
    /// Reference keys absent from the target by key but joined to one or
    /// more target keys through value equality.
    pub by_value: CorrespondenceMap,
}

impl Reconciliation {
    pub fn is_empty(&self) -> bool {
        self.verified.is_empty() && self.by_value.is_empty()
    }
}

/// Reconcile `reference` against `target`.
///
/// Per reference entry, in order: a direct key match with an equal value
/// (trailing-stop tolerant on either side) lands in `verified`; failing
/// that, a value join lands in `by_value`; failing both, the entry drops
/// out of this pass and is left untouched in the reference catalog.
pub fn reconcile(reference: &Catalog, target: &Catalog) -> Reconciliation {
    let index = target.value_index();
    let mut result = Reconciliation::default();

    for (key, value) in reference.iter() {
        if let Some(candidate) = target.get(key) {
            if candidate == value || equal_without_trailing_stop(candidate, value) {
                result.verified.insert(key.to_string(), value.to_string());
            }
            // Same key holding a different value: not trusted, skipped.
            continue;
        }

        let mut keys = index.keys_for(value);
        if keys.is_empty() {
            if let Some(stripped) = value.strip_suffix('.') {
                keys = index.keys_for(stripped);
            }
        }
        if !keys.is_empty() {
            result.by_value.insert(key.to_string(), keys.to_vec());
        }
    }
    result
}

/// True when one side equals the other after removing exactly one
/// trailing full stop from either of them.
pub(crate) fn equal_without_trailing_stop(a: &str, b: &str) -> bool {
    a.strip_suffix('.').map(|s| s == b).unwrap_or(false)
        || b.strip_suffix('.').map(|s| s == a).unwrap_or(false)
}
