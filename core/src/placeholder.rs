/// Placeholder normalization between the two catalog conventions.
///
/// Android values use positional printf-style markers (`%1$s`, `%2$d`);
/// the `.strings` side uses `%@` and `%d`. Comparing values across the
/// catalogs only works after rewriting one side, so every Android value
/// is normalized before reconciliation. One type governs the whole value:
/// a string-typed marker anywhere wins over a decimal one, and the chosen
/// marker substitutes every positional placeholder in that value. Not a
/// general multi-placeholder translator.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::Catalog;

static POSITIONAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%[0-9]*\$?[sdt.]").expect("valid positional placeholder regex"));

static STRING_TYPED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%[0-9]*\$?s").expect("valid string placeholder regex"));

static DECIMAL_TYPED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%[0-9]*\$?d").expect("valid decimal placeholder regex"));

const STRING_MARKER: &str = "%@";
const DECIMAL_MARKER: &str = "%d";

/// Rewrite the positional placeholders of one value.
///
/// Values without a recognized placeholder pass through unchanged, as do
/// values whose only placeholders are date/time or fraction typed.
pub fn normalize_value(value: &str) -> String {
    if !POSITIONAL_RE.is_match(value) {
        return value.to_string();
    }
    let marker = if STRING_TYPED_RE.is_match(value) {
        STRING_MARKER
    } else if DECIMAL_TYPED_RE.is_match(value) {
        DECIMAL_MARKER
    } else {
        return value.to_string();
    };
    POSITIONAL_RE.replace_all(value, marker).into_owned()
}

/// Normalize every value of a catalog.
pub fn normalize_catalog(catalog: &Catalog) -> Catalog {
    catalog
        .iter()
        .map(|(key, value)| (key.to_string(), normalize_value(value)))
        .collect()
}
