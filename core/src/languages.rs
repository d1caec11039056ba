/// Language tag mapping between the two resource trees.
///
/// The table pairs each `.lproj` language identifier with the Android
/// `values-*` directory suffix. It is fixed at build time; the reference
/// language reads from the suffix-less `values/` directory.

pub const REFERENCE_LANGUAGE: &str = "en";

/// Language identifier to Android resource suffix. Region-qualified and
/// script-qualified tags first, then the identity entries.
pub const LANGUAGE_SUFFIXES: &[(&str, &str)] = &[
    ("es_AR", "es-rAR"),
    ("hsb", "b+hsb"),
    ("kab", "b+kab"),
    ("pt-BR", "pt-rBR"),
    ("ro-RO", "ro"),
    ("zh-Hans", "zh-rCN"),
    ("zh-Hant", "zh-rTW"),
    ("ar", "ar"),
    ("be", "be"),
    ("ca", "ca"),
    ("cs", "cs"),
    ("da", "da"),
    ("de", "de"),
    ("el", "el"),
    ("es", "es"),
    ("et", "et"),
    ("fa", "fa"),
    ("fi", "fi"),
    ("fr", "fr"),
    ("gl", "gl"),
    ("hu", "hu"),
    ("is", "is"),
    ("it", "it"),
    ("ja", "ja"),
    ("ku", "ku"),
    ("my", "my"),
    ("nb", "nb"),
    ("nl", "nl"),
    ("oc", "oc"),
    ("pl", "pl"),
    ("pt", "pt"),
    ("ru", "ru"),
    ("sc", "sc"),
    ("sk", "sk"),
    ("sl", "sl"),
    ("sq", "sq"),
    ("tr", "tr"),
    ("uk", "uk"),
];

pub fn android_suffix(language: &str) -> Option<&'static str> {
    LANGUAGE_SUFFIXES
        .iter()
        .find(|(lang, _)| *lang == language)
        .map(|(_, suffix)| *suffix)
}

/// Name of the Android `values` directory for a language, or None for a
/// language outside the table.
pub fn android_values_dir(language: &str) -> Option<String> {
    if language == REFERENCE_LANGUAGE {
        return Some("values".to_string());
    }
    android_suffix(language).map(|suffix| format!("values-{suffix}"))
}

/// Languages receiving translation sync. The reference language is the
/// source side and is excluded.
pub fn sync_languages() -> impl Iterator<Item = &'static str> {
    LANGUAGE_SUFFIXES.iter().map(|(language, _)| *language)
}

/// Every language with a catalog, reference included. Routing-attribute
/// extraction rewrites the reference catalog too.
pub fn all_languages() -> impl Iterator<Item = &'static str> {
    std::iter::once(REFERENCE_LANGUAGE).chain(sync_languages())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_qualified_suffixes() {
        assert_eq!(android_suffix("es_AR"), Some("es-rAR"));
        assert_eq!(android_suffix("pt-BR"), Some("pt-rBR"));
        assert_eq!(android_suffix("zh-Hant"), Some("zh-rTW"));
        assert_eq!(android_suffix("hsb"), Some("b+hsb"));
    }

    #[test]
    fn test_identity_suffixes() {
        assert_eq!(android_suffix("ru"), Some("ru"));
        assert_eq!(android_suffix("de"), Some("de"));
    }

    #[test]
    fn test_unknown_language() {
        assert_eq!(android_suffix("tlh"), None);
        assert_eq!(android_values_dir("tlh"), None);
    }

    #[test]
    fn test_values_dir() {
        assert_eq!(android_values_dir("en").as_deref(), Some("values"));
        assert_eq!(android_values_dir("ru").as_deref(), Some("values-ru"));
        assert_eq!(
            android_values_dir("zh-Hans").as_deref(),
            Some("values-zh-rCN")
        );
    }

    #[test]
    fn test_table_shape() {
        assert_eq!(LANGUAGE_SUFFIXES.len(), 38);
        assert!(sync_languages().all(|language| language != REFERENCE_LANGUAGE));
        assert_eq!(all_languages().count(), LANGUAGE_SUFFIXES.len() + 1);
    }
}
