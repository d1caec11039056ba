/// Catalog file formats
///
/// `strings` covers the `"key" = "value";` record format, `xml` the
/// Android string-resource markup.
pub mod strings;
pub mod xml;
