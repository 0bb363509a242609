use crate::{Charset, CharsetError, CharsetLoader, LoaderOptions, MemorySource};

pub(super) const ASCII: &str = "\
# Size: 94
# Order: 1
# Shift: 32
21 0021
41 0041
42 0042
43 0043
7d 007d
";

/// A loader over the given `(name, text)` definitions.
pub(super) fn loader(definitions: &[(&str, &str)]) -> CharsetLoader<MemorySource> {
    let source = definitions
        .iter()
        .fold(MemorySource::new(), |source, (name, text)| source.with(*name, text));
    CharsetLoader::with_source(source, LoaderOptions::default())
}

/// Loads `text` as the definition `main`.
pub(super) fn load_text(text: &str) -> Result<Charset, CharsetError> {
    loader(&[("main", text)]).load(Some("main"))
}

/// Loads `main` and returns the rendered error text.
pub(super) fn load_error(definitions: &[(&str, &str)]) -> String {
    match loader(definitions).load(Some("main")) {
        Ok(charset) => panic!("expected failure, loaded {charset:?}"),
        Err(err) => err.to_string(),
    }
}
