#![allow(missing_docs, dead_code)]

use std::path::PathBuf;

use ccs_charset::{CharsetLoader, LoaderOptions};

/// Definition files shipped with the tests.
pub const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/charset");

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn fixture_loader() -> CharsetLoader {
    init_logging();
    CharsetLoader::new(LoaderOptions {
        root: PathBuf::from(FIXTURES),
        ..Default::default()
    })
}
