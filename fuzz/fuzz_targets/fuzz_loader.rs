#![no_main]

use arbitrary::Arbitrary;
use ccs_charset::{CharsetLoader, LoaderOptions, MemorySource};
use libfuzzer_sys::fuzz_target;

/// A main definition and an optional parent it may name, plus a code to look
/// up in whatever gets loaded.
#[derive(Debug, Arbitrary)]
struct Input<'a> {
    main: &'a [u8],
    parent: Option<&'a [u8]>,
    code: [u8; 2],
    double_byte: bool,
}

fn load(input: &Input<'_>) {
    let mut source = MemorySource::new().with("main", input.main);
    if let Some(parent) = input.parent {
        source.insert("parent", parent);
    }
    let loader = CharsetLoader::with_source(source, LoaderOptions::default());

    match loader.load(Some("main")) {
        Ok(charset) => {
            let table = charset.table().expect("loaded charset has a table");
            let order = usize::from(input.double_byte) + 1;
            let value = charset.lookup(&input.code[..order]);
            assert!(value.is_none_or(|value| table.contains(&value)));
        }
        Err(err) => assert!(!err.to_string().is_empty()),
    }
}

fuzz_target!(|input: Input<'_>| load(&input));
