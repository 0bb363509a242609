use super::utils::{ASCII, load_error, loader};
use crate::{CharsetError, ErrorKind};

/// `count` definitions `c0 .. c{count-1}`, each naming the previous one as its
/// parent; `c0` carries the shape.
fn chain(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| {
            let text = if i == 0 {
                "# Size: 94\n# Order: 1\n# Shift: 32\n41 0041\n".to_string()
            } else {
                format!("# Parent: c{}\n", i - 1)
            };
            (format!("c{i}"), text)
        })
        .collect()
}

fn chain_loader(count: usize) -> crate::CharsetLoader<crate::MemorySource> {
    let definitions = chain(count);
    let borrowed: Vec<(&str, &str)> = definitions
        .iter()
        .map(|(name, text)| (name.as_str(), text.as_str()))
        .collect();
    loader(&borrowed)
}

#[test]
fn child_extends_and_overrides_parent() {
    let child = "# Parent: ascii\n41 0391\n44 0044\n";
    let charset = loader(&[("ascii", ASCII), ("main", child)])
        .load(Some("main"))
        .unwrap();

    assert_eq!(charset.size(), Some(94));
    assert_eq!(charset.lookup(b"A"), Some(0x391));
    assert_eq!(charset.lookup(b"B"), Some(0x42));
    assert_eq!(charset.lookup(b"D"), Some(0x44));
}

#[test]
fn parameters_may_be_split_across_the_chain() {
    let parent = "# Order: 1\n# Shift: 32\n41 0041\n";
    let child = "# Size: 94\n# Parent: parent\n42 0042\n";
    let charset = loader(&[("parent", parent), ("main", child)])
        .load(Some("main"))
        .unwrap();

    assert_eq!(charset.table().map(<[u32]>::len), Some(94));
    assert_eq!(charset.lookup(b"A"), Some(0x41));
    assert_eq!(charset.lookup(b"B"), Some(0x42));
}

#[test]
fn parent_entries_land_before_the_rest_of_the_child() {
    let child = "# Parent: ascii\n# Note: after parent\n41 00c0\n";
    let charset = loader(&[("ascii", ASCII), ("main", child)])
        .load(Some("main"))
        .unwrap();

    assert_eq!(charset.lookup(b"A"), Some(0xc0));
}

#[test]
fn size_defined_twice_in_a_chain_fails() {
    let child = "# Parent: ascii\n# Size: 96\n";
    let err = load_error(&[("ascii", ASCII), ("main", child)]);
    assert_eq!(err, "size already defined");

    let child = "# Size: 96\n# Parent: ascii\n";
    let err = load_error(&[("ascii", ASCII), ("main", child)]);
    assert_eq!(err, "size already defined");
}

#[test]
fn duplicate_size_keeps_the_first_value() {
    let loader = loader(&[("ascii", ASCII), ("wide", "# Size: 96\n")]);
    let mut charset = loader.load(Some("ascii")).unwrap();

    let err = loader.merge(&mut charset, "wide").unwrap_err();

    assert_eq!(err.to_string(), "size already defined");
    assert_eq!(charset.size(), Some(94));
    assert!(!charset.is_loaded());
}

#[test]
fn shift_is_fixed_once_the_table_exists() {
    let parent = "# Size: 94\n# Order: 1\n41 0041\n";
    let child = "# Parent: parent\n# Shift: 32\n";
    let err = load_error(&[("parent", parent), ("main", child)]);
    assert_eq!(err, "shift already defined");
}

#[test]
fn sibling_merges_conflict_on_parameters() {
    let loader = loader(&[("ascii", ASCII), ("other", "# Order: 1\n")]);
    let mut charset = loader.load(Some("ascii")).unwrap();

    let err = loader.merge(&mut charset, "other").unwrap_err();
    assert_eq!(err.to_string(), "order already defined");
}

#[test]
fn ten_hops_are_allowed() {
    let charset = chain_loader(10).load(Some("c9")).unwrap();
    assert_eq!(charset.lookup(b"A"), Some(0x41));
}

#[test]
fn eleven_hops_exceed_the_budget() {
    let err = chain_loader(11).load(Some("c10")).unwrap_err();
    assert!(matches!(err, CharsetError::DepthExceeded));
    assert_eq!(err.to_string(), "inheritance depth exceeded");
    assert_eq!(err.kind(), ErrorKind::Depth);
}

#[test]
fn self_reference_is_cut_off() {
    let err = load_error(&[("main", "# Parent: main\n")]);
    assert_eq!(err, "inheritance depth exceeded");
}

#[test]
fn two_definition_cycle_is_cut_off() {
    let err = load_error(&[("main", "# Parent: other\n"), ("other", "# Parent: main\n")]);
    assert_eq!(err, "inheritance depth exceeded");
}

#[test]
fn sibling_merge_gets_the_full_budget() {
    let mut definitions = chain(10);
    definitions[0].1 = "41 0391\n".to_string();
    let borrowed: Vec<(&str, &str)> = definitions
        .iter()
        .map(|(name, text)| (name.as_str(), text.as_str()))
        .chain([("ascii", ASCII)])
        .collect();
    let loader = loader(&borrowed);

    let mut charset = loader.load(Some("ascii")).unwrap();
    loader.merge(&mut charset, "c9").unwrap();

    assert_eq!(charset.lookup(b"A"), Some(0x391));
}

#[test]
fn parent_errors_propagate_verbatim() {
    let parent = "# Size: 94\n# Order: 1\n# Shift: 32\n41 0041\n7f 007f\n";
    let child = "# Parent: parent\n42 0042\n";
    let err = load_error(&[("parent", parent), ("main", child)]);
    assert_eq!(err, "octet value out of range");
}

#[test]
fn missing_parent_is_an_io_error() {
    let loader = loader(&[("main", "# Parent: nowhere\n")]);
    let err = loader.load(Some("main")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Resource);
}
