//! End-to-end resolution of the YAML fixtures under tests/fixtures

use cfgstack::loader::parse_document;
use cfgstack::{CfgStack, CfgStackError, ConfigNode, ConfigValue, DocumentLoader, FileLoader};
use similar_asserts::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn resolve_fixture(name: &str) -> Result<CfgStack, CfgStackError> {
    CfgStack::with_loader(name, &FileLoader::new(fixtures_dir()))
}

fn expected(text: &str) -> ConfigNode {
    parse_document("expected", text).expect("expected yaml")
}

#[test]
fn plain_document_round_trips_unchanged() {
    let stack = resolve_fixture("test1").expect("resolve");
    let raw = FileLoader::new(fixtures_dir()).load("test1").expect("load");
    assert_eq!(stack.data(), &raw);

    assert_eq!(stack.lookup("invoice").and_then(ConfigValue::as_i64), Some(34843));
    assert_eq!(stack.lookup("date").and_then(ConfigValue::as_str), Some("2001-01-23"));
    assert_eq!(
        stack.lookup("bill-to.address.lines").and_then(ConfigValue::as_str),
        Some("458 Walkman Dr.\nSuite #292\n")
    );
    assert_eq!(
        stack.lookup("comments").and_then(ConfigValue::as_str),
        Some("Late afternoon is best. Backup contact is Nancy Billsmer @ 338-4338.\n")
    );
    let products = stack.lookup("product").and_then(ConfigValue::as_sequence).expect("products");
    assert_eq!(products.len(), 2);
    assert_eq!(
        products[1].as_mapping().and_then(|p| p.get("price")).and_then(ConfigValue::as_f64),
        Some(2392.0)
    );
}

#[test]
fn defaults_fill_sibling_mappings() {
    let stack = resolve_fixture("test2").expect("resolve");
    assert_eq!(
        stack.data(),
        &expected(
            r##"
empty: {foo: bar, password: sekrit}
mixed: {foo: bar, other: thing, password: ohdear}
partial: {foo: baz, password: sekrit}
unaffected:
  - {name: "#mychannel", password: ""}
  - {name: "#myprivatechannel", password: mypassword}
"##
        )
    );
}

#[test]
fn include_backfills_local_mappings() {
    let stack = resolve_fixture("test3").expect("resolve");
    assert_eq!(
        stack.data(),
        &expected(
            r#"
here: there
problem: {foo: baz, overlay: power}
this: {foo: bar, other: thing, overlay: power, start: end}
"#
        )
    );
}

#[test]
fn local_values_override_included_values() {
    let stack = resolve_fixture("test4").expect("resolve");
    assert_eq!(stack.data(), &expected("root: {bottom: bottom, override: test4b, top: top}\n"));
}

#[test]
fn nested_include_and_defaults_apply_per_level() {
    let stack = resolve_fixture("test5").expect("resolve");
    assert_eq!(
        stack.data(),
        &expected(
            r#"
root:
  collector: {def: test5, side: side, test5b: test5b, this: that}
  nest:
    bird: {here: test5, sparrow: tweet}
    def: test5
    side: side
    test5b: test5b
  top: test5b
"#
        )
    );
}

#[test]
fn default_covers_included_siblings() {
    let stack = resolve_fixture("test6").expect("resolve");
    assert_eq!(
        stack.data(),
        &expected(
            r#"
root:
  second:
    block1: {def: test6a}
    block2: {def: test6a, foo: bar}
    block3: {def: local_value}
    block_6b: {def: test6a, something: else}
    block_b61: {def: test6a}
    block_bb2: {def: test6b}
"#
        )
    );
}

#[test]
fn included_document_defaults_resolve_before_merge() {
    let stack = resolve_fixture("test7").expect("resolve");
    assert_eq!(
        stack.data(),
        &expected(
            r#"
root:
  empty: {def: test7a}
  other: {def: test7a, thing: this}
  value: {def: test7}
"#
        )
    );
}

#[test]
fn simple_nested_default() {
    let stack = resolve_fixture("test8").expect("resolve");
    assert_eq!(
        stack.data(),
        &expected("root:\n  empty: {def: simple}\n  mixed: {def: simple, this: that}\n")
    );
}

#[test]
fn resolved_fixtures_carry_no_directives() {
    for n in 1..=8 {
        let stack = resolve_fixture(&format!("test{n}")).expect("resolve");
        assert!(!stack.data().has_directives(), "test{n} still has directive keys");
    }
}

#[test]
fn resolving_resolved_output_is_a_no_op() {
    for n in 1..=8 {
        let stack = resolve_fixture(&format!("test{n}")).expect("resolve");
        let again = CfgStack::from_node(stack.data().clone(), &FileLoader::new(fixtures_dir()))
            .expect("re-resolve");
        assert_eq!(again.data(), stack.data());
    }
}

#[test]
fn include_cycle_is_an_error() {
    let err = resolve_fixture("cycle_a").unwrap_err();
    match err {
        CfgStackError::IncludeCycle { chain } => {
            assert_eq!(chain, ["cycle_a", "cycle_b", "cycle_a"].map(String::from).to_vec());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn scalar_root_is_malformed() {
    let err = resolve_fixture("scalar_root").unwrap_err();
    assert!(matches!(err, CfgStackError::MalformedDocument { .. }), "{err}");
}

#[test]
fn malformed_include_aborts_outer_resolution() {
    let err = resolve_fixture("include_scalar_root").unwrap_err();
    match err {
        CfgStackError::MalformedDocument { identifier, .. } => {
            assert_eq!(identifier.as_str(), "scalar_root");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_include_surfaces_not_found() {
    let err = resolve_fixture("include_missing").unwrap_err();
    assert!(
        matches!(err, CfgStackError::DocumentNotFound { ref identifier, .. } if identifier == "does_not_exist"),
        "{err}"
    );
}

#[test]
fn missing_root_document_surfaces_not_found() {
    assert!(matches!(
        resolve_fixture("no_such_document"),
        Err(CfgStackError::DocumentNotFound { .. })
    ));
}

#[test]
fn includes_search_every_configured_directory() {
    let shared = TempDir::new().expect("tmp");
    let local = TempDir::new().expect("tmp");
    fs::write(shared.path().join("base.yml"), "db: {host: shared, pool: 4}\n").expect("write");
    fs::write(local.path().join("app.yaml"), "_include_: [base]\ndb: {host: local}\n")
        .expect("write");

    let loader = FileLoader::new(local.path()).search_path(shared.path());
    let stack = CfgStack::with_loader("app", &loader).expect("resolve");
    assert_eq!(stack.data(), &expected("db: {host: local, pool: 4}\n"));
}

#[test]
fn canonical_dump_of_fixture() {
    let stack = resolve_fixture("test8").expect("resolve");
    assert_eq!(
        stack.to_canonical_yaml().as_str(),
        concat!(
            "\"root\":\n",
            "  \"empty\":\n",
            "    \"def\": \"simple\"\n",
            "  \"mixed\":\n",
            "    \"def\": \"simple\"\n",
            "    \"this\": \"that\"\n",
        )
    );
}
