//! Conversion properties checked against the fixture files under
//! `fixtures/countries/` at the workspace root.

use std::fs;
use std::path::{Path, PathBuf};

use atlas_core::CastError;
use atlas_interchange::{decode, encode, ConvertError};

fn fixture(name: &str) -> String {
    let path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures/countries")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

fn cast_error(result: Result<impl std::fmt::Debug, ConvertError>) -> CastError {
    match result {
        Err(ConvertError::Cast(err)) => err,
        other => panic!("expected a cast error, got {other:?}"),
    }
}

// ──────────────────────────────────────────────
// Well-formed input
// ──────────────────────────────────────────────

#[test]
fn decoded_fields_equal_input() {
    let raw = fixture("atlas.json");
    let countries = decode(&raw).unwrap();
    let input: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(serde_json::to_value(&countries).unwrap(), input);
}

#[test]
fn round_trip_preserves_records() {
    let countries = decode(&fixture("atlas.json")).unwrap();
    let again = decode(&encode(&countries).unwrap()).unwrap();
    assert_eq!(again, countries);
}

#[test]
fn absent_optionals_decode_to_none() {
    let countries = decode(&fixture("atlas.json")).unwrap();
    let antarctica = countries
        .iter()
        .find(|c| c.name == "Antarctica")
        .expect("Antarctica in data set");
    assert!(antarctica.capital.is_none());
    assert!(antarctica.gini.is_none());
    assert!(antarctica.borders.is_none());
    assert!(antarctica.regional_blocs.is_none());
    assert!(antarctica.cioc.is_none());
    assert!(antarctica.currencies.is_empty());
    assert_eq!(antarctica.area, Some(14_000_000.0));
}

#[test]
fn chile_encodes_capital_at_two_space_indent() {
    let countries = decode(&fixture("chile.json")).unwrap();
    assert_eq!(countries[0].capital.as_deref(), Some("Santiago"));

    let text = encode(&countries).unwrap();
    assert!(text.contains("\n    \"capital\": \"Santiago\",\n"), "{text}");
}

#[test]
fn encode_normalises_to_fixture_layout() {
    let raw = fixture("chile.json");
    let countries = decode(&raw).unwrap();
    assert_eq!(encode(&countries).unwrap(), raw.trim_end());
}

#[test]
fn population_accepts_any_json_number() {
    let float = decode(&fixture("float-population.json")).unwrap();
    assert_eq!(float[0].population.as_f64(), Some(19_000_000.0));

    let negative = decode(&fixture("negative-population.json")).unwrap();
    assert_eq!(negative[0].population.as_i64(), Some(-1));

    let compact = fixture("chile.json").replace("19116209,", "19116209.0,");
    let exact = decode(&compact).unwrap();
    assert_eq!(exact[0].population.as_f64(), Some(19_116_209.0));
}

#[test]
fn empty_array_is_valid() {
    assert!(decode("[]").unwrap().is_empty());
    assert_eq!(encode(&[]).unwrap(), "[]");
}

// ──────────────────────────────────────────────
// Shape violations
// ──────────────────────────────────────────────

#[test]
fn missing_name_cites_name() {
    let err = cast_error(decode(&fixture("invalid/missing-name.json")));
    assert_eq!(err.key(), Some("name"));
    assert_eq!(err.parent(), Some("Country"));
    assert!(err.to_string().ends_with("but got undefined"), "{err}");
}

#[test]
fn numeric_alpha2_cites_key_and_value() {
    let err = cast_error(decode(&fixture("invalid/numeric-alpha2.json")));
    assert_eq!(
        err.to_string(),
        "invalid value for key \"alpha2Code\" on Country: expected string but got 12"
    );
}

#[test]
fn extra_key_is_unknown() {
    let err = cast_error(decode(&fixture("invalid/extra-key.json")));
    assert_eq!(
        err,
        CastError::UnknownKey {
            key: "motto".to_string(),
            parent: Some("Country".to_string()),
        }
    );
}

#[test]
fn null_capital_is_not_absence() {
    let err = cast_error(decode(&fixture("invalid/null-capital.json")));
    assert_eq!(err.key(), Some("capital"));
    assert!(err.to_string().ends_with("but got null"), "{err}");
}

#[test]
fn name_only_object_cites_top_level_domain() {
    let err = cast_error(decode(r#"[{"name":"X"}]"#));
    assert_eq!(err.key(), Some("topLevelDomain"));
}

#[test]
fn nested_violation_names_nested_record() {
    let raw = fixture("chile.json").replace("\"png\": \"https://flagcdn.com/w320/cl.png\"", "\"png\": false");
    let err = cast_error(decode(&raw));
    assert_eq!(err.key(), Some("png"));
    assert_eq!(err.parent(), Some("Flags"));
}

#[test]
fn object_at_top_level_is_rejected() {
    let err = cast_error(decode(r#"{"name":"Chile"}"#));
    assert_eq!(err.key(), None);
    assert!(err.to_string().contains("expected array of Country"), "{err}");
}

#[test]
fn truncated_file_is_a_parse_error() {
    let err = decode(&fixture("invalid/truncated.json")).unwrap_err();
    assert!(matches!(err, ConvertError::Parse(_)), "{err:?}");
}
