//! The exported JSON Schema, the cast engine and the typed decode facade
//! must accept and reject the same documents.

use std::path::{Path, PathBuf};

use atlas_core::cast;
use atlas_core::schema::to_json_schema;
use atlas_interchange::{countries_shape, country_types, decode};

fn fixture_files() -> Vec<PathBuf> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/countries");
    let mut paths = Vec::new();
    for dir in [root.clone(), root.join("invalid")] {
        let mut found: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|e| e == "json"))
            .collect();
        found.sort();
        paths.extend(found);
    }
    paths
}

#[test]
fn schema_cast_and_decode_agree_on_every_fixture() {
    let schema = to_json_schema(country_types(), &countries_shape());
    let validator = jsonschema::validator_for(&schema)
        .unwrap_or_else(|e| panic!("Failed to compile schema: {}", e));

    let mut tested = 0usize;
    let mut disagreements = Vec::new();
    for path in fixture_files() {
        let src = std::fs::read_to_string(&path).unwrap();
        // Unparseable fixtures exercise the parser, not the shapes.
        let Ok(instance) = serde_json::from_str::<serde_json::Value>(&src) else {
            continue;
        };
        let by_schema = validator.is_valid(&instance);
        let by_cast = cast(country_types(), &instance, &countries_shape()).is_ok();
        let by_decode = decode(&src).is_ok();
        if by_schema != by_cast || by_schema != by_decode {
            disagreements.push(format!(
                "{}: schema says {}, cast says {}, decode says {}",
                path.display(),
                by_schema,
                by_cast,
                by_decode
            ));
        }
        tested += 1;
    }

    assert!(tested >= 7, "expected at least 7 parseable fixtures, found {tested}");
    assert!(
        disagreements.is_empty(),
        "schema, cast and decode disagree:\n{}",
        disagreements.join("\n")
    );
}

#[test]
fn country_definition_lists_required_fields() {
    let schema = to_json_schema(country_types(), &countries_shape());
    let required = schema["$defs"]["Country"]["required"]
        .as_array()
        .expect("required list");
    assert_eq!(required.len(), 19);
    assert!(!required.contains(&serde_json::json!("capital")));
    assert_eq!(schema["$defs"]["Country"]["additionalProperties"], false);
}
