use serde_json::json;
use std::io::Write;
use szflags_domain::FlagKind;
use szflags_metadata::{MetadataError, load, load_file, standard};

fn sample() -> String {
    json!([
        { "symbol": "A", "bits": [0], "value": 1, "definition": "1 << 0", "groups": ["G1"] },
        { "symbol": "B", "bits": [1], "value": 2, "definition": "1 << 1", "groups": ["G1", "G2"] },
        { "symbol": "X", "bits": [2], "value": 4, "definition": "1 << 2", "groups": ["G1"] },
        { "symbol": "Y", "bits": [0, 2], "value": 5, "definition": ["X", "A"],
          "groups": ["G1"], "flags": ["X", "A"] },
        { "symbol": "G3_DEFAULT", "bits": [], "value": 0, "definition": ["NO_FLAGS"],
          "groups": ["G3"] },
        { "symbol": "NO_FLAGS", "bits": [], "value": 0, "definition": "0", "flags": [] }
    ])
    .to_string()
}

#[test]
fn classifies_base_and_aggregate_records() {
    let model = load(&sample()).unwrap();

    let x = model.record("X").unwrap();
    assert_eq!(x.kind, FlagKind::Base);
    assert_eq!(x.value, 4);

    let y = model.record("Y").unwrap();
    assert!(y.is_aggregate());
    assert_eq!(y.value, model.record("X").unwrap().value | model.record("A").unwrap().value);
    assert_eq!(model.flattened_sub_flags("Y").into_iter().collect::<Vec<_>>(), ["A", "X"]);

    assert!(model.record("G3_DEFAULT").unwrap().is_aggregate());
    assert!(model.record("NO_FLAGS").unwrap().is_aggregate());
}

#[test]
fn indices_cover_every_observed_group() {
    let model = load(&sample()).unwrap();

    let groups: Vec<_> = model.group_names().collect();
    assert_eq!(groups, ["G1", "G2", "G3"]);

    // G3 only holds an aggregate, yet it is a key of the base index too.
    assert!(model.base_flags_by_group()["G3"].is_empty());
    assert!(model.aggregate_flags_by_group()["G2"].is_empty());
    assert_eq!(model.flags_by_group()["G1"].len(), 4);
    assert_eq!(model.base_flags_by_name().len(), 3);
    assert_eq!(model.aggregate_flags_by_name().len(), 3);
    assert_eq!(model.flags_by_name().len(), model.len());
    assert_eq!(model.records().map(|r| r.symbol.as_str()).next(), Some("A"));
}

#[test]
fn loading_twice_gives_equal_models() {
    assert_eq!(load(&sample()).unwrap(), load(&sample()).unwrap());
}

#[test]
fn missing_mandatory_field_names_the_record() {
    let source = json!([
        { "symbol": "A", "bits": [0], "value": 1 },
        { "symbol": "B", "bits": [1] }
    ])
    .to_string();

    let err = load(&source).unwrap_err();
    assert!(matches!(err, MetadataError::MalformedRecord { index: 1, .. }), "{err}");
    assert!(err.to_string().contains("value"));
}

#[test]
fn rejects_non_array_source() {
    assert!(matches!(load("{}"), Err(MetadataError::Json { .. })));
    assert!(matches!(load("not json"), Err(MetadataError::Json { .. })));
}

#[test]
fn rejects_duplicate_symbols_and_unknown_sub_flags() {
    let duplicate = json!([
        { "symbol": "A", "bits": [0], "value": 1, "groups": ["G1"] },
        { "symbol": "A", "bits": [1], "value": 2, "groups": ["G1"] }
    ])
    .to_string();
    assert!(matches!(
        load(&duplicate),
        Err(MetadataError::DuplicateSymbol { index: 1, ref symbol, .. }) if symbol == "A"
    ));

    let unknown = json!([
        { "symbol": "AGG", "bits": [0], "value": 1, "groups": ["G1"], "flags": ["GHOST"] }
    ])
    .to_string();
    assert!(matches!(
        load(&unknown),
        Err(MetadataError::UnknownSubFlag { ref flag, .. }) if flag == "GHOST"
    ));
}

#[test]
fn rejects_unclassifiable_record() {
    let source = json!([
        { "symbol": "ODD", "bits": [0, 1], "value": 3, "groups": ["G1"] }
    ])
    .to_string();
    assert!(matches!(load(&source), Err(MetadataError::Unclassifiable { index: 0, .. })));
}

#[test]
fn aggregate_value_must_equal_its_sub_flags() {
    let source = json!([
        { "symbol": "X", "bits": [0], "value": 1, "definition": "1 << 0", "groups": ["G1"] },
        { "symbol": "A", "bits": [1], "value": 2, "definition": "1 << 1", "groups": ["G1"] },
        { "symbol": "Y", "bits": [5], "value": 32, "groups": ["G1"], "flags": ["X", "A"] }
    ])
    .to_string();

    let err = load(&source).unwrap_err();
    assert!(
        matches!(
            err,
            MetadataError::AggregateValueMismatch { index: 2, ref symbol, expected: 3, value: 32, .. }
                if symbol == "Y"
        ),
        "{err}"
    );
}

#[test]
fn nested_aggregate_value_is_checked_through_its_members() {
    let source = json!([
        { "symbol": "X", "bits": [0], "value": 1, "groups": ["G1"] },
        { "symbol": "A", "bits": [1], "value": 2, "groups": ["G1"] },
        { "symbol": "PAIR", "bits": [0, 1], "value": 3, "groups": ["G1"], "flags": ["X", "A"] },
        { "symbol": "OUTER", "bits": [0], "value": 1, "groups": ["G1"], "flags": ["PAIR"] }
    ])
    .to_string();

    assert!(matches!(
        load(&source),
        Err(MetadataError::AggregateValueMismatch { index: 3, expected: 3, value: 1, .. })
    ));
}

#[test]
fn optional_fields_accept_null_and_unknown_keys_are_ignored() {
    let source = json!([
        { "symbol": "X", "bits": [0], "value": 1, "groups": ["G1"],
          "description": "first flag" },
        { "symbol": "Z", "bits": [1], "value": 2, "groups": null, "definition": null,
          "flags": null }
    ])
    .to_string();

    let model = load(&source).unwrap();
    assert_eq!(model.len(), 2);
    assert!(model.record("Z").unwrap().groups.is_empty());
    assert_eq!(model.group_names().collect::<Vec<_>>(), ["G1"]);
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(sample().as_bytes()).unwrap();

    let model = load_file(file.path()).unwrap();
    assert_eq!(model.len(), 6);

    let err = load_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, MetadataError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn bundled_metadata_describes_the_standard_catalog() {
    let model = standard().unwrap();
    assert!(std::ptr::eq(model, standard().unwrap()));

    let catalog = szflags_domain::standard::catalog();
    assert_eq!(model.len(), catalog.flags().len());
    assert_eq!(model.group_names().count(), catalog.groups().len());

    let with_info = model.record("SZ_WITH_INFO").unwrap();
    assert_eq!(with_info.value, 1 << 62);
    assert_eq!(with_info.kind, FlagKind::Base);

    let alias = model.record("SZ_SEARCH_INCLUDE_RESOLVED").unwrap();
    assert_eq!(alias.kind, FlagKind::Base);
    assert_eq!(alias.value, 1);
}
