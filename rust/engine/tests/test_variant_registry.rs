use bingo_engine::errors::EngineError;
use bingo_engine::variant::{self, is_supported_type, lookup, DEFAULT_VARIANT};

#[test]
fn default_variant_is_registered() {
    assert!(is_supported_type(DEFAULT_VARIANT));
    let def = lookup(DEFAULT_VARIANT).unwrap();
    assert_eq!(def.size, 5);
    assert!(def.free_space);
}

#[test]
fn unknown_type_is_not_found() {
    assert!(!is_supported_type("90-ball"));
    assert_eq!(
        lookup("90-ball").unwrap_err(),
        EngineError::UnsupportedVariant("90-ball".to_string())
    );
}

#[test]
fn seventy_five_ball_columns_follow_bingo_letters() {
    let def = lookup("75-ball").unwrap();
    let bounds: Vec<(u32, u32)> = def.columns.iter().map(|r| (r.min, r.max)).collect();
    assert_eq!(bounds, vec![(1, 15), (16, 30), (31, 45), (46, 60), (61, 75)]);
}

#[test]
fn column_ranges_do_not_overlap() {
    for def in variant::variants() {
        for pair in def.columns.windows(2) {
            assert!(pair[0].max < pair[1].min, "variant {} overlaps", def.id);
        }
    }
}

#[test]
fn variant_serializes_camel_case() {
    let json = serde_json::to_value(lookup("mini-27").unwrap()).unwrap();
    assert_eq!(json["freeSpace"], serde_json::json!(true));
    assert_eq!(json["columns"][2]["max"], serde_json::json!(27));
}
