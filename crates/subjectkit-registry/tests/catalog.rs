//! Catalog-wide property tests.
//!
//! Every definition in the built-in catalog, variants included, is driven
//! through build → parse → match with generated field values.

use std::collections::HashSet;
use subjectkit_core::{
    build, matches, parse, Bytes32, FieldError, FieldMap, FieldType, FieldValue, Pattern,
    SubjectDefinition, SubjectError,
};
use subjectkit_registry::{SubjectKind, SubjectRegistry};

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn registry() -> &'static SubjectRegistry {
    SubjectRegistry::global()
}

/// A well-typed value for `ty`, varied by `seed`.
fn sample(ty: FieldType, seed: usize) -> FieldValue {
    if ty.is_bytes32() {
        return FieldValue::from(Bytes32::repeat(seed as u8 ^ 0xa5));
    }
    match ty.int_bits() {
        Some(32) => FieldValue::Uint([0, 1, 2, 10, u32::MAX as u64][seed % 5]),
        Some(_) => FieldValue::Uint([0, 1, 1_000_000, 42, u64::MAX][seed % 5]),
        None => {
            let literals = ty.literals().unwrap_or_default();
            assert!(!literals.is_empty(), "{ty} has neither literals nor a width");
            ty.decode(literals[seed % literals.len()])
                .unwrap_or_else(|e| panic!("{ty} rejected its own literal: {e}"))
        }
    }
}

fn full_values(def: &SubjectDefinition, seed: usize) -> FieldMap {
    let mut n = seed;
    def.fill_with(|spec| {
        n += 1;
        sample(spec.ty, n)
    })
}

fn subset(values: &FieldMap, keep: impl Fn(usize) -> bool) -> FieldMap {
    values
        .iter()
        .enumerate()
        .filter(|(i, _)| keep(*i))
        .map(|(_, (k, v))| (k.clone(), v.clone()))
        .collect()
}

const SEEDS: std::ops::Range<usize> = 0..7;

// ─── Registry shape ───────────────────────────────────────────────────────────

#[test]
fn ids_are_unique_across_bases_and_variants() {
    let mut seen = HashSet::new();
    for def in registry().all() {
        assert!(seen.insert(def.id), "duplicate id {}", def.id);
    }
    assert_eq!(seen.len(), SubjectKind::all().count());
}

#[test]
fn wildcard_is_literal_prefix_plus_tail() {
    for def in registry().all() {
        assert_eq!(def.wildcard, def.derived_wildcard(), "{}", def.id);
        assert!(def.wildcard.ends_with(".>"));
        assert!(!def.wildcard.contains('*'));
    }
}

#[test]
fn variants_share_entity_and_sit_under_parent_wildcard() {
    for key in registry().entity_keys() {
        let base = registry().lookup(key).unwrap();
        for (variant_key, variant) in base.variants {
            assert_eq!(variant.entity, base.entity);
            assert!(variant.segment_count() >= base.segment_count());
            assert_eq!(registry().lookup_variant(key, variant_key).unwrap(), variant);

            let topic = build(variant, &full_values(variant, 3), false).unwrap();
            assert!(matches(base.wildcard, &topic), "{} under {}", variant.id, base.id);
        }
    }
}

// ─── Build / parse / match ────────────────────────────────────────────────────

#[test]
fn round_trip_every_definition() {
    for def in registry().all() {
        for seed in SEEDS {
            let values = full_values(def, seed);
            let topic = build(def, &values, false).unwrap();
            let parsed = parse(def, &topic).unwrap_or_else(|e| panic!("{}: {topic}: {e}", def.id));
            assert_eq!(parsed, values, "{topic}");
            assert_eq!(build(def, &parsed, false).unwrap(), topic);
        }
    }
}

#[test]
fn own_wildcard_matches_every_topic() {
    for def in registry().all() {
        let pattern = Pattern::new(def.wildcard).unwrap();
        for seed in SEEDS {
            let topic = build(def, &full_values(def, seed), false).unwrap();
            assert!(matches(def.wildcard, &topic), "{} vs {topic}", def.wildcard);
            assert!(pattern.matches(&topic));
        }
    }
}

#[test]
fn partial_builds_match_consistent_topics() {
    for def in registry().all() {
        let values = full_values(def, 1);
        let topic = build(def, &values, false).unwrap();

        let none = build(def, &FieldMap::new(), true).unwrap();
        assert!(matches(&none, &topic), "{none}");
        assert_eq!(build(def, &values, true).unwrap(), topic);

        for i in 0..values.len() {
            let only = build(def, &subset(&values, |j| j == i), true).unwrap();
            assert!(matches(&only, &topic), "{only} vs {topic}");
            let all_but = build(def, &subset(&values, |j| j != i), true).unwrap();
            assert!(matches(&all_but, &topic), "{all_but} vs {topic}");
        }

        // a pattern pinned to a different value must not match
        let other = build(def, &full_values(def, 2), false).unwrap();
        if other != topic {
            assert!(!matches(&topic, &other));
        }
    }
}

#[test]
fn altered_literal_is_rejected() {
    for def in registry().all() {
        let topic = build(def, &full_values(def, 0), false).unwrap();
        for (position, segment) in def.segments().enumerate() {
            if !segment.is_literal() {
                continue;
            }
            let mut tokens: Vec<&str> = topic.split('.').collect();
            tokens[position] = "unexpected";
            let altered = tokens.join(".");
            match parse(def, &altered) {
                Err(err @ SubjectError::LiteralMismatch { .. }) => {
                    assert!(err.is_mismatch());
                    assert!(matches!(err, SubjectError::LiteralMismatch { position: p, .. } if p == position));
                }
                other => panic!("{}: expected literal mismatch, got {other:?}", def.id),
            }
        }
    }
}

#[test]
fn parse_rejects_wrong_segment_count() {
    for def in registry().all() {
        let topic = build(def, &full_values(def, 0), false).unwrap();
        let longer = format!("{topic}.extra");
        assert!(matches!(
            parse(def, &longer),
            Err(SubjectError::SegmentCountMismatch { .. })
        ));
    }
}

#[test]
fn resolve_finds_an_equivalent_definition() {
    for def in registry().all() {
        let topic = build(def, &full_values(def, 4), false).unwrap();
        let resolved = registry().resolve(&topic).unwrap();
        // a base topic whose discriminant names a same-length variant resolves
        // to that variant; either way it rebuilds to the same topic
        assert_eq!(resolved.definition.entity, def.entity);
        assert_eq!(build(resolved.definition, &resolved.fields, false).unwrap(), topic);
        if !def.has_variants() {
            assert_eq!(resolved.definition.id, def.id);
        }
    }
}

// ─── Scenarios ────────────────────────────────────────────────────────────────

#[test]
fn inputs_coin_scenario() {
    let def = registry().lookup_variant("inputs", "coin").unwrap();
    let tx_id = format!("0x{}", "ab".repeat(32));
    let owner = format!("0x{}", "cd".repeat(32));
    let asset = format!("0x{}", "ef".repeat(32));

    let mut values = FieldMap::new();
    values.insert("block_height".into(), FieldValue::Uint(1_000_000));
    values.insert("tx_id".into(), FieldType::TxId.decode(&tx_id).unwrap());
    values.insert("tx_index".into(), FieldValue::Uint(2));
    values.insert("input_index".into(), FieldValue::Uint(0));
    values.insert("owner".into(), FieldType::Address.decode(&owner).unwrap());
    values.insert("asset".into(), FieldType::AssetId.decode(&asset).unwrap());

    let topic = build(def, &values, false).unwrap();
    assert_eq!(
        topic,
        format!("inputs.coin.1000000.{tx_id}.2.0.{owner}.{asset}")
    );
    assert_eq!(parse(def, &topic).unwrap(), values);
}

#[test]
fn short_address_is_invalid() {
    assert!(matches!(
        FieldType::Address.decode("0x123"),
        Err(FieldError::InvalidHex(_))
    ));

    let blocks = registry().definition(SubjectKind::Blocks).unwrap();
    let err = parse(blocks, "blocks.0x123.1.2").unwrap_err();
    assert!(matches!(err, SubjectError::InvalidField { ref field, .. } if field == "producer"));
    assert!(!err.is_mismatch());
}

#[test]
fn upper_case_hex_parses_to_canonical_topic() {
    let blocks = registry().lookup("blocks").unwrap();
    let upper = format!("blocks.0x{}.5.6", "AB".repeat(32));
    let fields = parse(blocks, &upper).unwrap();
    assert_eq!(
        build(blocks, &fields, false).unwrap(),
        format!("blocks.0x{}.5.6", "ab".repeat(32))
    );
}

#[test]
fn leading_zeros_and_overflow_are_rejected() {
    let blocks = registry().lookup("blocks").unwrap();
    let producer = Bytes32::repeat(1);
    for bad in ["007", "", "-1", "18446744073709551616", "1e3"] {
        let topic = format!("blocks.{producer}.1.{bad}");
        assert!(
            matches!(parse(blocks, &topic), Err(SubjectError::InvalidField { ref field, .. }) if field == "height"),
            "{bad:?}"
        );
    }
    assert!(parse(blocks, &format!("blocks.{producer}.1.0")).is_ok());
}
