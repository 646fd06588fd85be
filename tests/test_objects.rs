//! Kind dispatch and typed construction from raw payloads.

use scryfall_sdk::models::{Card, Set};
use scryfall_sdk::{ApiObject, Kind, Object, ScryfallError};
use serde_json::json;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn factory_dispatches_every_registered_kind() {
    let payloads = vec![
        (json!({"object": "card", "name": "Lightning Bolt"}), Kind::Card),
        (json!({"object": "card_face", "name": "Fire"}), Kind::CardFace),
        (json!({"object": "set", "code": "mh2", "name": "Modern Horizons 2"}), Kind::Set),
        (json!({"object": "list", "data": []}), Kind::List),
        (json!({"object": "card_symbol", "symbol": "{W}"}), Kind::CardSymbol),
        (json!({"object": "error", "status": 404, "code": "not_found"}), Kind::Error),
        (json!({"object": "ruling", "comment": "It does."}), Kind::Ruling),
        (json!({"object": "catalog", "data": ["Island"]}), Kind::Catalog),
        (json!({"object": "bulk_data", "type": "oracle_cards"}), Kind::BulkData),
        (json!({"object": "migration", "migration_strategy": "merge"}), Kind::Migration),
        (json!({"object": "mana_cost", "cost": "{W}"}), Kind::ManaCost),
        (json!({"object": "related_card", "name": "Goblin"}), Kind::RelatedCard),
    ];

    for (payload, kind) in payloads {
        let object = Object::from_value(payload).unwrap();
        assert_eq!(object.kind(), kind);
    }
}

#[test]
fn unregistered_kind_fails() {
    let err = Object::from_value(json!({"object": "planeswalker_points", "points": 12}));
    match err {
        Err(ScryfallError::UnknownKind(tag)) => assert_eq!(tag, "planeswalker_points"),
        other => panic!("expected UnknownKind, got {:?}", other),
    }
}

#[test]
fn missing_discriminator_fails() {
    assert!(Object::from_value(json!({"name": "No tag here"})).is_err());
}

// ---------------------------------------------------------------------------
// Typed construction
// ---------------------------------------------------------------------------

#[test]
fn constructing_card_from_matching_kind_succeeds() {
    let card = Card::from_value(json!({"object": "card", "name": "Counterspell"})).unwrap();
    assert_eq!(card.name, "Counterspell");
}

#[test]
fn constructing_card_from_set_payload_is_type_mismatch() {
    let err = Card::from_value(json!({"object": "set", "code": "a25", "name": "Masters 25"}));
    match err {
        Err(ScryfallError::TypeMismatch { expected, found }) => {
            assert_eq!(expected, "card");
            assert_eq!(found, "set");
        }
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn unread_fields_land_in_the_residual_bag() {
    let set = Set::from_value(json!({
        "object": "set",
        "code": "neo",
        "name": "Kamigawa: Neon Dynasty",
        "mtgo_code": "neo",
        "printed_size": 302,
    }))
    .unwrap();

    assert_eq!(set.code, "neo");
    assert_eq!(set.extra["mtgo_code"], "neo");
    assert_eq!(set.extra["printed_size"], 302);
}

#[test]
fn nested_faces_and_parts_are_typed() {
    let card = Card::from_value(json!({
        "object": "card",
        "name": "Wear // Tear",
        "layout": "split",
        "card_faces": [
            {"object": "card_face", "name": "Wear", "mana_cost": "{1}{R}"},
            {"object": "card_face", "name": "Tear", "mana_cost": "{W}"},
        ],
        "all_parts": [
            {"object": "related_card", "name": "Wear // Tear", "component": "combo_piece"},
        ],
    }))
    .unwrap();

    let faces = card.card_faces.as_ref().unwrap();
    assert_eq!(faces.len(), 2);
    assert_eq!(faces[0].name, "Wear");
    assert_eq!(faces[1].mana_cost.as_deref(), Some("{W}"));
    assert_eq!(
        card.all_parts.unwrap()[0].component.as_deref(),
        Some("combo_piece")
    );
}
