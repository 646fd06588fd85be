//! Decklist text parsing.

use scryfall_sdk::decklist::Decklist;
use scryfall_sdk::{Identifier, ScryfallError};

const DECK: &str = "\
(NEO) Greasefang Combo

Commander
1 Greasefang, Okiba Boss (NEO) 224

Deck
4 Esper Sentinel
4 Fire // Ice (MH2)
2 Parhelion II
";

#[test]
fn title_sections_and_counts_parse() {
    let deck = Decklist::parse(DECK).unwrap();

    assert_eq!(deck.title, "(NEO) Greasefang Combo");
    assert_eq!(deck.sections.len(), 2);
    assert_eq!(deck.sections[0].name, "Commander");
    assert_eq!(deck.sections[0].total_count(), 1);
    assert_eq!(deck.sections[1].name, "Deck");
    assert_eq!(deck.sections[1].total_count(), 10);
}

#[test]
fn collector_numbers_beat_names_as_identifiers() {
    let deck = Decklist::parse(DECK).unwrap();

    assert_eq!(
        deck.sections[0].entries[0].identifier,
        Identifier::collector_number("NEO", "224")
    );
}

#[test]
fn split_names_truncate_to_their_first_half() {
    let deck = Decklist::parse(DECK).unwrap();

    // Fire // Ice cannot be resolved by its full name
    assert_eq!(
        deck.sections[1].entries[1].identifier,
        Identifier::name_in_set("Fire", "MH2")
    );
}

#[test]
fn bare_names_have_no_set() {
    let deck = Decklist::parse(DECK).unwrap();

    assert_eq!(
        deck.sections[1].entries[0].identifier,
        Identifier::name("Esper Sentinel")
    );
}

#[test]
fn identifiers_dedupe_across_sections_in_first_seen_order() {
    let text = "\
My Deck

Deck
2 Esper Sentinel
1 Sol Ring

Sideboard
2 Esper Sentinel
1 Damping Sphere
";
    let deck = Decklist::parse(text).unwrap();

    assert_eq!(
        deck.identifiers(),
        vec![
            Identifier::name("Esper Sentinel"),
            Identifier::name("Sol Ring"),
            Identifier::name("Damping Sphere"),
        ]
    );
}

#[test]
fn counts_are_optional_and_suffixed_collector_numbers_parse() {
    let text = "\
My Deck

Tokens
Treasure (NEO) 19a
";
    let deck = Decklist::parse(text).unwrap();
    let entry = &deck.sections[0].entries[0];
    assert_eq!(entry.count, 0);
    assert_eq!(entry.identifier, Identifier::collector_number("NEO", "19a"));
}

#[test]
fn title_parts_split_a_set_prefixed_title() {
    let deck = Decklist::parse(DECK).unwrap();
    assert_eq!(deck.title_parts(), (Some("NEO"), "Greasefang Combo"));

    let plain = Decklist::parse("Mono Red Burn\n\nDeck\n4 Lightning Bolt\n").unwrap();
    assert_eq!(plain.title_parts(), (None, "Mono Red Burn"));
}

#[test]
fn an_unparseable_card_line_is_rejected() {
    let text = "\
My Deck

Deck
((((
";
    assert!(matches!(
        Decklist::parse(text),
        Err(ScryfallError::InvalidArgument(_))
    ));
}

#[test]
fn an_empty_decklist_has_no_title() {
    assert!(Decklist::parse("\n\n").is_err());
}
