//! Plain-text decklist parsing.
//!
//! Format: the first non-blank line is the deck title; a blank line ends a
//! section; the first non-blank line after a break names the next section;
//! every other line is `[count ]name[ (SET[ number])]`. The parse produces
//! [`Identifier`] criteria ready for
//! [`CardQuery::collection`](crate::queries::cards::CardQuery::collection).

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Result, ScryfallError};
use crate::queries::cards::Identifier;

fn card_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?:(?P<count>[0-9]+) +)?(?P<name>[^(]*[^( ])(?: +\((?P<code>[A-Z0-9]+)\)(?: (?P<number>[0-9]+[a-z]?))?)?$",
        )
        .expect("valid card pattern")
    })
}

fn title_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\((?P<code>[A-Z0-9]+)\) (?P<deck>.*)$").expect("valid title pattern")
    })
}

/// One decklist line: a count and the identifier to resolve it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckEntry {
    pub count: u32,
    pub identifier: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub entries: Vec<DeckEntry>,
}

impl Section {
    pub fn total_count(&self) -> u32 {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decklist {
    pub title: String,
    pub sections: Vec<Section>,
}

impl Decklist {
    /// Parse a decklist from text. An unrecognizable card line fails with
    /// [`ScryfallError::InvalidArgument`] naming the line.
    pub fn parse(text: &str) -> Result<Decklist> {
        let mut title: Option<String> = None;
        let mut sections: Vec<Section> = Vec::new();
        let mut in_section = false;

        for line in text.lines().map(str::trim) {
            if line.is_empty() {
                in_section = false;
                continue;
            }

            if title.is_none() {
                title = Some(line.to_string());
                continue;
            }

            if !in_section {
                sections.push(Section {
                    name: line.to_string(),
                    entries: Vec::new(),
                });
                in_section = true;
                continue;
            }

            let caps = card_pattern().captures(line).ok_or_else(|| {
                ScryfallError::InvalidArgument(format!("failed to parse line {:?}", line))
            })?;

            let count = caps
                .name("count")
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0);
            let name = caps.name("name").map(|m| m.as_str()).unwrap_or_default();
            let code = caps.name("code").map(|m| m.as_str());
            let number = caps.name("number").map(|m| m.as_str());

            let identifier = match (code, number) {
                (Some(code), Some(number)) => Identifier::collector_number(code, number),
                _ => {
                    // The collection endpoint can't resolve split cards by
                    // their full name (e.g. Fire // Ice); the first half
                    // (Fire) is still unique.
                    let name = name.split("//").next().unwrap_or(name).trim();
                    match code {
                        Some(code) => Identifier::name_in_set(name, code),
                        None => Identifier::name(name),
                    }
                }
            };

            if let Some(section) = sections.last_mut() {
                section.entries.push(DeckEntry { count, identifier });
            }
        }

        let title = title.ok_or_else(|| {
            ScryfallError::InvalidArgument("decklist has no title line".to_string())
        })?;

        Ok(Decklist { title, sections })
    }

    /// Every distinct identifier across all sections, in first-seen order.
    pub fn identifiers(&self) -> Vec<Identifier> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for section in &self.sections {
            for entry in &section.entries {
                if seen.insert(&entry.identifier) {
                    out.push(entry.identifier.clone());
                }
            }
        }
        out
    }

    /// Split a `(CODE) Deck Name` title into its set code and display name.
    /// Titles without the prefix return the whole title as the name.
    pub fn title_parts(&self) -> (Option<&str>, &str) {
        match title_pattern().captures(&self.title) {
            Some(caps) => {
                let code = caps.name("code").map(|m| m.as_str());
                let deck = caps
                    .name("deck")
                    .map(|m| m.as_str())
                    .unwrap_or(&self.title);
                (code, deck)
            }
            None => (None, self.title.as_str()),
        }
    }
}
