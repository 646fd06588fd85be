//! Color and mana-cost model.
//!
//! A mana cost string such as `"{1}{W}{W}"` is a run of bracketed symbol
//! codes. Each code is resolved against a [`SymbolTable`] built once from
//! the symbology listing; the parsed [`Mana`] accumulates the total
//! converted cost and the union of symbol colors.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScryfallError};
use crate::models::CardSymbol;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// One of the five colors, ordered by the fixed alphabet W, U, B, R, G.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    W,
    U,
    B,
    R,
    G,
}

impl Color {
    /// 0-based position in the color alphabet.
    pub fn rank(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            Color::W => "W",
            Color::U => "U",
            Color::B => "B",
            Color::R => "R",
            Color::G => "G",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Color {
    type Err = ScryfallError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "W" => Ok(Color::W),
            "U" => Ok(Color::U),
            "B" => Ok(Color::B),
            "R" => Ok(Color::R),
            "G" => Ok(Color::G),
            other => Err(ScryfallError::InvalidArgument(format!(
                "not a color code: {:?}",
                other
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// SymbolTable
// ---------------------------------------------------------------------------

/// Lookup table from symbol code (`"{W}"`, `"{2/U}"`, ...) to its
/// [`CardSymbol`], restricted to symbols that represent mana.
///
/// Built once per process from the symbology listing and threaded by
/// reference into every parse; see
/// [`ScryfallSdk::symbol_table`](crate::ScryfallSdk::symbol_table).
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, CardSymbol>,
}

impl SymbolTable {
    /// Build a table from a symbology listing, keeping mana symbols only.
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = CardSymbol>,
    {
        let symbols = symbols
            .into_iter()
            .filter(|symbol| symbol.represents_mana)
            .map(|symbol| (symbol.symbol.clone(), symbol))
            .collect();
        Self { symbols }
    }

    pub fn get(&self, code: &str) -> Option<&CardSymbol> {
        self.symbols.get(code)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Mana
// ---------------------------------------------------------------------------

fn symbol_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{[^}]+\}").expect("valid symbol pattern"))
}

/// A parsed mana cost: the symbols in cost order, the total converted
/// cost, and the ordered union of the symbols' colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Mana {
    pub cost: String,
    pub symbols: Vec<CardSymbol>,
    pub cmc: f64,
    pub colors: BTreeSet<Color>,
}

impl Mana {
    /// Parse a cost string against a populated symbol table.
    ///
    /// A code missing from the table signals unexpected upstream data and
    /// fails with [`ScryfallError::UnknownSymbol`].
    pub fn parse(cost: &str, table: &SymbolTable) -> Result<Mana> {
        let mut symbols = Vec::new();
        let mut cmc = 0.0;
        let mut colors = BTreeSet::new();

        for token in symbol_pattern().find_iter(cost) {
            let code = token.as_str();
            let symbol = table
                .get(code)
                .ok_or_else(|| ScryfallError::UnknownSymbol(code.to_string()))?;
            cmc += symbol.mana_value.unwrap_or(0.0);
            colors.extend(symbol.colors.iter().copied());
            symbols.push(symbol.clone());
        }

        Ok(Mana {
            cost: cost.to_string(),
            symbols,
            cmc,
            colors,
        })
    }

    pub fn colorless(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn monocolored(&self) -> bool {
        self.colors.len() == 1
    }

    pub fn multicolored(&self) -> bool {
        self.colors.len() >= 2
    }

    /// The symbols in cost order.
    pub fn iter(&self) -> std::slice::Iter<'_, CardSymbol> {
        self.symbols.iter()
    }
}

impl<'a> IntoIterator for &'a Mana {
    type Item = &'a CardSymbol;
    type IntoIter = std::slice::Iter<'a, CardSymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
