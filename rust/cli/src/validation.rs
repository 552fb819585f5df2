//! Input parsing and validation for card notation and table files.
//!
//! The engine never parses text: everything typed on the command line or read
//! from a table file is turned into engine types here first.
//!
//! ## Card notation
//!
//! A card is a rank followed by a suit, case-insensitive: `Ah`, `td`, `10c`,
//! `Q♠`. Ranks are `2`-`9`, `T` (or `10`), `J`, `Q`, `K`, `A`. Suits are
//! `c`, `d`, `h`, `s` or the Unicode symbols `♣ ♦ ♥ ♠`.

use std::collections::HashSet;

use clap::ValueEnum;
use showdown_engine::cards::{Card, Rank, Suit};

use crate::cli::OddChipRule;

/// Parse a single card in two-character notation.
///
/// # Example
///
/// ```rust
/// # use showdown_cli::validation::parse_card;
/// use showdown_engine::cards::{Card, Rank, Suit};
///
/// assert_eq!(parse_card("Ah"), Ok(Card::new(Rank::Ace, Suit::Hearts)));
/// assert_eq!(parse_card("10s"), Ok(Card::new(Rank::Ten, Suit::Spades)));
/// assert!(parse_card("1x").is_err());
/// ```
pub fn parse_card(input: &str) -> Result<Card, String> {
    let s = input.trim();
    let mut chars = s.chars();
    let suit_char = chars
        .next_back()
        .ok_or_else(|| "Empty card".to_string())?;
    let rank_part = chars.as_str();

    let rank = parse_rank(rank_part).ok_or_else(|| format!("Invalid rank in card '{}'", s))?;
    let suit = parse_suit(suit_char).ok_or_else(|| format!("Invalid suit in card '{}'", s))?;
    Ok(Card::new(rank, suit))
}

fn parse_rank(s: &str) -> Option<Rank> {
    match s.to_ascii_uppercase().as_str() {
        "T" | "10" => Some(Rank::Ten),
        "J" => Some(Rank::Jack),
        "Q" => Some(Rank::Queen),
        "K" => Some(Rank::King),
        "A" => Some(Rank::Ace),
        d if d.len() == 1 => d.parse::<u8>().ok().filter(|v| *v >= 2).and_then(Rank::from_value),
        _ => None,
    }
}

fn parse_suit(c: char) -> Option<Suit> {
    match c.to_ascii_lowercase() {
        'c' | '♣' => Some(Suit::Clubs),
        'd' | '♦' => Some(Suit::Diamonds),
        'h' | '♥' => Some(Suit::Hearts),
        's' | '♠' => Some(Suit::Spades),
        _ => None,
    }
}

/// Parse a list of cards, failing on the first invalid one.
pub fn parse_cards<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<Card>, String> {
    inputs.iter().map(|s| parse_card(s.as_ref())).collect()
}

/// Reject a set of cards that could not all come from one deck.
pub fn ensure_distinct(cards: &[Card]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for c in cards {
        if !seen.insert(*c) {
            return Err(format!("Duplicate card {}", c));
        }
    }
    Ok(())
}

/// Parse an odd-chip rule name (`ascending` or `button`), case-insensitive.
pub fn parse_odd_chip(input: &str) -> Option<OddChipRule> {
    OddChipRule::from_str(input.trim(), true).ok()
}
