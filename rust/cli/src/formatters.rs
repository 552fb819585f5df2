//! Card, hand, and payout formatters for terminal display.
//!
//! Suits print as Unicode symbols (♥ ♦ ♣ ♠) where the terminal is expected
//! to render them, and as the letters `h d c s` otherwise. On Windows this is
//! decided by the presence of WT_SESSION, TERM_PROGRAM, or VSCODE_INJECTION;
//! other platforms always use Unicode.
//!
//! ## Example
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_cli::formatters::{format_board, format_card};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use showdown_engine::cards::{Card, Rank, Suit};
use showdown_engine::hand::EvaluatedHand;
use showdown_engine::pot::PayoutMap;

pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.symbol().to_string()
    }
}

pub fn format_rank(rank: &Rank) -> String {
    rank.symbol().to_string()
}

/// "A♠" with Unicode suits, "As" without.
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Bracketed, space-separated cards: `[A♠ K♥ Q♦]`, or `[]` for no cards.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Category name followed by its significant ranks, e.g. `Two pair (K 9 A)`.
///
/// ```rust
/// use showdown_engine::hand::{Category, EvaluatedHand};
/// # use showdown_cli::formatters::format_hand;
///
/// let wheel = EvaluatedHand { category: Category::Straight, tiebreakers: [5, 0, 0, 0, 0] };
/// assert_eq!(format_hand(&wheel), "Straight (5)");
/// ```
pub fn format_hand(hand: &EvaluatedHand) -> String {
    let ranks: Vec<String> = hand
        .tiebreakers
        .iter()
        .filter_map(|&v| Rank::from_value(v))
        .map(|r| format_rank(&r))
        .collect();
    format!("{} ({})", hand.category.name(), ranks.join(" "))
}

/// `P0=150 P1=0 ...` in ascending player order.
pub fn format_payouts(payouts: &PayoutMap) -> String {
    let parts: Vec<String> = payouts
        .iter()
        .map(|(player, amount)| format!("P{}={}", player, amount))
        .collect();
    parts.join(" ")
}

pub fn format_players(players: &[usize]) -> String {
    let parts: Vec<String> = players.iter().map(|p| format!("P{}", p)).collect();
    parts.join(" ")
}
