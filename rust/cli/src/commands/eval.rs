//! Single-hand evaluation.
//!
//! Prints the best five-card hand for two hole cards on a flop, turn, or
//! river board as pretty JSON.

use crate::error::CliError;
use crate::formatters::format_hand;
use crate::validation::{ensure_distinct, parse_cards};
use showdown_engine::hand::evaluate;
use showdown_engine::state::{CommunityCards, HoleCards};
use std::io::Write;

pub fn handle_eval_command(
    hole: &[String],
    board: &[String],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole_cards = parse_cards(hole).map_err(CliError::InvalidInput)?;
    let board_cards = parse_cards(board).map_err(CliError::InvalidInput)?;
    let [first, second] = hole_cards.as_slice() else {
        return Err(CliError::InvalidInput(format!(
            "Expected 2 hole cards, got {}",
            hole_cards.len()
        )));
    };

    let mut all = hole_cards.clone();
    all.extend_from_slice(&board_cards);
    ensure_distinct(&all).map_err(CliError::InvalidInput)?;

    let board = CommunityCards::new(board_cards)?;
    let hand = evaluate(&HoleCards::new(*first, *second), &board)?;

    let display = serde_json::json!({
        "category": hand.category,
        "description": format_hand(&hand),
        "tiebreakers": hand.tiebreakers,
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
