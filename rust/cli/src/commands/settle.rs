//! Settlement of a finished hand read from a JSON table file.
//!
//! # Table file
//!
//! ```json
//! {
//!   "street": "river",
//!   "pot": 450,
//!   "button": 2,
//!   "board": ["2c", "7d", "9h", "Js", "Kc"],
//!   "players": [
//!     { "status": "all_in", "hole": ["Kd", "Kh"], "contribution": 50 },
//!     { "status": "active", "hole": ["Ac", "Ad"], "contribution": 200 },
//!     { "status": "folded", "contribution": 200 }
//!   ]
//! }
//! ```
//!
//! A player's index is its position in `players`. `button` and
//! `contribution` are optional; with contributions the pot is layered into
//! side pots.

use crate::cli::OddChipRule;
use crate::config;
use crate::error::CliError;
use crate::formatters::format_hand;
use crate::io_utils::read_text_auto;
use crate::ui;
use crate::validation::{ensure_distinct, parse_cards};
use serde::Deserialize;
use showdown_engine::engine::{Settlement, settle_with};
use showdown_engine::logger::{HandLogger, SettlementRecord};
use showdown_engine::state::{
    CommunityCards, HoleCards, PlayerOutcome, PlayerStatus, Street, TerminalState,
};
use std::io::Write;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TableFile {
    street: Street,
    pot: u64,
    #[serde(default)]
    button: Option<usize>,
    #[serde(default)]
    board: Vec<String>,
    players: Vec<SeatFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeatFile {
    status: PlayerStatus,
    #[serde(default)]
    hole: Option<Vec<String>>,
    #[serde(default)]
    contribution: Option<u64>,
}

/// Handle the settle command.
///
/// The `--odd-chip` flag overrides the configured rule; `--history`
/// overrides the configured history file.
pub fn handle_settle_command(
    input: String,
    odd_chip: Option<OddChipRule>,
    history: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let rule = odd_chip.unwrap_or(cfg.odd_chip);
    let history = history.or(cfg.history);

    let text = read_text_auto(&input).map_err(|e| {
        let _ = ui::write_error(err, &format!("Failed to read {}: {}", input, e));
        CliError::InvalidInput(format!("Failed to read {}: {}", input, e))
    })?;
    let state = parse_table(&text)?;

    if rule == OddChipRule::Button && state.button.is_none() {
        ui::display_warning(
            err,
            "odd-chip rule 'button' needs a button seat in the table; using ascending order",
        )?;
    }
    let settlement = settle_with(&state, rule.order(state.button))?;

    let mut display = settlement_json(&settlement);
    if let Some(path) = history {
        let hand_id = append_history(&path, &state, &settlement, None)?;
        display["hand_id"] = serde_json::Value::String(hand_id);
    }
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

/// Build a terminal state from table-file JSON, checking card notation and
/// that no card appears twice.
pub(crate) fn parse_table(text: &str) -> Result<TerminalState, CliError> {
    let table: TableFile = serde_json::from_str(text)
        .map_err(|e| CliError::InvalidInput(format!("Invalid table: {}", e)))?;

    let board = parse_cards(&table.board).map_err(CliError::InvalidInput)?;
    let mut all_cards = board.clone();
    let mut players = Vec::with_capacity(table.players.len());
    for (index, seat) in table.players.into_iter().enumerate() {
        let hole = match seat.hole {
            None => None,
            Some(cards) => {
                let parsed = parse_cards(&cards).map_err(CliError::InvalidInput)?;
                let [first, second] = parsed.as_slice() else {
                    return Err(CliError::InvalidInput(format!(
                        "Player {} needs exactly 2 hole cards, got {}",
                        index,
                        parsed.len()
                    )));
                };
                all_cards.extend_from_slice(&parsed);
                Some(HoleCards::new(*first, *second))
            }
        };
        let mut outcome = PlayerOutcome::new(index, seat.status, hole);
        outcome.contribution = seat.contribution;
        players.push(outcome);
    }
    ensure_distinct(&all_cards).map_err(CliError::InvalidInput)?;

    let community = CommunityCards::new(board)?;
    let mut state = TerminalState::new(players, community, table.pot, table.street);
    state.button = table.button;
    Ok(state)
}

pub(crate) fn settlement_json(settlement: &Settlement) -> serde_json::Value {
    let hands: serde_json::Map<String, serde_json::Value> = settlement
        .resolution
        .hands
        .iter()
        .map(|(player, hand)| {
            (
                player.to_string(),
                serde_json::json!({
                    "category": hand.category,
                    "description": format_hand(hand),
                    "tiebreakers": hand.tiebreakers,
                }),
            )
        })
        .collect();
    serde_json::json!({
        "path": settlement.resolution.path,
        "winners": settlement.resolution.winners,
        "pots": settlement.pots,
        "payouts": settlement.payouts,
        "hands": hands,
    })
}

/// Append one settlement to a JSONL hand history and return its hand id.
pub(crate) fn append_history(
    path: &str,
    state: &TerminalState,
    settlement: &Settlement,
    seed: Option<u64>,
) -> Result<String, CliError> {
    let mut logger = HandLogger::create(path)?;
    let hand_id = logger.next_id();
    let mut record = SettlementRecord::from_settlement(hand_id.clone(), state, settlement);
    if let Some(seed) = seed {
        record = record.with_seed(seed);
    }
    logger.write(&record)?;
    Ok(hand_id)
}
