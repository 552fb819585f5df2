//! Deal command: a seeded hand dealt to the river and settled.
//!
//! Every seat stays in to the river and contributes the same stake, so the
//! deal always ends in a showdown over a single pot.

use crate::commands::settle::append_history;
use crate::config;
use crate::deck::Deck;
use crate::error::CliError;
use crate::formatters::{format_board, format_card, format_hand, format_payouts, format_players};
use showdown_engine::cards::Card;
use showdown_engine::engine::settle_with;
use showdown_engine::state::{
    CommunityCards, HoleCards, PlayerOutcome, PlayerStatus, Street, TerminalState,
};
use std::io::Write;
use tracing::debug;

const STAKE: u64 = 100;

/// Handle the deal command.
///
/// Flags take precedence over configuration; without any seed a random one
/// is drawn and printed so the deal can be reproduced.
pub fn handle_deal_command(
    seed: Option<u64>,
    players: Option<u8>,
    history: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let players = usize::from(players.unwrap_or(cfg.players));
    let history = history.or(cfg.history);

    let state = deal_to_river(seed, players)?;
    let settlement = settle_with(&state, cfg.odd_chip.order(state.button))?;

    writeln!(out, "Seed: {}", seed)?;
    for p in &state.players {
        if let Some(hole) = &p.hole_cards {
            let [a, b] = hole.cards();
            let shown = settlement
                .resolution
                .hands
                .get(&p.player_index)
                .map(format_hand)
                .unwrap_or_default();
            writeln!(
                out,
                "Hole P{}: {} {}  {}",
                p.player_index,
                format_card(a),
                format_card(b),
                shown
            )?;
        }
    }
    writeln!(out, "Board: {}", format_board(state.community.cards()))?;
    writeln!(
        out,
        "Winners: {}",
        format_players(&settlement.resolution.winners)
    )?;
    writeln!(out, "Payouts: {}", format_payouts(&settlement.payouts))?;

    if let Some(path) = history {
        let hand_id = append_history(&path, &state, &settlement, Some(seed))?;
        writeln!(out, "Hand: {}", hand_id)?;
    }
    Ok(())
}

/// Deal hole cards one at a time around the table, then burn-and-turn the
/// flop, turn, and river.
fn deal_to_river(seed: u64, players: usize) -> Result<TerminalState, CliError> {
    let mut deck = Deck::shuffled(seed);
    let draw = |deck: &mut Deck| -> Result<Card, CliError> {
        deck.deal_card()
            .ok_or_else(|| CliError::InvalidInput(format!("Deck exhausted dealing {} players", players)))
    };

    let mut first = Vec::with_capacity(players);
    for _ in 0..players {
        first.push(draw(&mut deck)?);
    }
    let mut seats = Vec::with_capacity(players);
    for (index, a) in first.into_iter().enumerate() {
        let b = draw(&mut deck)?;
        seats.push(
            PlayerOutcome::new(index, PlayerStatus::Active, Some(HoleCards::new(a, b)))
                .with_contribution(STAKE),
        );
    }

    let mut board = Vec::with_capacity(5);
    for street_cards in [3, 1, 1] {
        deck.burn_card();
        for _ in 0..street_cards {
            board.push(draw(&mut deck)?);
        }
    }
    debug!(seed, players, remaining = deck.remaining(), "dealt to river");

    let pot = STAKE * players as u64;
    Ok(TerminalState::new(seats, CommunityCards::new(board)?, pot, Street::River).with_button(0))
}
