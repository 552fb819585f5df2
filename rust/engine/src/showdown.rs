//! Winner resolution for a finished hand.
//!
//! A hand ends either by elimination (one live player left, no cards are
//! evaluated) or by showdown on the river. Anything else is refused.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::{ShowdownError, Violation};
use crate::hand::{evaluate, EvaluatedHand};
use crate::state::TerminalState;

/// How the hand was decided.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Path {
    /// Everyone else folded
    Elimination,
    /// Live hands were compared on the river
    Showdown,
    /// No live players remain; callers treat this as an internal failure
    NoContest,
}

/// Outcome of [`resolve`]: the winners (ascending index) and, at showdown,
/// every live player's evaluated hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub path: Path,
    pub winners: Vec<usize>,
    pub hands: BTreeMap<usize, EvaluatedHand>,
}

/// Decides who wins the hand, without paying anyone.
///
/// # Errors
///
/// - [`ShowdownError::StructuralViolation`] if the state fails
///   [`TerminalState::validate`] or only some live players have hole cards
/// - [`ShowdownError::PrematureShowdown`] if two or more players are live
///   before the river
/// - [`ShowdownError::EmptyWinnerSet`] if no live player has hole cards
pub fn resolve(state: &TerminalState) -> Result<Resolution, ShowdownError> {
    state.validate()?;
    let live = state.live_players();

    match live.as_slice() {
        [] => {
            debug!(players = state.players.len(), "no live players remain");
            Ok(Resolution {
                path: Path::NoContest,
                winners: Vec::new(),
                hands: BTreeMap::new(),
            })
        }
        [sole] => {
            debug!(winner = sole, street = ?state.street, "hand won by elimination");
            Ok(Resolution {
                path: Path::Elimination,
                winners: vec![*sole],
                hands: BTreeMap::new(),
            })
        }
        _ => {
            if state.community.len() < 5 {
                return Err(ShowdownError::PrematureShowdown {
                    live: live.len(),
                    community: state.community.len(),
                });
            }
            let hands = evaluate_live(state, &live)?;
            let winners = best_among(&hands, &live);
            debug!(?winners, contenders = live.len(), "showdown resolved");
            Ok(Resolution {
                path: Path::Showdown,
                winners,
                hands,
            })
        }
    }
}

/// Players holding the maximal hand among `eligible`, ascending.
///
/// Eligible players without an evaluated hand never win.
pub fn best_among(hands: &BTreeMap<usize, EvaluatedHand>, eligible: &[usize]) -> Vec<usize> {
    let best = eligible.iter().filter_map(|i| hands.get(i)).max();
    let Some(best) = best else {
        return Vec::new();
    };
    let mut winners: Vec<usize> = eligible
        .iter()
        .copied()
        .filter(|i| hands.get(i) == Some(best))
        .collect();
    winners.sort_unstable();
    winners.dedup();
    winners
}

fn evaluate_live(
    state: &TerminalState,
    live: &[usize],
) -> Result<BTreeMap<usize, EvaluatedHand>, ShowdownError> {
    let missing: Vec<usize> = live
        .iter()
        .copied()
        .filter(|&i| state.player(i).and_then(|p| p.hole_cards).is_none())
        .collect();
    if missing.len() == live.len() {
        return Err(ShowdownError::EmptyWinnerSet);
    }
    if let Some(&player) = missing.first() {
        return Err(Violation::MissingHoleCards { player }.into());
    }

    let mut hands = BTreeMap::new();
    for p in state.players.iter().filter(|p| p.status.is_live()) {
        if let Some(hole) = &p.hole_cards {
            let hand = evaluate(hole, &state.community)?;
            trace!(player = p.player_index, category = ?hand.category, tiebreakers = ?hand.tiebreakers, "evaluated");
            hands.insert(p.player_index, hand);
        }
    }
    Ok(hands)
}
