use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ShowdownError;
use crate::pot::{build_pots, distribute_with, OddChipOrder, PayoutMap, Pot};
use crate::showdown::{best_among, resolve, Resolution};
use crate::state::TerminalState;

/// One pot and who took it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PotAward {
    pub amount: u64,
    pub eligible: Vec<usize>,
    pub winners: Vec<usize>,
}

/// Final accounting of a hand: who won, which pots they took, and what every
/// player is paid. `payouts` lists every player and sums to the pot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    pub resolution: Resolution,
    pub pots: Vec<PotAward>,
    pub payouts: PayoutMap,
}

/// Resolves and pays out a terminal state, odd chips to the lowest indices.
///
/// # Examples
///
/// ```
/// use showdown_engine::engine::settle;
/// use showdown_engine::state::{CommunityCards, PlayerOutcome, PlayerStatus, Street, TerminalState};
///
/// let state = TerminalState::new(
///     vec![
///         PlayerOutcome::new(0, PlayerStatus::Active, None),
///         PlayerOutcome::new(1, PlayerStatus::Folded, None),
///     ],
///     CommunityCards::empty(),
///     100,
///     Street::Preflop,
/// );
///
/// let settlement = settle(&state).unwrap();
/// assert_eq!(settlement.resolution.winners, vec![0]);
/// assert_eq!(settlement.payouts.get(0), 100);
/// assert_eq!(settlement.payouts.get(1), 0);
/// ```
pub fn settle(state: &TerminalState) -> Result<Settlement, ShowdownError> {
    settle_with(state, OddChipOrder::AscendingIndex)
}

/// Resolves and pays out a terminal state using the given odd-chip order.
///
/// Without contributions the whole pot goes to the hand's winners. With
/// contributions each side pot is awarded to the best hand among the live
/// players who reached it.
///
/// # Errors
///
/// Everything [`resolve`] reports, plus [`ShowdownError::EmptyWinnerSet`]
/// when no live player remains.
pub fn settle_with(
    state: &TerminalState,
    order: OddChipOrder,
) -> Result<Settlement, ShowdownError> {
    let resolution = resolve(state)?;
    if resolution.winners.is_empty() {
        return Err(ShowdownError::EmptyWinnerSet);
    }

    let pots = if state.has_contributions() {
        build_pots(&state.players)
    } else {
        vec![Pot {
            amount: state.pot,
            eligible: state.live_players(),
        }]
    };

    let mut payouts = PayoutMap::new();
    for p in &state.players {
        payouts.credit(p.player_index, 0);
    }

    let mut awards = Vec::with_capacity(pots.len());
    for pot in pots {
        let winners = if pot.eligible.len() == 1 || resolution.hands.is_empty() {
            winners_without_cards(&resolution, &pot.eligible)
        } else {
            best_among(&resolution.hands, &pot.eligible)
        };
        for (player, amount) in distribute_with(pot.amount, &winners, order)?.iter() {
            payouts.credit(player, amount);
        }
        awards.push(PotAward {
            amount: pot.amount,
            eligible: pot.eligible,
            winners,
        });
    }

    debug_assert_eq!(payouts.total(), state.pot);
    debug!(
        path = ?resolution.path,
        winners = ?resolution.winners,
        pots = awards.len(),
        pot = state.pot,
        "hand settled"
    );
    Ok(Settlement {
        resolution,
        pots: awards,
        payouts,
    })
}

// A lone contender takes the pot uncontested; on the elimination path the
// sole survivor is the only possible eligible player.
fn winners_without_cards(resolution: &Resolution, eligible: &[usize]) -> Vec<usize> {
    match eligible {
        [only] => vec![*only],
        _ => resolution
            .winners
            .iter()
            .copied()
            .filter(|w| eligible.contains(w))
            .collect(),
    }
}
