//! Pot distribution.
//!
//! Every function here conserves chips: the payouts it returns always sum to
//! the amount it was asked to split.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ShowdownError;
use crate::state::PlayerOutcome;

/// Chips won per player index. Players absent from the map won nothing.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayoutMap(BTreeMap<usize, u64>);

impl PayoutMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: usize) -> u64 {
        self.0.get(&player).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds `amount` to a player's winnings, listing the player if new.
    pub fn credit(&mut self, player: usize, amount: u64) {
        *self.0.entry(player).or_insert(0) += amount;
    }
}

/// Who receives the chips left over when a pot does not split evenly.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OddChipOrder {
    /// One chip each to the lowest-indexed winners first
    #[default]
    AscendingIndex,
    /// One chip each starting with the first winner seated after the button
    FromButton { button: usize },
}

impl OddChipOrder {
    fn arrange(self, winners: &mut [usize]) {
        match self {
            OddChipOrder::AscendingIndex => winners.sort_unstable(),
            OddChipOrder::FromButton { button } => {
                winners.sort_unstable_by_key(|&w| (w <= button, w));
            }
        }
    }
}

/// Splits `pot` among `winners`, remainder chips going to the lowest indices.
///
/// # Examples
///
/// ```
/// use showdown_engine::pot::distribute;
///
/// let payouts = distribute(101, &[0, 1]).unwrap();
/// assert_eq!(payouts.get(0), 51);
/// assert_eq!(payouts.get(1), 50);
/// assert_eq!(payouts.total(), 101);
/// ```
pub fn distribute(pot: u64, winners: &[usize]) -> Result<PayoutMap, ShowdownError> {
    distribute_with(pot, winners, OddChipOrder::AscendingIndex)
}

/// Splits `pot` evenly among `winners`, handing out the remainder one chip at
/// a time in `order`.
///
/// # Errors
///
/// Returns [`ShowdownError::EmptyWinnerSet`] when `winners` is empty.
pub fn distribute_with(
    pot: u64,
    winners: &[usize],
    order: OddChipOrder,
) -> Result<PayoutMap, ShowdownError> {
    let mut winners = winners.to_vec();
    winners.sort_unstable();
    winners.dedup();
    if winners.is_empty() {
        return Err(ShowdownError::EmptyWinnerSet);
    }

    let n = winners.len() as u64;
    let base = pot / n;
    let remainder = (pot % n) as usize;

    order.arrange(&mut winners);
    let mut payouts = PayoutMap::new();
    for (i, &w) in winners.iter().enumerate() {
        let odd = u64::from(i < remainder);
        payouts.credit(w, base + odd);
    }
    Ok(payouts)
}

/// A pot layer and the live players entitled to contest it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pot {
    pub amount: u64,
    pub eligible: Vec<usize>,
}

/// Splits the chips into a main pot and side pots by contribution tier.
///
/// Every tier collects, from each player, the chips they put in between the
/// previous tier and this one. Only live players who reached the tier may win
/// it; folded chips stay in as dead money. Adjacent tiers with the same
/// contenders are merged, so equal contributions yield a single pot.
///
/// # Examples
///
/// ```
/// use showdown_engine::pot::build_pots;
/// use showdown_engine::state::{PlayerOutcome, PlayerStatus};
///
/// let players = vec![
///     PlayerOutcome::new(0, PlayerStatus::AllIn, None).with_contribution(50),
///     PlayerOutcome::new(1, PlayerStatus::Active, None).with_contribution(200),
///     PlayerOutcome::new(2, PlayerStatus::Active, None).with_contribution(200),
/// ];
/// let pots = build_pots(&players);
/// assert_eq!(pots.len(), 2);
/// assert_eq!((pots[0].amount, pots[0].eligible.clone()), (150, vec![0, 1, 2]));
/// assert_eq!((pots[1].amount, pots[1].eligible.clone()), (300, vec![1, 2]));
/// ```
pub fn build_pots(players: &[PlayerOutcome]) -> Vec<Pot> {
    let contribution = |p: &PlayerOutcome| p.contribution.unwrap_or(0);

    let mut levels: Vec<u64> = players.iter().map(contribution).filter(|&c| c > 0).collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots: Vec<Pot> = Vec::new();
    let mut unclaimed = 0u64;
    let mut prev = 0u64;
    for level in levels {
        let amount: u64 = players
            .iter()
            .map(|p| contribution(p).min(level) - contribution(p).min(prev))
            .sum();
        prev = level;

        let mut eligible: Vec<usize> = players
            .iter()
            .filter(|p| p.status.is_live() && contribution(p) >= level)
            .map(|p| p.player_index)
            .collect();
        eligible.sort_unstable();

        if eligible.is_empty() {
            // nobody live reached this tier
            match pots.last_mut() {
                Some(last) => last.amount += amount,
                None => unclaimed += amount,
            }
            continue;
        }

        let amount = amount + std::mem::take(&mut unclaimed);
        match pots.last_mut() {
            Some(last) if last.eligible == eligible => last.amount += amount,
            _ => pots.push(Pot { amount, eligible }),
        }
    }

    if unclaimed > 0 {
        let mut live: Vec<usize> = players
            .iter()
            .filter(|p| p.status.is_live())
            .map(|p| p.player_index)
            .collect();
        live.sort_unstable();
        pots.push(Pot {
            amount: unclaimed,
            eligible: live,
        });
    }
    pots
}
