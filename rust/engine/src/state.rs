use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::{ShowdownError, Violation};

/// Represents a betting street in a flop-style community-card game.
/// Each street corresponds to a fixed number of community cards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// No community cards dealt
    Preflop,
    /// 3 community cards
    Flop,
    /// 4 community cards
    Turn,
    /// 5 community cards
    River,
}

impl Street {
    pub fn community_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    pub fn from_community_len(len: usize) -> Option<Street> {
        match len {
            0 => Some(Street::Preflop),
            3 => Some(Street::Flop),
            4 => Some(Street::Turn),
            5 => Some(Street::River),
            _ => None,
        }
    }
}

/// The two private cards dealt to one player.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HoleCards(pub [Card; 2]);

impl HoleCards {
    pub fn new(first: Card, second: Card) -> Self {
        Self([first, second])
    }

    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }
}

/// Shared board cards. Only lengths that match a street (0, 3, 4, 5) can be
/// constructed, including through deserialization.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct CommunityCards(Vec<Card>);

impl CommunityCards {
    pub fn new(cards: Vec<Card>) -> Result<Self, ShowdownError> {
        Ok(Self::try_from(cards)?)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<Card>> for CommunityCards {
    type Error = Violation;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        if Street::from_community_len(cards.len()).is_none() {
            return Err(Violation::InvalidCommunityCount(cards.len()));
        }
        Ok(Self(cards))
    }
}

impl From<CommunityCards> for Vec<Card> {
    fn from(board: CommunityCards) -> Self {
        board.0
    }
}

/// Where a player stands once the hand is over.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerStatus {
    /// Still contesting the pot
    Active,
    /// Surrendered any claim to the pot
    Folded,
    /// Contesting only the pot layers covered by the player's contribution
    AllIn,
}

impl PlayerStatus {
    /// Whether the player still has a claim on the pot.
    pub fn is_live(self) -> bool {
        !matches!(self, PlayerStatus::Folded)
    }
}

/// One player's terminal situation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerOutcome {
    pub player_index: usize,
    pub status: PlayerStatus,
    #[serde(default)]
    pub hole_cards: Option<HoleCards>,
    /// Total chips the player put in during the hand; enables side pots.
    #[serde(default)]
    pub contribution: Option<u64>,
}

impl PlayerOutcome {
    pub fn new(player_index: usize, status: PlayerStatus, hole_cards: Option<HoleCards>) -> Self {
        Self {
            player_index,
            status,
            hole_cards,
            contribution: None,
        }
    }

    pub fn with_contribution(mut self, amount: u64) -> Self {
        self.contribution = Some(amount);
        self
    }
}

/// The finished hand, constructed once by the game loop and never mutated.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TerminalState {
    pub players: Vec<PlayerOutcome>,
    pub community: CommunityCards,
    pub pot: u64,
    pub street: Street,
    /// Dealer button seat, when the caller tracks it.
    #[serde(default)]
    pub button: Option<usize>,
}

impl TerminalState {
    pub fn new(
        players: Vec<PlayerOutcome>,
        community: CommunityCards,
        pot: u64,
        street: Street,
    ) -> Self {
        Self {
            players,
            community,
            pot,
            street,
            button: None,
        }
    }

    pub fn with_button(mut self, button: usize) -> Self {
        self.button = Some(button);
        self
    }

    pub fn player(&self, index: usize) -> Option<&PlayerOutcome> {
        self.players.iter().find(|p| p.player_index == index)
    }

    /// Indices of players still contesting the pot, ascending.
    pub fn live_players(&self) -> Vec<usize> {
        let mut live: Vec<usize> = self
            .players
            .iter()
            .filter(|p| p.status.is_live())
            .map(|p| p.player_index)
            .collect();
        live.sort_unstable();
        live
    }

    /// Whether per-player contributions were supplied for this hand.
    pub fn has_contributions(&self) -> bool {
        self.players.iter().any(|p| p.contribution.is_some())
    }

    /// Checks the structural guarantees the game loop is expected to uphold.
    pub fn validate(&self) -> Result<(), ShowdownError> {
        let expected = self.street.community_len();
        if self.community.len() != expected {
            return Err(Violation::StreetMismatch {
                street: self.street,
                expected,
                actual: self.community.len(),
            }
            .into());
        }

        let mut seen = BTreeSet::new();
        for p in &self.players {
            if !seen.insert(p.player_index) {
                return Err(Violation::DuplicatePlayer {
                    player: p.player_index,
                }
                .into());
            }
        }

        if self.has_contributions() {
            let mut total = 0u64;
            for p in &self.players {
                let Some(amount) = p.contribution else {
                    return Err(Violation::PartialContributions {
                        player: p.player_index,
                    }
                    .into());
                };
                total = total.checked_add(amount).ok_or(Violation::ContributionMismatch {
                    pot: self.pot,
                    total: u64::MAX,
                })?;
            }
            if total != self.pot {
                return Err(Violation::ContributionMismatch {
                    pot: self.pot,
                    total,
                }
                .into());
            }
        }
        Ok(())
    }
}
