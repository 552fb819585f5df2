use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::{ShowdownError, Violation};
use crate::state::{CommunityCards, HoleCards};

/// Hand categories, lowest to highest. A royal flush is simply the highest
/// straight flush, not a category of its own.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
        }
    }
}

/// The best five-card hand a player can make.
///
/// `tiebreakers` holds rank values ordered by significance and zero-padded to
/// five entries, so every category compares as a uniform 5-tuple.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct EvaluatedHand {
    pub category: Category,
    // ordered high -> low for tiebreaks
    pub tiebreakers: [u8; 5],
}

impl Ord for EvaluatedHand {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl PartialOrd for EvaluatedHand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Evaluates a player's best hand from their hole cards and the board.
///
/// # Errors
///
/// Returns [`ShowdownError::StructuralViolation`] when fewer than three
/// community cards are dealt; there is no sound evaluation before the flop.
///
/// # Examples
///
/// ```
/// use showdown_engine::cards::{Card, Rank, Suit};
/// use showdown_engine::hand::{evaluate, Category};
/// use showdown_engine::state::{CommunityCards, HoleCards};
///
/// let hole = HoleCards::new(
///     Card::new(Rank::Ace, Suit::Hearts),
///     Card::new(Rank::Two, Suit::Diamonds),
/// );
/// let board = CommunityCards::new(vec![
///     Card::new(Rank::Three, Suit::Clubs),
///     Card::new(Rank::Four, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Spades),
///     Card::new(Rank::Nine, Suit::Diamonds),
///     Card::new(Rank::King, Suit::Clubs),
/// ])
/// .unwrap();
///
/// let hand = evaluate(&hole, &board).unwrap();
/// assert_eq!(hand.category, Category::Straight);
/// assert_eq!(hand.tiebreakers[0], 5);
/// ```
pub fn evaluate(
    hole: &HoleCards,
    community: &CommunityCards,
) -> Result<EvaluatedHand, ShowdownError> {
    if community.len() < 3 {
        return Err(Violation::PoolSize(community.len() + 2).into());
    }
    let mut pool = Vec::with_capacity(7);
    pool.extend_from_slice(hole.cards());
    pool.extend_from_slice(community.cards());
    evaluate_cards(&pool)
}

/// Evaluates the best five-card hand within a pool of 5 to 7 cards.
pub fn evaluate_cards(cards: &[Card]) -> Result<EvaluatedHand, ShowdownError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(Violation::PoolSize(cards.len()).into());
    }

    // Count ranks and suits
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut by_suit: [Vec<u8>; 4] = [vec![], vec![], vec![], vec![]];
    for c in cards {
        let r = c.rank.value();
        rank_counts[r as usize] += 1;
        by_suit[c.suit.index()].push(r);
    }

    // At most one suit can hold five of seven cards
    let flush_ranks = by_suit.iter_mut().find(|s| s.len() >= 5).map(|s| {
        s.sort_unstable_by(|a, b| b.cmp(a));
        s.clone()
    });

    if let Some(ranks) = &flush_ranks {
        if let Some(high) = straight_high(rank_mask(ranks)) {
            return Ok(hand(Category::StraightFlush, &[high]));
        }
    }

    let groups = rank_groups(&rank_counts);

    if let Some(&(quad, _)) = groups.iter().find(|&&(_, n)| n == 4) {
        let mut k = vec![quad];
        k.extend(highest_excluding(&groups, &[quad], 1));
        return Ok(hand(Category::FourOfAKind, &k));
    }

    if let Some((trips, pair)) = full_house(&groups) {
        return Ok(hand(Category::FullHouse, &[trips, pair]));
    }

    if let Some(ranks) = flush_ranks {
        return Ok(hand(Category::Flush, &ranks[..5]));
    }

    let present: Vec<u8> = groups.iter().map(|&(r, _)| r).collect();
    if let Some(high) = straight_high(rank_mask(&present)) {
        return Ok(hand(Category::Straight, &[high]));
    }

    if let Some(&(trips, _)) = groups.iter().find(|&&(_, n)| n == 3) {
        let mut k = vec![trips];
        k.extend(highest_excluding(&groups, &[trips], 2));
        return Ok(hand(Category::ThreeOfAKind, &k));
    }

    let pairs: Vec<u8> = groups
        .iter()
        .filter(|&&(_, n)| n == 2)
        .map(|&(r, _)| r)
        .collect();
    if pairs.len() >= 2 {
        let (high, low) = (pairs[0], pairs[1]);
        // a third pair still competes as the kicker
        let mut k = vec![high, low];
        k.extend(highest_excluding(&groups, &[high, low], 1));
        return Ok(hand(Category::TwoPair, &k));
    }
    if let Some(&p) = pairs.first() {
        let mut k = vec![p];
        k.extend(highest_excluding(&groups, &[p], 3));
        return Ok(hand(Category::Pair, &k));
    }

    Ok(hand(Category::HighCard, &highest_excluding(&groups, &[], 5)))
}

/// Compares two evaluated hands: category first, then tiebreakers
/// element-wise. `Equal` is a true tie.
pub fn compare_hands(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.tiebreakers.cmp(&b.tiebreakers),
        ord => ord,
    }
}

fn hand(category: Category, significant: &[u8]) -> EvaluatedHand {
    let mut tiebreakers = [0u8; 5];
    for (slot, &r) in tiebreakers.iter_mut().zip(significant) {
        *slot = r;
    }
    EvaluatedHand {
        category,
        tiebreakers,
    }
}

/// (rank, count) for every rank present, ordered by count then rank, both descending.
fn rank_groups(rank_counts: &[u8; 15]) -> Vec<(u8, u8)> {
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .map(|r| (r, rank_counts[r as usize]))
        .collect();
    groups.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
    groups
}

fn full_house(groups: &[(u8, u8)]) -> Option<(u8, u8)> {
    let trips = groups.iter().find(|&&(_, n)| n == 3)?.0;
    // second trips plays as the pair
    let pair = groups
        .iter()
        .filter(|&&(r, n)| r != trips && n >= 2)
        .map(|&(r, _)| r)
        .max()?;
    Some((trips, pair))
}

fn highest_excluding(groups: &[(u8, u8)], used: &[u8], n: usize) -> Vec<u8> {
    let mut rest: Vec<u8> = groups
        .iter()
        .map(|&(r, _)| r)
        .filter(|r| !used.contains(r))
        .collect();
    rest.sort_unstable_by(|a, b| b.cmp(a));
    rest.truncate(n);
    rest
}

fn rank_mask(ranks: &[u8]) -> u16 {
    ranks.iter().fold(0u16, |m, &r| m | (1 << r))
}

fn straight_high(mask: u16) -> Option<u8> {
    let mut m = mask;
    // Ace also plays low, as rank 1
    if (m & (1 << 14)) != 0 {
        m |= 1 << 1;
    }
    // Sliding 5-bit window from Ace(14) down to the wheel's 5
    (5..=14u8).rev().find(|&high| {
        let window = 0b11111u16 << (high - 4);
        (m & window) == window
    })
}
