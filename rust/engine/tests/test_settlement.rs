use showdown_engine::cards::{Card, Rank as R, Suit as S};
use showdown_engine::engine::{settle, settle_with};
use showdown_engine::errors::{ShowdownError, Violation};
use showdown_engine::pot::{build_pots, OddChipOrder};
use showdown_engine::showdown::Path;
use showdown_engine::state::{
    CommunityCards, HoleCards, PlayerOutcome, PlayerStatus, Street, TerminalState,
};

fn c(s: S, r: R) -> Card {
    Card::new(r, s)
}

fn seat(i: usize, status: PlayerStatus, a: Card, b: Card) -> PlayerOutcome {
    PlayerOutcome::new(i, status, Some(HoleCards::new(a, b)))
}

fn dry_board() -> CommunityCards {
    CommunityCards::new(vec![
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Seven),
        c(S::Hearts, R::Nine),
        c(S::Spades, R::Jack),
        c(S::Clubs, R::King),
    ])
    .unwrap()
}

#[test]
fn single_survivor_takes_whole_pot() {
    let state = TerminalState::new(
        vec![
            PlayerOutcome::new(0, PlayerStatus::Active, None),
            PlayerOutcome::new(1, PlayerStatus::Folded, None),
        ],
        CommunityCards::empty(),
        100,
        Street::Preflop,
    );
    let s = settle(&state).unwrap();
    assert_eq!(s.resolution.path, Path::Elimination);
    assert_eq!(s.payouts.get(0), 100);
    assert_eq!(s.payouts.get(1), 0);
    assert_eq!(s.payouts.len(), 2);
}

#[test]
fn broadway_straight_takes_the_pot() {
    let board = CommunityCards::new(vec![
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Ten),
        c(S::Spades, R::Nine),
        c(S::Clubs, R::Eight),
    ])
    .unwrap();
    let state = TerminalState::new(
        vec![
            seat(0, PlayerStatus::Active, c(S::Hearts, R::Ace), c(S::Diamonds, R::King)),
            seat(1, PlayerStatus::Active, c(S::Hearts, R::Two), c(S::Diamonds, R::Three)),
        ],
        board,
        200,
        Street::River,
    );
    let s = settle(&state).unwrap();
    assert_eq!(s.resolution.winners, vec![0]);
    assert_eq!(s.payouts.get(0), 200);
    assert_eq!(s.payouts.get(1), 0);
}

#[test]
fn board_tie_splits_evenly() {
    let board = CommunityCards::new(vec![
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Three),
        c(S::Hearts, R::Four),
        c(S::Hearts, R::Five),
        c(S::Hearts, R::Six),
    ])
    .unwrap();
    let state = TerminalState::new(
        vec![
            seat(0, PlayerStatus::Active, c(S::Clubs, R::Two), c(S::Diamonds, R::Three)),
            seat(1, PlayerStatus::Active, c(S::Spades, R::Four), c(S::Clubs, R::Five)),
        ],
        board,
        100,
        Street::River,
    );
    let s = settle(&state).unwrap();
    assert_eq!(s.resolution.winners, vec![0, 1]);
    assert_eq!(s.payouts.get(0), 50);
    assert_eq!(s.payouts.get(1), 50);
}

#[test]
fn odd_pot_tie_gives_extra_chip_to_lowest_index() {
    let state = TerminalState::new(
        vec![
            seat(0, PlayerStatus::Active, c(S::Hearts, R::Three), c(S::Hearts, R::Four)),
            seat(1, PlayerStatus::Active, c(S::Diamonds, R::Three), c(S::Spades, R::Four)),
        ],
        dry_board(),
        101,
        Street::River,
    );
    let s = settle(&state).unwrap();
    assert_eq!(s.payouts.get(0), 51);
    assert_eq!(s.payouts.get(1), 50);
}

#[test]
fn short_all_in_wins_only_the_main_pot() {
    let state = TerminalState::new(
        vec![
            seat(0, PlayerStatus::AllIn, c(S::Diamonds, R::King), c(S::Hearts, R::King))
                .with_contribution(50),
            seat(1, PlayerStatus::Active, c(S::Clubs, R::Ace), c(S::Diamonds, R::Ace))
                .with_contribution(200),
            seat(2, PlayerStatus::Active, c(S::Clubs, R::Three), c(S::Diamonds, R::Four))
                .with_contribution(200),
        ],
        dry_board(),
        450,
        Street::River,
    );
    let s = settle(&state).unwrap();
    assert_eq!(s.resolution.winners, vec![0]);
    assert_eq!(s.pots.len(), 2);
    assert_eq!(s.pots[0].amount, 150);
    assert_eq!(s.pots[0].winners, vec![0]);
    assert_eq!(s.pots[1].amount, 300);
    assert_eq!(s.pots[1].eligible, vec![1, 2]);
    assert_eq!(s.pots[1].winners, vec![1]);
    assert_eq!(s.payouts.get(0), 150);
    assert_eq!(s.payouts.get(1), 300);
    assert_eq!(s.payouts.get(2), 0);
    assert_eq!(s.payouts.total(), 450);
}

#[test]
fn folded_chips_stay_in_as_dead_money() {
    let state = TerminalState::new(
        vec![
            PlayerOutcome::new(0, PlayerStatus::Folded, None).with_contribution(30),
            seat(1, PlayerStatus::AllIn, c(S::Clubs, R::Ace), c(S::Diamonds, R::Ace))
                .with_contribution(50),
            seat(2, PlayerStatus::Active, c(S::Spades, R::Queen), c(S::Diamonds, R::Queen))
                .with_contribution(100),
        ],
        dry_board(),
        180,
        Street::River,
    );
    let s = settle(&state).unwrap();
    assert_eq!(s.pots.len(), 2);
    assert_eq!(s.payouts.get(0), 0);
    assert_eq!(s.payouts.get(1), 130);
    assert_eq!(s.payouts.get(2), 50);
}

#[test]
fn tied_side_pots_split_with_odd_chip_rules() {
    let players = vec![
        seat(0, PlayerStatus::AllIn, c(S::Hearts, R::Three), c(S::Hearts, R::Four))
            .with_contribution(41),
        seat(1, PlayerStatus::Active, c(S::Hearts, R::Ace), c(S::Diamonds, R::Queen))
            .with_contribution(100),
        seat(2, PlayerStatus::Active, c(S::Spades, R::Ace), c(S::Clubs, R::Queen))
            .with_contribution(100),
    ];
    let state = TerminalState::new(players, dry_board(), 241, Street::River).with_button(1);

    let ascending = settle(&state).unwrap();
    assert_eq!(ascending.pots[0].amount, 123);
    assert_eq!(ascending.pots[0].winners, vec![1, 2]);
    assert_eq!(ascending.payouts.get(1), 62 + 59);
    assert_eq!(ascending.payouts.get(2), 61 + 59);

    let from_button = settle_with(&state, OddChipOrder::FromButton { button: 1 }).unwrap();
    assert_eq!(from_button.payouts.get(1), 61 + 59);
    assert_eq!(from_button.payouts.get(2), 62 + 59);
    assert_eq!(from_button.payouts.total(), 241);
}

#[test]
fn elimination_with_contributions_pays_survivor_everything() {
    let state = TerminalState::new(
        vec![
            PlayerOutcome::new(0, PlayerStatus::Folded, None).with_contribution(20),
            PlayerOutcome::new(1, PlayerStatus::Active, None).with_contribution(40),
        ],
        CommunityCards::empty(),
        60,
        Street::Preflop,
    );
    let s = settle(&state).unwrap();
    assert_eq!(s.pots.len(), 1);
    assert_eq!(s.payouts.get(1), 60);
}

#[test]
fn equal_contributions_collapse_into_one_pot() {
    let players = vec![
        PlayerOutcome::new(0, PlayerStatus::Active, None).with_contribution(100),
        PlayerOutcome::new(1, PlayerStatus::Active, None).with_contribution(100),
        PlayerOutcome::new(2, PlayerStatus::Active, None).with_contribution(100),
    ];
    let pots = build_pots(&players);
    assert_eq!(pots.len(), 1);
    assert_eq!(pots[0].amount, 300);
    assert_eq!(pots[0].eligible, vec![0, 1, 2]);
}

#[test]
fn uncontested_top_layer_rolls_into_last_pot() {
    let players = vec![
        PlayerOutcome::new(0, PlayerStatus::Active, None).with_contribution(50),
        PlayerOutcome::new(1, PlayerStatus::Active, None).with_contribution(50),
        PlayerOutcome::new(2, PlayerStatus::Folded, None).with_contribution(80),
    ];
    let pots = build_pots(&players);
    assert_eq!(pots.len(), 1);
    assert_eq!(pots[0].amount, 180);
    assert_eq!(pots[0].eligible, vec![0, 1]);
}

#[test]
fn contributions_must_sum_to_pot() {
    let state = TerminalState::new(
        vec![
            PlayerOutcome::new(0, PlayerStatus::Active, None).with_contribution(20),
            PlayerOutcome::new(1, PlayerStatus::Folded, None).with_contribution(20),
        ],
        CommunityCards::empty(),
        50,
        Street::Preflop,
    );
    assert_eq!(
        settle(&state),
        Err(ShowdownError::StructuralViolation(
            Violation::ContributionMismatch { pot: 50, total: 40 }
        ))
    );
}

#[test]
fn overflowing_contributions_are_rejected() {
    let state = TerminalState::new(
        vec![
            PlayerOutcome::new(0, PlayerStatus::Active, None).with_contribution(u64::MAX),
            PlayerOutcome::new(1, PlayerStatus::Folded, None).with_contribution(1),
        ],
        CommunityCards::empty(),
        u64::MAX,
        Street::Preflop,
    );
    assert_eq!(
        settle(&state),
        Err(ShowdownError::StructuralViolation(
            Violation::ContributionMismatch {
                pot: u64::MAX,
                total: u64::MAX
            }
        ))
    );
}

#[test]
fn contributions_must_be_given_for_everyone() {
    let state = TerminalState::new(
        vec![
            PlayerOutcome::new(0, PlayerStatus::Active, None).with_contribution(20),
            PlayerOutcome::new(1, PlayerStatus::Folded, None),
        ],
        CommunityCards::empty(),
        20,
        Street::Preflop,
    );
    assert_eq!(
        settle(&state),
        Err(ShowdownError::StructuralViolation(
            Violation::PartialContributions { player: 1 }
        ))
    );
}

#[test]
fn no_live_players_cannot_be_settled() {
    let state = TerminalState::new(
        vec![PlayerOutcome::new(0, PlayerStatus::Folded, None)],
        CommunityCards::empty(),
        10,
        Street::Preflop,
    );
    assert_eq!(settle(&state), Err(ShowdownError::EmptyWinnerSet));
}

#[test]
fn premature_showdown_never_pays_anyone() {
    let flop = CommunityCards::new(vec![
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Seven),
        c(S::Hearts, R::Nine),
    ])
    .unwrap();
    let state = TerminalState::new(
        vec![
            seat(0, PlayerStatus::Active, c(S::Clubs, R::Ace), c(S::Diamonds, R::Ace)),
            seat(1, PlayerStatus::Active, c(S::Clubs, R::Three), c(S::Diamonds, R::Four)),
        ],
        flop,
        100,
        Street::Flop,
    );
    assert!(matches!(
        settle(&state),
        Err(ShowdownError::PrematureShowdown { .. })
    ));
}

#[test]
fn terminal_state_round_trips_through_json() {
    let state = TerminalState::new(
        vec![
            seat(0, PlayerStatus::AllIn, c(S::Clubs, R::Ace), c(S::Diamonds, R::Ace))
                .with_contribution(10),
            PlayerOutcome::new(1, PlayerStatus::Folded, None).with_contribution(10),
        ],
        dry_board(),
        20,
        Street::River,
    )
    .with_button(0);
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"all_in\""));
    assert!(json.contains("\"river\""));
    let back: TerminalState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn deserializing_rejects_impossible_board() {
    let json = r#"{
        "players": [],
        "community": [
            {"rank": "Two", "suit": "Clubs"},
            {"rank": "Three", "suit": "Clubs"}
        ],
        "pot": 0,
        "street": "flop"
    }"#;
    assert!(serde_json::from_str::<TerminalState>(json).is_err());
}
