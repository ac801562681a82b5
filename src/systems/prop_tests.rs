// src/systems/prop_tests.rs
//! 自動完成できる盤面をランダムに作って、最後まで送り切れるか確かめるよ。

use std::cmp::Reverse;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::components::card::{Card, Rank, ALL_SUITS};
use crate::components::game_state::GameStatus;
use crate::components::stack::StackType;
use crate::config::board::BoardConfig;
use crate::logic::deck::create_standard_deck;
use crate::session::GameSession;

const CASCADES: usize = 8;
const CELLS: usize = 4;

/// 組札にもう乗ってる分を除いて、全部の列が正しい列になるように並べた盤面。
#[derive(Debug)]
struct Layout {
    runs: Vec<Vec<Card>>,
    cells: Vec<Card>,
    /// ALL_SUITS の順に、組札へ先に乗せておく枚数。
    heights: Vec<u8>,
}

/// 大きいランクから順に、重ねられる列 → 空いてる列 → セルの順で置いていく。
/// どこにも置けなかったら None。
fn build_layout(heights: Vec<u8>, seed: u64) -> Option<Layout> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut remaining: Vec<Card> = create_standard_deck()
        .into_iter()
        .filter(|card| card.rank.value() > heights[suit_index(card)])
        .collect();
    remaining.shuffle(&mut rng);
    // 安定ソートなので同じランクの中はシャッフル順のまま
    remaining.sort_by_key(|card| Reverse(card.rank.value()));

    let mut runs: Vec<Vec<Card>> = vec![Vec::new(); CASCADES];
    let mut cells = Vec::new();
    for card in remaining {
        let matching: Vec<usize> = (0..CASCADES)
            .filter(|&i| runs[i].last().is_some_and(|top| top.accepts_on_cascade(&card)))
            .collect();
        if let Some(&i) = matching.choose(&mut rng) {
            runs[i].push(card);
        } else if let Some(run) = runs.iter_mut().find(|run| run.is_empty()) {
            run.push(card);
        } else if cells.len() < CELLS {
            cells.push(card);
        } else {
            return None;
        }
    }
    Some(Layout { runs, cells, heights })
}

fn suit_index(card: &Card) -> usize {
    ALL_SUITS.iter().position(|&suit| suit == card.suit).unwrap_or(0)
}

/// 1 列目の上にセル行きと組札行きのカードを積んで配ってから、上から順に移す。
fn session_from(layout: &Layout) -> GameSession {
    let foundation_cards: Vec<Vec<Card>> = ALL_SUITS
        .iter()
        .zip(&layout.heights)
        .map(|(&suit, &height)| {
            (1..=height).map(|value| Card::new(suit, Rank::from_value(value).unwrap())).collect()
        })
        .collect();

    let mut columns = layout.runs.clone();
    columns[0].extend(foundation_cards.iter().flatten().copied());
    columns[0].extend(layout.cells.iter().copied());

    let mut session = GameSession::new(BoardConfig::default()).unwrap();
    session.deal_columns(columns).unwrap();
    for (cell, &card) in layout.cells.iter().enumerate().rev() {
        session.board.relocate(card, StackType::Cell(cell as u8)).unwrap();
    }
    for (foundation, cards) in foundation_cards.iter().enumerate().rev() {
        if let Some(&ace) = cards.first() {
            session.board.relocate(ace, StackType::Foundation(foundation as u8)).unwrap();
        }
    }
    session
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_auto_complete_finishes_every_completable_board(
        heights in prop::collection::vec(0u8..=13, 4),
        seed in any::<u64>(),
    ) {
        let Some(layout) = build_layout(heights, seed) else {
            return Err(TestCaseError::reject("no room left for a run"));
        };
        let mut session = session_from(&layout);

        let on_foundations: usize = layout.heights.iter().map(|&h| usize::from(h)).sum();
        prop_assert_eq!(session.board().foundation_card_count(), on_foundations);
        prop_assert_eq!(session.board().cards_outside_foundations(), 52 - on_foundations);
        prop_assert!(session.is_auto_completable(), "{:?}", layout);

        let steps = session.auto_complete();
        prop_assert!(steps.is_ok(), "{:?} -> {:?}", layout, steps);
        prop_assert_eq!(steps.map(|s| s.len()).unwrap_or(0), 52 - on_foundations);
        prop_assert_eq!(session.status(), GameStatus::Won);
        prop_assert!(!session.can_undo());

        for pile in session.board().foundations() {
            let ranks: Vec<u8> = pile.iter().map(|card| card.rank.value()).collect();
            prop_assert_eq!(ranks, (1..=13).collect::<Vec<u8>>());
            prop_assert!(pile.iter().all(|card| Some(card.suit) == pile.head_suit()));
        }
    }
}
