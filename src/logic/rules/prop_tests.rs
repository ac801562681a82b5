// src/logic/rules/prop_tests.rs
//! 色んな盤面を作って、運べる枚数と持ち上げ判定がいつも成り立つか確かめるよ。

use proptest::prelude::*;

use super::*;
use crate::board::Board;
use crate::components::card::{Card, Rank, Suit};
use crate::components::stack::StackType;
use crate::config::board::BoardConfig;
use crate::logic::deck::{create_standard_deck, shuffled_deck};

const CASCADES: usize = 8;

/// (セルの数, 埋まってるセルの数, 空き列の数)
fn fill_levels() -> impl Strategy<Value = (u8, u8, usize)> {
    (0u8..=6).prop_flat_map(|cells| (Just(cells), 0..=cells, 0..=CASCADES))
}

/// 空き列が `empty` 個、セルが `filled` 個埋まった盤面。
///
/// セルに入れるカードは 1 列目の上に積んでから 1 枚ずつ移す。
fn board_with_fill(cells: u8, filled: u8, empty: usize) -> Board {
    let config = BoardConfig { cells, ..BoardConfig::default() };
    let mut board = Board::new(&config);
    let mut deck = create_standard_deck().into_iter();

    let mut columns: Vec<Vec<Card>> = vec![Vec::new(); CASCADES];
    for column in columns.iter_mut().take(CASCADES - empty) {
        column.extend(deck.next());
    }
    let spare: Vec<Card> = deck.take(usize::from(filled)).collect();
    columns[0].extend(spare.iter().copied());
    board.deal_columns(columns).unwrap();

    for (cell, &card) in spare.iter().enumerate().rev() {
        board.relocate(card, StackType::Cell(cell as u8)).unwrap();
    }
    board
}

/// ランク降順・色交互かを、ルール側の関数を使わずに確かめる。
fn descends_alternating(run: &[Card]) -> bool {
    run.windows(2).all(|pair| {
        pair[0].rank.value() == pair[1].rank.value() + 1 && pair[0].color() != pair[1].color()
    })
}

/// `top` から `len` 枚の正しい列。`flips` でどっちの色のスートを使うか決める。
fn chain(top: u8, len: u8, start_red: bool, flips: &[bool]) -> Vec<Card> {
    (0..len)
        .map(|i| {
            let red = start_red ^ (i % 2 == 1);
            let suit = match (red, flips[usize::from(i)]) {
                (false, false) => Suit::Spade,
                (false, true) => Suit::Club,
                (true, false) => Suit::Heart,
                (true, true) => Suit::Diamond,
            };
            Card::new(suit, Rank::from_value(top - i).unwrap())
        })
        .collect()
}

fn chain_shape() -> impl Strategy<Value = (u8, u8)> {
    (1u8..=13).prop_flat_map(|top| (Just(top), 1..=top))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_capacity_follows_free_cells_and_cascades((cells, filled, empty) in fill_levels()) {
        let board = board_with_fill(cells, filled, empty);
        prop_assert_eq!(board.empty_cell_count(), usize::from(cells - filled));
        prop_assert_eq!(board.empty_cascade_count(), empty);

        let base = usize::from(cells - filled) + 1;
        let expected = if empty >= 1 { base * 2 } else { base };
        prop_assert_eq!(capacity(&board), expected);

        for pile in board.cascades() {
            let allowed = allowed_run_len(&board, pile);
            if pile.is_empty() {
                prop_assert_eq!(allowed, base, "空の列へは倍率なし");
            } else {
                prop_assert_eq!(allowed, expected);
            }
        }
    }

    #[test]
    fn prop_lift_iff_valid_run_within_capacity(
        (top, len) in chain_shape(),
        start_red in any::<bool>(),
        flips in prop::collection::vec(any::<bool>(), 13),
        junk_seed in any::<u64>(),
        junk_len in 0usize..5,
        cells in 0u8..=4,
        empty in 0usize..CASCADES,
    ) {
        let run = chain(top, len, start_red, &flips);
        let mut others = shuffled_deck(junk_seed).into_iter().filter(|card| !run.contains(card));

        let mut column: Vec<Card> = others.by_ref().take(junk_len).collect();
        column.extend(run.iter().copied());
        let mut columns = vec![column.clone()];
        for _ in 1..CASCADES - empty {
            columns.push(others.by_ref().take(1).collect());
        }

        let config = BoardConfig { cells, ..BoardConfig::default() };
        let mut board = Board::new(&config);
        board.deal_columns(columns).unwrap();

        let base = usize::from(cells) + 1;
        let limit = if empty >= 1 { base * 2 } else { base };
        prop_assert_eq!(capacity(&board), limit);

        for (depth, &card) in column.iter().enumerate() {
            let suffix = &column[depth..];
            let expected = descends_alternating(suffix) && suffix.len() <= limit;
            prop_assert_eq!(
                can_lift(&board, card),
                Ok(expected),
                "{} (depth {}) in {:?}", card, depth, column
            );
        }
    }
}
