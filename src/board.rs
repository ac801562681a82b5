// src/board.rs
//! 盤面 (場札・フリーセル・組札) 全体を管理するよ！🌍
//!
//! パイルはセッション開始時に 1 回だけ作って、あとは中身だけが変わる。
//! どのカードがどのパイルにいるかは `locations` に持っておくので、探すのに盤面を走査しない。

use std::collections::{HashMap, HashSet};

use log::{debug, info};

use crate::components::card::Card;
use crate::components::pile::Pile;
use crate::components::stack::StackType;
use crate::config::board::{BoardConfig, DECK_SIZE};
use crate::error::RuleError;

#[derive(Debug, Clone)]
pub struct Board {
    cascades: Vec<Pile>,
    cells: Vec<Pile>,
    foundations: Vec<Pile>,
    /// カード → 今いるパイル
    locations: HashMap<Card, StackType>,
    dealt: bool,
}

impl Board {
    /// 空のパイルだけの盤面を作る。
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            cascades: (0..config.cascades).map(|i| Pile::new(StackType::Cascade(i))).collect(),
            cells: (0..config.cells).map(|i| Pile::new(StackType::Cell(i))).collect(),
            foundations: (0..config.foundations)
                .map(|i| Pile::new(StackType::Foundation(i)))
                .collect(),
            locations: HashMap::with_capacity(DECK_SIZE),
            dealt: false,
        }
    }

    pub fn is_dealt(&self) -> bool {
        self.dealt
    }

    /// シャッフル元から 52 枚の並びを 1 回だけ受け取って、場札に 1 枚ずつ順番に配る。
    ///
    /// 8 列なら 0-3 列目が 7 枚、4-7 列目が 6 枚になる。
    pub fn deal<F>(&mut self, shuffle: F) -> Result<(), RuleError>
    where
        F: FnOnce() -> Vec<Card>,
    {
        if self.dealt {
            return Err(RuleError::AlreadyDealt);
        }
        let deck = shuffle();
        if deck.len() != DECK_SIZE {
            return Err(RuleError::InvalidDeck {
                reason: format!("expected {} cards, got {}", DECK_SIZE, deck.len()),
            });
        }
        check_unique(&deck)?;

        let cascade_count = self.cascades.len();
        if cascade_count == 0 {
            return Err(RuleError::InvalidDeck {
                reason: "board has no cascades".to_string(),
            });
        }
        for (i, card) in deck.into_iter().enumerate() {
            let cascade = &mut self.cascades[i % cascade_count];
            self.locations.insert(card, cascade.id());
            cascade.append(vec![card]);
        }
        self.dealt = true;
        info!(
            "Board: dealt {} cards across {} cascades",
            DECK_SIZE, cascade_count
        );
        Ok(())
    }

    /// 決まった並びを場札に置く。確認用の配り方や途中局面の再現に使うよ。
    ///
    /// 列の数が場札より多い場合や、カードが重複してる場合はエラー。52 枚揃ってなくてもいい。
    pub fn deal_columns(&mut self, columns: Vec<Vec<Card>>) -> Result<(), RuleError> {
        if self.dealt {
            return Err(RuleError::AlreadyDealt);
        }
        if columns.len() > self.cascades.len() {
            return Err(RuleError::InvalidDeck {
                reason: format!(
                    "{} columns for {} cascades",
                    columns.len(),
                    self.cascades.len()
                ),
            });
        }
        let all: Vec<Card> = columns.iter().flatten().copied().collect();
        check_unique(&all)?;

        for (cascade, column) in self.cascades.iter_mut().zip(columns) {
            for &card in &column {
                self.locations.insert(card, cascade.id());
            }
            cascade.append(column);
        }
        self.dealt = true;
        info!("Board: laid out {} cards from fixed columns", all.len());
        Ok(())
    }

    pub fn cascades(&self) -> &[Pile] {
        &self.cascades
    }

    pub fn cells(&self) -> &[Pile] {
        &self.cells
    }

    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    /// 場札 → フリーセル → 組札 の順に全パイル。
    pub fn piles(&self) -> impl Iterator<Item = &Pile> + '_ {
        self.cascades
            .iter()
            .chain(self.cells.iter())
            .chain(self.foundations.iter())
    }

    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|pile| pile.is_empty()).count()
    }

    pub fn empty_cascade_count(&self) -> usize {
        self.cascades.iter().filter(|pile| pile.is_empty()).count()
    }

    /// 組札に乗ってるカードの枚数。
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    /// 組札以外 (場札とフリーセル) に残ってるカードの枚数。
    pub fn cards_outside_foundations(&self) -> usize {
        self.locations.len() - self.foundation_card_count()
    }

    /// カードが今いるパイル。
    pub fn pile_containing(&self, card: Card) -> Result<StackType, RuleError> {
        self.locations
            .get(&card)
            .copied()
            .ok_or(RuleError::NotFound(card))
    }

    pub fn pile(&self, id: StackType) -> Result<&Pile, RuleError> {
        let piles = match id {
            StackType::Cascade(_) => &self.cascades,
            StackType::Cell(_) => &self.cells,
            StackType::Foundation(_) => &self.foundations,
        };
        piles.get(id.index()).ok_or(RuleError::NoSuchPile(id))
    }

    fn pile_mut(&mut self, id: StackType) -> Result<&mut Pile, RuleError> {
        let piles = match id {
            StackType::Cascade(_) => &mut self.cascades,
            StackType::Cell(_) => &mut self.cells,
            StackType::Foundation(_) => &mut self.foundations,
        };
        piles.get_mut(id.index()).ok_or(RuleError::NoSuchPile(id))
    }

    /// そのカードの上に何も乗ってない (パイルの末尾) か。
    pub fn is_tail(&self, card: Card) -> Result<bool, RuleError> {
        let pile = self.pile(self.pile_containing(card)?)?;
        Ok(pile.top_card() == Some(card))
    }

    /// `card` から上の列を今のパイルから外して `destination` に積む。動かした枚数を返す。
    ///
    /// ルールチェックはしないので、呼ぶ前に `logic::rules::validate_move` を通すこと。
    /// 移動先が存在しない場合は何も変えずにエラーを返す。
    pub fn relocate(&mut self, card: Card, destination: StackType) -> Result<usize, RuleError> {
        let source = self.pile_containing(card)?;
        self.pile(destination)?;

        let run = self.pile_mut(source)?.detach_from(card)?;
        let moved = run.len();
        for &c in &run {
            self.locations.insert(c, destination);
        }
        self.pile_mut(destination)?.append(run);
        debug!(
            "Board: moved {} card(s) from {} ({:?}) to {:?}",
            moved, card, source, destination
        );
        Ok(moved)
    }
}

/// 重複チェック。
fn check_unique(cards: &[Card]) -> Result<(), RuleError> {
    let mut seen = HashSet::with_capacity(cards.len());
    match cards.iter().find(|card| !seen.insert(**card)) {
        Some(card) => Err(RuleError::InvalidDeck {
            reason: format!("duplicate card {}", card),
        }),
        None => Ok(()),
    }
}
