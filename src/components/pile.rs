// src/components/pile.rs
//! 1 つの山 (場札 1 列、フリーセル 1 つ、組札 1 つ) を表すよ。
//!
//! 先頭 (head) が一番奥、末尾 (tail) が一番上に見えてるカード。
//! ここでは並びを持つだけで、置いていいかどうかのチェックは `logic::rules` の仕事！

use itertools::Itertools;
use serde::{Serialize, Deserialize};

use crate::components::card::{Card, Suit};
use crate::components::stack::{PileKind, StackType};
use crate::error::RuleError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    id: StackType,
    cards: Vec<Card>,
}

/// 隣り合う 2 枚が「ランクがひとつ下がって色が変わる」関係になってる列か。
/// 1 枚だけ、または空なら true。
pub fn is_valid_run(cards: &[Card]) -> bool {
    cards
        .iter()
        .tuple_windows()
        .all(|(upper, lower)| upper.accepts_on_cascade(lower))
}

impl Pile {
    pub fn new(id: StackType) -> Self {
        Self { id, cards: Vec::new() }
    }

    pub fn id(&self) -> StackType {
        self.id
    }

    pub fn kind(&self) -> PileKind {
        self.id.kind()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 先頭から末尾の順に全カード。
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// 一番上 (末尾) のカード。
    pub fn top_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// 一番奥のカードのスート。組札はこれでスートが決まる。
    pub fn head_suit(&self) -> Option<Suit> {
        self.cards.first().map(|card| card.suit)
    }

    /// 先頭からの距離 (0 始まり)。
    pub fn depth_of(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// `card` から持ち上げたら何枚になるか。
    pub fn run_len_from(&self, card: Card) -> Option<usize> {
        self.depth_of(card).map(|depth| self.cards.len() - depth)
    }

    /// `card` から末尾までが正しい列になってるか。`card` が無ければ false。
    pub fn is_valid_suffix_from(&self, card: Card) -> bool {
        match self.depth_of(card) {
            Some(depth) => is_valid_run(&self.cards[depth..]),
            None => false,
        }
    }

    /// 末尾にカードを積む。チェックはしないよ。
    pub fn append(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// `card` とその上に乗ってる全部を切り離して、順番どおりに返す。
    pub fn detach_from(&mut self, card: Card) -> Result<Vec<Card>, RuleError> {
        let depth = self.depth_of(card).ok_or(RuleError::NotFound(card))?;
        Ok(self.cards.split_off(depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Rank;

    fn card(id: &str) -> Card {
        id.parse().unwrap()
    }

    fn cascade_with(ids: &[&str]) -> Pile {
        let mut pile = Pile::new(StackType::Cascade(0));
        pile.append(ids.iter().map(|id| card(id)).collect());
        pile
    }

    #[test]
    fn append_and_peek() {
        let mut pile = Pile::new(StackType::Cascade(0));
        assert!(pile.is_empty());
        assert_eq!(pile.top_card(), None);

        pile.append(vec![card("♠K"), card("♥Q")]);
        assert_eq!(pile.len(), 2);
        assert_eq!(pile.top_card(), Some(card("♥Q")));
        assert_eq!(pile.head_suit(), Some(Suit::Spade));
        assert_eq!(pile.cards(), &[card("♠K"), card("♥Q")]);
        assert_eq!(pile.iter().count(), 2);
    }

    #[test]
    fn detach_returns_the_suffix_in_order() {
        let mut pile = cascade_with(&["♣3", "♠K", "♥Q", "♠J"]);
        let run = pile.detach_from(card("♥Q")).unwrap();
        assert_eq!(run, vec![card("♥Q"), card("♠J")]);
        assert_eq!(pile.cards(), &[card("♣3"), card("♠K")]);

        assert_eq!(
            pile.detach_from(card("♦2")),
            Err(RuleError::NotFound(card("♦2")))
        );
        assert_eq!(pile.len(), 2, "失敗した detach で中身が変わっちゃダメ");
    }

    #[test]
    fn depth_and_run_len() {
        let pile = cascade_with(&["♣3", "♠K", "♥Q"]);
        assert_eq!(pile.depth_of(card("♣3")), Some(0));
        assert_eq!(pile.depth_of(card("♥Q")), Some(2));
        assert_eq!(pile.depth_of(card("♦Q")), None);
        assert_eq!(pile.run_len_from(card("♠K")), Some(2));
        assert_eq!(pile.run_len_from(card("♥Q")), Some(1));
    }

    #[test]
    fn valid_suffix_checks() {
        // ♣3 のところで列が切れてるけど、♠K から下は正しい列
        let pile = cascade_with(&["♣3", "♠K", "♥Q", "♠J", "♦10"]);
        assert!(pile.is_valid_suffix_from(card("♠K")));
        assert!(pile.is_valid_suffix_from(card("♦10")), "1 枚なら常に持ち上げられる");
        assert!(!pile.is_valid_suffix_from(card("♣3")));
        assert!(!pile.is_valid_suffix_from(card("♥A")), "無いカードは false");

        // 同じ色が続くのはダメ
        let same_color = cascade_with(&["♠9", "♣8"]);
        assert!(!same_color.is_valid_suffix_from(card("♠9")));
        // ランクが飛ぶのもダメ
        let gap = cascade_with(&["♠9", "♥7"]);
        assert!(!gap.is_valid_suffix_from(card("♠9")));
    }

    #[test]
    fn valid_run_helper() {
        assert!(is_valid_run(&[]));
        assert!(is_valid_run(&[Card::new(Suit::Heart, Rank::Ace)]));
        assert!(is_valid_run(&[card("♥2"), card("♠A")]));
        assert!(!is_valid_run(&[card("♠A"), card("♥2")]), "昇順はダメ");
    }
}
