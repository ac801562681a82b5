// src/logic/deck.rs

use crate::components::card::{Card, ParseCardError, ALL_RANKS, ALL_SUITS};
use crate::config::board::DECK_SIZE;
use rand::rngs::StdRng;
use rand::{seq::SliceRandom, thread_rng, SeedableRng};

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// 並びは ♠A..♠K, ♣A..♣K, ♥A..♥K, ♦A..♦K。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。
pub fn shuffle_deck(deck: &mut Vec<Card>) {
    let mut rng = thread_rng(); // 乱数生成器を取得
    deck.shuffle(&mut rng);
}

/// シード付きでシャッフルしたデッキを返す。同じシードなら同じ配り方になる！🎲
pub fn shuffled_deck(seed: u64) -> Vec<Card> {
    let mut deck = create_standard_deck();
    let mut rng = StdRng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
    deck
}

/// カードID の並び ("♠K", "♥Q", ...) をカードに変換する。
pub fn cards_from_ids<S: AsRef<str>>(ids: &[S]) -> Result<Vec<Card>, ParseCardError> {
    ids.iter().map(|id| id.as_ref().parse()).collect()
}

/// 確認用の決まった配り方。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixtureDeal {
    /// 全部の列がすでに正しい列になってる配り方 (すぐ自動完成できる)。
    Ordered,
    /// 1 列に 19 枚の正しい列 (一番長い列の確認用)。
    LongChain,
    /// 各列に 1 スートを K から A まで並べた配り方。
    SortedBySuit,
}

impl FixtureDeal {
    /// JS 側から渡される名前。
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ordered" => Some(FixtureDeal::Ordered),
            "long_chain" => Some(FixtureDeal::LongChain),
            "sorted_by_suit" => Some(FixtureDeal::SortedBySuit),
            _ => None,
        }
    }

    /// 各場札の列に置くカードを、奥から順に返す。
    pub fn columns(self) -> Result<Vec<Vec<Card>>, ParseCardError> {
        let ids: Vec<Vec<&str>> = match self {
            FixtureDeal::Ordered => vec![
                vec!["♠K", "♥Q", "♠J", "♥10", "♠9", "♥8", "♠7"],
                vec!["♣K", "♦Q", "♣J", "♦10", "♣9", "♦8", "♣7"],
                vec!["♥K", "♠Q", "♥J", "♠10", "♥9", "♠8", "♥7"],
                vec!["♦K", "♣Q", "♦J", "♣10", "♦9", "♣8", "♦7"],
                vec!["♠6", "♥5", "♠4", "♥3", "♠2", "♥A"],
                vec!["♣6", "♦5", "♣4", "♦3", "♣2", "♦A"],
                vec!["♥6", "♠5", "♥4", "♠3", "♥2", "♠A"],
                vec!["♦6", "♣5", "♦4", "♣3", "♦2", "♣A"],
            ],
            FixtureDeal::LongChain => vec![vec![
                "♠K", "♥Q", "♠J", "♥10", "♠9", "♥8", "♥K", "♠Q", "♥J", "♠10", "♥9", "♠8",
                "♥7", "♠6", "♥5", "♠4", "♥3", "♠2", "♥A",
            ]],
            FixtureDeal::SortedBySuit => {
                // ID を経由しなくても作れるのでそのまま返す
                return Ok(ALL_SUITS
                    .iter()
                    .map(|&suit| ALL_RANKS.iter().rev().map(|&rank| Card::new(suit, rank)).collect())
                    .collect());
            }
        };
        ids.iter().map(|column| cards_from_ids(column.as_slice())).collect()
    }
}
