// src/components/card.rs

// serde を使う宣言！カード情報を JS 側に JSON で渡すのに使うよ。
use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

/// カードのスート（マーク）を表す列挙型だよ！♠️♣️❤️♦️
///
/// 並び順は `ALL_SUITS` と同じ (♠ ♣ ♥ ♦)。
/// 自動完成で空の組札にどの A を置くか決める時、この順番で探すよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,   // ♠️
    Club,    // ♣️
    Heart,   // ❤️
    Diamond, // ♦️
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord で大小比較もできる。A が一番小さくて K が一番大きい！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ
    Two,     // 2
    Three,   // 3
    Four,    // 4
    Five,    // 5
    Six,     // 6
    Seven,   // 7
    Eight,   // 8
    Nine,    // 9
    Ten,     // 10
    Jack,    // J (11 扱い)
    Queen,   // Q (12 扱い)
    King,    // K (13 扱い)
}

/// 全スート。デッキ生成とか A 探しでループする時に使う！
pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Club, Suit::Heart, Suit::Diamond];

/// 全ランク (A..K の昇順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードの色（赤か黒か）だよ。場札のルール (色違い) で使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

impl Suit {
    /// カードID で使う記号。
    pub fn symbol(self) -> char {
        match self {
            Suit::Spade => '♠',
            Suit::Club => '♣',
            Suit::Heart => '♥',
            Suit::Diamond => '♦',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Suit> {
        ALL_SUITS.iter().copied().find(|suit| suit.symbol() == symbol)
    }

    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }
}

/// あるランクの「ひとつ上」と「ひとつ下」。端っこ (K の上、A の下) は None だよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborRanks {
    pub rank_up: Option<Rank>,
    pub rank_down: Option<Rank>,
}

impl Rank {
    /// 数値 (1..=13) からランクを作る。範囲外なら None。
    pub fn from_value(value: u8) -> Option<Rank> {
        match value {
            1..=13 => Some(ALL_RANKS[(value - 1) as usize]),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    /// ひとつ上のランク。K なら None。
    pub fn up(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    /// ひとつ下のランク。A なら None。
    pub fn down(self) -> Option<Rank> {
        Rank::from_value(self.value() - 1)
    }

    pub fn neighbor_ranks(self) -> NeighborRanks {
        NeighborRanks {
            rank_up: self.up(),
            rank_down: self.down(),
        }
    }

    /// カードID で使うラベル ("A", "2", ..., "10", "J", "Q", "K")。
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }

    pub fn from_label(label: &str) -> Option<Rank> {
        ALL_RANKS.iter().copied().find(|rank| rank.label() == label)
    }
}

/// カードそのものを表す値だよ！🃏
///
/// 52枚はそれぞれ (suit, rank) で一意。セッション中に作り直したり消したりしないので、
/// Copy な値として持ち回す。どの山にいるかは `Board` が管理するよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn color(&self) -> CardColor {
        CardColor::from_suit(self.suit)
    }

    pub fn rank_up(&self) -> Option<Rank> {
        self.rank.up()
    }

    pub fn rank_down(&self) -> Option<Rank> {
        self.rank.down()
    }

    /// `other` をこのカードのすぐ下に重ねられるか (ランクがひとつ下で色違い)。
    pub fn accepts_on_cascade(&self, other: &Card) -> bool {
        self.rank_down() == Some(other.rank) && self.color() != other.color()
    }
}

/// "♠A" や "♥10" みたいなカードID を表示するよ。
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.label())
    }
}

/// カードID のパースに失敗した時のエラー。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCardError {
    pub input: String,
}

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid card id: {:?}", self.input)
    }
}

impl std::error::Error for ParseCardError {}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError { input: s.to_string() };
        let mut chars = s.chars();
        let suit = chars.next().and_then(Suit::from_symbol).ok_or_else(err)?;
        let rank = Rank::from_label(chars.as_str()).ok_or_else(err)?;
        Ok(Card { suit, rank })
    }
}
