// src/error.rs
//! ルールエンジンのエラー型をまとめるよ。
//!
//! 不正な移動 (`IllegalMove`) は普通に起こることなので、呼び出し側に返して盤面はそのまま。
//! `NotFound` は呼び出し側と盤面の状態がズレてる時にしか起きない (バグのサイン)。

use std::fmt;

use crate::components::card::{Card, Rank};
use crate::components::stack::StackType;

/// 移動が拒否された理由。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// 持ち上げようとした列が「ランク降順・色交互」になってない。
    BrokenRun,
    /// フリーセルには 1 枚しか置けない。
    MultipleCardsToCell,
    /// フリーセルが埋まってる。
    CellOccupied,
    /// 組札には 1 枚ずつしか置けない。
    MultipleCardsToFoundation,
    /// 空の組札には A しか置けない。
    FoundationNeedsAce { found: Rank },
    /// そのスートの A はもう別の組札にある。
    SuitAlreadyClaimed,
    /// 組札のスート違い、またはランクがひとつ上じゃない。
    FoundationMismatch,
    /// 場札の一番上に対してランクがひとつ下じゃない、または同じ色。
    CascadeMismatch,
    /// 今の空きセル・空き列では運べない枚数。
    RunTooLong { len: usize, allowed: usize },
}

impl fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMoveReason::BrokenRun => f.write_str("run is not in descending alternating order"),
            IllegalMoveReason::MultipleCardsToCell => f.write_str("a cell holds a single card"),
            IllegalMoveReason::CellOccupied => f.write_str("cell is occupied"),
            IllegalMoveReason::MultipleCardsToFoundation => {
                f.write_str("foundations take one card at a time")
            }
            IllegalMoveReason::FoundationNeedsAce { found } => {
                write!(f, "empty foundation needs an ace, got {}", found.label())
            }
            IllegalMoveReason::SuitAlreadyClaimed => {
                f.write_str("another foundation already holds this suit")
            }
            IllegalMoveReason::FoundationMismatch => {
                f.write_str("card does not continue the foundation")
            }
            IllegalMoveReason::CascadeMismatch => {
                f.write_str("card must be one rank lower and the other color")
            }
            IllegalMoveReason::RunTooLong { len, allowed } => {
                write!(f, "cannot move {} cards, only {} allowed", len, allowed)
            }
        }
    }
}

/// ルールエンジン全体のエラー。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// ルール違反。盤面は変わってない。
    IllegalMove(IllegalMoveReason),
    /// カードが期待した場所にいない。
    NotFound(Card),
    /// 盤面に存在しないパイル。
    NoSuchPile(StackType),
    /// 元に戻す手がない。
    EmptyHistory,
    /// まだ配ってない。
    NotDealt,
    /// 配るのは 1 セッションに 1 回だけ。
    AlreadyDealt,
    /// もう勝ってるので動かせない。
    GameOver,
    /// 盤面の設定がおかしい。
    InvalidConfig { reason: String },
    /// シャッフル元から渡されたデッキがおかしい。
    InvalidDeck { reason: String },
    /// 自動完成で 1 周しても 1 枚も動かせなかった。
    AutoCompleteStalled { remaining: usize },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::IllegalMove(reason) => write!(f, "illegal move: {}", reason),
            RuleError::NotFound(card) => write!(f, "card {} not found where expected", card),
            RuleError::NoSuchPile(stack) => write!(f, "no such pile: {:?}", stack),
            RuleError::EmptyHistory => f.write_str("nothing to undo"),
            RuleError::NotDealt => f.write_str("cards have not been dealt yet"),
            RuleError::AlreadyDealt => f.write_str("cards have already been dealt"),
            RuleError::GameOver => f.write_str("the game is already won"),
            RuleError::InvalidConfig { reason } => write!(f, "invalid board config: {}", reason),
            RuleError::InvalidDeck { reason } => write!(f, "invalid deck: {}", reason),
            RuleError::AutoCompleteStalled { remaining } => {
                write!(f, "auto-complete stalled with {} cards left", remaining)
            }
        }
    }
}

impl std::error::Error for RuleError {}

impl From<IllegalMoveReason> for RuleError {
    fn from(reason: IllegalMoveReason) -> Self {
        RuleError::IllegalMove(reason)
    }
}

impl RuleError {
    /// ユーザー操作で普通に起こる拒否かどうか。
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, RuleError::IllegalMove(_))
    }
}
