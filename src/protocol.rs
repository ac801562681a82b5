// src/protocol.rs

// このファイルは、ルールエンジン(WASM)と JS の画面側の間で
// やり取りするデータの形式を定義するよ！💌
// カードは "♠A" みたいな ID 文字列、パイルは StackType の JSON (`{"Cascade":0}`) で渡す。
use serde::{Serialize, Deserialize};

use crate::components::game_state::GameStatus;
use crate::components::pile::Pile;
pub use crate::components::stack::StackType;
use crate::history::MoveRecord;
use crate::logic::rules;
use crate::session::GameSession;
use crate::systems::move_card_system::MoveOutcome;

/// ゲームの状態全体を表すデータ構造だよ。
/// 画面側はこれをまるごと受け取って描き直す。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub status: GameStatus,
    /// 場札 → フリーセル → 組札 の順。
    pub piles: Vec<PileData>,
    /// 今の盤面で一度に運べる枚数。ドラッグ中の表示用。
    pub capacity: usize,
    pub can_undo: bool,
    pub auto_completable: bool,
    pub history_len: usize,
}

/// 1 つのパイルの中身。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PileData {
    pub id: StackType,
    /// 奥から手前へ、カード ID の並び。
    pub cards: Vec<String>,
}

/// 1 手分の移動。アニメーション用。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveData {
    pub card: String,
    pub run_len: usize,
    pub source: StackType,
    pub destination: StackType,
}

/// `make_move` の結果。元のパイルに戻しただけなら `moved` は None。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MoveResultData {
    pub moved: Option<MoveData>,
    pub status: GameStatus,
}

impl From<&Pile> for PileData {
    fn from(pile: &Pile) -> Self {
        Self {
            id: pile.id(),
            cards: pile.iter().map(ToString::to_string).collect(),
        }
    }
}

impl From<&MoveRecord> for MoveData {
    fn from(record: &MoveRecord) -> Self {
        Self {
            card: record.card.to_string(),
            run_len: record.run_len,
            source: record.source,
            destination: record.destination,
        }
    }
}

impl MoveResultData {
    pub fn new(outcome: &MoveOutcome, status: GameStatus) -> Self {
        let moved = match outcome {
            MoveOutcome::SamePile => None,
            MoveOutcome::Moved(record) => Some(MoveData::from(record)),
        };
        Self { moved, status }
    }
}

impl GameStateData {
    pub fn from_session(session: &GameSession) -> Self {
        let board = session.board();
        Self {
            status: session.status(),
            piles: board.piles().map(PileData::from).collect(),
            capacity: rules::capacity(board),
            can_undo: session.can_undo(),
            auto_completable: session.is_auto_completable(),
            history_len: session.history().len(),
        }
    }
}
