// src/components/game_state.rs

// serde を使う宣言！状態を JS 側に JSON で渡すよ。
use serde::{Serialize, Deserialize};

/// ゲーム全体の現在の状態を表す列挙型だよ！🏁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// まだカードを配ってない。
    NotDealt,
    /// ゲームが進行中の状態
    Playing,
    /// 勝利！🏆 全部のカードが組札に乗った。
    Won,
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::NotDealt
    }
}

/// ゲーム状態を保持する構造体。セッションが 1 つ持つ。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub status: GameStatus,
}

impl GameState {
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }
}
