// src/session.rs
//! 1 ゲーム分の状態をまとめて持つセッションだよ！🎮
//!
//! 盤面・移動履歴・ゲーム状態はここが所有する。プレゼンテーション側が触るのはこの型だけ。
//! 盤面を変える処理は `systems` の各システムに任せてる。

use log::info;

use crate::board::Board;
use crate::components::card::Card;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::StackType;
use crate::config::board::BoardConfig;
use crate::error::RuleError;
use crate::history::{MoveHistory, MoveRecord};
use crate::logic::deck::{self, FixtureDeal};
use crate::logic::rules::{self, MoveCheck};
use crate::protocol::GameStateData;
use crate::systems::move_card_system::{MoveCardSystem, MoveOutcome};
use crate::systems::win_condition_system::WinConditionSystem;

#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) history: MoveHistory,
    pub(crate) state: GameState,
}

impl GameSession {
    /// 設定をチェックしてから、まだ配ってない空の盤面でセッションを作る。
    pub fn new(config: BoardConfig) -> Result<Self, RuleError> {
        config.validate().map_err(|e| RuleError::InvalidConfig {
            reason: e.to_string(),
        })?;
        Ok(Self {
            board: Board::new(&config),
            history: MoveHistory::new(),
            state: GameState::default(),
        })
    }

    /// シャッフル元から 1 回だけ並びを受け取って配る。
    pub fn deal<F>(&mut self, shuffle: F) -> Result<(), RuleError>
    where
        F: FnOnce() -> Vec<Card>,
    {
        self.board.deal(shuffle)?;
        self.start();
        Ok(())
    }

    pub fn deal_random(&mut self) -> Result<(), RuleError> {
        self.deal(|| {
            let mut cards = deck::create_standard_deck();
            deck::shuffle_deck(&mut cards);
            cards
        })
    }

    /// 同じシードなら同じ配り方。
    pub fn deal_seeded(&mut self, seed: u64) -> Result<(), RuleError> {
        info!("GameSession: dealing with seed {}", seed);
        self.deal(|| deck::shuffled_deck(seed))
    }

    pub fn deal_columns(&mut self, columns: Vec<Vec<Card>>) -> Result<(), RuleError> {
        self.board.deal_columns(columns)?;
        self.start();
        Ok(())
    }

    pub fn deal_fixture(&mut self, fixture: FixtureDeal) -> Result<(), RuleError> {
        let columns = fixture.columns().map_err(|e| RuleError::InvalidDeck {
            reason: e.to_string(),
        })?;
        self.deal_columns(columns)
    }

    fn start(&mut self) {
        self.history.clear();
        self.state.status = GameStatus::Playing;
        info!("GameSession: game started");
    }

    /// プレイ中じゃなければ、その理由をエラーで返す。
    pub(crate) fn ensure_playing(&self) -> Result<(), RuleError> {
        match self.state.status {
            GameStatus::NotDealt => Err(RuleError::NotDealt),
            GameStatus::Won => Err(RuleError::GameOver),
            GameStatus::Playing => Ok(()),
        }
    }

    /// 盤面は変えずに移動をチェックするだけ。
    pub fn validate_move(&self, card: Card, destination: StackType) -> Result<MoveCheck, RuleError> {
        self.ensure_playing()?;
        rules::validate_move(&self.board, card, destination)
    }

    pub fn can_lift(&self, card: Card) -> Result<bool, RuleError> {
        self.ensure_playing()?;
        rules::can_lift(&self.board, card)
    }

    /// チェックして、通ったら動かして履歴に残す。
    pub fn try_move(&mut self, card: Card, destination: StackType) -> Result<MoveOutcome, RuleError> {
        MoveCardSystem::new().process_move_request(self, card, destination)
    }

    /// 最後の 1 手を取り消す。取り消した手を返すよ。
    pub fn undo(&mut self) -> Result<MoveRecord, RuleError> {
        MoveCardSystem::new().undo_last_move(self)
    }

    /// プレイ中で、履歴が残ってる時だけ true。
    pub fn can_undo(&self) -> bool {
        self.state.is_playing() && self.history.can_undo()
    }

    pub fn is_auto_completable(&self) -> bool {
        self.state.is_playing() && rules::is_auto_completable(&self.board)
    }

    /// 残りのカードを全部組札に送る。送った順に手を返す。
    pub fn auto_complete(&mut self) -> Result<Vec<MoveRecord>, RuleError> {
        WinConditionSystem::new().auto_complete(self)
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// プレゼンテーション側に渡す形にまとめる。
    pub fn snapshot(&self) -> GameStateData {
        GameStateData::from_session(self)
    }
}
