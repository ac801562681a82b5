// src/systems/win_condition_system.rs

use log::{debug, info, warn};

use crate::components::game_state::GameStatus;
use crate::error::RuleError;
use crate::history::MoveRecord;
use crate::logic::auto_move::next_foundation_card;
use crate::logic::rules::is_won;
use crate::session::GameSession;
use crate::systems::System;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 全部のカードが組札に乗ってたら GameState を Won にする。
/// 残りを全部組札に送る自動完成もここでやるよ。
#[derive(Debug, Default)]
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn new() -> Self {
        Self
    }

    /// 組札が欲しがってるカードを、動かせなくなるまで順番に送り続ける。
    ///
    /// 盤面のコピーの上で進めて、全部送れた時だけセッションに反映する。
    /// 1 周して 1 枚も動かせなかったら `AutoCompleteStalled` で、セッションはそのまま。
    /// 自動完成の手は履歴に積まず、履歴は空になる。
    pub fn auto_complete(&mut self, session: &mut GameSession) -> Result<Vec<MoveRecord>, RuleError> {
        session.ensure_playing()?;
        let mut board = session.board.clone();
        let foundations: Vec<_> = board.foundations().iter().map(|pile| pile.id()).collect();
        let mut steps = Vec::with_capacity(board.cards_outside_foundations());

        while board.cards_outside_foundations() > 0 {
            let mut progressed = false;
            for &foundation in &foundations {
                let Some(next) = next_foundation_card(&board, foundation) else {
                    continue;
                };
                if !board.is_tail(next)? {
                    continue;
                }
                let source = board.pile_containing(next)?;
                board.relocate(next, foundation)?;
                debug!("[AutoComplete] {} {:?} -> {:?}", next, source, foundation);
                steps.push(MoveRecord { card: next, run_len: 1, source, destination: foundation });
                progressed = true;
            }
            if !progressed {
                let remaining = board.cards_outside_foundations();
                warn!("[AutoComplete] stalled with {} cards left", remaining);
                return Err(RuleError::AutoCompleteStalled { remaining });
            }
        }

        session.board = board;
        session.history.clear();
        info!("[AutoComplete] sent {} cards home", steps.len());
        self.run(session);
        Ok(steps)
    }
}

impl System for WinConditionSystem {
    /// 勝利条件をチェックして、必要ならゲーム状態を更新するよ！
    fn run(&mut self, session: &mut GameSession) {
        if session.state.status != GameStatus::Playing {
            return;
        }
        if is_won(&session.board) {
            info!("WinConditionSystem: 勝利条件達成！🏆 ゲーム状態を更新します。");
            session.state.status = GameStatus::Won;
        }
    }
}
