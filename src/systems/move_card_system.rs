// src/systems/move_card_system.rs

use log::{debug, info, warn};
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::error::RuleError;
use crate::history::MoveRecord;
use crate::logic::rules::{self, MoveCheck};
use crate::session::GameSession;
use crate::systems::win_condition_system::WinConditionSystem;
use crate::systems::System;

/// 1 手の結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// 元のパイルに戻しただけ。盤面も履歴もそのまま。
    SamePile,
    /// 動いた。履歴に積んだ記録と同じもの。
    Moved(MoveRecord),
}

/// カード移動のロジックを実行するシステムだよ！🖱️💨
///
/// プレイヤーからの入力（「どのカードをどこに動かすか」）を受け取って、
/// ルール上可能かチェックし、可能なら盤面を動かして履歴に残すよ。
#[derive(Debug, Default)]
pub struct MoveCardSystem;

impl MoveCardSystem {
    pub fn new() -> Self {
        Self
    }

    /// カード移動リクエストを処理する本体。
    ///
    /// チェックが通るまで盤面には一切触らない。
    pub fn process_move_request(
        &mut self,
        session: &mut GameSession,
        card: Card,
        destination: StackType,
    ) -> Result<MoveOutcome, RuleError> {
        session.ensure_playing()?;
        debug!("MoveCardSystem: {} -> {:?}", card, destination);

        let check = rules::validate_move(&session.board, card, destination).map_err(|e| {
            if e.is_illegal_move() {
                debug!("  ルール違反！移動できませんでした。🙅‍♀️ ({})", e);
            } else {
                warn!("MoveCardSystem: {} -> {:?} rejected: {}", card, destination, e);
            }
            e
        })?;

        let run_len = match check {
            MoveCheck::SamePile => return Ok(MoveOutcome::SamePile),
            MoveCheck::Legal { run_len } => run_len,
        };

        let source = session.board.pile_containing(card)?;
        let moved = session.board.relocate(card, destination)?;
        debug_assert_eq!(moved, run_len);

        let record = MoveRecord { card, run_len: moved, source, destination };
        session.history.remember(record);
        info!("MoveCardSystem: moved {} x{} {:?} -> {:?}", card, moved, source, destination);

        WinConditionSystem::new().run(session);
        Ok(MoveOutcome::Moved(record))
    }

    /// 最後の手を逆向きに動かす。取り消し自体は履歴に積まない。
    ///
    /// 盤面を戻せた時だけ履歴から取り除く。
    pub fn undo_last_move(&mut self, session: &mut GameSession) -> Result<MoveRecord, RuleError> {
        session.ensure_playing()?;
        let back = session
            .history
            .last()
            .map(MoveRecord::reversed)
            .ok_or(RuleError::EmptyHistory)?;

        session.board.relocate(back.card, back.destination)?;
        let record = session.history.undo()?;
        info!(
            "MoveCardSystem: undo {} x{} back to {:?}",
            record.card, record.run_len, record.source
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::game_state::GameStatus;
    use crate::config::board::BoardConfig;
    use crate::error::IllegalMoveReason;
    use crate::logic::deck::{cards_from_ids, create_standard_deck};

    fn card(id: &str) -> Card {
        id.parse().unwrap()
    }

    #[test]
    fn capacity_limits_run_moves() {
        // セルを全部埋めて空き列も無いと 1 枚ずつしか運べない
        let mut session = GameSession::new(BoardConfig::default()).unwrap();
        session.deal(create_standard_deck).unwrap();
        for i in 0..4u8 {
            let top = session.board.cascades()[i as usize].top_card().unwrap();
            let outcome = session.try_move(top, StackType::Cell(i)).unwrap();
            assert!(matches!(outcome, MoveOutcome::Moved(_)));
        }
        assert_eq!(session.board.empty_cell_count(), 0);
        assert_eq!(rules::capacity(&session.board), 1);
        println!("容量テスト、成功！🎉");
    }

    #[test]
    fn rejected_run_reports_allowed_length() {
        let mut session = GameSession::new(BoardConfig { cells: 0, ..BoardConfig::default() }).unwrap();
        let columns = vec![
            cards_from_ids(&["♠9", "♥8", "♠7"]).unwrap(),
            cards_from_ids(&["♦10"]).unwrap(),
            cards_from_ids(&["♣2"]).unwrap(),
            cards_from_ids(&["♣3"]).unwrap(),
            cards_from_ids(&["♣4"]).unwrap(),
            cards_from_ids(&["♣5"]).unwrap(),
            cards_from_ids(&["♣6"]).unwrap(),
            cards_from_ids(&["♣7"]).unwrap(),
        ];
        session.deal_columns(columns).unwrap();

        let mut system = MoveCardSystem::new();
        let result = system.process_move_request(&mut session, card("♠9"), StackType::Cascade(1));
        assert_eq!(
            result,
            Err(RuleError::IllegalMove(IllegalMoveReason::RunTooLong { len: 3, allowed: 1 }))
        );
        assert!(session.history.is_empty());
        assert_eq!(session.state.status, GameStatus::Playing);
    }

    #[test]
    fn undo_restores_cells_and_cascades() {
        let mut session = GameSession::new(BoardConfig::default()).unwrap();
        session
            .deal_columns(vec![cards_from_ids(&["♦4", "♣Q"]).unwrap()])
            .unwrap();

        let mut system = MoveCardSystem::new();
        system.process_move_request(&mut session, card("♣Q"), StackType::Cell(3)).unwrap();
        system.process_move_request(&mut session, card("♣Q"), StackType::Cascade(5)).unwrap();
        assert_eq!(session.history.len(), 2);

        let record = system.undo_last_move(&mut session).unwrap();
        assert_eq!(record.destination, StackType::Cascade(5));
        assert_eq!(session.board.pile_containing(card("♣Q")), Ok(StackType::Cell(3)));

        system.undo_last_move(&mut session).unwrap();
        assert_eq!(session.board.pile_containing(card("♣Q")), Ok(StackType::Cascade(0)));
        assert_eq!(system.undo_last_move(&mut session), Err(RuleError::EmptyHistory));
    }
}
