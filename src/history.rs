// src/history.rs
//! 「元に戻す」のための移動履歴だよ！⏪
//!
//! 1 手ごとに「どのカード (から上) を、どこからどこへ動かしたか」だけを記録する。
//! 元に戻す時は、移動先から移動元へ同じカードを動かせば完全に元通り。

use log::debug;
use serde::{Serialize, Deserialize};

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::error::RuleError;

/// 1 手分の移動記録。作ったら変更しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 掴んだカード (動かした列の先頭)。
    pub card: Card,
    /// 一緒に動いた枚数。
    pub run_len: usize,
    pub source: StackType,
    pub destination: StackType,
}

impl MoveRecord {
    /// 元に戻すための逆向きの移動。
    pub fn reversed(&self) -> MoveRecord {
        MoveRecord {
            card: self.card,
            run_len: self.run_len,
            source: self.destination,
            destination: self.source,
        }
    }
}

/// 元に戻すためのスタック。長さの上限は無し (1 ゲームせいぜい数百手)。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 正しくて、かつ別のパイルへの移動だけを記録すること。
    pub fn remember(&mut self, record: MoveRecord) {
        debug!("MoveHistory: remember {:?}", record);
        self.records.push(record);
    }

    /// 一番最近の手を取り出す。盤面を戻すのは呼び出し側の仕事。
    pub fn undo(&mut self) -> Result<MoveRecord, RuleError> {
        self.records.pop().ok_or(RuleError::EmptyHistory)
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn can_undo(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, source: StackType, destination: StackType) -> MoveRecord {
        MoveRecord { card: id.parse().unwrap(), run_len: 1, source, destination }
    }

    #[test]
    fn undo_pops_in_reverse_order() {
        let mut history = MoveHistory::new();
        assert!(!history.can_undo());

        let first = record("♠A", StackType::Cascade(0), StackType::Foundation(0));
        let second = record("♥Q", StackType::Cascade(1), StackType::Cell(2));
        history.remember(first);
        history.remember(second);
        assert_eq!(history.len(), 2);
        assert_eq!(history.last(), Some(&second));

        assert_eq!(history.undo(), Ok(second));
        assert_eq!(history.undo(), Ok(first));
        assert_eq!(history.undo(), Err(RuleError::EmptyHistory));
        assert!(history.is_empty());
        println!("MoveHistory テスト、成功！🎉");
    }

    #[test]
    fn reversed_swaps_source_and_destination() {
        let forward = record("♣7", StackType::Cascade(3), StackType::Cascade(5));
        let back = forward.reversed();
        assert_eq!(back.source, StackType::Cascade(5));
        assert_eq!(back.destination, StackType::Cascade(3));
        assert_eq!(back.card, forward.card);
        assert_eq!(back.reversed(), forward);
    }

    #[test]
    fn clear_empties_the_stack() {
        let mut history = MoveHistory::new();
        history.remember(record("♦5", StackType::Cell(0), StackType::Cascade(1)));
        history.clear();
        assert!(!history.can_undo());
        assert!(history.records().is_empty());
    }
}
