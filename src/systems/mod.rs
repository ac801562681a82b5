// src/systems/mod.rs
//! セッションの盤面を書き換えるシステムたちだよ！⚙️
//!
//! ルールの判定は `logic::rules` が盤面を読むだけでやる。ここはその結果を盤面と履歴に反映する係。

pub mod move_card_system;
pub mod win_condition_system;

#[cfg(test)]
mod prop_tests;

pub use move_card_system::{MoveCardSystem, MoveOutcome};
pub use win_condition_system::WinConditionSystem;

use crate::session::GameSession;

/// セッションに対して何か 1 つの仕事をするシステム。
///
/// 手が確定するたびに呼ばれて、セッションの状態を読んだり更新したりする。
pub trait System {
    fn run(&mut self, session: &mut GameSession);
}
