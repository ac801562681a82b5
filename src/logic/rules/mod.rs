// src/logic/rules/mod.rs
//! フリーセルのルール関連モジュールをまとめるよ！

pub mod common;
pub mod cascade;
pub mod cell;
pub mod foundation;
pub mod move_validation;
pub mod win_condition;

#[cfg(test)]
mod prop_tests;

// 各モジュールから公開したい関数をここで再エクスポート！
pub use cascade::can_move_to_cascade;
pub use cell::can_move_to_cell;
pub use common::{allowed_run_len, capacity, MoveCheck};
pub use foundation::can_move_to_foundation;
pub use move_validation::{can_lift, validate_move};
pub use win_condition::{check_win_condition, is_auto_completable, is_won};
