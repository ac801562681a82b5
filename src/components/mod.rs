// src/components/mod.rs

// ゲームのデータ部品をまとめるモジュールだよ！
pub mod card;
pub mod stack;
pub mod pile; // 1 つの山を表す Pile
pub mod game_state;

pub use card::{Card, CardColor, Rank, Suit};
pub use pile::Pile;
pub use stack::{PileKind, StackType};
