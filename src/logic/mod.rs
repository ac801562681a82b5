// src/logic/mod.rs
//! ゲームのルールや判定など、盤面を読むだけのロジックをまとめるよ！🧠

pub mod auto_move;
pub mod deck;
pub mod rules;
