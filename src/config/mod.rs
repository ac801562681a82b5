// src/config/mod.rs
//! ゲームの設定値をまとめるモジュールだよ。

pub mod board;

pub use board::{BoardConfig, ConfigError};
