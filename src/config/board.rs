// src/config/board.rs
//! 盤面の大きさに関する設定と定数を定義するよ！
//! 場札・フリーセル・組札の数。JS 側から JSON で上書きもできる。

use std::fmt;

use serde::{Serialize, Deserialize};

pub const SUIT_COUNT: usize = 4; // スートの数
pub const RANK_COUNT: usize = 13; // 1 スートあたりの枚数
pub const DECK_SIZE: usize = SUIT_COUNT * RANK_COUNT; // 52 枚

pub const DEFAULT_CASCADES: u8 = 8; // 場札の列数
pub const DEFAULT_CELLS: u8 = 4; // フリーセルの数
pub const DEFAULT_FOUNDATIONS: u8 = SUIT_COUNT as u8; // 組札の数 (スートごとに 1 つ)

/// 盤面の構成。
///
/// JSON の例: `{"cascades": 8, "cells": 4, "foundations": 4}`。
/// 省略したフィールドはデフォルト値になるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub cascades: u8,
    pub cells: u8,
    pub foundations: u8,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            cascades: DEFAULT_CASCADES,
            cells: DEFAULT_CELLS,
            foundations: DEFAULT_FOUNDATIONS,
        }
    }
}

/// 設定の読み込み・検証エラー。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    NoCascades,
    FoundationCount { found: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "failed to parse board config: {}", msg),
            ConfigError::NoCascades => f.write_str("board needs at least one cascade"),
            ConfigError::FoundationCount { found } => write!(
                f,
                "board needs exactly {} foundations, got {}",
                SUIT_COUNT, found
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl BoardConfig {
    /// JSON 文字列から設定を読み込んで検証する。空文字ならデフォルト。
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: BoardConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cascades == 0 {
            return Err(ConfigError::NoCascades);
        }
        // 1 デッキなので組札はスートの数ぴったり
        if self.foundations as usize != SUIT_COUNT {
            return Err(ConfigError::FoundationCount { found: self.foundations });
        }
        Ok(())
    }
}
