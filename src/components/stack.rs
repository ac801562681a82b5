// src/components/stack.rs

// serde を使うためにインポート！JS 側から移動先を JSON で受け取るよ。
use serde::{Serialize, Deserialize};

/// カードを置く場所の種類だよ。インデックス無しのタグ。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PileKind {
    Cascade,
    Cell,
    Foundation,
}

/// カードが存在する場所を示す Enum だよ。種類 + 何番目か。
/// 盤面を作る時に決まって、ゲーム中は変わらない。
///
/// JSON では `{"Cascade":3}` みたいな形になる！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Cascade)。デフォルトは 8 列 (0-7)。
    Cascade(u8),
    /// フリーセル。デフォルトは 4 つ (0-3)。1 枚だけ置ける。
    Cell(u8),
    /// 組札 (Foundation)。4 つ (0-3)。
    /// どのスートかは最初に置かれた A で決まるので、インデックスとスートは対応しないよ。
    Foundation(u8),
}

impl StackType {
    pub fn kind(self) -> PileKind {
        match self {
            StackType::Cascade(_) => PileKind::Cascade,
            StackType::Cell(_) => PileKind::Cell,
            StackType::Foundation(_) => PileKind::Foundation,
        }
    }

    pub fn index(self) -> usize {
        match self {
            StackType::Cascade(i) | StackType::Cell(i) | StackType::Foundation(i) => i as usize,
        }
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }
}
