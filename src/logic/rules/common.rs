//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use log::debug;

use crate::board::Board;
use crate::components::pile::Pile;

/// 移動チェックの結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCheck {
    /// 元のパイルに戻しただけ。何もしないで OK、履歴にも残さない。
    SamePile,
    /// 動かしていい。`run_len` は一緒に動く枚数。
    Legal { run_len: usize },
}

/// 今の盤面で一度に運べる最大枚数。
///
/// 空きセル 1 つにつき 1 枚増えて、空き列が 1 つでもあれば 2 倍。
/// 空き列が 2 つ以上あってもさらに倍にはならない。
pub fn capacity(board: &Board) -> usize {
    let base = board.empty_cell_count() + 1;
    let result = if board.empty_cascade_count() >= 1 {
        base * 2
    } else {
        base
    };
    debug!(
        "[Capacity] empty cells: {}, empty cascades: {} -> {}",
        board.empty_cell_count(),
        board.empty_cascade_count(),
        result
    );
    result
}

/// `destination` の場札に運べる最大枚数。
/// 空の列に置く時は、その列自体を中継に使えないので倍率が消える。
pub fn allowed_run_len(board: &Board, destination: &Pile) -> usize {
    if destination.is_empty() {
        capacity(board) / 2
    } else {
        capacity(board)
    }
}
