//! フリーセルへのカード移動ルールを定義するよ。

use crate::components::pile::Pile;
use crate::error::IllegalMoveReason;

/// フリーセルには、空いてる時に 1 枚だけ置ける。
pub fn can_move_to_cell(run_len: usize, target_cell: &Pile) -> Result<(), IllegalMoveReason> {
    if run_len != 1 {
        return Err(IllegalMoveReason::MultipleCardsToCell);
    }
    if !target_cell.is_empty() {
        return Err(IllegalMoveReason::CellOccupied);
    }
    Ok(())
}
