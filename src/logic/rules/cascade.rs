//! 場札 (Cascade) へのカード移動ルールを定義するよ。

use log::debug;

use super::common::allowed_run_len;
use crate::board::Board;
use crate::components::card::Card;
use crate::components::pile::Pile;
use crate::error::IllegalMoveReason;

/// `card` を先頭にした `run_len` 枚の列を、場札 `target` の一番上に置けるかチェックする。
///
/// 空の列にはどのカードでも置けるけど、運べる枚数は半分になる。
pub fn can_move_to_cascade(
    board: &Board,
    card: Card,
    run_len: usize,
    target: &Pile,
) -> Result<(), IllegalMoveReason> {
    if let Some(top) = target.top_card() {
        let colors_different = top.color() != card.color();
        let rank_is_one_less = top.rank_down() == Some(card.rank);
        debug!(
            "    [Rule Check] Moving {} onto {}. Colors different: {}. Rank is one less: {}.",
            card, top, colors_different, rank_is_one_less
        );
        if !colors_different || !rank_is_one_less {
            return Err(IllegalMoveReason::CascadeMismatch);
        }
    } else {
        debug!("    [Rule Check] Moving {} onto empty {:?}.", card, target.id());
    }

    let allowed = allowed_run_len(board, target);
    if run_len > allowed {
        return Err(IllegalMoveReason::RunTooLong { len: run_len, allowed });
    }
    Ok(())
}
