// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use super::common::{capacity, MoveCheck};
use super::{cascade, cell, foundation};
use crate::board::Board;
use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::error::{IllegalMoveReason, RuleError};

/// `card` から上の列を `destination` に動かせるか検証する。盤面は変えないよ。
///
/// 元のパイルに戻すだけなら `MoveCheck::SamePile`。
/// ルール違反なら `RuleError::IllegalMove`、カードや移動先が盤面に無い時は
/// `NotFound` / `NoSuchPile`。
pub fn validate_move(
    board: &Board,
    card: Card,
    destination: StackType,
) -> Result<MoveCheck, RuleError> {
    let source = board.pile_containing(card)?;
    let target = board.pile(destination)?;

    if source == destination {
        debug!("[Rules Validation] {} dropped back on {:?}, no-op.", card, source);
        return Ok(MoveCheck::SamePile);
    }

    let source_pile = board.pile(source)?;
    if !source_pile.is_valid_suffix_from(card) {
        return Err(IllegalMoveReason::BrokenRun.into());
    }
    let run_len = source_pile
        .run_len_from(card)
        .ok_or(RuleError::NotFound(card))?;

    match destination {
        StackType::Cell(_) => cell::can_move_to_cell(run_len, target)?,
        StackType::Foundation(_) => foundation::can_move_to_foundation(board, card, run_len, target)?,
        StackType::Cascade(_) => cascade::can_move_to_cascade(board, card, run_len, target)?,
    }
    debug!(
        "[Rules Validation] {} x{} from {:?} to {:?} is legal.",
        card, run_len, source, destination
    );
    Ok(MoveCheck::Legal { run_len })
}

/// ドラッグ開始時のチェック。持ち上げる列が正しくて、今の空きで運べる枚数以内か。
pub fn can_lift(board: &Board, card: Card) -> Result<bool, RuleError> {
    let pile = board.pile(board.pile_containing(card)?)?;
    let run_len = pile.run_len_from(card).ok_or(RuleError::NotFound(card))?;
    Ok(pile.is_valid_suffix_from(card) && run_len <= capacity(board))
}
