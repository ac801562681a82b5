//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::board::Board;
use crate::components::card::{Card, Rank};
use crate::components::pile::Pile;
use crate::error::IllegalMoveReason;

/// 指定されたカードが、特定の組札の一番上に置けるかチェックする。
///
/// - 1 枚ずつしか置けない。
/// - 空なら A だけ。ただし同じスートの A が別の組札にもうある場合はダメ。
/// - 空じゃなければ、同じスートでランクがひとつ上のカードだけ。
pub fn can_move_to_foundation(
    board: &Board,
    card: Card,
    run_len: usize,
    target: &Pile,
) -> Result<(), IllegalMoveReason> {
    debug!("[Foundation Rule] Checking move: {} to {:?}", card, target.id());
    if run_len != 1 {
        return Err(IllegalMoveReason::MultipleCardsToFoundation);
    }

    match target.top_card() {
        None => {
            if card.rank != Rank::Ace {
                return Err(IllegalMoveReason::FoundationNeedsAce { found: card.rank });
            }
            if is_suit_claimed_elsewhere(board, card, target) {
                return Err(IllegalMoveReason::SuitAlreadyClaimed);
            }
            Ok(())
        }
        Some(top) => {
            let same_suit = target.head_suit() == Some(card.suit);
            let is_next_rank = top.rank_up() == Some(card.rank);
            debug!(
                "[Foundation Rule]  - top: {}, same suit: {}, next rank: {}",
                top, same_suit, is_next_rank
            );
            if same_suit && is_next_rank {
                Ok(())
            } else {
                Err(IllegalMoveReason::FoundationMismatch)
            }
        }
    }
}

/// `target` 以外の組札が、このカードのスートをもう持ってるか。
pub(crate) fn is_suit_claimed_elsewhere(board: &Board, card: Card, target: &Pile) -> bool {
    board
        .foundations()
        .iter()
        .filter(|pile| pile.id() != target.id())
        .any(|pile| pile.head_suit() == Some(card.suit))
}
