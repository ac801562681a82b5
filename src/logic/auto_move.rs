// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! 組札が次に欲しがってるカードはどれか、あるカードをどの組札に送れるか、を判断するんだ。

use log::debug;

use crate::board::Board;
use crate::components::card::{Card, Rank, ALL_SUITS};
use crate::components::stack::StackType;
use crate::logic::rules::{self, MoveCheck};

/// 組札 `foundation` に次に置けるカード。
///
/// - 空なら、まだどの組札にも乗ってない A を ♠ ♣ ♥ ♦ の順で探す。
/// - 空じゃなければ、同じスートでひとつ上のランク。
/// - K まで揃ってる、または該当カードが盤面に無い時は None。
pub fn next_foundation_card(board: &Board, foundation: StackType) -> Option<Card> {
    let pile = board.pile(foundation).ok()?;
    match pile.top_card() {
        None => ALL_SUITS
            .iter()
            .map(|&suit| Card::new(suit, Rank::Ace))
            .find(|&ace| matches!(board.pile_containing(ace), Ok(at) if !at.is_foundation())),
        Some(top) => {
            let next = Card::new(top.suit, top.rank_up()?);
            board.pile_containing(next).ok().map(|_| next)
        }
    }
}

/// 特定のカードを送れる組札があるか探す関数だよ。
/// 見つかった場合は、移動先の StackType を返す。
pub fn find_automatic_foundation_move(board: &Board, card: Card) -> Option<StackType> {
    debug!("[AutoMove] Finding automatic foundation move for {}...", card);
    let found = board
        .foundations()
        .iter()
        .map(|pile| pile.id())
        .find(|&id| matches!(rules::validate_move(board, card, id), Ok(MoveCheck::Legal { .. })));
    match found {
        Some(id) => debug!("  Found valid foundation {:?} for {}.", id, card),
        None => debug!("  No suitable foundation found for {}.", card),
    }
    found
}
