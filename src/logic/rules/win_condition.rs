//! ゲームの勝利条件と自動完成の判定ロジックを定義するよ。

use crate::board::Board;
use crate::components::pile::is_valid_run;
use crate::config::board::DECK_SIZE;

/// ゲームのクリア条件（全てのカードが組札にあるか）を判定する。
pub fn check_win_condition(foundation_card_count: usize) -> bool {
    foundation_card_count == DECK_SIZE
}

pub fn is_won(board: &Board) -> bool {
    check_win_condition(board.foundation_card_count())
}

/// 全部の場札が、奥から手前まで「ランク降順・色交互」になってるか。
/// ここまで来たら残りは自動で組札に送れる。
///
/// フリーセルの中身は見ない (自動完成の途中で空になる前提)。
pub fn is_auto_completable(board: &Board) -> bool {
    board
        .cascades()
        .iter()
        .all(|pile| is_valid_run(pile.cards()))
}
