// src/app/move_handler.rs
//! JS から来たカード ID とパイル JSON を読み取って、セッションに手を流すよ。
//! エラーは全部 String にして返す (JS 側でそのまま表示できる)。

use log::{debug, warn};

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::error::RuleError;
use crate::logic::auto_move;
use crate::logic::rules::MoveCheck;
use crate::protocol::{MoveData, MoveResultData};
use crate::session::GameSession;

/// "♠A" → Card
pub fn parse_card(card_id: &str) -> Result<Card, String> {
    card_id.parse().map_err(|e| {
        warn!("move_handler: {}", e);
        format!("{}", e)
    })
}

/// `{"Cascade":0}` → StackType
pub fn parse_destination(destination_json: &str) -> Result<StackType, String> {
    serde_json::from_str(destination_json).map_err(|e| {
        let error_msg = format!("Invalid pile {}: {}", destination_json, e);
        warn!("move_handler: {}", error_msg);
        error_msg
    })
}

fn to_message(err: RuleError) -> String {
    err.to_string()
}

/// 動かしていいかだけ答える。ルール違反は false、盤面とズレてる時などはエラー。
pub fn validate_move(
    session: &GameSession,
    card_id: &str,
    destination_json: &str,
) -> Result<bool, String> {
    let card = parse_card(card_id)?;
    let destination = parse_destination(destination_json)?;
    match session.validate_move(card, destination) {
        Ok(MoveCheck::SamePile) | Ok(MoveCheck::Legal { .. }) => Ok(true),
        Err(e) if e.is_illegal_move() => {
            debug!("move_handler: {} -> {:?} rejected: {}", card, destination, e);
            Ok(false)
        }
        Err(e) => Err(to_message(e)),
    }
}

pub fn make_move(
    session: &mut GameSession,
    card_id: &str,
    destination_json: &str,
) -> Result<MoveResultData, String> {
    let card = parse_card(card_id)?;
    let destination = parse_destination(destination_json)?;
    let outcome = session.try_move(card, destination).map_err(to_message)?;
    Ok(MoveResultData::new(&outcome, session.status()))
}

/// ダブルクリックで組札へ送る。送れる組札が無ければ None。
pub fn send_to_foundation(
    session: &mut GameSession,
    card_id: &str,
) -> Result<Option<MoveResultData>, String> {
    let card = parse_card(card_id)?;
    if !session.board().is_tail(card).map_err(to_message)? {
        return Ok(None);
    }
    match auto_move::find_automatic_foundation_move(session.board(), card) {
        Some(foundation) => {
            let outcome = session.try_move(card, foundation).map_err(to_message)?;
            Ok(Some(MoveResultData::new(&outcome, session.status())))
        }
        None => Ok(None),
    }
}

pub fn undo(session: &mut GameSession) -> Result<MoveData, String> {
    session
        .undo()
        .map(|record| MoveData::from(&record))
        .map_err(to_message)
}

pub fn auto_complete(session: &mut GameSession) -> Result<Vec<MoveData>, String> {
    let steps = session.auto_complete().map_err(to_message)?;
    Ok(steps.iter().map(MoveData::from).collect())
}
