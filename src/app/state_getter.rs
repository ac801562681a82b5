//! Gets the current game state from the session and converts it to JSON.

use log::{debug, error};
use serde::Serialize;

use crate::protocol::GameStateData;
use crate::session::GameSession;

/// 何でも JSON 文字列にする。失敗したらログに残してメッセージを返す。
pub fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| {
        let error_msg = format!("Failed to serialize response: {}", e);
        error!("{}", error_msg);
        error_msg
    })
}

/// セッションの状態を取得し、JSON 文字列として返します。
/// (GameApp::get_state_json のロジック)
pub fn get_state_json(session: &GameSession) -> Result<String, String> {
    let data = GameStateData::from_session(session);
    debug!(
        "Collected {} piles, status {:?}.",
        data.piles.len(),
        data.status
    );
    to_json(&data)
}
