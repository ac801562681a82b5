// src/app/game_app.rs

// --- 必要なものをインポート ---
use wasm_bindgen::prelude::*;
use log::info;

use crate::app::{move_handler, state_getter};
use crate::config::board::BoardConfig;
use crate::logic::deck::FixtureDeal;
use crate::session::GameSession;

// --- JS の画面側から使うゲーム本体 ---
// カードは "♠A" みたいな ID、パイルは `{"Cascade":0}` みたいな JSON で受け取る。
// 戻り値の JSON の形は protocol モジュールを見てね。エラーは全部文字列。
#[wasm_bindgen]
pub struct GameApp {
    session: GameSession,
}

// GameApp 構造体のメソッドを実装していくよ！
#[wasm_bindgen]
impl GameApp {
    /// `config_json` は盤面の設定 (`{"cascades":8,"cells":4,"foundations":4}`)。空文字ならデフォルト。
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<GameApp, String> {
        let config = BoardConfig::from_json(config_json).map_err(|e| e.to_string())?;
        let session = GameSession::new(config).map_err(|e| e.to_string())?;
        info!("GameApp: 初期化完了。 {:?}", config);
        Ok(Self { session })
    }

    /// ランダムに配って、配った後の状態 JSON を返す。
    pub fn deal_random(&mut self) -> Result<String, String> {
        self.session.deal_random().map_err(|e| e.to_string())?;
        self.get_state_json()
    }

    /// シード付きで配る。同じシードなら同じ盤面。
    pub fn deal_seeded(&mut self, seed: u32) -> Result<String, String> {
        self.session
            .deal_seeded(u64::from(seed))
            .map_err(|e| e.to_string())?;
        self.get_state_json()
    }

    /// 確認用の決まった配り方 ("ordered", "long_chain", "sorted_by_suit") で配る。
    pub fn deal_fixture(&mut self, name: &str) -> Result<String, String> {
        let fixture = FixtureDeal::from_name(name)
            .ok_or_else(|| format!("Unknown fixture deal: {}", name))?;
        self.session.deal_fixture(fixture).map_err(|e| e.to_string())?;
        self.get_state_json()
    }

    /// 「ゲーム番号」用の新しいシード。JS 側で表示してから `deal_seeded` に渡す。
    pub fn new_seed() -> u32 {
        random_seed()
    }

    /// ドラッグ開始時に、このカードから上を持ち上げていいか。
    pub fn can_lift(&self, card_id: &str) -> Result<bool, String> {
        let card = move_handler::parse_card(card_id)?;
        self.session.can_lift(card).map_err(|e| e.to_string())
    }

    pub fn validate_move(&self, card_id: &str, destination_json: &str) -> Result<bool, String> {
        move_handler::validate_move(&self.session, card_id, destination_json)
    }

    /// 移動して結果 (MoveResultData) の JSON を返す。ルール違反ならエラー文字列。
    pub fn make_move(&mut self, card_id: &str, destination_json: &str) -> Result<String, String> {
        let result = move_handler::make_move(&mut self.session, card_id, destination_json)?;
        state_getter::to_json(&result)
    }

    /// ダブルクリック用。送れなかった時は "null"。
    pub fn send_to_foundation(&mut self, card_id: &str) -> Result<String, String> {
        let result = move_handler::send_to_foundation(&mut self.session, card_id)?;
        state_getter::to_json(&result)
    }

    /// 取り消した手 (MoveData) の JSON を返す。
    pub fn undo(&mut self) -> Result<String, String> {
        let undone = move_handler::undo(&mut self.session)?;
        state_getter::to_json(&undone)
    }

    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    pub fn is_auto_completable(&self) -> bool {
        self.session.is_auto_completable()
    }

    /// 組札へ送った手 (MoveData の配列) の JSON を返す。アニメーションはこの順で。
    pub fn auto_complete(&mut self) -> Result<String, String> {
        let steps = move_handler::auto_complete(&mut self.session)?;
        state_getter::to_json(&steps)
    }

    pub fn get_state_json(&self) -> Result<String, String> {
        state_getter::get_state_json(&self.session)
    }
}

#[cfg(target_arch = "wasm32")]
fn random_seed() -> u32 {
    (js_sys::Math::random() * f64::from(u32::MAX)) as u32
}

#[cfg(not(target_arch = "wasm32"))]
fn random_seed() -> u32 {
    rand::random()
}
