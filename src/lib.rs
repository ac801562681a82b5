// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod components; // カード・パイル・ゲーム状態
pub mod config; // 盤面の設定
pub mod error;
pub mod board; // 場札・フリーセル・組札の全体
pub mod logic; // ルール判定・デッキ・自動移動
pub mod history; // 元に戻す
pub mod session; // 1 ゲーム分の状態
pub mod systems;
pub mod protocol; // JS とやり取りする JSON の形
pub mod app; // GameApp (wasm の入口)

pub use app::GameApp;
pub use board::Board;
pub use components::{Card, CardColor, Pile, PileKind, Rank, StackType, Suit};
pub use config::BoardConfig;
pub use error::{IllegalMoveReason, RuleError};
pub use history::{MoveHistory, MoveRecord};
pub use session::GameSession;
pub use systems::MoveOutcome;

// JavaScript の console.log を Rust から呼び出すための準備 (extern ブロック)。
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    console_log("Panic hook set!");
}
