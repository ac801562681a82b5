// src/app/mod.rs
//! GameApp の内部ロジックを役割ごとに分割して置くモジュールだよ！

pub mod game_app;
pub mod move_handler; // カード ID / パイル JSON の読み取りと移動
pub mod state_getter; // 状態を JSON にして返す

pub use game_app::GameApp;
