//! # Dish API ライブラリ
//!
//! 料理カタログの HTTP サービスを構成するモジュールを公開する。
//! `main.rs` はプロセスの起動に専念し、ルーター構築は [`app`] に置く。

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
