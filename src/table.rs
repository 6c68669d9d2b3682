//! テーブルプレビュー本体
//!
//! 初期ペイロードから構築した表に対するフィルタ・ソート・列幅変更・
//! ページング・CSV エクスポートを提供する。描画層には依存しない。
//!
//! ## モジュール構成
//!
//! - `model`: 行ストア（正準行リスト）
//! - `filter`: 部分一致フィルタ
//! - `debounce`: キャンセル可能な遅延タスク
//! - `sort`: 数値/文字列ソート
//! - `resize`: 列幅とドラッグジェスチャ
//! - `page`: ページング
//! - `csv`: CSV 生成
//! - `view`: 上記をまとめた状態付きコンポーネント

pub mod csv;
pub mod debounce;
pub mod filter;
pub mod model;
pub mod page;
pub mod resize;
pub mod sort;
pub mod view;

pub use csv::ExportScope;
pub use debounce::Debouncer;
pub use model::TableModel;
pub use page::Pagination;
pub use sort::SortDirection;
pub use view::{HeaderClick, TableView};
