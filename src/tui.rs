//! テーブルプレビュー TUI
//!
//! ratatui/crossterm を使用した対話的なテーブル表示。
//!
//! ## モジュール構成
//!
//! - `app`: Model / Msg / update
//! - `header`: ヘッダのレイアウトとヒットテスト
//! - `render`: 画面描画

mod app;
mod header;
mod render;

pub use app::Model;

use app::{update, Msg};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};

/// 保留中のタスクがないときのイベント待ち時間
const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI を実行
pub fn run(model: &mut Model) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend).and_then(|mut terminal| event_loop(&mut terminal, model));

    // ターミナルを復元
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    model: &mut Model,
) -> io::Result<()> {
    // メインループ
    while !model.should_quit {
        terminal.draw(|f| render::draw(f, model))?;

        // 次のデバウンス期限までだけ待つ
        let timeout = model
            .debouncer
            .deadline()
            .map(|due| due.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL);

        if event::poll(timeout)? {
            let msg = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => model.key_to_msg(key.code),
                Event::Mouse(mouse) => model.mouse_to_msg(mouse),
                _ => None,
            };
            if let Some(msg) = msg {
                update(model, msg, Instant::now());
            }
        }

        update(model, Msg::Tick, Instant::now());
    }

    Ok(())
}
