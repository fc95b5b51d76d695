//! 表情ギャラリー TUI
//!
//! カテゴリタブ・検索欄・表情一覧・プレビューを持つ TUI。
//!
//! ## モジュール構成
//!
//! - `app`: Model/Msg/update
//! - `view`: 画面描画

mod app;
mod view;

use crate::catalog::DisplayRecord;
use app::{update, Model};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};

/// TUI を実行
pub fn run(records: Vec<DisplayRecord>) -> io::Result<()> {
    // ターミナル設定
    terminal::enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut model = Model::new(records);
    let result = event_loop(&mut terminal, &mut model);

    // ターミナルを復元（ループがエラーでも必ず戻す）
    stdout().execute(DisableMouseCapture)?;
    terminal::disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// メインループ
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, model: &mut Model) -> io::Result<()> {
    while !model.should_quit {
        terminal.draw(|f| view::view(f, model))?;

        let msg = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => model.key_to_msg(key.code),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                model.mouse_to_msg(mouse, Rect::new(0, 0, size.width, size.height))
            }
            _ => None,
        };

        if let Some(msg) = msg {
            update(model, msg);
        }
    }

    Ok(())
}
