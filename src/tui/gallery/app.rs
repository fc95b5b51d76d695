//! 表情ギャラリー TUI の Elm Architecture ベースのアプリケーション構造
//!
//! - `Model`: 現在のカテゴリ・検索語・選択・プレビューを保持する UI 状態
//! - `Msg`: アプリケーションへのメッセージ
//! - `update`: メッセージに応じた状態更新
//!
//! 絞り込み自体は `filter::filter_records` に委ね、Model は条件だけを持つ。

use super::view::preview_rect;
use crate::catalog::{category_keys, CategoryEntry, DisplayRecord};
use crate::filter::{filter_records, CategoryFilter};
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::ListState;

// ============================================================================
// Focus
// ============================================================================

/// 入力フォーカス
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    List,
    Search,
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 次のカテゴリへ
    NextCategory,
    /// 前のカテゴリへ
    PrevCategory,
    /// 選択を上へ
    MoveUp,
    /// 選択を下へ
    MoveDown,
    /// 検索欄にフォーカス移動
    SearchFocus,
    /// 検索欄への文字入力
    SearchInput(char),
    /// 検索欄の文字削除
    SearchBackspace,
    /// 検索語を確定
    SearchSubmit,
    /// 確定せずに検索欄を離れる
    SearchCancel,
    /// 選択中の表情をプレビュー
    OpenPreview,
    /// プレビューを閉じる
    ClosePreview,
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
pub struct Model {
    /// 平坦化済みレコード（セッション中は不変）
    pub records: Vec<DisplayRecord>,
    /// カテゴリナビゲーション（先頭はセンチネル）
    pub categories: Vec<CategoryEntry>,
    /// 選択中のカテゴリ
    pub category_index: usize,
    /// 確定済みの検索語
    pub query: String,
    /// 検索欄の入力中テキスト
    pub search_input: String,
    pub focus: Focus,
    /// 絞り込み結果上の選択位置
    pub list_state: ListState,
    /// プレビュー中の表情
    pub preview: Option<DisplayRecord>,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    /// 新しいモデルを作成
    pub fn new(records: Vec<DisplayRecord>) -> Self {
        let categories = category_keys(&records);
        let mut list_state = ListState::default();
        if !records.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            records,
            categories,
            category_index: 0,
            query: String::new(),
            search_input: String::new(),
            focus: Focus::default(),
            list_state,
            preview: None,
            should_quit: false,
        }
    }

    /// 現在のカテゴリ条件
    pub fn category(&self) -> &CategoryFilter {
        &self.categories[self.category_index].filter
    }

    /// 現在の条件で絞り込んだ表情
    pub fn visible(&self) -> Vec<&DisplayRecord> {
        filter_records(&self.records, self.category(), &self.query)
    }

    /// 選択中の表情
    pub fn selected_record(&self) -> Option<&DisplayRecord> {
        let idx = self.list_state.selected()?;
        self.visible().get(idx).copied()
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        if self.preview.is_some() {
            return match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Msg::ClosePreview),
                _ => None,
            };
        }

        match self.focus {
            Focus::Search => match key {
                KeyCode::Enter => Some(Msg::SearchSubmit),
                KeyCode::Esc => Some(Msg::SearchCancel),
                KeyCode::Backspace => Some(Msg::SearchBackspace),
                KeyCode::Char(c) => Some(Msg::SearchInput(c)),
                _ => None,
            },
            Focus::List => match key {
                KeyCode::Char('q') => Some(Msg::Quit),
                KeyCode::Tab | KeyCode::Right => Some(Msg::NextCategory),
                KeyCode::BackTab | KeyCode::Left => Some(Msg::PrevCategory),
                KeyCode::Up | KeyCode::Char('k') => Some(Msg::MoveUp),
                KeyCode::Down | KeyCode::Char('j') => Some(Msg::MoveDown),
                KeyCode::Char('/') => Some(Msg::SearchFocus),
                KeyCode::Enter => Some(Msg::OpenPreview),
                _ => None,
            },
        }
    }

    /// マウス入力をメッセージに変換（プレビュー外のクリックで閉じる）
    pub fn mouse_to_msg(&self, mouse: MouseEvent, area: Rect) -> Option<Msg> {
        if self.preview.is_none() {
            return None;
        }
        match mouse.kind {
            MouseEventKind::Down(_)
                if !preview_rect(area).contains(Position::new(mouse.column, mouse.row)) =>
            {
                Some(Msg::ClosePreview)
            }
            _ => None,
        }
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
        }
        Msg::NextCategory => {
            model.category_index = (model.category_index + 1) % model.categories.len();
            reset_selection(model);
        }
        Msg::PrevCategory => {
            let len = model.categories.len();
            model.category_index = (model.category_index + len - 1) % len;
            reset_selection(model);
        }
        Msg::MoveUp => {
            if let Some(idx) = model.list_state.selected() {
                model.list_state.select(Some(idx.saturating_sub(1)));
            }
        }
        Msg::MoveDown => {
            let len = model.visible().len();
            if let Some(idx) = model.list_state.selected() {
                if idx + 1 < len {
                    model.list_state.select(Some(idx + 1));
                }
            }
        }
        Msg::SearchFocus => {
            model.focus = Focus::Search;
            model.search_input = model.query.clone();
        }
        Msg::SearchInput(c) => {
            model.search_input.push(c);
        }
        Msg::SearchBackspace => {
            model.search_input.pop();
        }
        Msg::SearchSubmit => {
            model.focus = Focus::List;
            model.query = model.search_input.trim().to_string();
            reset_selection(model);
        }
        Msg::SearchCancel => {
            model.focus = Focus::List;
            model.search_input = model.query.clone();
        }
        Msg::OpenPreview => {
            model.preview = model.selected_record().cloned();
        }
        Msg::ClosePreview => {
            model.preview = None;
        }
    }
}

/// 絞り込み条件の変更後、選択を先頭に戻す
fn reset_selection(model: &mut Model) {
    let selected = if model.visible().is_empty() {
        None
    } else {
        Some(0)
    };
    model.list_state.select(selected);
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
