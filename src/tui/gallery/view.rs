//! 表情ギャラリーの view（描画）

use super::app::{Focus, Model};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap};

/// プレビューの高さ
const PREVIEW_HEIGHT: u16 = 9;

/// 画面を描画
pub fn view(f: &mut Frame, model: &Model) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // カテゴリタブ
            Constraint::Length(3), // 検索欄
            Constraint::Min(3),    // 表情一覧
            Constraint::Length(1), // ヘルプ
        ])
        .split(f.area());

    view_tabs(f, model, chunks[0]);
    view_search(f, model, chunks[1]);
    view_list(f, model, chunks[2]);
    view_help(f, model, chunks[3]);

    if model.preview.is_some() {
        view_preview(f, model);
    }
}

/// カテゴリタブ
fn view_tabs(f: &mut Frame, model: &Model, area: Rect) {
    let titles: Vec<&str> = model.categories.iter().map(|c| c.label.as_str()).collect();
    let tabs = Tabs::new(titles)
        .select(model.category_index)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, area);
}

/// 検索欄
fn view_search(f: &mut Frame, model: &Model, area: Rect) {
    let (text, border) = match model.focus {
        Focus::Search => (format!("{}▏", model.search_input), Color::Yellow),
        Focus::List if model.query.is_empty() => {
            ("Press / to search".to_string(), Color::DarkGray)
        }
        Focus::List => (model.query.clone(), Color::DarkGray),
    };

    let search = Paragraph::new(text).block(
        Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(search, area);
}

/// 表情一覧
fn view_list(f: &mut Frame, model: &Model, area: Rect) {
    let visible = model.visible();
    let title = format!(" Emoji ({}/{}) ", visible.len(), model.records.len());
    let block = Block::default().title(title).borders(Borders::ALL);

    if visible.is_empty() {
        let empty = Paragraph::new("\n  No matching emoji")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|r| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("  {}", r.name)),
                Span::styled(
                    format!("  {}", r.category_name),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Green),
        )
        .highlight_symbol("> ");

    let mut state = model.list_state.clone();
    f.render_stateful_widget(list, area, &mut state);
}

/// ヘルプ
fn view_help(f: &mut Frame, model: &Model, area: Rect) {
    let text = if model.preview.is_some() {
        " Esc/Enter/q: close"
    } else {
        match model.focus {
            Focus::Search => " Enter: search | Esc: cancel",
            Focus::List => " Tab: category | up/down: move | /: search | Enter: preview | q: quit",
        }
    };
    let help = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

/// プレビュー
fn view_preview(f: &mut Frame, model: &Model) {
    let Some(record) = &model.preview else {
        return;
    };

    let area = preview_rect(f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            record.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("分类：{}", record.category_name)),
        Line::from(""),
        Line::from(Span::styled(
            record.image.clone(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            record.id.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let preview = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title(" Preview ").borders(Borders::ALL));
    f.render_widget(preview, area);
}

/// プレビュー領域（画面中央）
pub fn preview_rect(area: Rect) -> Rect {
    let width = (area.width * 3 / 5).max(40).min(area.width);
    let height = PREVIEW_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DisplayRecord;
    use ratatui::backend::TestBackend;

    fn record(id: &str, name: &str) -> DisplayRecord {
        DisplayRecord {
            id: id.to_string(),
            name: name.to_string(),
            image: format!("https://cdn.example.com/{id}.png"),
            category: "blobcat".to_string(),
            category_name: "Blob Cat".to_string(),
        }
    }

    fn render(model: &Model) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| view(f, model)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_records() {
        let model = Model::new(vec![record("blobcat-Heart", "Heart")]);
        let screen = render(&model);
        assert!(screen.contains("Heart"));
        assert!(screen.contains("Emoji (1/1)"));
    }

    #[test]
    fn renders_no_results_state() {
        let mut model = Model::new(vec![record("blobcat-Heart", "Heart")]);
        model.query = "xyz".to_string();
        let screen = render(&model);
        assert!(screen.contains("No matching emoji"));
    }

    #[test]
    fn renders_preview_overlay() {
        let mut model = Model::new(vec![record("blobcat-Heart", "Heart")]);
        model.preview = Some(record("blobcat-Heart", "Heart"));
        let screen = render(&model);
        assert!(screen.contains("Preview"));
        assert!(screen.contains("blobcat-Heart"));
    }

    #[test]
    fn preview_rect_is_centered_and_clamped() {
        let rect = preview_rect(Rect::new(0, 0, 100, 30));
        assert_eq!(rect, Rect::new(20, 10, 60, PREVIEW_HEIGHT));

        let small = preview_rect(Rect::new(0, 0, 30, 5));
        assert_eq!(small, Rect::new(0, 0, 30, 5));
    }
}
