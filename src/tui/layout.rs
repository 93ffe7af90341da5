use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::domain::{FeedItem, FeedState};
use crate::tui::app::TuiApp;

pub fn render(frame: &mut Frame, app: &TuiApp, state: &FeedState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Feed
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_feed(frame, app, state, chunks[0]);
    render_status_bar(frame, app, state, chunks[1]);

    if let Some(message) = state.error_message() {
        render_error(frame, message);
    }
}

fn render_feed(frame: &mut Frame, app: &TuiApp, state: &FeedState, area: Rect) {
    let title = if state.last_page > 0 {
        format!(
            " Practice logs (page {}/{}) ",
            state.current_page, state.last_page
        )
    } else {
        " Practice logs ".to_string()
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if state.items.is_empty() {
        let text = if state.is_loading {
            "Loading..."
        } else {
            "No practice logs. Press l to load."
        };
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state.items.iter().map(item_entry).collect();
    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Cyan)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn item_entry(item: &FeedItem) -> ListItem<'static> {
    let mut headline = vec![Span::styled(
        item.display_title().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(subtitle) = item.display_subtitle() {
        headline.push(Span::raw(format!("  {}", subtitle)));
    }

    let mut meta = vec![item.player_name.clone()];
    if let Some(duration) = item.duration_label() {
        meta.push(duration);
    }
    meta.push(item.views_label());
    meta.push(item.elapsed_label());

    ListItem::new(vec![
        Line::from(headline),
        Line::styled(
            format!("  {}", meta.join(" · ")),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, state: &FeedState, area: Rect) {
    let mut text = if state.is_loading && !state.items.is_empty() {
        "Loading more... ".to_string()
    } else {
        String::new()
    };
    text.push_str("j/k move  R refresh  q quit");
    if app.is_scrolled() {
        text.push_str("  g top");
    }

    let status = Paragraph::new(text).style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(status, area);
}

fn render_error(frame: &mut Frame, message: &str) {
    let area = centered_rect(50, 5, frame.area());
    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let paragraph = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::styled("Enter to dismiss", Style::default().fg(Color::DarkGray)),
    ])
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
