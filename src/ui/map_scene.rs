//! World map: one portal per chapter slot, plus the badge shelf.

use crate::constants::MAX_CHAPTERS;
use crate::core::engine::Engine;
use crate::ui::UiState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, engine: &Engine, ui: &UiState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    draw_portals(frame, engine, ui, chunks[0]);
    draw_badges(frame, engine, chunks[1]);
}

fn draw_portals(frame: &mut Frame, engine: &Engine, ui: &UiState, area: Rect) {
    let items: Vec<ListItem> = (0..MAX_CHAPTERS)
        .map(|index| portal_item(engine, ui, index))
        .collect();

    let title = if engine.is_loading() {
        " World Map (loading…) "
    } else {
        " World Map "
    };

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);
}

fn portal_item(engine: &Engine, ui: &UiState, index: usize) -> ListItem<'static> {
    let complete = engine.flags()[index];
    let unlocked = engine.can_open(index);
    let chapter = engine.content().chapter(index);

    let (icon, label, color) = match (chapter, unlocked, complete) {
        (None, _, _) => ("░", "no content yet".to_string(), Color::DarkGray),
        (Some(c), true, true) => ("✓", c.title.clone(), Color::Green),
        (Some(c), true, false) => ("◆", c.title.clone(), Color::Cyan),
        (Some(_), false, _) => ("▒", "locked".to_string(), Color::DarkGray),
    };

    let selected = ui.cursor == index;
    let mut style = Style::default().fg(color);
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }

    ListItem::new(Line::from(vec![
        Span::styled(format!(" {icon} "), style),
        Span::styled(format!("Chapter {:>2}  {label}", index + 1), style),
    ]))
}

fn draw_badges(frame: &mut Frame, engine: &Engine, area: Rect) {
    let meta = engine.meta();
    let mut lines: Vec<Line> = meta
        .badges
        .iter()
        .map(|badge| Line::from(Span::styled(format!("🏅 {badge}"), Style::default().fg(Color::Yellow))))
        .collect();
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No badges yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "↑/↓ select · Enter open · q quit",
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Badges "));
    frame.render_widget(panel, area);
}
