//! Lesson panel: topic text, optional demo snippet, and chapter lore.

use crate::core::engine::Engine;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, engine: &Engine, area: Rect) {
    let Some(chapter) = engine.current_chapter() else {
        return;
    };
    let Some(topic) = engine.current_topic() else {
        return;
    };

    let has_demo = topic.demo.is_some();
    let constraints = if has_demo {
        vec![Constraint::Min(6), Constraint::Length(8)]
    } else {
        vec![Constraint::Min(6)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let snapshot = engine.snapshot();
    let position = match snapshot.topic_index {
        Some(index) => format!("{}/{}", index + 1, chapter.topic_count()),
        None => String::new(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            chapter.lore.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::raw(topic.lesson.clone())),
        Line::from(""),
    ];
    let hint = if topic.quiz.is_some() {
        "Enter: take the quiz · Esc: back to map"
    } else {
        "Enter: continue · Esc: back to map"
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))));

    let body = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} · {} ({position}) ", chapter.title, topic.title)),
    );
    frame.render_widget(body, chunks[0]);

    if let Some(demo) = &topic.demo {
        let mut demo_lines: Vec<Line> = demo
            .code
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(Color::Green))))
            .collect();
        demo_lines.push(Line::from(""));
        demo_lines.push(Line::from(Span::styled(
            demo.notes.clone(),
            Style::default().fg(Color::DarkGray),
        )));

        let demo_panel = Paragraph::new(demo_lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Demo "));
        frame.render_widget(demo_panel, chunks[1]);
    }
}
