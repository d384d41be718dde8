pub mod challenge_scene;
pub mod lesson_scene;
pub mod map_scene;

use crate::core::engine::{Engine, ViewMode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Transient input state owned by the event loop: the cursor doubles as
/// the map selection and the highlighted quiz option, the text buffer
/// holds fill-in-blank input.
#[derive(Debug, Default)]
pub struct UiState {
    pub cursor: usize,
    pub text: String,
}

impl UiState {
    /// Clear input when the view changes so stale answers never carry over.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.text.clear();
    }
}

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, engine: &Engine, ui: &UiState) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(6),
        ])
        .split(size);

    draw_header(frame, engine, chunks[0]);

    match engine.snapshot().mode {
        ViewMode::Map => map_scene::draw(frame, engine, ui, chunks[1]),
        ViewMode::Lesson => lesson_scene::draw(frame, engine, chunks[1]),
        ViewMode::Quiz | ViewMode::Boss => challenge_scene::draw(frame, engine, ui, chunks[1]),
    }

    draw_event_log(frame, engine, chunks[2]);
}

fn draw_header(frame: &mut Frame, engine: &Engine, area: Rect) {
    let meta = engine.meta();
    let streak_style = if meta.streak >= crate::constants::STREAK_BONUS_THRESHOLD {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let line = Line::from(vec![
        Span::styled("✦ ", Style::default().fg(Color::Magenta)),
        Span::styled(format!("{} XP", meta.xp), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(format!("● {} coins", meta.coins), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(format!("🔥 streak {}", meta.streak), streak_style),
        Span::raw("  "),
        Span::styled(
            format!("🏅 {} badges", meta.badges.len()),
            Style::default().fg(Color::Green),
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Lorequest "),
    );
    frame.render_widget(header, area);
}

fn draw_event_log(frame: &mut Frame, engine: &Engine, area: Rect) {
    let lines: Vec<Line> = engine
        .events()
        .take(area.height.saturating_sub(2) as usize)
        .map(|event| Line::from(Span::raw(event.to_string())))
        .collect();

    let log = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Events ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(log, area);
}
