//! Challenge panel: topic quizzes and the boss gauntlet share a renderer.

use crate::content::Challenge;
use crate::core::engine::{Engine, ViewMode};
use crate::ui::UiState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, engine: &Engine, ui: &UiState, area: Rect) {
    let snapshot = engine.snapshot();
    let is_boss = snapshot.mode == ViewMode::Boss;

    let Some(challenge) = engine.current_challenge() else {
        if is_boss {
            draw_unguarded_boss(frame, area);
        }
        return;
    };

    let title = challenge_title(engine, is_boss);
    let mut lines: Vec<Line> = Vec::new();

    if is_boss {
        if let Some(boss) = engine.current_chapter().and_then(|c| c.boss.as_ref()) {
            lines.push(Line::from(Span::styled(
                boss.intro.clone(),
                Style::default().fg(Color::Red),
            )));
            lines.push(Line::from(""));
        }
    }

    lines.push(Line::from(Span::styled(
        challenge.prompt().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    match challenge {
        Challenge::MultipleChoice { options, .. } => {
            for (index, option) in options.iter().enumerate() {
                let style = if index == ui.cursor {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(
                    format!("  {}. {option}", index + 1),
                    style,
                )));
            }
            lines.push(Line::from(""));
            lines.push(hint_line("↑/↓ choose · Enter submit · Esc back to map"));
        }
        Challenge::FillInBlank { .. } => {
            lines.push(Line::from(vec![
                Span::raw("  > "),
                Span::styled(ui.text.clone(), Style::default().fg(Color::Cyan)),
                Span::styled("▌", Style::default().fg(Color::DarkGray)),
            ]));
            lines.push(Line::from(""));
            lines.push(hint_line("type the answer · Enter submit · Esc back to map"));
        }
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(panel, area);
}

fn challenge_title(engine: &Engine, is_boss: bool) -> String {
    let snapshot = engine.snapshot();
    if is_boss {
        let boss = engine.current_chapter().and_then(|c| c.boss.as_ref());
        let total = boss.map(|b| b.questions.len()).unwrap_or(0);
        let current = snapshot.boss_question_index.map(|q| q + 1).unwrap_or(0);
        let name = boss.map(|b| b.title.as_str()).unwrap_or("Boss");
        format!(" ⚔ {name} · question {current}/{total} ")
    } else {
        let topic = engine.current_topic().map(|t| t.title.as_str()).unwrap_or("");
        format!(" Quiz · {topic} ")
    }
}

/// Shown when the chapter walk reaches the boss slot but no boss was
/// authored for the chapter.
fn draw_unguarded_boss(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Boss not configured.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::raw("Nothing bars the way out of this chapter.")),
        Line::from(""),
        hint_line("Enter: claim the chapter · Esc: back to map"),
    ];
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" ⚔ Boss "));
    frame.render_widget(panel, area);
}

fn hint_line(hint: &str) -> Line<'static> {
    Line::from(Span::styled(
        hint.to_string(),
        Style::default().fg(Color::DarkGray),
    ))
}
