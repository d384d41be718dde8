mod build_info;
mod constants;
// The re-exports in these modules exist for the library API; they are
// unused when the modules are compiled into the binary.
#[allow(unused_imports)]
mod content;
#[allow(unused_imports)]
mod core;
#[allow(unused_imports)]
mod progress;
mod ui;

use crate::content::{Challenge, ContentLoader};
use crate::core::answer::Answer;
use crate::core::engine::{Engine, ViewMode};
use crate::progress::persistence::{FileStore, NullStore, ProgressStore};
use crate::ui::UiState;
use constants::MAX_CHAPTERS;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut content_dir: Option<PathBuf> = None;

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "lorequest {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Lorequest - Terminal-Based Gamified Learning Game\n");
                println!("Usage: lorequest [content-dir]\n");
                println!("Arguments:");
                println!("  content-dir  Directory of chapter00.json..chapter09.json files");
                println!("               (defaults to the built-in chapter set)\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            path => content_dir = Some(PathBuf::from(path)),
        }
    }

    // Progress storage is best-effort: with no usable config directory the
    // game still runs, it just forgets everything on exit
    let store: Box<dyn ProgressStore> = match FileStore::new() {
        Ok(store) => Box::new(store),
        Err(_) => Box::new(NullStore),
    };

    // Chapter content loads in the background; the map shows a loading
    // state until all ten slots have resolved
    let loader = ContentLoader::spawn(content_dir);
    let mut engine = Engine::with_loader(loader, store);
    let mut ui = UiState::default();

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut engine, &mut ui);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    engine: &mut Engine,
    ui: &mut UiState,
) -> io::Result<()> {
    loop {
        engine.poll_content();
        terminal.draw(|frame| ui::draw_ui(frame, engine, ui))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(engine, ui, key) {
                    return Ok(());
                }
            }
        }
    }
}

/// Routes one key press to the engine. Returns true to quit.
fn handle_key(engine: &mut Engine, ui: &mut UiState, key: KeyEvent) -> bool {
    let before = view_signature(engine);

    match engine.snapshot().mode {
        ViewMode::Map => {
            if handle_map_key(engine, ui, key.code) {
                return true;
            }
        }
        ViewMode::Lesson => handle_lesson_key(engine, key.code),
        ViewMode::Quiz | ViewMode::Boss => handle_challenge_key(engine, ui, key.code),
    }

    // Any view change invalidates cursor position and typed text
    if view_signature(engine) != before {
        ui.reset();
    }
    false
}

fn handle_map_key(engine: &mut Engine, ui: &mut UiState, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return true,
        KeyCode::Up => ui.cursor = ui.cursor.saturating_sub(1),
        KeyCode::Down => ui.cursor = (ui.cursor + 1).min(MAX_CHAPTERS - 1),
        KeyCode::Enter => {
            engine.open_chapter(ui.cursor);
        }
        _ => {}
    }
    false
}

fn handle_lesson_key(engine: &mut Engine, code: KeyCode) {
    match code {
        KeyCode::Enter | KeyCode::Char('n') => {
            engine.advance_topic();
        }
        KeyCode::Esc => {
            engine.back_to_map();
        }
        _ => {}
    }
}

fn handle_challenge_key(engine: &mut Engine, ui: &mut UiState, code: KeyCode) {
    if code == KeyCode::Esc {
        engine.back_to_map();
        return;
    }

    // Decide on the challenge shape first so the engine borrow is released
    // before any mutating call
    let option_count = match engine.current_challenge() {
        Some(Challenge::MultipleChoice { options, .. }) => Some(options.len()),
        Some(Challenge::FillInBlank { .. }) => None,
        // Boss panel with no boss configured: Enter claims the chapter
        None => {
            if code == KeyCode::Enter {
                engine.win_boss();
            }
            return;
        }
    };

    match option_count {
        Some(count) => match code {
            KeyCode::Up => ui.cursor = ui.cursor.saturating_sub(1),
            KeyCode::Down => ui.cursor = (ui.cursor + 1).min(count.saturating_sub(1)),
            KeyCode::Enter => {
                engine.submit_answer(Some(Answer::Choice(ui.cursor)));
            }
            _ => {}
        },
        None => match code {
            KeyCode::Char(c) => ui.text.push(c),
            KeyCode::Backspace => {
                ui.text.pop();
            }
            KeyCode::Enter => {
                let submission = if ui.text.trim().is_empty() {
                    None
                } else {
                    Some(Answer::Text(ui.text.clone()))
                };
                engine.submit_answer(submission);
            }
            _ => {}
        },
    }
}

/// Cheap identity of the current view, used to reset input state.
fn view_signature(engine: &Engine) -> (ViewMode, Option<usize>, Option<usize>, Option<usize>) {
    let snapshot = engine.snapshot();
    (
        snapshot.mode,
        snapshot.chapter_index,
        snapshot.topic_index,
        snapshot.boss_question_index,
    )
}
