//! TETRIS STACK - piece queue and reserve stack simulator
//!
//! A lookahead queue of upcoming pieces, optionally backed by a reserve stack,
//! driven from a numbered action menu in the terminal.

mod error;
mod factory;
mod game;
mod input;
mod menu;
mod mode;
mod piece;
mod queue;
mod reserve;
mod session;
mod settings;
mod stats;
mod tetromino;
mod ui;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use menu::{Menu, MenuAction};
use ratatui::{Terminal, backend::CrosstermBackend};
use session::{Session, SessionEvent};
use settings::Settings;
use std::io::{self, stdout};
use tracing_subscriber::EnvFilter;

/// Application state
enum AppState {
    Menu(Menu),
    Playing(Session),
}

/// Get the temp directory for logs, creating it if needed
fn app_temp_dir() -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("tetris-stack");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    let session_id: u32 = rand::random();

    // Stdout belongs to the TUI, so logs go to a file
    let log_dir = app_temp_dir();
    let log_file = format!("{:08x}.log", session_id);
    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tetris_stack=debug")),
        )
        .with_ansi(false)
        .init();

    tracing::info!(
        "TETRIS STACK starting up, session={:08x}, log={}",
        session_id,
        log_dir.join(&log_file).display()
    );

    let mut settings = Settings::load();

    // Setup terminal
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    match &result {
        Ok(Some(session)) => {
            let game = session.game();
            let stats = session.stats();
            println!("\nLeaving the Tetris Stack simulator.");
            println!("Mode: {}", game.mode().name());
            println!("Pieces issued: {}", game.pieces_issued());
            println!(
                "Played: {} | Inserted: {} | Reserved: {} | Used: {} | Rejected: {}",
                stats.played, stats.inserted, stats.reserved, stats.used, stats.rejected
            );
        }
        Ok(None) => {
            println!("\nLeaving the Tetris Stack simulator.");
        }
        Err(e) => {
            tracing::error!("terminal error: {}", e);
        }
    }

    result.map(|_| ())
}

/// Drive menus and sessions until the player quits. Returns the last session
/// played, for the exit summary.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &mut Settings,
) -> io::Result<Option<Session>> {
    let mut state = AppState::Menu(Menu::new());
    let mut last_session: Option<Session> = None;

    loop {
        terminal.draw(|frame| match &state {
            AppState::Menu(menu) => ui::render_menu(frame, menu),
            AppState::Playing(session) => ui::render_session(frame, session),
        })?;

        let Event::Key(key) = event::read()? else {
            // Resize and friends just trigger a redraw
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match &mut state {
            AppState::Menu(menu) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    return Ok(last_session);
                }
                match key.code {
                    KeyCode::Up => menu.move_up(),
                    KeyCode::Down => menu.move_down(),
                    KeyCode::Left => menu.adjust_left(settings),
                    KeyCode::Right => menu.adjust_right(settings),
                    KeyCode::Esc => menu.go_back(settings),
                    KeyCode::Enter => {
                        let Some(action) = menu.select().cloned() else {
                            continue;
                        };
                        match action {
                            MenuAction::StartGame(mode) => {
                                state = AppState::Playing(Session::new(mode, settings));
                            }
                            MenuAction::GoToScreen(screen) => menu.go_to(screen, settings),
                            MenuAction::Back => menu.go_back(settings),
                            MenuAction::Quit => return Ok(last_session),
                            MenuAction::SaveSettings => {
                                menu.notice = Some(match settings.save() {
                                    Ok(()) => "Settings saved".to_string(),
                                    Err(e) => {
                                        tracing::warn!("Could not save settings: {}", e);
                                        e
                                    }
                                });
                            }
                        }
                    }
                    _ => {}
                }
            }
            AppState::Playing(session) => match session.handle_key(key) {
                SessionEvent::Continue => {}
                SessionEvent::Exit => {
                    let finished = std::mem::replace(&mut state, AppState::Menu(Menu::new()));
                    if let AppState::Playing(session) = finished {
                        last_session = Some(session);
                    }
                }
                SessionEvent::Quit => {
                    let finished = std::mem::replace(&mut state, AppState::Menu(Menu::new()));
                    if let AppState::Playing(session) = finished {
                        return Ok(Some(session));
                    }
                    return Ok(last_session);
                }
            },
        }
    }
}
