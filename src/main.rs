use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc;
use std::time::Duration;

use quiztrepreneur::{
    handle_filters_input, handle_quiz_input, logger, preferences, spawn_fetch_worker, ui, AppState,
    FetchRequest, PracticeSession, Spinner,
};

fn main() -> io::Result<()> {
    logger::init();

    // The stored display preference is read once at startup; it only picks
    // an initial background color that is logged and then discarded. The
    // quiz screen keeps its own independent mode toggle.
    let preference = preferences::read_display_preference(&preferences::preferences_path());
    let background = preferences::initial_background(preference.as_deref());
    logger::log(&format!(
        "Stored display preference {:?} -> initial background {:?}",
        preference, background
    ));

    let (request_tx, request_rx) = mpsc::channel();
    let (response_tx, response_rx) = mpsc::channel();
    let _worker = spawn_fetch_worker(response_tx, request_rx);
    request_tx.send(FetchRequest::Categories).ok();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = PracticeSession::new(Some(request_tx));
    let mut app_state = AppState::Filters;
    let mut spinner = Spinner::new();

    loop {
        while let Ok(response) = response_rx.try_recv() {
            session.apply_response(response, &mut app_state);
        }

        terminal.draw(|f| ui::draw_screen(f, &session, &app_state, &spinner))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char('m') => session.dark_mode = !session.dark_mode,
                    _ => match app_state {
                        AppState::Filters => {
                            handle_filters_input(&mut session, key, &mut app_state)
                        }
                        AppState::Quiz => handle_quiz_input(&mut session, key, &mut app_state),
                    },
                }
            }
        } else if session.fetch_in_progress {
            spinner.tick();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
