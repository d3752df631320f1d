pub mod filters;
pub mod layout;
pub mod quiz;
pub mod spinner;
pub mod theme;

pub use filters::draw_filters;
pub use layout::{calculate_filters_chunks, calculate_screen_chunks};
pub use quiz::draw_question;
pub use spinner::Spinner;
pub use theme::Theme;

use crate::models::AppState;
use crate::session::PracticeSession;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_screen(
    f: &mut Frame,
    session: &PracticeSession,
    app_state: &AppState,
    spinner: &Spinner,
) {
    let theme = Theme::for_mode(session.dark_mode);

    let background = Block::default().style(Style::default().bg(theme.background).fg(theme.text));
    f.render_widget(background, f.area());

    let chunks = calculate_screen_chunks(f.area());

    let title = Paragraph::new("Q U I Z T R E P R E N E U R")
        .style(
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks.header_area);

    draw_filters(
        f,
        chunks.filters_area,
        session,
        *app_state == AppState::Filters,
        &theme,
    );
    draw_question(
        f,
        chunks.question_area,
        session,
        *app_state == AppState::Quiz,
        spinner,
        &theme,
    );

    let help = Paragraph::new(help_line(session, app_state, &theme))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks.help_area);
}

fn help_line(session: &PracticeSession, app_state: &AppState, theme: &Theme) -> Line<'static> {
    let key = |k: &str| {
        Span::styled(
            k.to_string(),
            Style::default().fg(theme.info).add_modifier(Modifier::BOLD),
        )
    };
    let mut spans = Vec::new();
    match app_state {
        AppState::Filters => {
            spans.extend([
                key("↑/↓"),
                Span::from(" Navigate  "),
                key("Space"),
                Span::from(" Toggle  "),
                key("d"),
                Span::from(" Difficulty  "),
                key("p"),
                Span::from(" Give me practice!  "),
            ]);
            if session.question.is_some() {
                spans.extend([key("Tab"), Span::from(" Question  ")]);
            }
        }
        AppState::Quiz => {
            spans.extend([
                key("↑/↓"),
                Span::from(" Navigate  "),
                key("Space"),
                Span::from(" Choose  "),
                key("Enter"),
                Span::from(" Submit  "),
            ]);
            if session.show_explanation {
                spans.extend([key("n"), Span::from(" Next Question  ")]);
            }
            spans.extend([key("Tab"), Span::from(" Filters  ")]);
        }
    }
    let mode = if session.dark_mode { "LIGHT" } else { "DARK" };
    spans.extend([
        key("m"),
        Span::from(format!(" {} MODE  ", mode)),
        key("q"),
        Span::from(" Quit"),
    ]);
    Line::from(spans)
}
