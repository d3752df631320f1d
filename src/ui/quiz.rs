use crate::session::PracticeSession;
use crate::ui::spinner::Spinner;
use crate::ui::theme::Theme;
use crate::utils::render_markup;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// The active question with its radio options, feedback, and explanation;
/// falls back to the epigraph / not-found line when no question is shown.
pub fn draw_question(
    f: &mut Frame,
    area: Rect,
    session: &PracticeSession,
    focused: bool,
    spinner: &Spinner,
    theme: &Theme,
) {
    let border_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.muted)
    };

    let content = match &session.question {
        Some(question) => {
            let mut text = Text::default();
            for line in render_markup(&question.question_text) {
                text.push_line(line.style(Style::default().add_modifier(Modifier::BOLD)));
            }
            text.push_line(Line::from(""));

            for (i, option) in question.options.iter().enumerate() {
                let chosen = session.selected_option.as_deref() == Some(option.option_text.as_str());
                let marker = if chosen { "(•) " } else { "( ) " };
                let row_style = if i == session.option_cursor && focused {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.text)
                };
                let mut spans = vec![Span::styled(marker.to_string(), row_style)];
                for line in render_markup(&option.option_text) {
                    spans.extend(line.spans);
                }
                text.push_line(Line::from(spans).style(row_style));
            }

            if let Some(feedback) = &session.feedback {
                let color = if feedback.correct {
                    theme.correct
                } else {
                    theme.incorrect
                };
                text.push_line(Line::from(""));
                for line in render_markup(&feedback.text) {
                    text.push_line(line.style(Style::default().fg(color)));
                }
            }

            if session.show_explanation && !question.explanation.is_empty() {
                text.push_line(Line::from(""));
                text.push_line(Line::from(Span::styled(
                    "Explanation:",
                    Style::default().fg(theme.info).add_modifier(Modifier::BOLD),
                )));
                for line in render_markup(&question.explanation) {
                    text.push_line(line.style(Style::default().fg(theme.text)));
                }
            }

            if session.fetch_in_progress {
                text.push_line(Line::from(""));
                text.push_line(loading_line(spinner, theme));
            }

            text
        }
        None => {
            let mut text = Text::default();
            if !session.requested_practice {
                text.push_line(Line::from(""));
                text.push_line(Line::from(Span::styled(
                    "\u{201c}Most of what I learned as an entrepreneur was by trial and error.\u{201d}",
                    Style::default()
                        .fg(theme.text)
                        .add_modifier(Modifier::ITALIC),
                )));
                text.push_line(Line::from(Span::styled(
                    "— Gordon Moore",
                    Style::default().fg(theme.muted),
                )));
                text.push_line(Line::from(""));
            }
            if session.fetch_in_progress {
                text.push_line(loading_line(spinner, theme));
            } else if session.requested_practice {
                text.push_line(Line::from(Span::styled(
                    "No questions found or loading...",
                    Style::default().fg(theme.muted),
                )));
            }
            text
        }
    };

    let panel = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Question"),
        );
    f.render_widget(panel, area);
}

fn loading_line(spinner: &Spinner, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(spinner.frame().to_string(), Style::default().fg(theme.info)),
        Span::styled(" fetching questions", Style::default().fg(theme.muted)),
    ])
}
