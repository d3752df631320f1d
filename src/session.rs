use crate::logger;
use crate::models::{
    AppState, Category, Difficulty, Feedback, FetchRequest, FetchResponse, Question,
};
use crate::utils::{markup::plain_text, truncate_string};
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::mpsc::Sender;

/// All mutable UI state. Selections persist across question cycles; only
/// the per-question fields (chosen option, feedback, explanation
/// visibility) are cleared on "next question".
#[derive(Debug)]
pub struct PracticeSession {
    pub categories: Vec<Category>,
    pub selected_categories: Vec<String>,
    pub selected_difficulty: Option<Difficulty>,
    /// Cursor over the filter rows; row 0 is "All topics".
    pub filter_cursor: usize,
    pub question: Option<Question>,
    /// Cursor over the option rows of the current question.
    pub option_cursor: usize,
    /// The radio value: the chosen option's raw `option_text`.
    pub selected_option: Option<String>,
    pub feedback: Option<Feedback>,
    pub show_explanation: bool,
    /// The session's own display toggle; independent of the stored
    /// preference and never persisted.
    pub dark_mode: bool,
    pub fetch_in_progress: bool,
    /// Distinguishes "never asked for practice" from "asked and got none".
    pub requested_practice: bool,
    pub fetch_tx: Option<Sender<FetchRequest>>,
}

impl PracticeSession {
    pub fn new(fetch_tx: Option<Sender<FetchRequest>>) -> Self {
        Self {
            categories: Vec::new(),
            selected_categories: Vec::new(),
            selected_difficulty: None,
            filter_cursor: 0,
            question: None,
            option_cursor: 0,
            selected_option: None,
            feedback: None,
            show_explanation: false,
            dark_mode: false,
            fetch_in_progress: false,
            requested_practice: false,
            fetch_tx,
        }
    }

    /// Membership toggle; selection order of the remaining entries is
    /// preserved, duplicates are impossible.
    pub fn toggle_category(&mut self, title: &str) {
        if let Some(pos) = self.selected_categories.iter().position(|c| c == title) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(title.to_string());
        }
    }

    /// "All topics" is checked exactly when the selection count equals the
    /// category count (duplicates are prevented, so the counts imply set
    /// equality).
    pub fn all_selected(&self) -> bool {
        self.selected_categories.len() == self.categories.len()
    }

    pub fn toggle_select_all(&mut self) {
        if self.all_selected() {
            self.selected_categories.clear();
        } else {
            self.selected_categories = self
                .categories
                .iter()
                .map(|category| category.title.clone())
                .collect();
        }
    }

    /// All -> Easy -> Medium -> Hard -> All.
    pub fn cycle_difficulty(&mut self) {
        self.selected_difficulty = match self.selected_difficulty {
            None => Some(Difficulty::Easy),
            Some(Difficulty::Easy) => Some(Difficulty::Medium),
            Some(Difficulty::Medium) => Some(Difficulty::Hard),
            Some(Difficulty::Hard) => None,
        };
    }

    /// "Give me practice!": re-fetches every selected category and
    /// re-randomizes. An in-flight request is not cancelled; whichever
    /// reply lands last wins.
    pub fn request_practice(&mut self) {
        self.requested_practice = true;
        self.fetch_in_progress = true;
        if let Some(tx) = &self.fetch_tx {
            let request = FetchRequest::Practice {
                categories: self.selected_categories.clone(),
                difficulty: self.selected_difficulty,
            };
            tx.send(request).ok();
        }
    }

    /// Grade the chosen option against the current question and reveal the
    /// explanation. Re-submitting without changing the selection produces
    /// the same feedback and keeps the explanation visible.
    pub fn submit(&mut self) {
        if let Some(question) = &self.question {
            let chosen = self.selected_option.as_deref().unwrap_or("");
            self.feedback = Some(grade(question, chosen));
            self.show_explanation = true;
        }
    }

    /// Clear the per-question state and re-enter the practice request.
    pub fn next_question(&mut self) {
        self.selected_option = None;
        self.feedback = None;
        self.show_explanation = false;
        self.request_practice();
    }

    /// Apply a worker reply. Replies are drained in arrival order, so a
    /// late reply from a superseded request is overwritten by the next one.
    pub fn apply_response(&mut self, response: FetchResponse, app_state: &mut AppState) {
        match response {
            FetchResponse::Categories(categories) => {
                logger::log(&format!("Applied {} categories", categories.len()));
                self.categories = categories;
                self.filter_cursor = self.filter_cursor.min(self.categories.len());
            }
            FetchResponse::Practice(question) => {
                self.fetch_in_progress = false;
                self.option_cursor = 0;
                match &question {
                    Some(q) => {
                        logger::log(&format!(
                            "Presenting question {} ({})",
                            q.id,
                            truncate_string(&plain_text(&q.question_text), 60)
                        ));
                        *app_state = AppState::Quiz;
                    }
                    None => {
                        logger::log("Practice request produced no candidates");
                        *app_state = AppState::Filters;
                    }
                }
                self.question = question;
            }
        }
    }
}

/// Markup-sensitive exact string equality against the option flagged
/// correct. A question with no flagged option (not enforced server-side)
/// grades as incorrect with no answer text to show.
pub fn grade(question: &Question, selected: &str) -> Feedback {
    match question.options.iter().find(|option| option.correct) {
        Some(correct) if correct.option_text == selected => Feedback {
            correct: true,
            text: "Correct!".to_string(),
        },
        Some(correct) => Feedback {
            correct: false,
            text: format!(
                "Incorrect. The correct answer is: <strong>{}</strong>",
                correct.option_text
            ),
        },
        None => Feedback {
            correct: false,
            text: "Incorrect.".to_string(),
        },
    }
}

pub fn handle_filters_input(
    session: &mut PracticeSession,
    key: KeyEvent,
    app_state: &mut AppState,
) {
    match key.code {
        KeyCode::Up => {
            session.filter_cursor = session.filter_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if session.filter_cursor < session.categories.len() {
                session.filter_cursor += 1;
            }
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if session.filter_cursor == 0 {
                session.toggle_select_all();
            } else if let Some(category) = session.categories.get(session.filter_cursor - 1) {
                let title = category.title.clone();
                session.toggle_category(&title);
            }
        }
        KeyCode::Char('d') => session.cycle_difficulty(),
        KeyCode::Char('p') => session.request_practice(),
        KeyCode::Tab => {
            if session.question.is_some() {
                *app_state = AppState::Quiz;
            }
        }
        _ => {}
    }
}

pub fn handle_quiz_input(session: &mut PracticeSession, key: KeyEvent, app_state: &mut AppState) {
    let option_count = session
        .question
        .as_ref()
        .map(|q| q.options.len())
        .unwrap_or(0);
    match key.code {
        KeyCode::Up => {
            session.option_cursor = session.option_cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            if session.option_cursor < option_count.saturating_sub(1) {
                session.option_cursor += 1;
            }
        }
        KeyCode::Char(' ') => {
            if let Some(question) = &session.question {
                if let Some(option) = question.options.get(session.option_cursor) {
                    session.selected_option = Some(option.option_text.clone());
                }
            }
        }
        KeyCode::Enter => session.submit(),
        KeyCode::Char('n') => {
            if session.show_explanation {
                session.next_question();
            }
        }
        KeyCode::Char('p') => session.request_practice(),
        KeyCode::Tab | KeyCode::Esc => *app_state = AppState::Filters,
        _ => {}
    }
}
