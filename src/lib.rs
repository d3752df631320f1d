pub mod api;
pub mod fetch_worker;
pub mod logger;
pub mod models;
pub mod preferences;
pub mod selection;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use api::{QuizApi, DEFAULT_SERVER};
pub use fetch_worker::spawn_fetch_worker;
pub use models::{
    AnswerOption, AppState, Category, Difficulty, Feedback, FetchRequest, FetchResponse, Question,
};
pub use selection::{assemble_pool, filter_by_difficulty, gather_candidates, pick};
pub use session::{grade, handle_filters_input, handle_quiz_input, PracticeSession};
pub use ui::{draw_screen, Spinner, Theme};
pub use utils::{render_markup, truncate_string};
