use serde::Deserialize;

/// A labeled grouping of questions, provided by the remote service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    pub title: String,
}

/// One multiple-choice option. `option_text` may carry inline HTML markup;
/// exactly one option per question is expected to be flagged correct, but
/// the service does not enforce that.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnswerOption {
    pub option_text: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "E")]
    Easy,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "H")]
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// A quiz question as served by the remote API. Immutable once fetched;
/// owned by the session for the duration of one question cycle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question_source: String,
    pub category: Category,
    pub question_text: String,
    pub options: Vec<AnswerOption>,
    pub explanation: String,
    pub difficulty: Difficulty,
}

/// Result of grading a submitted answer. `text` keeps the original's
/// markup-bearing feedback string and is rendered through `utils::markup`.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub correct: bool,
    pub text: String,
}

/// Requests handled by the fetch worker thread.
#[derive(Debug)]
pub enum FetchRequest {
    Categories,
    Practice {
        categories: Vec<String>,
        difficulty: Option<Difficulty>,
    },
}

/// Replies from the fetch worker. A `Practice(None)` means the candidate
/// pool was empty, which is indistinguishable from a failed fetch by design.
#[derive(Debug)]
pub enum FetchResponse {
    Categories(Vec<Category>),
    Practice(Option<Question>),
}

/// Which panel owns key input.
#[derive(Debug, PartialEq)]
pub enum AppState {
    Filters,
    Quiz,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_wire_form() {
        let d: Difficulty = serde_json::from_str("\"E\"").unwrap();
        assert_eq!(d, Difficulty::Easy);
        let d: Difficulty = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
        let d: Difficulty = serde_json::from_str("\"H\"").unwrap();
        assert_eq!(d, Difficulty::Hard);
        assert!(serde_json::from_str::<Difficulty>("\"X\"").is_err());
    }

    #[test]
    fn test_difficulty_labels() {
        assert_eq!(Difficulty::Easy.label(), "Easy");
        assert_eq!(Difficulty::Medium.label(), "Medium");
        assert_eq!(Difficulty::Hard.label(), "Hard");
    }

    #[test]
    fn test_question_deserialization() {
        let json = r#"{
            "id": 7,
            "question_source": "textbook",
            "category": {"title": "Finance"},
            "question_text": "What is <strong>equity</strong>?",
            "options": [
                {"option_text": "Ownership value", "correct": true},
                {"option_text": "Debt", "correct": false}
            ],
            "explanation": "Equity is the residual claim on assets.",
            "difficulty": "M"
        }"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id, 7);
        assert_eq!(q.category.title, "Finance");
        assert_eq!(q.options.len(), 2);
        assert!(q.options[0].correct);
        assert_eq!(q.difficulty, Difficulty::Medium);
    }

    #[test]
    fn test_category_list_deserialization() {
        let json = r#"[{"title":"Finance"},{"title":"Tax"}]"#;
        let cats: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[1].title, "Tax");
    }
}
