use crate::logger;
use crate::models::{Category, Question};

pub const DEFAULT_SERVER: &str = "https://quiztrepreneur.pythonanywhere.com";

/// Read-only client for the quiz service. Every failure mode at this
/// boundary (network error, non-2xx status, undecodable body) collapses to
/// an empty list; callers cannot tell "failed" from "nothing matched".
#[derive(Debug, Clone)]
pub struct QuizApi {
    client: reqwest::Client,
    base_url: String,
}

impl QuizApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Base URL from `QUIZTREPRENEUR_SERVER`, falling back to the hosted
    /// service.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("QUIZTREPRENEUR_SERVER").unwrap_or_else(|_| DEFAULT_SERVER.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_categories(&self) -> Vec<Category> {
        match self.get_categories().await {
            Ok(categories) => categories,
            Err(e) => {
                logger::log(&format!("Error fetching categories: {}", e));
                Vec::new()
            }
        }
    }

    /// Fetch all questions whose category matches `category` via the
    /// server-side search parameter. Failures are isolated per category.
    pub async fn fetch_questions_by_category(&self, category: &str) -> Vec<Question> {
        match self.get_questions(category).await {
            Ok(questions) => questions,
            Err(e) => {
                logger::log(&format!(
                    "Error fetching questions for category {}: {}",
                    category, e
                ));
                Vec::new()
            }
        }
    }

    async fn get_categories(&self) -> Result<Vec<Category>, reqwest::Error> {
        self.client
            .get(format!("{}/quiz/categories/", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    async fn get_questions(&self, category: &str) -> Result<Vec<Question>, reqwest::Error> {
        self.client
            .get(format!("{}/quiz/questions/list-all/", self.base_url))
            .query(&[("search", category)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
