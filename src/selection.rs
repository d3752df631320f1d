use crate::api::QuizApi;
use crate::models::{Difficulty, Question};
use rand::Rng;

/// Concatenate per-category batches in selection order and apply the
/// difficulty filter. Duplicates across categories are kept.
pub fn assemble_pool(batches: Vec<Vec<Question>>, difficulty: Option<Difficulty>) -> Vec<Question> {
    let combined: Vec<Question> = batches.into_iter().flatten().collect();
    filter_by_difficulty(combined, difficulty)
}

/// Keep questions whose difficulty matches the filter exactly; no filter
/// keeps everything.
pub fn filter_by_difficulty(
    questions: Vec<Question>,
    difficulty: Option<Difficulty>,
) -> Vec<Question> {
    questions
        .into_iter()
        .filter(|q| difficulty.is_none() || difficulty == Some(q.difficulty))
        .collect()
}

/// Draw one question uniformly from the candidate pool. The RNG is injected
/// so callers can make the draw deterministic.
pub fn pick(candidates: &[Question], rng: &mut impl Rng) -> Option<Question> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index].clone())
}

/// Build the candidate pool for the current selection: one fetch per
/// selected category, sequentially, in selection order. Zero selected
/// categories yields an empty pool; a failed or empty category contributes
/// nothing.
pub async fn gather_candidates(
    api: &QuizApi,
    categories: &[String],
    difficulty: Option<Difficulty>,
) -> Vec<Question> {
    let mut batches = Vec::with_capacity(categories.len());
    for category in categories {
        batches.push(api.fetch_questions_by_category(category).await);
    }
    assemble_pool(batches, difficulty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnswerOption, Category};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64, category: &str, difficulty: Difficulty) -> Question {
        Question {
            id,
            question_source: "test".to_string(),
            category: Category {
                title: category.to_string(),
            },
            question_text: format!("Question {}?", id),
            options: vec![
                AnswerOption {
                    option_text: "Right".to_string(),
                    correct: true,
                },
                AnswerOption {
                    option_text: "Wrong".to_string(),
                    correct: false,
                },
            ],
            explanation: "Because.".to_string(),
            difficulty,
        }
    }

    #[test]
    fn test_filter_without_difficulty_keeps_everything() {
        let pool = vec![
            question(1, "Finance", Difficulty::Easy),
            question(2, "Finance", Difficulty::Hard),
        ];
        let filtered = filter_by_difficulty(pool.clone(), None);
        assert_eq!(filtered, pool);
    }

    #[test]
    fn test_filter_is_exact_match() {
        let pool = vec![
            question(1, "Finance", Difficulty::Easy),
            question(2, "Finance", Difficulty::Medium),
            question(3, "Tax", Difficulty::Medium),
        ];
        let filtered = filter_by_difficulty(pool, Some(Difficulty::Medium));
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|q| q.difficulty == Difficulty::Medium));
    }

    #[test]
    fn test_assemble_preserves_selection_order_and_duplicates() {
        let finance = vec![question(1, "Finance", Difficulty::Easy)];
        let tax = vec![
            question(2, "Tax", Difficulty::Easy),
            // Same question matching a second category is not deduplicated.
            question(1, "Finance", Difficulty::Easy),
        ];
        let pool = assemble_pool(vec![finance, tax], None);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool[0].id, 1);
        assert_eq!(pool[1].id, 2);
        assert_eq!(pool[2].id, 1);
    }

    #[test]
    fn test_every_candidate_comes_from_a_selected_category() {
        let selected = ["Finance".to_string(), "Tax".to_string()];
        let batches = vec![
            vec![
                question(1, "Finance", Difficulty::Easy),
                question(2, "Finance", Difficulty::Medium),
            ],
            vec![question(3, "Tax", Difficulty::Hard)],
        ];
        let pool = assemble_pool(batches, Some(Difficulty::Medium));
        assert!(pool
            .iter()
            .all(|q| selected.contains(&q.category.title) && q.difficulty == Difficulty::Medium));
    }

    #[test]
    fn test_pick_from_empty_pool_is_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(pick(&[], &mut rng).is_none());
    }

    #[test]
    fn test_pick_is_deterministic_with_seeded_rng() {
        let pool = vec![
            question(1, "Finance", Difficulty::Easy),
            question(2, "Finance", Difficulty::Medium),
            question(3, "Tax", Difficulty::Hard),
        ];
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(pick(&pool, &mut a), pick(&pool, &mut b));
    }

    #[test]
    fn test_pick_draws_from_the_whole_pool() {
        let pool = vec![
            question(1, "Finance", Difficulty::Easy),
            question(2, "Finance", Difficulty::Easy),
            question(3, "Finance", Difficulty::Easy),
        ];
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pick(&pool, &mut rng).unwrap().id);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_single_candidate_scenario_is_deterministic() {
        // Finance has one Medium question, Tax has Easy and Hard ones; with
        // the Medium filter the pool is exactly the Finance question, no
        // matter the RNG.
        let finance = vec![question(10, "Finance", Difficulty::Medium)];
        let tax = vec![
            question(11, "Tax", Difficulty::Easy),
            question(12, "Tax", Difficulty::Hard),
        ];
        let pool = assemble_pool(vec![finance, tax], Some(Difficulty::Medium));
        assert_eq!(pool.len(), 1);
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(pick(&pool, &mut rng).unwrap().id, 10);
        }
    }

    #[test]
    fn test_no_selected_categories_yields_none() {
        let pool = assemble_pool(Vec::new(), Some(Difficulty::Hard));
        assert!(pool.is_empty());
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick(&pool, &mut rng).is_none());
    }
}
