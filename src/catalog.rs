//! Category and quiz question catalog
//!
//! Read-only reference data for the engine. Ships with a built-in set and
//! can be replaced by a JSON file of the same shape.

use crate::types::{Category, CategoryId, Difficulty, QuizQuestion};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub categories: Vec<Category>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, questions: Vec<QuizQuestion>) -> Self {
        Self {
            categories,
            questions,
        }
    }

    /// Parse and validate a catalog from JSON
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            questions = catalog.questions.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Check ids are unique and every question belongs to a known category
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if category.id.trim().is_empty() {
                return Err(CatalogError::Invalid(format!(
                    "Category '{}' has an empty id",
                    category.name
                )));
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "Duplicate category id '{}'",
                    category.id
                )));
            }
        }

        let mut question_ids = HashSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "Duplicate question id '{}'",
                    question.id
                )));
            }
            if !category_ids.contains(question.category_id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "Question '{}' references category '{}' which doesn't exist",
                    question.id, question.category_id
                )));
            }
        }

        Ok(())
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn eligible_category_ids(&self) -> Vec<CategoryId> {
        self.categories
            .iter()
            .filter(|c| c.is_eligible())
            .map(|c| c.id.clone())
            .collect()
    }

    /// The catalog bundled with the game
    pub fn builtin() -> Self {
        let categories = vec![
            category(
                "prophets",
                "Prophets",
                "Messengers sent to mankind",
                &[
                    "Adam", "Nuh", "Ibrahim", "Musa", "Isa", "Yusuf", "Yunus", "Sulaiman",
                ],
                false,
            ),
            category(
                "seerah",
                "Seerah",
                "The life of the Prophet",
                &[
                    "Makkah", "Madinah", "Badr", "Uhud", "Hijrah", "Khandaq", "Taif",
                ],
                false,
            ),
            category(
                "ramadan",
                "Ramadan",
                "The month of fasting",
                &[
                    "Suhoor",
                    "Iftar",
                    "Taraweeh",
                    "Laylatul Qadr",
                    "Zakat",
                    "Eid",
                    "Dates",
                ],
                false,
            ),
            category(
                "hajj",
                "Hajj",
                "The pilgrimage",
                &["Arafah", "Mina", "Ihram", "Tawaf", "Zamzam", "Muzdalifah"],
                true,
            ),
        ];

        let questions = vec![
            question(
                "prophets-1",
                "prophets",
                "Which prophet built the Ark?",
                "Nuh",
                Difficulty::Easy,
            ),
            question(
                "prophets-2",
                "prophets",
                "Which prophet was swallowed by a whale?",
                "Yunus",
                Difficulty::Easy,
            ),
            question(
                "prophets-3",
                "prophets",
                "Which prophet could speak to animals?",
                "Sulaiman",
                Difficulty::Medium,
            ),
            question(
                "prophets-4",
                "prophets",
                "Which prophet was thrown into a well by his brothers?",
                "Yusuf",
                Difficulty::Medium,
            ),
            question(
                "prophets-5",
                "prophets",
                "Which prophet is known as Khalilullah?",
                "Ibrahim",
                Difficulty::Hard,
            ),
            question(
                "seerah-1",
                "seerah",
                "In which city was the Prophet born?",
                "Makkah",
                Difficulty::Easy,
            ),
            question(
                "seerah-2",
                "seerah",
                "To which city did the Muslims migrate?",
                "Madinah",
                Difficulty::Easy,
            ),
            question(
                "seerah-3",
                "seerah",
                "Which was the first major battle?",
                "Badr",
                Difficulty::Medium,
            ),
            question(
                "seerah-4",
                "seerah",
                "Which battle was fought beside a trench?",
                "Khandaq",
                Difficulty::Hard,
            ),
            question(
                "ramadan-1",
                "ramadan",
                "What is the meal before dawn called?",
                "Suhoor",
                Difficulty::Easy,
            ),
            question(
                "ramadan-2",
                "ramadan",
                "What is the meal at sunset called?",
                "Iftar",
                Difficulty::Easy,
            ),
            question(
                "ramadan-3",
                "ramadan",
                "What are the night prayers of Ramadan called?",
                "Taraweeh",
                Difficulty::Medium,
            ),
            question(
                "ramadan-4",
                "ramadan",
                "Which night is better than a thousand months?",
                "Laylatul Qadr",
                Difficulty::Hard,
            ),
            question(
                "hajj-1",
                "hajj",
                "On which plain do pilgrims stand on the 9th?",
                "Arafah",
                Difficulty::Medium,
            ),
        ];

        Self::new(categories, questions)
    }
}

fn category(id: &str, name: &str, description: &str, words: &[&str], locked: bool) -> Category {
    Category {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        words: words.iter().map(|w| w.to_string()).collect(),
        locked,
        is_custom: false,
    }
}

fn question(
    id: &str,
    category_id: &str,
    text: &str,
    answer: &str,
    difficulty: Difficulty,
) -> QuizQuestion {
    QuizQuestion {
        id: id.to_string(),
        category_id: category_id.to_string(),
        question: text.to_string(),
        answer: answer.to_string(),
        difficulty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(
            catalog.eligible_category_ids(),
            vec!["prophets", "seerah", "ramadan"]
        );
        assert_eq!(catalog.questions.len(), 14);
    }

    #[test]
    fn test_builtin_answers_are_category_words() {
        let catalog = Catalog::builtin();
        for q in &catalog.questions {
            let category = catalog.category(&q.category_id).unwrap();
            assert!(
                category.words.contains(&q.answer),
                "answer {} missing from {}",
                q.answer,
                category.id
            );
        }
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "categories": [
                {"id": "food", "name": "Food", "words": ["Bread", "Rice"], "isCustom": true}
            ],
            "questions": [
                {"id": "f1", "categoryId": "food", "question": "Staple of Asia?", "answer": "Rice", "difficulty": "easy"}
            ]
        }"#;

        let catalog = Catalog::from_json_str(json).unwrap();
        let food = catalog.category("food").unwrap();
        assert!(food.is_custom);
        assert!(!food.locked);
        assert_eq!(food.description, "");
        assert_eq!(catalog.questions[0].difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let json = r#"{"categories": [
            {"id": "a", "name": "A", "words": ["x"]},
            {"id": "a", "name": "A again", "words": ["y"]}
        ]}"#;

        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate category id"));
    }

    #[test]
    fn test_rejects_orphan_question() {
        let json = r#"{
            "categories": [{"id": "a", "name": "A", "words": ["x"]}],
            "questions": [{"id": "q", "categoryId": "b", "question": "?", "answer": "x", "difficulty": "hard"}]
        }"#;

        let err = Catalog::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("doesn't exist"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[tokio::test]
    async fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string(&Catalog::builtin()).unwrap();
        tokio::fs::write(&path, json).await.unwrap();

        let catalog = Catalog::from_path(&path).await.unwrap();
        assert_eq!(catalog.categories.len(), 4);

        let missing = Catalog::from_path(dir.path().join("missing.json")).await;
        assert!(matches!(missing, Err(CatalogError::Io(_))));
    }
}
