use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::questions::model::Question;
use crate::utils::serde::deserialize_i64_from_any;

/// Body of `POST /quizzes`. `quiz_category` is required; a body without it
/// is rejected at decode time.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequestDto {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategoryDto,
}

/// The quiz frontend sends `id` as a number for "all" (0) and as a numeric
/// string for concrete categories; both are accepted. The accompanying
/// `type` label is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategoryDto {
    #[serde(deserialize_with = "deserialize_i64_from_any")]
    #[schema(value_type = i64)]
    pub id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuizQuestion,
}

/// Either a full question or the empty string once the pool is exhausted.
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum QuizQuestion {
    Question(Question),
    Exhausted(String),
}

impl QuizQuestion {
    pub fn exhausted() -> Self {
        Self::Exhausted(String::new())
    }
}
