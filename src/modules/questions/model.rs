use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::modules::categories::model::CategoryMap;
use crate::utils::serde::{deserialize_optional_i32_from_any, deserialize_optional_text_from_any};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
    pub difficulty: Option<i32>,
}

/// Body of `POST /questions`. Every field is optional: absent text fields
/// default to the empty string, absent difficulty to NULL. Nothing is
/// validated beyond JSON well-formedness.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default, deserialize_with = "deserialize_optional_text_from_any")]
    #[schema(value_type = Option<String>)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32_from_any")]
    #[schema(value_type = Option<i32>)]
    pub difficulty: Option<i32>,
}

/// Body of `POST /questions/search`. Query-string search terms are ignored
/// in favor of the JSON body.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub current_category: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedQuestionResponse {
    pub success: bool,
    pub deleted: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[schema(value_type = Object)]
    pub categories: CategoryMap,
    pub current_category: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedQuestionResponse {
    pub success: bool,
    pub created: i32,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Shared by substring search and by-category filtering. `total_questions`
/// counts the paginated slice, not the full match set.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResultsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}
