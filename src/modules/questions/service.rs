use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::categories::model::category_map;
use crate::modules::categories::service::CategoryService;
use crate::modules::questions::model::{
    CreateQuestionDto, CreatedQuestionResponse, DeletedQuestionResponse, Question,
    QuestionListResponse, SearchResultsResponse,
};
use crate::utils::errors::ApiError;
use crate::utils::pagination::paginate;

const SELECT_QUESTIONS: &str =
    "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id";

pub struct QuestionService;

impl QuestionService {
    async fn fetch_all(db: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(SELECT_QUESTIONS)
            .fetch_all(db)
            .await
    }

    /// `GET /questions`: the full list paginated, with the category map and
    /// the unpaginated total. An empty page is a not-found condition.
    #[instrument(skip(db))]
    pub async fn list(
        db: &PgPool,
        page: i64,
        per_page: i64,
    ) -> Result<QuestionListResponse, ApiError> {
        let questions = Self::fetch_all(db).await.map_err(ApiError::not_found)?;
        let categories = CategoryService::fetch_all(db)
            .await
            .map_err(ApiError::not_found)?;

        let current = paginate(&questions, page, per_page).to_vec();
        if current.is_empty() {
            return Err(ApiError::not_found(anyhow!(
                "no questions on page {page} (total {})",
                questions.len()
            )));
        }

        Ok(QuestionListResponse {
            success: true,
            questions: current,
            total_questions: questions.len(),
            categories: category_map(categories),
            current_category: None,
        })
    }

    /// `DELETE /questions/{id}`. A missing row is a mutation failure (422),
    /// not a not-found. Ordering is fixed: existence check, delete, reload,
    /// paginate, empty-check.
    #[instrument(skip(db))]
    pub async fn delete(
        db: &PgPool,
        id: i32,
        page: i64,
        per_page: i64,
    ) -> Result<DeletedQuestionResponse, ApiError> {
        sqlx::query_scalar::<_, i32>("SELECT id FROM questions WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await
            .map_err(ApiError::unprocessable)?
            .ok_or_else(|| ApiError::unprocessable(anyhow!("question {id} does not exist")))?;

        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(ApiError::unprocessable)?;

        let questions = Self::fetch_all(db).await.map_err(ApiError::unprocessable)?;
        let categories = CategoryService::fetch_all(db)
            .await
            .map_err(ApiError::unprocessable)?;

        let current = paginate(&questions, page, per_page).to_vec();
        if current.is_empty() {
            return Err(ApiError::not_found(anyhow!(
                "page {page} is empty after deleting question {id}"
            )));
        }

        Ok(DeletedQuestionResponse {
            success: true,
            deleted: id,
            questions: current,
            total_questions: questions.len(),
            categories: category_map(categories),
            current_category: None,
        })
    }

    /// `POST /questions`. No empty-page check here: the response reports
    /// whatever slice the current page holds, even if empty.
    #[instrument(skip(db))]
    pub async fn create(
        db: &PgPool,
        dto: CreateQuestionDto,
        page: i64,
        per_page: i64,
    ) -> Result<CreatedQuestionResponse, ApiError> {
        let created = sqlx::query_scalar::<_, i32>(
            r#"INSERT INTO questions (question, answer, category, difficulty)
               VALUES ($1, $2, $3, $4)
               RETURNING id"#,
        )
        .bind(&dto.question)
        .bind(&dto.answer)
        .bind(&dto.category)
        .bind(dto.difficulty)
        .fetch_one(db)
        .await
        .map_err(ApiError::unprocessable)?;

        let questions = Self::fetch_all(db).await.map_err(ApiError::unprocessable)?;
        let current = paginate(&questions, page, per_page).to_vec();

        Ok(CreatedQuestionResponse {
            success: true,
            created,
            questions: current,
            total_questions: questions.len(),
        })
    }

    /// Case-insensitive substring search over question text.
    #[instrument(skip(db))]
    pub async fn search(
        db: &PgPool,
        term: &str,
        page: i64,
        per_page: i64,
    ) -> Result<SearchResultsResponse, ApiError> {
        let pattern = format!("%{term}%");
        let matches = sqlx::query_as::<_, Question>(
            r#"SELECT id, question, answer, category, difficulty
               FROM questions
               WHERE question ILIKE $1
               ORDER BY id"#,
        )
        .bind(&pattern)
        .fetch_all(db)
        .await
        .map_err(ApiError::not_found)?;

        Self::page_of_matches(matches, page, per_page)
    }

    /// Exact text comparison of the category column against the raw path
    /// parameter; "1" and 1 are different keys as far as storage is
    /// concerned.
    #[instrument(skip(db))]
    pub async fn by_category(
        db: &PgPool,
        category_id: &str,
        page: i64,
        per_page: i64,
    ) -> Result<SearchResultsResponse, ApiError> {
        let matches = sqlx::query_as::<_, Question>(
            r#"SELECT id, question, answer, category, difficulty
               FROM questions
               WHERE category = $1
               ORDER BY id"#,
        )
        .bind(category_id)
        .fetch_all(db)
        .await
        .map_err(ApiError::not_found)?;

        Self::page_of_matches(matches, page, per_page)
    }

    fn page_of_matches(
        matches: Vec<Question>,
        page: i64,
        per_page: i64,
    ) -> Result<SearchResultsResponse, ApiError> {
        let current = paginate(&matches, page, per_page).to_vec();
        if current.is_empty() {
            return Err(ApiError::not_found(anyhow!(
                "no matching questions on page {page}"
            )));
        }

        // total_questions reports the slice length, not the full match
        // count; question listing and creation report the full total.
        let total_questions = current.len();

        Ok(SearchResultsResponse {
            success: true,
            questions: current,
            total_questions,
        })
    }
}
