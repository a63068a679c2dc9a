use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::questions::model::Question;
use crate::modules::quizzes::model::{QuizQuestion, QuizRequestDto, QuizResponse};
use crate::utils::errors::ApiError;

pub struct QuizService;

impl QuizService {
    /// Picks the next quiz question: category 0 draws from every question,
    /// any other id filters on the category column; previously-seen ids are
    /// excluded. The draw uses OS entropy so the sequence is not
    /// predictable. An exhausted pool is a successful, empty answer.
    #[instrument(skip(db))]
    pub async fn next_question(db: &PgPool, dto: QuizRequestDto) -> Result<QuizResponse, ApiError> {
        let candidates = if dto.quiz_category.id == 0 {
            sqlx::query_as::<_, Question>(
                "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
            )
            .fetch_all(db)
            .await
        } else {
            sqlx::query_as::<_, Question>(
                r#"SELECT id, question, answer, category, difficulty
                   FROM questions
                   WHERE category = $1
                   ORDER BY id"#,
            )
            .bind(dto.quiz_category.id.to_string())
            .fetch_all(db)
            .await
        }
        .map_err(ApiError::unprocessable)?;

        let pool: Vec<Question> = candidates
            .into_iter()
            .filter(|q| !dto.previous_questions.contains(&q.id))
            .collect();

        let question = match pool.choose(&mut OsRng) {
            Some(picked) => QuizQuestion::Question(picked.clone()),
            None => QuizQuestion::exhausted(),
        };

        Ok(QuizResponse {
            success: true,
            question,
        })
    }
}
