use utoipa::OpenApi;

use crate::modules::categories::model::{CategoriesResponse, Category};
use crate::modules::questions::model::{
    CreateQuestionDto, CreatedQuestionResponse, DeletedQuestionResponse, Question,
    QuestionListResponse, SearchQuestionsDto, SearchResultsResponse,
};
use crate::modules::quizzes::model::{QuizCategoryDto, QuizRequestDto, QuizResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::categories::controller::list_categories,
        crate::modules::categories::controller::questions_by_category,
        crate::modules::questions::controller::list_questions,
        crate::modules::questions::controller::create_question,
        crate::modules::questions::controller::delete_question,
        crate::modules::questions::controller::search_questions,
        crate::modules::quizzes::controller::play_quiz,
    ),
    components(
        schemas(
            Category,
            CategoriesResponse,
            Question,
            CreateQuestionDto,
            CreatedQuestionResponse,
            DeletedQuestionResponse,
            QuestionListResponse,
            SearchQuestionsDto,
            SearchResultsResponse,
            QuizRequestDto,
            QuizCategoryDto,
            QuizResponse,
        )
    ),
    tags(
        (name = "Categories", description = "Category listing and per-category questions"),
        (name = "Questions", description = "Question listing, creation, deletion, and search"),
        (name = "Quizzes", description = "Randomized quiz question selection")
    ),
    info(
        title = "Trivia API",
        version = "0.1.0",
        description = "A REST backend for a trivia-question database built with Rust, Axum, and PostgreSQL.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
