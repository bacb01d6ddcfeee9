use mondai_model::quiz::error::QuestionError;
use mondai_model::quiz::question::QuestionType;
use thiserror::Error;

use crate::openai::error::OpenAiError;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("OpenAI error: {0}")]
    OpenAi(#[from] OpenAiError),

    #[error("Model returned malformed question XML: {0}")]
    MalformedModelOutput(#[source] QuestionError),

    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error("No questions were generated, cannot fill {requested} questions")]
    NothingToTopUp { requested: usize },

    #[error("No text chunks to generate questions from")]
    NoChunks,
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("The quiz does not contain any questions")]
    EmptyQuiz,

    #[error("The current question was already answered")]
    AnswerLocked,

    #[error("The quiz is completed, only a restart is possible")]
    Completed,
}

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("No answer was given")]
    EmptyResponse,

    #[error("A {0} question cannot be answered this way")]
    ResponseKind(QuestionType),
}
