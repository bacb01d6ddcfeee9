use thiserror::Error;

use crate::quiz::question::QuestionType;

#[derive(Debug, Error)]
pub enum QuestionError {
    #[error("Question type '{name}' is not allowed. Should be one of {allowed:?}")]
    UnrecognizedQuestionType { name: String, allowed: Vec<String> },

    #[error("Question type '{0}' has no implementation")]
    UnimplementedQuestionType(String),

    #[error("'{kind}' question is missing its {field}")]
    IncompleteQuestion { kind: QuestionType, field: &'static str },

    #[error("Invalid question XML: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    #[error("Could not serialize questions: {0}")]
    Serialize(#[from] quick_xml::se::SeError),
}
