use std::collections::BTreeSet;

use mondai_model::quiz::question::{MathProblemQuestion, MultipleCorrectQuestion, Question};

use crate::quiz::answer::first_float_token;
use crate::quiz::error::ScoringError;

const RELATIVE_TOLERANCE: f64 = 1e-4;
const ABSOLUTE_TOLERANCE: f64 = 1e-4;

/// What the user submitted for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A typed answer or the single picked option.
    Text(String),
    /// The picked options of a multiple correct question.
    Selection(Vec<String>),
}

impl Response {
    fn is_empty(&self) -> bool {
        match self {
            Response::Text(text) => text.trim().is_empty(),
            Response::Selection(selection) => selection.iter().all(|option| option.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Correct,
    PartiallyCorrect,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub score: f64,
    pub grade: Grade,
    pub expected: Vec<String>,
}

impl Verdict {
    fn new(score: f64, question: &Question) -> Self {
        let grade = if score >= 1.0 {
            Grade::Correct
        } else if score > 0.0 {
            Grade::PartiallyCorrect
        } else {
            Grade::Incorrect
        };

        Self {
            score,
            grade,
            expected: question.expected_answers().into_iter().map(str::to_owned).collect(),
        }
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.grade == Grade::Correct
    }
}

/// Scores a response in `[0, 1]`.
pub fn score(question: &Question, response: &Response) -> Result<Verdict, ScoringError> {
    if response.is_empty() {
        return Err(ScoringError::EmptyResponse);
    }

    let score = match (question, response) {
        (Question::MultipleCorrect(question), Response::Selection(selection)) => score_selection(question, selection),
        (Question::MathProblem(question), Response::Text(text)) => score_math(question, text),
        (
            Question::SingleCorrect(_) | Question::TrueFalse(_) | Question::NoChoice(_),
            Response::Text(text),
        ) => {
            let matches = question
                .expected_answers()
                .first()
                .is_some_and(|answer| answer.trim().to_lowercase() == text.trim().to_lowercase());
            if matches { 1.0 } else { 0.0 }
        }
        _ => return Err(ScoringError::ResponseKind(question.kind())),
    };

    Ok(Verdict::new(score, question))
}

#[allow(clippy::cast_precision_loss)]
fn score_selection(question: &MultipleCorrectQuestion, selection: &[String]) -> f64 {
    let normalize = |value: &String| value.trim().to_lowercase();

    let answers: BTreeSet<String> = question.answers.iter().map(normalize).collect();
    if answers.is_empty() {
        return 0.0;
    }
    let selected: BTreeSet<String> = selection.iter().map(normalize).collect();

    answers.intersection(&selected).count() as f64 / answers.len() as f64
}

fn score_math(question: &MathProblemQuestion, text: &str) -> f64 {
    let parse = |value: &str| first_float_token(value).and_then(|token| token.parse::<f64>().ok());

    let Some(expected) = parse(&question.answer) else {
        tracing::warn!(answer = %question.answer, "stored math answer is not a number");
        return 0.0;
    };
    let Some(given) = parse(text) else {
        tracing::debug!("math response does not contain a number");
        return 0.0;
    };

    if (given - expected).abs() <= ABSOLUTE_TOLERANCE + RELATIVE_TOLERANCE * expected.abs() {
        1.0
    } else {
        0.0
    }
}
