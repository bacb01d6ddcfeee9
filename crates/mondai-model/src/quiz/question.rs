use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::quiz::collection::QuestionRecord;
use crate::quiz::error::QuestionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QuestionType {
    SingleCorrect,
    MultipleCorrect,
    TrueFalse,
    NoChoice,
    MathProblem,
}

/// Wire name of every question type, the only place where the two are mapped.
const QUESTION_TYPES: [(QuestionType, &str); 5] = [
    (QuestionType::SingleCorrect, "Single Correct"),
    (QuestionType::MultipleCorrect, "Multiple Correct"),
    (QuestionType::TrueFalse, "True/False"),
    (QuestionType::NoChoice, "No Choice"),
    (QuestionType::MathProblem, "Math Problem"),
];

impl QuestionType {
    pub const ALL: [QuestionType; 5] = [
        QuestionType::SingleCorrect,
        QuestionType::MultipleCorrect,
        QuestionType::TrueFalse,
        QuestionType::NoChoice,
        QuestionType::MathProblem,
    ];

    #[must_use]
    pub fn wire_name(self) -> &'static str {
        QUESTION_TYPES
            .iter()
            .find_map(|(kind, name)| (*kind == self).then_some(*name))
            .unwrap_or_default()
    }

    /// Case-insensitive lookup of a `<type>` value.
    #[must_use]
    pub fn from_wire_name(name: &str) -> Option<Self> {
        let name = name.trim();
        QUESTION_TYPES
            .iter()
            .find_map(|(kind, wire)| wire.eq_ignore_ascii_case(name).then_some(*kind))
    }

    #[must_use]
    pub fn has_options(self) -> bool {
        matches!(self, QuestionType::SingleCorrect | QuestionType::MultipleCorrect)
    }
}

impl Display for QuestionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for QuestionType {
    type Err = QuestionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QuestionType::from_wire_name(s).ok_or_else(|| QuestionError::UnrecognizedQuestionType {
            name: s.to_owned(),
            allowed: QUESTION_TYPES.iter().map(|(_, name)| (*name).to_owned()).collect(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleCorrectQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleCorrectQuestion {
    pub text: String,
    pub options: Vec<String>,
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrueFalseQuestion {
    pub text: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoChoiceQuestion {
    pub text: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathProblemQuestion {
    pub text: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    SingleCorrect(SingleCorrectQuestion),
    MultipleCorrect(MultipleCorrectQuestion),
    TrueFalse(TrueFalseQuestion),
    NoChoice(NoChoiceQuestion),
    MathProblem(MathProblemQuestion),
}

impl Question {
    /// Builds the typed view of a stored record. `allowed` is the configured list of
    /// question type names; a type outside of it is rejected before dispatch.
    pub fn from_record(record: &QuestionRecord, allowed: &[String]) -> Result<Self, QuestionError> {
        let name = record.kind.trim();
        if !allowed.iter().any(|allowed| allowed.trim().eq_ignore_ascii_case(name)) {
            return Err(QuestionError::UnrecognizedQuestionType {
                name: name.to_owned(),
                allowed: allowed.to_vec(),
            });
        }

        let kind = QuestionType::from_wire_name(name)
            .ok_or_else(|| QuestionError::UnimplementedQuestionType(name.to_owned()))?;

        let text = required_text(record, kind)?;
        let question = match kind {
            QuestionType::SingleCorrect => Question::SingleCorrect(SingleCorrectQuestion {
                text,
                options: required_options(record, kind)?,
                answer: first_answer(record, kind)?,
            }),
            QuestionType::MultipleCorrect => {
                let answers: Vec<String> = record.answers().iter().map(|answer| answer.trim().to_owned()).collect();
                if answers.is_empty() {
                    return Err(QuestionError::IncompleteQuestion { kind, field: "answers" });
                }
                Question::MultipleCorrect(MultipleCorrectQuestion {
                    text,
                    options: required_options(record, kind)?,
                    answers,
                })
            }
            QuestionType::TrueFalse => Question::TrueFalse(TrueFalseQuestion {
                text,
                answer: first_answer(record, kind)?,
            }),
            QuestionType::NoChoice => Question::NoChoice(NoChoiceQuestion {
                text,
                answer: first_answer(record, kind)?,
            }),
            QuestionType::MathProblem => Question::MathProblem(MathProblemQuestion {
                text,
                answer: first_answer(record, kind)?,
            }),
        };
        Ok(question)
    }

    #[must_use]
    pub fn kind(&self) -> QuestionType {
        match self {
            Question::SingleCorrect(_) => QuestionType::SingleCorrect,
            Question::MultipleCorrect(_) => QuestionType::MultipleCorrect,
            Question::TrueFalse(_) => QuestionType::TrueFalse,
            Question::NoChoice(_) => QuestionType::NoChoice,
            Question::MathProblem(_) => QuestionType::MathProblem,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Question::SingleCorrect(q) => &q.text,
            Question::MultipleCorrect(q) => &q.text,
            Question::TrueFalse(q) => &q.text,
            Question::NoChoice(q) => &q.text,
            Question::MathProblem(q) => &q.text,
        }
    }

    /// Options to choose from. True/false questions offer a fixed pair.
    #[must_use]
    pub fn options(&self) -> Vec<&str> {
        match self {
            Question::SingleCorrect(q) => q.options.iter().map(String::as_str).collect(),
            Question::MultipleCorrect(q) => q.options.iter().map(String::as_str).collect(),
            Question::TrueFalse(_) => vec!["True", "False"],
            Question::NoChoice(_) | Question::MathProblem(_) => Vec::new(),
        }
    }

    #[must_use]
    pub fn expected_answers(&self) -> Vec<&str> {
        match self {
            Question::MultipleCorrect(q) => q.answers.iter().map(String::as_str).collect(),
            Question::SingleCorrect(SingleCorrectQuestion { answer, .. })
            | Question::TrueFalse(TrueFalseQuestion { answer, .. })
            | Question::NoChoice(NoChoiceQuestion { answer, .. })
            | Question::MathProblem(MathProblemQuestion { answer, .. }) => vec![answer.as_str()],
        }
    }
}

fn required_text(record: &QuestionRecord, kind: QuestionType) -> Result<String, QuestionError> {
    let text = record.text.trim();
    if text.is_empty() {
        return Err(QuestionError::IncompleteQuestion { kind, field: "text" });
    }
    Ok(text.to_owned())
}

fn required_options(record: &QuestionRecord, kind: QuestionType) -> Result<Vec<String>, QuestionError> {
    record
        .options()
        .map(|options| options.iter().map(|option| option.trim().to_owned()).collect())
        .ok_or(QuestionError::IncompleteQuestion { kind, field: "options" })
}

fn first_answer(record: &QuestionRecord, kind: QuestionType) -> Result<String, QuestionError> {
    record
        .answers()
        .first()
        .map(|answer| answer.trim().to_owned())
        .ok_or(QuestionError::IncompleteQuestion { kind, field: "answers" })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        QuestionType::ALL.iter().map(|kind| kind.wire_name().to_owned()).collect()
    }

    #[test]
    fn test_wire_names() {
        for kind in QuestionType::ALL {
            assert_eq!(QuestionType::from_wire_name(kind.wire_name()), Some(kind));
        }
        assert_eq!(QuestionType::from_wire_name(" true/false "), Some(QuestionType::TrueFalse));
        assert_eq!(QuestionType::from_wire_name("MULTIPLE CORRECT"), Some(QuestionType::MultipleCorrect));
        assert_eq!(QuestionType::from_wire_name("Essay"), None);
        assert_eq!(QuestionType::MathProblem.to_string(), "Math Problem");
        assert!("essay".parse::<QuestionType>().is_err());
    }

    #[test]
    fn test_dispatch_single_correct() {
        let record = QuestionRecord::new(
            "single correct",
            " What is the chemical symbol of gold? ",
            Some(vec!["Ag".to_owned(), "Au".to_owned(), "Gd".to_owned()]),
            vec!["Au".to_owned()],
        );
        let question = Question::from_record(&record, &allowed()).unwrap();

        assert_eq!(question.kind(), QuestionType::SingleCorrect);
        assert_eq!(question.text(), "What is the chemical symbol of gold?");
        assert_eq!(question.options(), vec!["Ag", "Au", "Gd"]);
        assert_eq!(question.expected_answers(), vec!["Au"]);
    }

    #[test]
    fn test_dispatch_multiple_correct_keeps_all_answers() {
        let record = QuestionRecord::new(
            "Multiple Correct",
            "Which are noble gases?",
            Some(vec!["Neon".to_owned(), "Argon".to_owned(), "Oxygen".to_owned()]),
            vec!["Neon".to_owned(), "Argon".to_owned()],
        );
        let Question::MultipleCorrect(question) = Question::from_record(&record, &allowed()).unwrap() else {
            panic!("expected a multiple correct question");
        };
        assert_eq!(question.answers, vec!["Neon", "Argon"]);
    }

    #[test]
    fn test_true_false_offers_fixed_options() {
        let record = QuestionRecord::new("True/False", "Water boils at 100 °C at sea level.", None, vec!["true".to_owned()]);
        let question = Question::from_record(&record, &allowed()).unwrap();
        assert_eq!(question.options(), vec!["True", "False"]);
    }

    #[test]
    fn test_type_outside_allowed_list() {
        let record = QuestionRecord::new("Math Problem", "2 + 2?", None, vec!["4".to_owned()]);
        let allowed = vec!["Single Correct".to_owned(), "No Choice".to_owned()];

        let res = Question::from_record(&record, &allowed);
        assert!(matches!(
            res,
            Err(QuestionError::UnrecognizedQuestionType { name, .. }) if name == "Math Problem"
        ));
    }

    #[test]
    fn test_allowed_type_without_variant() {
        let record = QuestionRecord::new("Essay", "Discuss entropy.", None, vec!["-".to_owned()]);
        let mut allowed = allowed();
        allowed.push("Essay".to_owned());

        let res = Question::from_record(&record, &allowed);
        assert!(matches!(res, Err(QuestionError::UnimplementedQuestionType(name)) if name == "Essay"));
    }

    #[test]
    fn test_missing_parts() {
        let no_options = QuestionRecord::new("Single Correct", "Pick one", None, vec!["A".to_owned()]);
        assert!(matches!(
            Question::from_record(&no_options, &allowed()),
            Err(QuestionError::IncompleteQuestion { field: "options", .. })
        ));

        let no_answer = QuestionRecord::new("No Choice", "Capital of Peru?", None, vec![]);
        assert!(matches!(
            Question::from_record(&no_answer, &allowed()),
            Err(QuestionError::IncompleteQuestion { field: "answers", .. })
        ));

        let no_text = QuestionRecord::new("No Choice", "  ", None, vec!["Lima".to_owned()]);
        assert!(matches!(
            Question::from_record(&no_text, &allowed()),
            Err(QuestionError::IncompleteQuestion { field: "text", .. })
        ));
    }
}
