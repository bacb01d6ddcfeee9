use serde::{Deserialize, Serialize};

use crate::quiz::error::QuestionError;

/// The `<questions>` document exchanged with the model and stored per quiz.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "questions")]
pub struct QuestionCollection {
    #[serde(rename = "question", default)]
    questions: Vec<QuestionRecord>,
}

/// One `<question>` element as it appears on the wire. The type is kept as text so
/// that whatever the model wrote survives storage. Values are stored trimmed, the
/// same way the XML reader hands them out, so stored quizzes round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionList>,
    #[serde(default)]
    pub answers: AnswerList,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionList {
    #[serde(rename = "option", default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerList {
    #[serde(rename = "answer", default)]
    pub items: Vec<String>,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(kind: impl Into<String>, text: impl Into<String>, options: Option<Vec<String>>, answers: Vec<String>) -> Self {
        Self {
            kind: kind.into(),
            text: text.into(),
            options: options.map(|items| OptionList { items }),
            answers: AnswerList { items: answers },
        }
        .normalized()
    }

    #[must_use]
    fn normalized(self) -> Self {
        Self {
            kind: trimmed(self.kind),
            text: trimmed(self.text),
            options: self.options.map(|options| OptionList {
                items: options.items.into_iter().map(trimmed).collect(),
            }),
            answers: AnswerList {
                items: self.answers.items.into_iter().map(trimmed).collect(),
            },
        }
    }

    #[must_use]
    pub fn options(&self) -> Option<&[String]> {
        self.options.as_ref().map(|options| options.items.as_slice())
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers.items
    }

    pub fn set_answers(&mut self, answers: Vec<String>) {
        self.answers.items = answers.into_iter().map(trimmed).collect();
    }
}

fn trimmed(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_owned()
    }
}

impl QuestionCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_xml(xml: &str) -> Result<Self, QuestionError> {
        let collection: Self = quick_xml::de::from_str(xml)?;
        Ok(collection.into_questions().into())
    }

    pub fn to_xml(&self) -> Result<String, QuestionError> {
        Ok(quick_xml::se::to_string(self)?)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn questions_mut(&mut self) -> &mut [QuestionRecord] {
        &mut self.questions
    }

    pub fn push(&mut self, question: QuestionRecord) {
        self.questions.push(question.normalized());
    }

    pub fn truncate(&mut self, len: usize) {
        self.questions.truncate(len);
    }

    #[must_use]
    pub fn into_questions(self) -> Vec<QuestionRecord> {
        self.questions
    }
}

impl From<Vec<QuestionRecord>> for QuestionCollection {
    fn from(questions: Vec<QuestionRecord>) -> Self {
        Self {
            questions: questions.into_iter().map(QuestionRecord::normalized).collect(),
        }
    }
}

impl Extend<QuestionRecord> for QuestionCollection {
    fn extend<T: IntoIterator<Item = QuestionRecord>>(&mut self, iter: T) {
        self.questions.extend(iter.into_iter().map(QuestionRecord::normalized));
    }
}
