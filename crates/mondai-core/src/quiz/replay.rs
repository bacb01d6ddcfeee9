use mondai_model::quiz::collection::QuestionCollection;
use mondai_model::quiz::question::Question;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::quiz::error::ReplayError;
use crate::quiz::evaluation::{Response, Verdict, score};

/// A stored quiz in the order one session plays it.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    questions: Vec<Question>,
    order: Vec<usize>,
    seed: u64,
}

impl QuestionSet {
    /// Parses a stored quiz. Every question is checked against `allowed` up front.
    pub fn from_xml(xml: &str, seed: u64, allowed: &[String]) -> Result<Self, ReplayError> {
        let collection = QuestionCollection::from_xml(xml)?;
        let questions = collection
            .questions()
            .iter()
            .map(|record| Question::from_record(record, allowed))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions, seed)
    }

    pub fn new(questions: Vec<Question>, seed: u64) -> Result<Self, ReplayError> {
        if questions.is_empty() {
            return Err(ReplayError::EmptyQuiz);
        }

        let mut order: Vec<usize> = (0..questions.len()).collect();
        order.shuffle(&mut StdRng::seed_from_u64(seed));

        Ok(Self { questions, order, seed })
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
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The question played at position `index`.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Question> {
        self.order.get(index).and_then(|&position| self.questions.get(position))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.order.iter().filter_map(|&position| self.questions.get(position))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayStatus {
    InProgress { index: usize, answered: bool },
    Completed,
}

/// Progress of one session through a [`QuestionSet`].
#[derive(Debug, Clone)]
pub struct ReplayState {
    set: QuestionSet,
    index: usize,
    score: f64,
    locked: Option<Verdict>,
}

impl ReplayState {
    #[must_use]
    pub fn new(set: QuestionSet) -> Self {
        Self {
            set,
            index: 0,
            score: 0.0,
            locked: None,
        }
    }

    #[must_use]
    pub fn question_set(&self) -> &QuestionSet {
        &self.set
    }

    #[must_use]
    pub fn status(&self) -> ReplayStatus {
        if self.index < self.set.len() {
            ReplayStatus::InProgress {
                index: self.index,
                answered: self.locked.is_some(),
            }
        } else {
            ReplayStatus::Completed
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.set.item(self.index)
    }

    #[must_use]
    pub fn verdict(&self) -> Option<&Verdict> {
        self.locked.as_ref()
    }

    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Share of the total achievable score, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        100.0 * self.score / self.set.len() as f64
    }

    /// Scores `response` for the current question and locks it in.
    pub fn submit(&mut self, response: &Response) -> Result<&Verdict, ReplayError> {
        let question = self.current().ok_or(ReplayError::Completed)?;
        if self.locked.is_some() {
            return Err(ReplayError::AnswerLocked);
        }

        let verdict = score(question, response)?;
        tracing::debug!(index = self.index, score = verdict.score, "answer submitted");
        self.score += verdict.score;
        Ok(self.locked.insert(verdict))
    }

    pub fn advance(&mut self) -> Result<ReplayStatus, ReplayError> {
        if self.status() == ReplayStatus::Completed {
            return Err(ReplayError::Completed);
        }
        self.index += 1;
        self.locked = None;
        Ok(self.status())
    }

    /// Starts over with the same question order.
    pub fn restart(&mut self) {
        self.index = 0;
        self.score = 0.0;
        self.locked = None;
    }
}
