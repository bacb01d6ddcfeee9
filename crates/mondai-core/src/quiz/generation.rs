use mondai_config::quiz::QuizConfig;
use mondai_model::quiz::collection::{QuestionCollection, QuestionRecord};
use mondai_model::quiz::question::QuestionType;
use rand::rng;
use rand::seq::{IndexedRandom, SliceRandom};
use typed_builder::TypedBuilder;

use crate::openai::TextGenerator;
use crate::prompt::{PromptBuilder, QuestionCount};
use crate::quiz::allocation::{average_chunk_size, questions_for_chunk, type_counts};
use crate::quiz::answer::{EMPTY_ANSWER, extract_numeric_answer};
use crate::quiz::error::QuizError;

#[derive(TypedBuilder, Debug, Clone)]
pub struct GenerationRequest {
    pub question_number: usize,
    #[builder(setter(into))]
    pub difficulty: String,
    pub question_types: Vec<QuestionType>,
    pub single_option_number: usize,
    pub multiple_option_number: usize,
}

/// Turns document chunks into a quiz of exactly the requested length.
pub struct QuizGenerator<'a, G: TextGenerator + ?Sized> {
    generator: &'a G,
    config: &'a QuizConfig,
    prompts: PromptBuilder,
}

impl<'a, G: TextGenerator + ?Sized> QuizGenerator<'a, G> {
    #[must_use]
    pub fn new(generator: &'a G, config: &'a QuizConfig) -> Self {
        Self {
            generator,
            config,
            prompts: PromptBuilder::new(config),
        }
    }

    /// Generates the quiz and serializes it to the stored XML form.
    pub async fn generate(&self, chunks: &[String], request: &GenerationRequest) -> Result<String, QuizError> {
        let collection = self.assemble(chunks, request).await?;
        Ok(collection.to_xml()?)
    }

    pub async fn assemble(&self, chunks: &[String], request: &GenerationRequest) -> Result<QuestionCollection, QuizError> {
        let question_number = request.question_number;
        let mut result = QuestionCollection::new();
        if question_number == 0 {
            return Ok(result);
        }
        if chunks.is_empty() {
            return Err(QuizError::NoChunks);
        }

        let avg_chunk_size = average_chunk_size(chunks);
        let mut order: Vec<usize> = (0..chunks.len()).collect();
        order.shuffle(&mut rng());

        let solve_math = request.question_types.contains(&QuestionType::MathProblem);

        for index in order {
            let chunk = &chunks[index];
            let per_chunk = questions_for_chunk(question_number, chunks.len(), chunk.chars().count(), avg_chunk_size);
            let count = type_counts(self.config, &request.difficulty, &request.question_types, per_chunk)
                .map_or(QuestionCount::Total(per_chunk), QuestionCount::PerType);

            tracing::debug!(chunk = index, requested = count.total(), "generating questions for chunk");
            let prompt = self.prompts.question_generation(chunk, &count, request);
            let raw = self.generator.generate(&prompt).await?;

            let mut current = parse_model_output(&raw)?;
            if solve_math {
                self.solve_math_problems(&mut current).await?;
            }

            let remaining = question_number - result.len();
            if current.len() > remaining {
                current.truncate(remaining);
                result.extend(current.into_questions());
                tracing::info!(questions = result.len(), "enough questions generated, stopping early");
                break;
            }
            result.extend(current.into_questions());
            if result.len() == question_number {
                tracing::info!(questions = result.len(), "enough questions generated, stopping early");
                break;
            }
        }

        if result.len() < question_number {
            top_up(&mut result, question_number)?;
        }

        Ok(result)
    }

    async fn solve_math_problems(&self, collection: &mut QuestionCollection) -> Result<(), QuizError> {
        for record in collection.questions_mut() {
            if QuestionType::from_wire_name(&record.kind) != Some(QuestionType::MathProblem) {
                continue;
            }

            let raw = self.generator.generate(&self.prompts.math_solver(&record.text)).await?;
            let answer = extract_numeric_answer(&raw);
            if answer == EMPTY_ANSWER {
                tracing::warn!(question = %record.text, "could not extract an answer for math problem");
            }
            record.set_answers(vec![answer]);
        }
        Ok(())
    }
}

/// Parses a generation pass. Text around the `<questions>` element is ignored,
/// anything else that does not parse is fatal.
fn parse_model_output(raw: &str) -> Result<QuestionCollection, QuizError> {
    const CLOSING: &str = "</questions>";

    let xml = match raw.find("<questions") {
        Some(start) => match raw.rfind(CLOSING) {
            Some(end) if end > start => &raw[start..end + CLOSING.len()],
            _ => &raw[start..],
        },
        None => raw,
    };

    QuestionCollection::from_xml(xml).map_err(|error| {
        tracing::warn!(error = &error as &dyn std::error::Error, "model returned malformed question xml");
        QuizError::MalformedModelOutput(error)
    })
}

/// Fills the shortfall with copies drawn uniformly, with replacement, from what
/// was generated so far.
fn top_up(result: &mut QuestionCollection, question_number: usize) -> Result<(), QuizError> {
    if result.is_empty() {
        return Err(QuizError::NothingToTopUp {
            requested: question_number,
        });
    }

    let shortfall = question_number - result.len();
    tracing::warn!(shortfall, "not enough questions generated, duplicating existing ones");

    let pool = result.questions().to_vec();
    let mut rng = rng();
    let duplicates: Vec<QuestionRecord> = (0..shortfall)
        .filter_map(|_| pool.choose(&mut rng).cloned())
        .collect();
    result.extend(duplicates);
    Ok(())
}
