use std::collections::BTreeMap;

use mondai_config::quiz::QuizConfig;
use mondai_model::quiz::question::QuestionType;

use crate::quiz::generation::GenerationRequest;

/// Messages sent to the model in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: Option<String>,
    pub user: Vec<String>,
}

/// How many questions a single generation pass asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionCount {
    Total(usize),
    PerType(BTreeMap<QuestionType, usize>),
}

impl QuestionCount {
    #[must_use]
    pub fn total(&self) -> usize {
        match self {
            QuestionCount::Total(total) => *total,
            QuestionCount::PerType(per_type) => per_type.values().sum(),
        }
    }
}

const MATH_SOLVER_EXAMPLE: &str = "
Here is an example of how to solve a problem and format the answer.

Problem: A train travels 180 km in 2.5 hours. What is its average speed in km/h?

<thinking>
Average speed is distance divided by time: 180 / 2.5 = 72.
</thinking>
<answer>72</answer>
";

#[derive(Debug, Clone)]
pub struct PromptBuilder {
    question_types: Vec<String>,
    difficulty_levels: Vec<String>,
}

impl PromptBuilder {
    #[must_use]
    pub fn new(config: &QuizConfig) -> Self {
        Self {
            question_types: config.question_types.clone(),
            difficulty_levels: config.difficulty_levels.clone(),
        }
    }

    #[must_use]
    pub fn question_generation(&self, document: &str, count: &QuestionCount, request: &GenerationRequest) -> Prompt {
        let question_types = request
            .question_types
            .iter()
            .map(|kind| format!("'{kind}'"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut user = format!(
            "The difficulty level for these questions should be {}.\n\
             Only generate questions of the following types: {question_types}.\n\
             Generate exactly {} options for 'Single Correct' questions.\n\
             Generate exactly {} options for 'Multiple Correct' questions.\n",
            request.difficulty, request.single_option_number, request.multiple_option_number
        );

        match count {
            QuestionCount::Total(total) => {
                user.push_str(&format!("You need to generate {total} questions based on this text:\n"));
            }
            QuestionCount::PerType(per_type) => {
                user.push_str(&format!(
                    "You need to generate {} questions based on this text, with this many questions per type:\n",
                    count.total()
                ));
                let lines: String = per_type.iter().map(|(kind, number)| format!("- '{kind}': {number}\n")).collect();
                user.push_str(&lines);
            }
        }

        user.push_str(&format!(
            "\n<document>\n{document}\n</document>\n\n\
             Keep every question at the requested difficulty. Harder questions should combine several ideas \
             from the text or require deeper analysis of it.\n\
             Check that every question can be answered from the document alone and that the XML is valid.\n\
             Respond with the XML only, without any additional text."
        ));

        Prompt {
            system: Some(self.question_generation_system()),
            user: vec![user],
        }
    }

    #[must_use]
    pub fn math_solver(&self, problem: &str) -> Prompt {
        Prompt {
            system: None,
            user: vec![
                MATH_SOLVER_EXAMPLE.trim().to_owned(),
                format!(
                    "Solve the following problem. Reason step by step inside <thinking></thinking> tags, then \
                     give only the final numeric result inside <answer></answer> tags, without units.\n\n\
                     Problem: {problem}"
                ),
            ],
        }
    }

    fn question_generation_system(&self) -> String {
        format!(
            "You generate quiz questions from a text document. Create the requested number of questions \
             with the requested difficulty and types, and answer in the XML format described below.\n\n\
             You can only generate questions of these types: {:?}\n\
             You can only generate questions of these difficulty levels: {:?}\n\n\
             Requirements per question type:\n\
             1. 'Single Correct': exactly the requested number of options, exactly one of them is the answer.\n\
             2. 'Multiple Correct': exactly the requested number of options, at least two of them are answers.\n\
             3. 'True/False': a statement that is either true or false. The answer is true or false.\n\
             4. 'No Choice': a question without options that is answered with one word or number.\n\
             5. 'Math Problem': a calculation grounded in the text whose answer is a single number.\n\n\
             Use this XML format and nothing else:\n\
             <questions>\n\
             \x20 <question>\n\
             \x20   <type>[question type]</type>\n\
             \x20   <text>[question text]</text>\n\
             \x20   <options>\n\
             \x20     <option>[option text]</option>\n\
             \x20   </options>\n\
             \x20   <answers>\n\
             \x20     <answer>[answer text]</answer>\n\
             \x20   </answers>\n\
             \x20 </question>\n\
             </questions>\n\
             Repeat <option> for every option and <answer> for every answer. Leave out <options> for \
             questions without options.",
            self.question_types, self.difficulty_levels
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest::builder()
            .question_number(6)
            .difficulty("Medium")
            .question_types(vec![QuestionType::SingleCorrect, QuestionType::MathProblem])
            .single_option_number(4)
            .multiple_option_number(5)
            .build()
    }

    #[test]
    fn test_flat_generation_prompt() {
        let builder = PromptBuilder::new(&QuizConfig::default());
        let prompt = builder.question_generation("The mitochondrion is ...", &QuestionCount::Total(3), &request());

        let system = prompt.system.unwrap();
        assert!(system.contains("<questions>"));
        assert!(system.contains("Math Problem"));

        let [user] = prompt.user.as_slice() else {
            panic!("expected a single user message");
        };
        assert!(user.contains("difficulty level for these questions should be Medium"));
        assert!(user.contains("'Single Correct', 'Math Problem'"));
        assert!(user.contains("generate 3 questions"));
        assert!(user.contains("<document>\nThe mitochondrion is ...\n</document>"));
    }

    #[test]
    fn test_per_type_generation_prompt() {
        let builder = PromptBuilder::new(&QuizConfig::default());
        let count = QuestionCount::PerType(BTreeMap::from([
            (QuestionType::SingleCorrect, 2),
            (QuestionType::MathProblem, 1),
        ]));
        assert_eq!(count.total(), 3);

        let prompt = builder.question_generation("text", &count, &request());
        let user = &prompt.user[0];
        assert!(user.contains("- 'Single Correct': 2"));
        assert!(user.contains("- 'Math Problem': 1"));
    }

    #[test]
    fn test_math_solver_prompt() {
        let builder = PromptBuilder::new(&QuizConfig::default());
        let prompt = builder.math_solver("What is 3 * 7?");

        assert!(prompt.system.is_none());
        assert_eq!(prompt.user.len(), 2);
        assert!(prompt.user[0].contains("<answer>72</answer>"));
        assert!(prompt.user[1].ends_with("Problem: What is 3 * 7?"));
    }
}
