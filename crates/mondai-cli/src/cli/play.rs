use crate::cli::play::prompt::AnswerPrompt;
use crate::opt::Play;
use anyhow::Error;
use mondai_config::quiz::QuizConfig;
use mondai_core::quiz::error::{ReplayError, ScoringError};
use mondai_core::quiz::evaluation::{Grade, Response, Verdict};
use mondai_core::quiz::replay::{QuestionSet, ReplayState, ReplayStatus};
use mondai_db::quiz::Query;
use mondai_db::sea_orm::DatabaseConnection;
use mondai_model::quiz::question::{Question, QuestionType};
use rand::Rng;
use reedline::{Reedline, Signal};

pub(crate) mod prompt;

const MAX_SEED: u64 = 2_000_000;

enum Input {
    Exit,
    Answer(String),
}

fn read_input(line_editor: &mut Reedline, position: &str) -> Result<Input, Error> {
    let prompt = AnswerPrompt::new(position.to_owned());
    match line_editor.read_line(&prompt)? {
        Signal::Success(line) if line.trim() == "/exit" => Ok(Input::Exit),
        Signal::Success(line) => Ok(Input::Answer(line)),
        Signal::CtrlD | Signal::CtrlC => Ok(Input::Exit),
    }
}

/// Turns a typed line into a response. Options can be picked by number or by text,
/// several options are separated by commas.
fn parse_response(question: &Question, input: &str) -> Response {
    let options = question.options();
    let pick = |token: &str| -> String {
        let token = token.trim();
        token
            .parse::<usize>()
            .ok()
            .and_then(|number| number.checked_sub(1))
            .and_then(|index| options.get(index))
            .map_or_else(|| token.to_owned(), |option| (*option).to_owned())
    };

    match question.kind() {
        QuestionType::MultipleCorrect => Response::Selection(
            input
                .split(',')
                .map(pick)
                .filter(|option| !option.is_empty())
                .collect(),
        ),
        QuestionType::SingleCorrect | QuestionType::TrueFalse => Response::Text(pick(input)),
        QuestionType::NoChoice | QuestionType::MathProblem => Response::Text(input.trim().to_owned()),
    }
}

fn verdict_message(verdict: &Verdict) -> String {
    let expected = match verdict.expected.as_slice() {
        [single] => single.clone(),
        many => format!("{many:?}"),
    };
    match verdict.grade {
        Grade::Correct => "Correct answer".to_owned(),
        Grade::PartiallyCorrect => format!("Partially correct answer. Should be: {:?}", verdict.expected),
        Grade::Incorrect => format!("Incorrect answer. Should be: {expected}"),
    }
}

fn print_question(state: &ReplayState, index: usize, question: &Question) {
    println!();
    println!("Question {} out of {}", index + 1, state.question_set().len());
    println!("Score: {:.2}% / 100%", state.percentage());
    println!("{}", question.text());
    for (number, option) in question.options().iter().enumerate() {
        println!("  {}) {option}", number + 1);
    }
    if question.kind() == QuestionType::MultipleCorrect {
        println!("(pick all correct options, separated by commas)");
    }
}

pub(crate) async fn play(opt: Play, config: &QuizConfig, db: &DatabaseConnection) -> Result<(), Error> {
    let Some(quiz) = Query::get_quiz_by_key(db, &opt.key).await? else {
        println!("This quiz does not exist! Check if your key is valid.");
        return Ok(());
    };

    let seed = opt.seed.unwrap_or_else(|| rand::rng().random_range(0..=MAX_SEED));
    let set = QuestionSet::from_xml(&quiz.quiz_xml, seed, &config.question_types)?;
    tracing::debug!(key = %quiz.key, seed, "starting quiz");

    println!("{} (seed {seed})", quiz.name);
    println!("Type /exit to leave.");

    let mut state = ReplayState::new(set);
    let mut line_editor = Reedline::create();

    loop {
        match state.status() {
            ReplayStatus::InProgress { index, .. } => {
                let Some(question) = state.current().cloned() else {
                    break;
                };
                print_question(&state, index, &question);

                let position = format!("{}/{} ", index + 1, state.question_set().len());
                let Input::Answer(line) = read_input(&mut line_editor, &position)? else {
                    println!("\nAborted!");
                    break;
                };

                match state.submit(&parse_response(&question, &line)) {
                    Ok(verdict) => println!("{}", verdict_message(verdict)),
                    Err(ReplayError::Scoring(ScoringError::EmptyResponse)) => {
                        println!("Please select an option before submitting.");
                        continue;
                    }
                    Err(error) => return Err(error.into()),
                }
                state.advance()?;
            }
            ReplayStatus::Completed => {
                println!();
                println!("Quiz completed!");
                println!("Your score is: {:.2}% / 100%", state.percentage());
                println!("Restart? [y/N]");

                match read_input(&mut line_editor, "")? {
                    Input::Answer(line) if line.trim().eq_ignore_ascii_case("y") => state.restart(),
                    _ => break,
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mondai_model::quiz::question::{
        MathProblemQuestion, MultipleCorrectQuestion, SingleCorrectQuestion, TrueFalseQuestion,
    };

    fn options(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn test_pick_single_option_by_number_or_text() {
        let question = Question::SingleCorrect(SingleCorrectQuestion {
            text: "Symbol of gold?".to_owned(),
            options: options(&["Ag", "Au", "Gd"]),
            answer: "Au".to_owned(),
        });

        assert_eq!(parse_response(&question, "2"), Response::Text("Au".to_owned()));
        assert_eq!(parse_response(&question, " Gd "), Response::Text("Gd".to_owned()));
        assert_eq!(parse_response(&question, "7"), Response::Text("7".to_owned()));
        assert_eq!(parse_response(&question, "0"), Response::Text("0".to_owned()));
    }

    #[test]
    fn test_pick_true_false() {
        let question = Question::TrueFalse(TrueFalseQuestion {
            text: "The sun is a star.".to_owned(),
            answer: "true".to_owned(),
        });
        assert_eq!(parse_response(&question, "1"), Response::Text("True".to_owned()));
        assert_eq!(parse_response(&question, "false"), Response::Text("false".to_owned()));
    }

    #[test]
    fn test_pick_multiple_options() {
        let question = Question::MultipleCorrect(MultipleCorrectQuestion {
            text: "Noble gases?".to_owned(),
            options: options(&["Neon", "Oxygen", "Argon"]),
            answers: options(&["Neon", "Argon"]),
        });

        assert_eq!(
            parse_response(&question, "1, 3"),
            Response::Selection(options(&["Neon", "Argon"]))
        );
        assert_eq!(parse_response(&question, " , "), Response::Selection(vec![]));
    }

    #[test]
    fn test_math_input_is_kept() {
        let question = Question::MathProblem(MathProblemQuestion {
            text: "6 * 9?".to_owned(),
            answer: "54".to_owned(),
        });
        assert_eq!(parse_response(&question, " 2 "), Response::Text("2".to_owned()));
    }

    #[test]
    fn test_verdict_messages() {
        let correct = Verdict {
            score: 1.0,
            grade: Grade::Correct,
            expected: options(&["Au"]),
        };
        assert_eq!(verdict_message(&correct), "Correct answer");

        let incorrect = Verdict {
            score: 0.0,
            grade: Grade::Incorrect,
            expected: options(&["Au"]),
        };
        assert_eq!(verdict_message(&incorrect), "Incorrect answer. Should be: Au");

        let partial = Verdict {
            score: 0.5,
            grade: Grade::PartiallyCorrect,
            expected: options(&["Neon", "Argon"]),
        };
        assert_eq!(
            verdict_message(&partial),
            "Partially correct answer. Should be: [\"Neon\", \"Argon\"]"
        );
    }
}
