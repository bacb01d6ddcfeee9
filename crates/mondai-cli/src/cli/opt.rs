use clap::{Parser, Subcommand};
use mondai_utils::args::llm::LlmServices;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mondai", about = "Generate quizzes from documents and play them")]
pub(crate) struct Cli {
    #[arg(short, long, global = true)]
    pub(crate) debug: bool,

    #[arg(long, env = "MONDAI_DATABASE_URL", default_value = "sqlite://mondai.db?mode=rwc", global = true)]
    pub(crate) database_url: String,

    #[arg(short, long, env = "MONDAI_CONFIG", global = true, help = "Quiz configuration file")]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Generate a quiz from a document and store it
    Generate(Generate),

    /// Play a stored quiz
    Play(Play),

    /// Print the stored XML of a quiz
    Export(Export),
}

#[derive(Debug, Parser)]
pub(crate) struct Generate {
    #[arg(required = true)]
    pub(crate) file: PathBuf,

    #[arg(long, help = "Quiz name, defaults to the file name")]
    pub(crate) name: Option<String>,

    #[arg(
        short = 'n',
        long,
        default_value_t = 10,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..),
        help = "Number of questions, at least one"
    )]
    pub(crate) questions: usize,

    #[arg(long, default_value = "Medium")]
    pub(crate) difficulty: String,

    #[arg(
        long = "type",
        value_delimiter = ',',
        help = "Question types to generate, defaults to all configured types"
    )]
    pub(crate) types: Vec<String>,

    #[arg(long)]
    pub(crate) single_options: Option<usize>,

    #[arg(long)]
    pub(crate) multiple_options: Option<usize>,

    #[command(flatten)]
    pub(crate) llm: LlmServices,
}

#[derive(Debug, Parser)]
pub(crate) struct Play {
    #[arg(required = true)]
    pub(crate) key: String,

    #[arg(long, help = "Seed of the question order, random by default")]
    pub(crate) seed: Option<u64>,
}

#[derive(Debug, Parser)]
pub(crate) struct Export {
    #[arg(required = true)]
    pub(crate) key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(args: &[&str]) -> Result<Generate, clap::Error> {
        let cli = Cli::try_parse_from(["mondai", "generate", "doc.txt"].iter().chain(args))?;
        match cli.command {
            Commands::Generate(generate) => Ok(generate),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_question_count_defaults_to_ten() {
        assert_eq!(generate(&[]).unwrap().questions, 10);
        assert_eq!(generate(&["-n", "3"]).unwrap().questions, 3);
    }

    #[test]
    fn test_zero_questions_are_rejected() {
        let error = generate(&["-n", "0"]).unwrap_err();
        assert_eq!(error.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(generate(&["--questions", "-2"]).is_err());
    }
}
