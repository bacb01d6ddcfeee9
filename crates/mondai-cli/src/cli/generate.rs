use crate::opt::Generate;
use anyhow::{Error, anyhow};
use mondai_config::quiz::QuizConfig;
use mondai_core::llm_config::LlmConfig;
use mondai_core::openai::{CallConfig, OpenAiGenerator};
use mondai_core::quiz::generation::{GenerationRequest, QuizGenerator};
use mondai_core::reader::read_chunks;
use mondai_db::quiz::Mutation;
use mondai_db::sea_orm::DatabaseConnection;
use mondai_model::quiz::question::QuestionType;
use mondai_utils::loader::LoaderTrait;
use mondai_utils::loader::file_system::FileSystemLoader;

fn question_types(requested: &[String], config: &QuizConfig) -> Result<Vec<QuestionType>, Error> {
    let names = if requested.is_empty() {
        &config.question_types
    } else {
        requested
    };

    names
        .iter()
        .map(|name| {
            if !config.question_types.iter().any(|allowed| allowed.eq_ignore_ascii_case(name.trim())) {
                return Err(anyhow!(
                    "Question type `{name}` is not allowed. Allowed types: {:?}",
                    config.question_types
                ));
            }
            Ok(name.parse::<QuestionType>()?)
        })
        .collect()
}

pub(crate) async fn generate(opt: Generate, config: &QuizConfig, db: &DatabaseConnection) -> Result<(), Error> {
    let difficulty = config.difficulty(&opt.difficulty).ok_or_else(|| {
        anyhow!(
            "Unknown difficulty `{}`. Allowed difficulties: {:?}",
            opt.difficulty,
            config.difficulty_levels
        )
    })?;

    let request = GenerationRequest::builder()
        .question_number(opt.questions)
        .difficulty(difficulty)
        .question_types(question_types(&opt.types, config)?)
        .single_option_number(opt.single_options.unwrap_or(config.options.single))
        .multiple_option_number(opt.multiple_options.unwrap_or(config.options.multiple))
        .build();

    let (loader, file_name) = FileSystemLoader::for_file(&opt.file)?;
    let file = loader.load_file(&file_name).await?;
    let name = opt
        .name
        .or_else(|| file.file_stem().map(str::to_owned))
        .unwrap_or_else(|| "Quiz".to_owned());

    let chunks = read_chunks(&file, config)?;
    println!("Generating {} questions from {} chunks...", request.question_number, chunks.len());

    let llm_config = LlmConfig::try_from(opt.llm)?;
    let generator = OpenAiGenerator::new(&llm_config, CallConfig::from_timeout(llm_config.timeout));
    let quiz_xml = QuizGenerator::new(&generator, config).generate(&chunks, &request).await?;

    let quiz = Mutation::add_quiz(db, &name, &quiz_xml).await?;
    println!("Quiz `{}` stored. Key: {}", quiz.name, quiz.key);
    Ok(())
}
