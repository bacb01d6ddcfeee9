use crate::quiz::{ChunkingConfig, Distribution, OptionCountConfig, QuizConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct QuizConfigV01 {
    #[serde(default = "default_file_types")]
    pub file_types: Vec<String>,
    #[serde(default = "default_difficulty_levels")]
    pub difficulty_levels: Vec<String>,
    #[serde(default = "default_question_types")]
    pub question_types: Vec<String>,
    #[serde(default)]
    pub chunking: ChunkingConfig,
    #[serde(default)]
    pub options: OptionCountConfig,
    #[serde(default = "default_distribution")]
    pub distribution: Distribution,
}

fn default_file_types() -> Vec<String> {
    QuizConfig::default().file_types
}

fn default_difficulty_levels() -> Vec<String> {
    QuizConfig::default().difficulty_levels
}

fn default_question_types() -> Vec<String> {
    QuizConfig::default().question_types
}

fn default_distribution() -> Distribution {
    QuizConfig::default().distribution
}
