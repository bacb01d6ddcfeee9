use crate::quiz::v01::QuizConfigV01;
use indexmap::IndexMap;
use mondai_utils::loader::{LoaderTrait, error::LoadingError};
use serde::Deserialize;
use std::fmt::Debug;
use std::path::Path;

pub mod v01;

pub const DEFAULT_CHUNK_SIZE: usize = 4096;
pub const DEFAULT_CHUNK_OVERLAP: usize = 256;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
#[serde(tag = "version")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { mondai: QuizConfigV01 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ChunkingConfig {
    pub size: usize,
    pub overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct OptionCountConfig {
    pub single: usize,
    pub multiple: usize,
}

impl Default for OptionCountConfig {
    fn default() -> Self {
        Self { single: 4, multiple: 5 }
    }
}

/// Difficulty name -> (question type wire name -> weight).
pub type Distribution = IndexMap<String, IndexMap<String, f64>>;

#[derive(Clone, Debug)]
pub struct QuizConfig {
    pub file_types: Vec<String>,
    pub difficulty_levels: Vec<String>,
    pub question_types: Vec<String>,
    pub chunking: ChunkingConfig,
    pub options: OptionCountConfig,
    pub distribution: Distribution,
}

impl Default for QuizConfig {
    fn default() -> Self {
        let weights = |entries: [(&str, f64); 5]| -> IndexMap<String, f64> {
            entries.into_iter().map(|(name, weight)| (name.to_owned(), weight)).collect()
        };

        Self {
            file_types: vec!["txt".to_owned(), "pdf".to_owned(), "docx".to_owned()],
            difficulty_levels: vec!["Easy".to_owned(), "Medium".to_owned(), "Hard".to_owned()],
            question_types: vec![
                "Single Correct".to_owned(),
                "Multiple Correct".to_owned(),
                "True/False".to_owned(),
                "No Choice".to_owned(),
                "Math Problem".to_owned(),
            ],
            chunking: ChunkingConfig::default(),
            options: OptionCountConfig::default(),
            distribution: IndexMap::from([
                (
                    "Easy".to_owned(),
                    weights([
                        ("Single Correct", 0.35),
                        ("Multiple Correct", 0.1),
                        ("True/False", 0.35),
                        ("No Choice", 0.15),
                        ("Math Problem", 0.05),
                    ]),
                ),
                (
                    "Medium".to_owned(),
                    weights([
                        ("Single Correct", 0.3),
                        ("Multiple Correct", 0.25),
                        ("True/False", 0.15),
                        ("No Choice", 0.2),
                        ("Math Problem", 0.1),
                    ]),
                ),
                (
                    "Hard".to_owned(),
                    weights([
                        ("Single Correct", 0.2),
                        ("Multiple Correct", 0.35),
                        ("True/False", 0.05),
                        ("No Choice", 0.25),
                        ("Math Problem", 0.15),
                    ]),
                ),
            ]),
        }
    }
}

impl From<QuizConfigV01> for QuizConfig {
    fn from(value: QuizConfigV01) -> Self {
        Self {
            file_types: value.file_types.into_iter().map(|ext| ext.to_lowercase()).collect(),
            difficulty_levels: value.difficulty_levels,
            question_types: value.question_types,
            chunking: value.chunking,
            options: value.options,
            distribution: value.distribution,
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub fn allows_file_type(&self, extension: &str) -> bool {
        self.file_types.iter().any(|allowed| allowed.eq_ignore_ascii_case(extension))
    }

    /// The configured spelling of `difficulty`, if it is one of the allowed levels.
    #[must_use]
    pub fn difficulty(&self, difficulty: &str) -> Option<&str> {
        self.difficulty_levels
            .iter()
            .find(|level| level.eq_ignore_ascii_case(difficulty))
            .map(String::as_str)
    }

    /// Type weights configured for `difficulty`, matched case-insensitively.
    #[must_use]
    pub fn type_weights(&self, difficulty: &str) -> Option<&IndexMap<String, f64>> {
        self.distribution
            .iter()
            .find(|(level, _)| level.eq_ignore_ascii_case(difficulty))
            .map(|(_, weights)| weights)
    }
}

pub async fn load<L: LoaderTrait, P: AsRef<Path> + Debug>(loader: &L, path: P) -> Result<QuizConfig, LoadingError> {
    tracing::debug!(?path, "Loading quiz config");
    let file = loader.load_file(path).await?;
    let VersionConfig::V01 { mondai } = serde_yml::from_slice::<VersionConfig>(&file.content)?;

    let config: QuizConfig = mondai.into();
    tracing::debug!(?config, "loaded quiz configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mondai_utils::loader::file_system::FileSystemLoader;
    use std::fs::read_to_string;
    use std::path::PathBuf;
    use test_log::test;

    #[test]
    fn test_config_parsing() {
        let file = read_to_string("test_configs/test.quiz.yaml").unwrap();
        let VersionConfig::V01 { mondai } = serde_yml::from_str::<VersionConfig>(&file).unwrap();
        let config: QuizConfig = mondai.into();

        assert_eq!(config.file_types, vec!["txt", "pdf"]);
        assert_eq!(config.chunking, ChunkingConfig { size: 2048, overlap: 128 });
        assert_eq!(config.options, OptionCountConfig { single: 3, multiple: 4 });
        assert_eq!(config.question_types.len(), 5);
        assert_eq!(config.difficulty("hard"), Some("Hard"));
        assert_eq!(config.difficulty("impossible"), None);

        let easy = config.type_weights("easy").unwrap();
        assert_eq!(easy.get("True/False"), Some(&0.5));
        assert!(config.type_weights("Medium").is_none());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let res = serde_yml::from_str::<VersionConfig>(
            r#"
version: "0.1"
mondai:
  file-types: [txt]
  colour: blue
"#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let VersionConfig::V01 { mondai } = serde_yml::from_str::<VersionConfig>(
            r#"
version: "0.1"
mondai:
  file-types: [TXT]
"#,
        )
        .unwrap();
        let config: QuizConfig = mondai.into();
        let default = QuizConfig::default();

        assert!(config.allows_file_type("txt"));
        assert!(!config.allows_file_type("pdf"));
        assert_eq!(config.chunking, default.chunking);
        assert_eq!(config.question_types, default.question_types);
        assert_eq!(config.distribution, default.distribution);
    }

    #[test(tokio::test)]
    async fn test_load_shipped_config() {
        let loader = FileSystemLoader::new(PathBuf::from("../../config"));
        let config = load(&loader, "mondai.yaml").await.unwrap();
        let default = QuizConfig::default();

        assert_eq!(config.file_types, default.file_types);
        assert!(config.allows_file_type("docx"));
        assert_eq!(config.difficulty_levels, default.difficulty_levels);
        assert_eq!(config.question_types, default.question_types);
        assert_eq!(config.chunking, default.chunking);
        assert_eq!(config.options, default.options);
        assert_eq!(config.distribution, default.distribution);
    }
}
