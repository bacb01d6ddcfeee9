pub mod llm_config;
pub mod openai;
pub mod prompt;
pub mod quiz;
pub mod reader;
