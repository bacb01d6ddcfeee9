pub mod llm;
pub mod quiz;
