pub mod allocation;
pub mod answer;
pub mod error;
pub mod evaluation;
pub mod generation;
pub mod replay;
