pub mod host;
pub mod llm;
