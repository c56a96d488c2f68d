// Service exports
pub mod catalog;
pub mod ollama;

pub use catalog::{load_catalog, CatalogError};
pub use ollama::{build_prompt, ExplainerError, OllamaClient};
