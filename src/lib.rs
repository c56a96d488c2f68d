//! Clubmatch - club matching and explanation service
//!
//! This library matches free-text interest descriptions against a fixed
//! catalog of university clubs and delegates the reply phrasing to a locally
//! hosted LLM. Matching is deterministic and explainable; the LLM never
//! chooses clubs, only describes the ones the matcher selected.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{tokenize, Matcher};
pub use models::{Catalog, Club, MatchPolicy, ScoredClub, ScoringWeights};
