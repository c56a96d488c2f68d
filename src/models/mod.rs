// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Catalog, Club, KeywordMap, MatchPolicy, ScoredClub, ScoringWeights};
pub use requests::ChatRequest;
pub use responses::{ChatResponse, ClubSummary, ErrorResponse, HealthResponse};
