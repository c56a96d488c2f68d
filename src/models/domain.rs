use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single student organization from the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Club {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Immutable, ordered club catalog
///
/// Loaded once at startup and never mutated. Clubs keep their file order,
/// which doubles as the tie-break order during ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    clubs: Vec<Club>,
}

impl Catalog {
    pub fn new(clubs: Vec<Club>) -> Self {
        Self { clubs }
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clubs.is_empty()
    }

    /// Look up a club by exact name
    pub fn get(&self, name: &str) -> Option<&Club> {
        self.clubs.iter().find(|c| c.name == name)
    }

    /// True if a club with this exact name exists in the catalog
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// A club paired with its relevance score for a query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredClub {
    pub club: Club,
    pub score: u32,
}

/// Per-field weights for the scoring strategy
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub tags: u32,
    pub description: u32,
    pub name: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            tags: 3,
            description: 2,
            name: 1,
        }
    }
}

/// Trigger word -> club names, for the keyword routing strategy
pub type KeywordMap = HashMap<String, Vec<String>>;

/// Matching strategy, selected by configuration
///
/// Scoring ranks the whole catalog by weighted token hits; Keyword routes a
/// query straight to a fixed club list on the first recognized trigger word.
/// The two are mutually exclusive and never mixed within a request.
#[derive(Debug, Clone)]
pub enum MatchPolicy {
    Scoring(ScoringWeights),
    Keyword(KeywordMap),
}

impl Default for MatchPolicy {
    fn default() -> Self {
        MatchPolicy::Scoring(ScoringWeights::default())
    }
}
