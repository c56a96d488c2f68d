use crate::core::{routing::route_by_keyword, scoring::score_club, tokenize::tokenize};
use crate::models::{Catalog, MatchPolicy, ScoredClub};

/// Default cap on the number of clubs handed to the explainer
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Deterministic club matcher
///
/// Pure function of (query, catalog, policy): no I/O, no randomness, no
/// shared mutable state. The same query against the same catalog always
/// produces the same ordered result, and every returned club comes straight
/// from the catalog.
#[derive(Debug, Clone)]
pub struct Matcher {
    policy: MatchPolicy,
    max_results: usize,
}

impl Matcher {
    pub fn new(policy: MatchPolicy, max_results: usize) -> Self {
        Self {
            policy,
            max_results,
        }
    }

    pub fn with_default_policy() -> Self {
        Self {
            policy: MatchPolicy::default(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }

    /// Select the best-matching clubs for a free-text query
    ///
    /// Scoring policy: rank the catalog by weighted token hits, drop zero
    /// scores, order by descending score with catalog order breaking ties
    /// (stable sort), and truncate to `max_results`.
    ///
    /// Keyword policy: first recognized trigger token decides the result.
    ///
    /// An empty result is the fallback for both policies; the caller decides
    /// how to phrase "no match" to the user.
    pub fn match_clubs(&self, query: &str, catalog: &Catalog) -> Vec<ScoredClub> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        match &self.policy {
            MatchPolicy::Scoring(weights) => {
                let mut scored: Vec<ScoredClub> = catalog
                    .clubs()
                    .iter()
                    .filter_map(|club| {
                        let score = score_club(&tokens, club, weights);
                        (score > 0).then(|| ScoredClub {
                            club: club.clone(),
                            score,
                        })
                    })
                    .collect();

                // Stable: equal scores keep catalog order
                scored.sort_by(|a, b| b.score.cmp(&a.score));
                scored.truncate(self.max_results);
                scored
            }
            MatchPolicy::Keyword(map) => {
                let mut routed = route_by_keyword(&tokens, map, catalog);
                routed.truncate(self.max_results);
                routed
            }
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_policy()
    }
}
