use crate::models::{Club, ScoringWeights};

/// Tokens shorter than this never score: one- and two-letter words ("i",
/// "a", "we") are substrings of nearly every field and would match the
/// whole catalog.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Compute the relevance score of a club for a tokenized query
///
/// Each token contributes a fixed weight per field it appears in as a
/// substring (case-insensitive): tags, then description, then name. A token
/// hitting several tags still counts the tag field once. Clubs the query
/// never touches score 0 and are excluded by the matcher.
pub fn score_club(tokens: &[String], club: &Club, weights: &ScoringWeights) -> u32 {
    let name = club.name.to_lowercase();
    let description = club.description.to_lowercase();
    let tags: Vec<String> = club.tags.iter().map(|t| t.to_lowercase()).collect();

    let mut score = 0u32;
    for token in tokens {
        if token.chars().count() < MIN_TOKEN_CHARS {
            continue;
        }
        if tags.iter().any(|t| t.contains(token.as_str())) {
            score += weights.tags;
        }
        if description.contains(token.as_str()) {
            score += weights.description;
        }
        if name.contains(token.as_str()) {
            score += weights.name;
        }
    }
    score
}
