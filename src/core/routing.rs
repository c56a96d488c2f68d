use crate::models::{Catalog, KeywordMap, ScoredClub};

/// Route a tokenized query through a static keyword map
///
/// Tokens are scanned in query order; the first one present in the map
/// decides the entire result and later tokens are ignored. The mapped names
/// are resolved against the catalog in catalog order, so a name that does not
/// exist in the catalog can never appear in the output.
pub fn route_by_keyword(tokens: &[String], map: &KeywordMap, catalog: &Catalog) -> Vec<ScoredClub> {
    let Some(names) = tokens.iter().find_map(|t| map.get(t.as_str())) else {
        return Vec::new();
    };

    catalog
        .clubs()
        .iter()
        .filter(|club| names.iter().any(|n| n == &club.name))
        .map(|club| ScoredClub {
            club: club.clone(),
            score: 1,
        })
        .collect()
}
