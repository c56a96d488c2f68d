use crate::models::{Catalog, Club};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the club catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate club name in catalog: {0}")]
    DuplicateName(String),

    #[error("catalog is empty")]
    Empty,
}

/// Load the club catalog from a JSON file
///
/// The file is a JSON array of club records. Names must be unique; the file
/// order is preserved and becomes the ranking tie-break order. Called once at
/// startup, the result is then read-only for the process lifetime.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    let clubs: Vec<Club> = serde_json::from_str(&raw)?;

    if clubs.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen = HashSet::new();
    for club in &clubs {
        if !seen.insert(club.name.as_str()) {
            return Err(CatalogError::DuplicateName(club.name.clone()));
        }
    }

    tracing::debug!("Loaded {} clubs from catalog", clubs.len());

    Ok(Catalog::new(clubs))
}
