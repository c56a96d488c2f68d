// Core algorithm exports
pub mod matcher;
pub mod routing;
pub mod scoring;
pub mod tokenize;

pub use matcher::{Matcher, DEFAULT_MAX_RESULTS};
pub use routing::route_by_keyword;
pub use scoring::score_club;
pub use tokenize::tokenize;
