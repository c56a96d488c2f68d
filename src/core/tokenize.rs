/// Split a raw query into lowercase, whitespace-delimited tokens
///
/// An empty or all-whitespace query yields an empty token list, which the
/// matcher treats as "no match".
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
