//! Nearest-column suggestion via Jaro-Winkler similarity

use rapidfuzz::distance::jaro_winkler;

/// Similarity must be strictly above this to qualify as a suggestion
const SUGGESTION_THRESHOLD: f64 = 0.9;

/// Find the existing column closest to `target`.
///
/// Comparison is case-insensitive. Returns the candidate with the highest
/// similarity, and only when that similarity is strictly greater than 0.9.
/// Ties keep the first candidate seen.
pub fn suggest_column<'a, I>(target: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let target_lower = target.to_lowercase();
    let mut best: Option<(f64, &'a String)> = None;

    for candidate in candidates {
        let score = jaro_winkler::similarity(
            target_lower.chars(),
            candidate.to_lowercase().chars(),
        );
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((score, candidate));
        }
    }

    best.filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .map(|(_, candidate)| candidate.clone())
}

#[cfg(test)]
#[path = "similarity_test.rs"]
mod tests;
