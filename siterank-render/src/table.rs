//! Plain-text rendering of the ranked city table.

use siterank_scorer::Ranking;

/// Render the ranking as an aligned two-column table, best city first.
///
/// Scores are percentages of the best city's total weighted distance, so
/// the header mirrors the summary-table column name.
#[must_use]
pub fn ranking_table(ranking: &Ranking) -> String {
    let width = ranking
        .entries()
        .iter()
        .map(|entry| entry.city.len())
        .max()
        .map_or(4, |longest| longest.max(4));

    let mut out = String::new();
    out.push_str(&format!("{:<width$}  % avg distance\n", "City"));
    for entry in ranking.entries() {
        out.push_str(&format!("{:<width$}  {}\n", entry.city, entry.score));
    }
    out
}
