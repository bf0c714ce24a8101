//! Typo-tolerant name → id lookup over a catalog.
//!
//! A query is scored against each entry name by aligning it with the closest substring of
//! the name (Levenshtein edits, but leading and trailing name characters are free) and
//! adding a small penalty for how far into the name that substring starts. Scores run
//! from 0.0 (exact) to 1.0 (unrelated); only entries at or under [`MATCH_THRESHOLD`]
//! are considered.

use crate::catalog::CatalogEntry;
use crate::error::CommandError;

/// Worst score still accepted as a match.
pub const MATCH_THRESHOLD: f64 = 0.5;

/// Characters into the name at which the location penalty reaches a full 1.0.
const LOCATION_DISTANCE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    pub id: i64,
    pub score: f64,
}

fn normalize(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Similarity of `query` to `name`; 0.0 is a perfect match, 1.0 no similarity.
pub fn score(query: &str, name: &str) -> f64 {
    let query: Vec<char> = normalize(query).chars().collect();
    let name: Vec<char> = normalize(name).chars().collect();
    if query.is_empty() {
        return 1.0;
    }

    // Cells hold (edits, start of the aligned substring in `name`).
    let mut prev: Vec<(usize, usize)> = (0..=name.len()).map(|j| (0, j)).collect();
    let mut curr: Vec<(usize, usize)> = vec![(0, 0); name.len() + 1];

    for (i, qc) in query.iter().enumerate() {
        curr[0] = (i + 1, 0);
        for (j, nc) in name.iter().enumerate() {
            let substitute = (prev[j].0 + usize::from(qc != nc), prev[j].1);
            let skip_query = (prev[j + 1].0 + 1, prev[j + 1].1);
            let skip_name = (curr[j].0 + 1, curr[j].1);
            curr[j + 1] = substitute.min(skip_query).min(skip_name);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let query_len = query.len() as f64;
    prev.iter()
        .map(|&(edits, start)| edits as f64 / query_len + start as f64 / LOCATION_DISTANCE)
        .fold(1.0, f64::min)
}

/// All entries scoring within the threshold, best first. Equal scores keep corpus order.
pub fn search<'a, T, I>(query: &str, corpus: I) -> Vec<Match>
where
    T: CatalogEntry + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut matches: Vec<Match> = corpus
        .into_iter()
        .map(|entry| Match {
            id: entry.id(),
            score: score(query, entry.name()),
        })
        .filter(|m| m.score <= MATCH_THRESHOLD)
        .collect();
    matches.sort_by(|a, b| a.score.total_cmp(&b.score));
    matches
}

/// Id of the best match for `query`, or `NotFound` when nothing clears the threshold.
pub fn resolve<'a, T, I>(query: &str, corpus: I) -> Result<i64, CommandError>
where
    T: CatalogEntry + 'a,
    I: IntoIterator<Item = &'a T>,
{
    search(query, corpus)
        .first()
        .map(|m| m.id)
        .ok_or_else(|| CommandError::NotFound(query.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;

    fn items(entries: &[(i64, &str)]) -> Vec<CatalogItem> {
        entries
            .iter()
            .map(|(id, name)| CatalogItem {
                id: *id,
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn exact_match_scores_zero() {
        assert_eq!(score("Abyssal whip", "Abyssal whip"), 0.0);
        assert_eq!(score("abyssal   WHIP", "Abyssal whip"), 0.0);
    }

    #[test]
    fn unrelated_names_score_high() {
        assert!(score("twisted bow", "Bronze bar") > MATCH_THRESHOLD);
        assert_eq!(score("", "Bronze bar"), 1.0);
    }

    #[test]
    fn substring_is_penalised_by_position() {
        let at_start = score("dragon", "Dragon dagger");
        let later = score("dragon", "Rune dragon bones");
        assert_eq!(at_start, 0.0);
        assert!(later > 0.0 && later < 0.1, "{later}");
    }

    #[test]
    fn typo_resolves_to_whip() {
        let corpus = items(&[
            (4587, "Dragon scimitar"),
            (4151, "Abyssal whip"),
            (12006, "Abyssal tentacle"),
        ]);
        assert_eq!(resolve("abysal whip", &corpus).unwrap(), 4151);
    }

    #[test]
    fn empty_corpus_is_not_found() {
        let corpus: Vec<CatalogItem> = Vec::new();
        assert!(matches!(
            resolve("whip", &corpus),
            Err(CommandError::NotFound(_))
        ));
    }

    #[test]
    fn nothing_under_threshold_is_not_found() {
        let corpus = items(&[(1, "Bronze bar"), (2, "Iron ore")]);
        assert!(matches!(
            resolve("twisted bow", &corpus),
            Err(CommandError::NotFound(_))
        ));
    }

    #[test]
    fn ties_keep_first_encountered() {
        let corpus = items(&[(10, "Coins"), (20, "Coins"), (30, "coins")]);
        assert_eq!(resolve("coins", &corpus).unwrap(), 10);
    }

    #[test]
    fn resolved_entry_is_within_threshold_and_best() {
        let corpus = items(&[
            (1, "Shark"),
            (2, "Raw shark"),
            (3, "Sharks tooth"),
            (4, "Manta ray"),
            (5, "Dark crab"),
        ]);
        for query in ["shark", "shrk", "raw shark", "dark crb", "manta", "tooth"] {
            let ranked = search(query, &corpus);
            let Ok(id) = resolve(query, &corpus) else {
                assert!(ranked.is_empty());
                continue;
            };
            let chosen = corpus.iter().find(|i| i.id == id).unwrap();
            let chosen_score = score(query, &chosen.name);
            assert!(chosen_score <= MATCH_THRESHOLD);
            for other in &corpus {
                assert!(score(query, &other.name) >= chosen_score, "{query}");
            }
        }
    }
}
