//! Derived views over the record tables
//!
//! Every function here is pure: the same table always yields the same view.
//! Sorts are stable, so ties keep the order in which entries were first seen.

use crate::types::{GameRecord, HalftimeRecord, Margin};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Number of rows shown in the blowout and closest-game tables
pub const TOP_MARGINS: usize = 8;

/// Championships per team, most first
pub fn team_wins(games: &[GameRecord]) -> Vec<(&'static str, usize)> {
    count_by(games.iter().map(|g| g.winner))
}

/// Average combined score per decade ("1960s", "1970s", ...), oldest first,
/// rounded to one decimal place
pub fn decade_averages(games: &[GameRecord]) -> Vec<(String, f64)> {
    let mut buckets: BTreeMap<u16, (u32, u32)> = BTreeMap::new();
    for game in games {
        let entry = buckets.entry(decade_of(game.year)).or_insert((0, 0));
        entry.0 += u32::from(game.combined_score());
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(decade, (total, count))| {
            let mean = f64::from(total) / f64::from(count);
            (format!("{}s", decade), round1(mean))
        })
        .collect()
}

/// Every game with its margin, in table order
pub fn margins(games: &[GameRecord]) -> Vec<Margin> {
    games
        .iter()
        .map(|game| Margin {
            game: *game,
            margin: game.margin(),
        })
        .collect()
}

/// Largest margins first, truncated to `n`
pub fn blowouts(games: &[GameRecord], n: usize) -> Vec<Margin> {
    let mut all = margins(games);
    all.sort_by(|a, b| b.margin.cmp(&a.margin));
    all.truncate(n);
    all
}

/// Smallest margins first, truncated to `n`
pub fn closest_games(games: &[GameRecord], n: usize) -> Vec<Margin> {
    let mut all = margins(games);
    all.sort_by_key(|m| m.margin);
    all.truncate(n);
    all
}

/// Halftime shows per genre label, most first
pub fn genre_breakdown(shows: &[HalftimeRecord]) -> Vec<(&'static str, usize)> {
    count_by(shows.iter().map(|s| s.genre))
}

/// `floor(year / 10) * 10`
pub fn decade_of(year: u16) -> u16 {
    year / 10 * 10
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn count_by(keys: impl Iterator<Item = &'static str>) -> Vec<(&'static str, usize)> {
    let mut counts: IndexMap<&'static str, usize> = IndexMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    let mut sorted: Vec<_> = counts.into_iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{HALFTIME_SHOWS, SUPER_BOWLS};
    use pretty_assertions::assert_eq;

    fn find<'a>(margins: &'a [Margin], id: &str) -> &'a Margin {
        margins.iter().find(|m| m.game.id == id).unwrap()
    }

    #[test]
    fn test_team_wins_sum_to_game_count() {
        let wins = team_wins(SUPER_BOWLS);
        let total: usize = wins.iter().map(|(_, n)| n).sum();
        assert_eq!(total, SUPER_BOWLS.len());
        assert_eq!(total, 59);
    }

    #[test]
    fn test_team_wins_order() {
        let wins = team_wins(SUPER_BOWLS);
        // Steelers reach six first, so they stay ahead of the Patriots
        assert_eq!(wins[0], ("Pittsburgh Steelers", 6));
        assert_eq!(wins[1], ("New England Patriots", 6));
        assert!(wins.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(wins.len(), 23);
    }

    #[test]
    fn test_one_time_champions() {
        let wins = team_wins(SUPER_BOWLS);
        for team in ["New York Jets", "Chicago Bears", "New Orleans Saints"] {
            let (_, n) = wins.iter().find(|(t, _)| *t == team).unwrap();
            assert_eq!(*n, 1, "{}", team);
        }
    }

    #[test]
    fn test_decade_averages_values() {
        let averages = decade_averages(SUPER_BOWLS);
        let expected = vec![
            ("1960s".to_string(), 38.3),
            ("1970s".to_string(), 34.7),
            ("1980s".to_string(), 48.2),
            ("1990s".to_string(), 56.0),
            ("2000s".to_string(), 45.0),
            ("2010s".to_string(), 49.6),
            ("2020s".to_string(), 52.7),
        ];
        assert_eq!(averages, expected);
    }

    #[test]
    fn test_decade_average_is_bucket_mean() {
        for (label, avg) in decade_averages(SUPER_BOWLS) {
            let decade: u16 = label.trim_end_matches('s').parse().unwrap();
            let scores: Vec<f64> = SUPER_BOWLS
                .iter()
                .filter(|g| g.year >= decade && g.year < decade + 10)
                .map(|g| f64::from(g.combined_score()))
                .collect();
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            assert!((avg - mean).abs() <= 0.05, "{}: {} vs {}", label, avg, mean);
        }
    }

    #[test]
    fn test_known_margins() {
        let all = margins(SUPER_BOWLS);
        assert_eq!(all.len(), SUPER_BOWLS.len());
        assert_eq!(find(&all, "XXIV").margin, 45);
        assert_eq!(find(&all, "LIII").margin, 10);
        assert_eq!(find(&all, "XXV").margin, 1);
    }

    #[test]
    fn test_blowouts_descending() {
        let all = margins(SUPER_BOWLS);
        let top = blowouts(SUPER_BOWLS, TOP_MARGINS);
        assert_eq!(top.len(), TOP_MARGINS);
        assert_eq!(top[0].game.id, "XXIV");
        assert!(all.iter().all(|m| top[0].margin >= m.margin));
        assert!(top.windows(2).all(|w| w[0].margin >= w[1].margin));
        assert_eq!(top[0].label(), "SB XXIV: San Francisco 49ers");
        assert_eq!(top[0].score(), "55-10");
    }

    #[test]
    fn test_closest_ascending() {
        let all = margins(SUPER_BOWLS);
        let top = closest_games(SUPER_BOWLS, TOP_MARGINS);
        assert_eq!(top.len(), TOP_MARGINS);
        assert_eq!(top[0].game.id, "XXV");
        assert!(all.iter().all(|m| top[0].margin <= m.margin));
        // ties at 3 points keep chronological order
        assert_eq!(top[1].game.id, "V");
        assert_eq!(top[7].game.id, "LVI");
    }

    #[test]
    fn test_top_n_larger_than_table() {
        assert_eq!(blowouts(&SUPER_BOWLS[..3], 8).len(), 3);
        assert!(closest_games(&[], 8).is_empty());
    }

    #[test]
    fn test_genre_breakdown() {
        let genres = genre_breakdown(HALFTIME_SHOWS);
        let total: usize = genres.iter().map(|(_, n)| n).sum();
        assert_eq!(total, HALFTIME_SHOWS.len());
        assert_eq!(genres[0], ("Pop / R&B", 7));
        assert!(genres.iter().all(|(_, n)| genres[0].1 >= *n));
        assert_eq!(genres.len(), 11);
    }

    #[test]
    fn test_views_are_deterministic() {
        assert_eq!(team_wins(SUPER_BOWLS), team_wins(SUPER_BOWLS));
        assert_eq!(decade_averages(SUPER_BOWLS), decade_averages(SUPER_BOWLS));
        assert_eq!(
            blowouts(SUPER_BOWLS, TOP_MARGINS),
            blowouts(SUPER_BOWLS, TOP_MARGINS)
        );
        assert_eq!(genre_breakdown(HALFTIME_SHOWS), genre_breakdown(HALFTIME_SHOWS));
    }

    #[test]
    fn test_decade_of() {
        assert_eq!(decade_of(1967), 1960);
        assert_eq!(decade_of(1970), 1970);
        assert_eq!(decade_of(2025), 2020);
    }
}
