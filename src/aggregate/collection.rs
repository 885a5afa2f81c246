use crate::classify::TournamentSheet;
use crate::domain::TournamentResult;

/// Extraction result of one tournament sheet
#[derive(Debug, Clone)]
pub struct TournamentBatch {
    pub sheet: TournamentSheet,
    pub results: Vec<TournamentResult>,
}

/// Per-tournament results in processing order
#[derive(Debug, Default)]
pub struct ScoreCollection {
    batches: Vec<TournamentBatch>,
}

impl ScoreCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, batch: TournamentBatch) {
        self.batches.push(batch);
    }

    /// Number of tournaments
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.batches.iter().map(|b| b.results.len()).sum()
    }

    pub fn into_merged(self) -> Vec<TournamentResult> {
        merge_aggregates(&self.batches)
    }
}

/// Concatenate every tournament's results, keeping per-tournament order.
///
/// No de-duplication: a player in two tournaments yields two records.
pub fn merge_aggregates(batches: &[TournamentBatch]) -> Vec<TournamentResult> {
    batches
        .iter()
        .flat_map(|batch| batch.results.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn batch(name: &str, day: u32, players: &[(&str, &str)]) -> TournamentBatch {
        TournamentBatch {
            sheet: TournamentSheet {
                name: name.to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                format: "Men's".to_string(),
            },
            results: players
                .iter()
                .map(|(a, b)| TournamentResult::new(*a, *b))
                .collect(),
        }
    }

    #[test]
    fn test_merge_keeps_order_and_duplicates() {
        let mut collection = ScoreCollection::new();
        collection.add(batch("2024-01-02 M", 2, &[("A", "B"), ("C", "D")]));
        collection.add(batch("2024-01-01 M", 1, &[("A", "B")]));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.entry_count(), 3);

        let merged = collection.into_merged();
        let firsts: Vec<&str> = merged.iter().map(|r| r.player_1.as_str()).collect();
        assert_eq!(firsts, vec!["A", "C", "A"]);
    }
}
