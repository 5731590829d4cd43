use crate::party::{Guess, Party};
use crate::store::TipCollection;
use std::fmt;

/// Points for hitting a party's result exactly
pub const EXACT_POINTS: u32 = 3;
/// Points for landing within [`CLOSE_MARGIN`] of the result
pub const CLOSE_POINTS: u32 = 1;
/// Maximum absolute difference that still earns [`CLOSE_POINTS`]
pub const CLOSE_MARGIN: f64 = 1.0;
/// Best possible score: an exact hit on every party
pub const MAX_SCORE: u32 = EXACT_POINTS * Party::ALL.len() as u32;

/// How one party contributed to a participant's total
#[derive(Debug, Clone)]
pub struct PartyPoints {
    pub party: Party,
    pub guessed: f64,
    pub actual: f64,
    pub diff: f64,
    pub points: u32,
}

#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub score: u32,
    pub breakdown: Vec<PartyPoints>,
}

/// A tip's guess lacked a value for one of the seven parties
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingPartyError {
    pub party: Party,
}

impl fmt::Display for MissingPartyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no value for party {}", self.party)
    }
}

impl std::error::Error for MissingPartyError {}

/// Score one guess against the official results.
///
/// Per party: 3 points for an exact hit, 1 point within 1.0, otherwise 0.
/// "Exact" is exact float equality, not tolerance-based: 20.0 vs 20.0 earns 3,
/// 20.05 vs 20.0 earns 1. Every party must be present in both mappings or
/// scoring fails with the first missing party.
pub fn calculate_score(guess: &Guess, results: &Guess) -> Result<ScoreResult, MissingPartyError> {
    let mut score = 0;
    let mut breakdown = Vec::with_capacity(Party::ALL.len());

    for party in Party::ALL {
        let guessed = guess.get(party).ok_or(MissingPartyError { party })?;
        let actual = results.get(party).ok_or(MissingPartyError { party })?;
        let diff = (guessed - actual).abs();

        let points = if diff == 0.0 {
            EXACT_POINTS
        } else if diff <= CLOSE_MARGIN {
            CLOSE_POINTS
        } else {
            0
        };

        score += points;
        breakdown.push(PartyPoints {
            party,
            guessed,
            actual,
            diff,
            points,
        });
    }

    Ok(ScoreResult { score, breakdown })
}

/// One line of the standings
#[derive(Debug, Clone)]
pub struct RankedTip {
    pub name: String,
    pub result: ScoreResult,
}

/// A participant left out of the standings because their guess was incomplete
#[derive(Debug, Clone)]
pub struct SkippedTip {
    pub name: String,
    pub error: MissingPartyError,
}

#[derive(Debug, Clone, Default)]
pub struct Standings {
    /// Sorted by score descending; ties keep collection order
    pub ranked: Vec<RankedTip>,
    pub skipped: Vec<SkippedTip>,
}

/// Score every stored tip against the results and sort the standings.
///
/// A participant whose guess is missing a party is not fatal to the pass:
/// they are flagged in `skipped` and the rest are ranked. The sort is stable
/// and keyed on score only, so tied participants stay in the order they
/// appear in the collection (file/submission order).
pub fn rank_tips(tips: &TipCollection, results: &Guess) -> Standings {
    let mut standings = Standings::default();

    for (name, guess) in tips.iter() {
        match calculate_score(guess, results) {
            Ok(result) => standings.ranked.push(RankedTip {
                name: name.to_string(),
                result,
            }),
            Err(error) => standings.skipped.push(SkippedTip {
                name: name.to_string(),
                error,
            }),
        }
    }

    standings
        .ranked
        .sort_by(|a, b| b.result.score.cmp(&a.result.score));

    standings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guess(values: [f64; 7]) -> Guess {
        Party::ALL.iter().copied().zip(values).collect()
    }

    #[test]
    fn test_exact_hit_on_every_party_scores_max() {
        let g = guess([30.0, 25.0, 10.0, 5.0, 15.0, 5.0, 10.0]);
        let result = calculate_score(&g, &g.clone()).unwrap();
        assert_eq!(result.score, MAX_SCORE);
        assert_eq!(result.score, 21);
    }

    #[test]
    fn test_per_party_point_bands() {
        // One party off by 0.0, one by exactly 1.0, one by 1.1, rest far off
        let g = guess([20.0, 11.0, 8.9, 50.0, 50.0, 50.0, 50.0]);
        let r = guess([20.0, 10.0, 10.0, 0.0, 0.0, 0.0, 0.0]);
        let result = calculate_score(&g, &r).unwrap();

        assert_eq!(result.breakdown[0].points, EXACT_POINTS);
        assert_eq!(result.breakdown[1].points, CLOSE_POINTS);
        assert_eq!(result.breakdown[2].points, 0);
        assert_eq!(result.score, 4);
    }

    #[test]
    fn test_near_miss_is_not_exact() {
        // 20.05 vs 20.0 is a diff of 0.05: close, not exact
        let mut g = guess([20.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let r = guess([20.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let result = calculate_score(&g, &r).unwrap();
        assert_eq!(result.breakdown[0].points, CLOSE_POINTS);

        g.set(Party::Spd, 20.0);
        let result = calculate_score(&g, &r).unwrap();
        assert_eq!(result.breakdown[0].points, EXACT_POINTS);
    }

    #[test]
    fn test_score_is_bounded() {
        let g = guess([0.0, 100.0, 33.3, 0.1, 99.9, 50.0, 42.0]);
        let r = guess([100.0, 0.0, 33.3, 0.1, 0.0, 51.0, 40.0]);
        let result = calculate_score(&g, &r).unwrap();
        assert!(result.score <= MAX_SCORE);
    }

    #[test]
    fn test_score_symmetric_under_swap() {
        let g = guess([30.5, 20.0, 12.0, 5.0, 16.5, 5.5, 10.5]);
        let r = guess([30.0, 25.0, 10.0, 5.0, 15.0, 5.0, 10.0]);
        let forward = calculate_score(&g, &r).unwrap();
        let backward = calculate_score(&r, &g).unwrap();
        assert_eq!(forward.score, backward.score);
    }

    #[test]
    fn test_missing_party_in_guess_fails() {
        let incomplete: Guess = Party::ALL
            .iter()
            .filter(|&&p| p != Party::Fdp)
            .map(|&p| (p, 10.0))
            .collect();
        let r = guess([10.0; 7]);

        let err = calculate_score(&incomplete, &r).unwrap_err();
        assert_eq!(err, MissingPartyError { party: Party::Fdp });
    }

    #[test]
    fn test_sample_round_anna_and_ben() {
        let anna = guess([30.0, 25.0, 10.0, 5.0, 15.0, 5.0, 10.0]);
        let ben = guess([30.5, 20.0, 12.0, 5.0, 16.5, 5.5, 10.5]);
        let results = guess([30.0, 25.0, 10.0, 5.0, 15.0, 5.0, 10.0]);

        assert_eq!(calculate_score(&anna, &results).unwrap().score, 21);
        assert_eq!(calculate_score(&ben, &results).unwrap().score, 6);
    }

    #[test]
    fn test_rank_sorts_descending() {
        let mut tips = TipCollection::new();
        tips.insert(
            "Ben".to_string(),
            guess([30.5, 20.0, 12.0, 5.0, 16.5, 5.5, 10.5]),
        );
        tips.insert(
            "Anna".to_string(),
            guess([30.0, 25.0, 10.0, 5.0, 15.0, 5.0, 10.0]),
        );
        let results = guess([30.0, 25.0, 10.0, 5.0, 15.0, 5.0, 10.0]);

        let standings = rank_tips(&tips, &results);
        let order: Vec<_> = standings
            .ranked
            .iter()
            .map(|t| (t.name.as_str(), t.result.score))
            .collect();
        assert_eq!(order, vec![("Anna", 21), ("Ben", 6)]);
        assert!(standings.skipped.is_empty());
    }

    #[test]
    fn test_ties_preserve_submission_order() {
        let results = guess([10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0]);

        // A and C tie on 5 points; A submitted first, so A stays ahead
        let five = guess([10.0, 10.5, 9.5, 90.0, 90.0, 90.0, 90.0]);
        let nine = guess([10.0, 10.0, 10.0, 90.0, 90.0, 90.0, 90.0]);
        let zero = guess([90.0, 90.0, 90.0, 90.0, 90.0, 90.0, 90.0]);

        let mut tips = TipCollection::new();
        tips.insert("A".to_string(), five.clone());
        tips.insert("B".to_string(), nine);
        tips.insert("C".to_string(), five);
        tips.insert("D".to_string(), zero);

        let standings = rank_tips(&tips, &results);
        let order: Vec<_> = standings.ranked.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_rank_skips_incomplete_guess_and_continues() {
        let complete = guess([10.0; 7]);
        let incomplete: Guess = [(Party::Spd, 10.0)].into_iter().collect();
        let results = guess([10.0; 7]);

        let mut tips = TipCollection::new();
        tips.insert("Broken".to_string(), incomplete);
        tips.insert("Anna".to_string(), complete);

        let standings = rank_tips(&tips, &results);
        assert_eq!(standings.ranked.len(), 1);
        assert_eq!(standings.ranked[0].name, "Anna");
        assert_eq!(standings.skipped.len(), 1);
        assert_eq!(standings.skipped[0].name, "Broken");
        assert_eq!(standings.skipped[0].error.party, Party::Cdu);
    }

    #[test]
    fn test_rank_empty_collection() {
        let standings = rank_tips(&TipCollection::new(), &guess([10.0; 7]));
        assert!(standings.ranked.is_empty());
        assert!(standings.skipped.is_empty());
    }
}
