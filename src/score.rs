use crate::model::{Fixture, Side};

/// Only score entries with this description carry the authoritative
/// full-time score; half scores and aggregates are ignored.
pub(crate) const CURRENT_DESCRIPTION: &str = "CURRENT";

/// Derive the final home and away goal counts from a fixture's score entries.
///
/// A side with no CURRENT entry stays `None`, which the classifier treats
/// as "cannot confirm", never as a zero.
pub fn extract_final_score(fixture: &Fixture) -> (Option<u32>, Option<u32>) {
    let mut home_goals = None;
    let mut away_goals = None;
    for entry in &fixture.scores {
        if entry.description != CURRENT_DESCRIPTION {
            continue;
        }
        match entry.score.side() {
            Some(Side::Home) => home_goals = entry.score.goals,
            Some(Side::Away) => away_goals = entry.score.goals,
            None => {}
        }
    }
    (home_goals, away_goals)
}

/// Whether a finished match ended without both teams scoring.
pub fn is_btts_no(home_goals: Option<u32>, away_goals: Option<u32>) -> bool {
    match (home_goals, away_goals) {
        (Some(home), Some(away)) => home == 0 || away == 0,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{ScoreEntry, ScoreValue};

    use super::*;

    fn fixture_with_scores(scores: Vec<ScoreEntry>) -> Fixture {
        Fixture {
            id: 1,
            state_id: 5,
            starting_at: None,
            participants: Vec::new(),
            scores,
        }
    }

    fn entry(description: &str, participant: &str, goals: u32) -> ScoreEntry {
        ScoreEntry {
            description: description.to_string(),
            score: ScoreValue {
                goals: Some(goals),
                participant: Some(participant.to_string()),
            },
        }
    }

    #[test]
    fn test_is_btts_no_truth_table() {
        assert!(is_btts_no(Some(0), Some(0)));
        assert!(is_btts_no(Some(0), Some(2)));
        assert!(is_btts_no(Some(3), Some(0)));
        assert!(!is_btts_no(Some(1), Some(1)));
        assert!(!is_btts_no(Some(2), Some(4)));
    }

    #[test]
    fn test_is_btts_no_fails_closed_on_unset() {
        assert!(!is_btts_no(None, Some(0)));
        assert!(!is_btts_no(Some(0), None));
        assert!(!is_btts_no(None, None));
    }

    #[test]
    fn test_extract_reads_current_entries() {
        let fixture = fixture_with_scores(vec![
            entry(CURRENT_DESCRIPTION, "home", 0),
            entry(CURRENT_DESCRIPTION, "away", 2),
        ]);
        assert_eq!(extract_final_score(&fixture), (Some(0), Some(2)));
    }

    #[test]
    fn test_extract_ignores_other_descriptions() {
        let fixture = fixture_with_scores(vec![
            entry("1ST_HALF", "home", 3),
            entry("2ND_HALF", "away", 3),
            entry(CURRENT_DESCRIPTION, "away", 1),
        ]);
        assert_eq!(extract_final_score(&fixture), (None, Some(1)));
    }

    #[test]
    fn test_extract_without_current_entries_is_unset() {
        let fixture = fixture_with_scores(vec![entry("1ST_HALF", "home", 1)]);
        assert_eq!(extract_final_score(&fixture), (None, None));

        let fixture = fixture_with_scores(Vec::new());
        assert_eq!(extract_final_score(&fixture), (None, None));
    }

    #[test]
    fn test_extract_skips_entries_with_unresolved_side() {
        let fixture = fixture_with_scores(vec![ScoreEntry {
            description: CURRENT_DESCRIPTION.to_string(),
            score: ScoreValue {
                goals: Some(2),
                participant: None,
            },
        }]);
        assert_eq!(extract_final_score(&fixture), (None, None));
    }
}
