use chrono::{Duration, Utc};
use itertools::Itertools;
use tracing::{debug, info, instrument, warn};

use crate::client::SportmonksClient;
use crate::model::{Fixture, MatchOutcome, RecordMeta, TeamStreakRecord};
use crate::score::{extract_final_score, is_btts_no};

/// How far back to look for a team's recent finished fixtures.
pub const HISTORY_WINDOW_DAYS: i64 = 180;

/// Evaluates whether a team's most recent finished matches all ended
/// without both teams scoring.
///
/// One evaluator serves both report variants: the window size and the
/// metadata captured on a record are parameters, not separate pipelines.
pub struct StreakEvaluator<'a> {
    client: &'a SportmonksClient,
    window: usize,
    meta: RecordMeta,
}

impl<'a> StreakEvaluator<'a> {
    pub fn new(client: &'a SportmonksClient, window: usize, meta: RecordMeta) -> Self {
        Self {
            client,
            window,
            meta,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Check a team's last matches against the BTTS=No streak condition.
    ///
    /// Returns `None` when the team has fewer finished fixtures than the
    /// window requires (absence of signal, not a failure). Otherwise the
    /// record's `qualifies` flag reflects the outcome: one BTTS=Yes match
    /// clears it, as does a failed detail fetch, which also aborts the
    /// remaining fetches for this team. Neither aborts the run.
    #[instrument(skip(self, kickoff_label))]
    pub async fn evaluate_team(
        &self,
        team_id: u64,
        team_name: &str,
        kickoff_label: Option<String>,
    ) -> Option<TeamStreakRecord> {
        let ids = self.recent_finished_ids(team_id).await;
        if ids.len() < self.window {
            debug!(
                team_id,
                found = ids.len(),
                window = self.window,
                "not enough finished fixtures, skipping team"
            );
            return None;
        }

        info!(team = team_name, window = self.window, "checking recent matches");
        let mut outcomes = Vec::with_capacity(self.window);
        let mut all_no = true;
        for fixture_id in ids {
            let fixture = match self.client.fixture_detail(fixture_id).await {
                Ok(fixture) => fixture,
                Err(e) => {
                    // One unreadable fixture invalidates the whole streak.
                    warn!(fixture_id, error = %e, "could not fetch fixture, failing streak");
                    all_no = false;
                    break;
                }
            };
            let outcome = classify(&fixture, team_id);
            info!(
                team = team_name,
                opponent = outcome.opponent.as_deref().unwrap_or("?"),
                home_goals = outcome.home_goals,
                away_goals = outcome.away_goals,
                btts_no = outcome.btts_no,
                "classified match"
            );
            if !outcome.btts_no {
                all_no = false;
            }
            outcomes.push(outcome);
        }

        Some(TeamStreakRecord {
            team_id,
            team_name: team_name.to_string(),
            outcomes,
            qualifies: all_no,
            kickoff: match self.meta {
                RecordMeta::Kickoff => kickoff_label,
                RecordMeta::TeamOnly => None,
            },
        })
    }

    /// Ids of the team's most recent finished fixtures, newest first,
    /// capped at the window size. A provider error counts as no history.
    async fn recent_finished_ids(&self, team_id: u64) -> Vec<u64> {
        let end = Utc::now().date_naive();
        let start = end - Duration::days(HISTORY_WINDOW_DAYS);
        let fixtures = match self.client.team_fixtures_between(start, end, team_id).await {
            Ok(fixtures) => fixtures,
            Err(e) => {
                warn!(team_id, error = %e, "could not fetch fixture history");
                return Vec::new();
            }
        };
        fixtures
            .into_iter()
            .filter(Fixture::is_finished)
            .sorted_by(|a, b| b.starting_at.cmp(&a.starting_at))
            .map(|f| f.id)
            .take(self.window)
            .collect()
    }
}

/// Extract and classify a single historical fixture from `team_id`'s view.
fn classify(fixture: &Fixture, team_id: u64) -> MatchOutcome {
    let (home_goals, away_goals) = extract_final_score(fixture);
    let opponent = fixture
        .participants
        .iter()
        .find(|p| p.id != team_id)
        .map(|p| p.name.clone());
    MatchOutcome {
        fixture_id: fixture.id,
        opponent,
        home_goals,
        away_goals,
        btts_no: is_btts_no(home_goals, away_goals),
    }
}
