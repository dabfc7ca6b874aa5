use std::collections::HashSet;

use chrono::Utc;
use tracing::{info, instrument, warn};

use crate::client::SportmonksClient;
use crate::model::{Side, TeamStreakRecord};
use crate::report::format_kickoff;
use crate::streak::StreakEvaluator;

/// Evaluate every team playing today, each exactly once.
///
/// Teams are visited in fixture order, home before away; a side whose
/// role did not resolve is skipped. Returns `None` when today's fixture
/// list is empty or could not be fetched — the caller reports that case
/// with a distinct message and makes no further calls.
#[instrument(skip(client, evaluator))]
pub async fn scan_today(
    client: &SportmonksClient,
    evaluator: &StreakEvaluator<'_>,
) -> Option<Vec<TeamStreakRecord>> {
    let today = Utc::now().date_naive();
    let fixtures = match client.fixtures_on(today).await {
        Ok(fixtures) => fixtures,
        Err(e) => {
            warn!(error = %e, "could not fetch today's fixtures");
            Vec::new()
        }
    };
    if fixtures.is_empty() {
        info!(%today, "no fixtures found");
        return None;
    }
    info!(count = fixtures.len(), %today, "scanning today's fixtures");

    let mut checked = HashSet::new();
    let mut records = Vec::new();
    for fixture in &fixtures {
        let kickoff_label = format_kickoff(fixture.starting_at.as_deref());
        for side in [Side::Home, Side::Away] {
            let Some(team) = fixture.participant(side) else {
                continue;
            };
            if !checked.insert(team.id) {
                continue;
            }
            if let Some(record) = evaluator
                .evaluate_team(team.id, &team.name, Some(kickoff_label.clone()))
                .await
            {
                records.push(record);
            }
        }
    }
    Some(records)
}
