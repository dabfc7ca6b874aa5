use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::{Result, ScoutError};
use crate::model::Fixture;
use crate::sportmonks;

pub(crate) const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// Envelope around list responses. A missing `data` key means no fixtures.
#[derive(Debug, Deserialize)]
struct FixtureListData {
    #[serde(default)]
    data: Vec<Fixture>,
}

/// Envelope around single-fixture responses.
#[derive(Debug, Deserialize)]
struct FixtureData {
    data: Option<Fixture>,
}

/// Fetch all fixtures scheduled on `date`, with participants embedded.
#[instrument(skip(client, base_url, token))]
pub(crate) async fn fixtures_on(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    date: NaiveDate,
) -> Result<Vec<Fixture>> {
    let url = format!("{base_url}/fixtures/date/{}", date.format(API_DATE_FORMAT));
    let list: FixtureListData = sportmonks::get_json(
        client,
        &url,
        &[("include", "participants"), ("api_token", token)],
    )
    .await?;
    debug!(count = list.data.len(), %date, "fetched fixtures for date");
    Ok(list.data)
}

/// Fetch a team's fixtures between `start` and `end`, both inclusive.
/// Participants and scores are not embedded here; only the lifecycle
/// state and kickoff timestamp are needed from this listing.
#[instrument(skip(client, base_url, token))]
pub(crate) async fn team_fixtures_between(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    start: NaiveDate,
    end: NaiveDate,
    team_id: u64,
) -> Result<Vec<Fixture>> {
    let url = format!(
        "{base_url}/fixtures/between/{}/{}/{team_id}",
        start.format(API_DATE_FORMAT),
        end.format(API_DATE_FORMAT),
    );
    let list: FixtureListData =
        sportmonks::get_json(client, &url, &[("api_token", token)]).await?;
    debug!(count = list.data.len(), team_id, "fetched team fixture history");
    Ok(list.data)
}

/// Fetch full detail (scores and participants) for a single fixture.
#[instrument(skip(client, base_url, token))]
pub(crate) async fn fixture_detail(
    client: &reqwest::Client,
    base_url: &str,
    token: &str,
    fixture_id: u64,
) -> Result<Fixture> {
    let url = format!("{base_url}/fixtures/{fixture_id}");
    let detail: FixtureData = sportmonks::get_json(
        client,
        &url,
        &[("include", "scores;participants"), ("api_token", token)],
    )
    .await?;
    let fixture = detail.data.ok_or(ScoutError::MissingData { url })?;
    debug!(fixture_id, scores = fixture.scores.len(), "fetched fixture detail");
    Ok(fixture)
}
