use std::time::Duration;

use chrono::NaiveDate;
use tracing::instrument;

use crate::error::{Result, ScoutError};
use crate::model::Fixture;
use crate::sportmonks;

/// Outbound requests against the fixtures API give up after this long.
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(30);

/// The main entry point for reading fixture and score data from Sportmonks.
///
/// `SportmonksClient` wraps a [`reqwest::Client`] and exposes the three
/// read operations the scan needs: fixtures for a date, a team's fixtures
/// within a date range, and full detail for a single fixture. The API
/// token is attached to every request as a query parameter.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> btts_scout::Result<()> {
/// use btts_scout::SportmonksClient;
///
/// let client = SportmonksClient::new("api-token")?;
/// let today = chrono::Utc::now().date_naive();
/// let fixtures = client.fixtures_on(today).await?;
/// println!("Found {} fixtures", fixtures.len());
/// # Ok(())
/// # }
/// ```
pub struct SportmonksClient {
    http: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl SportmonksClient {
    /// Create a new client with [`PROVIDER_TIMEOUT`] applied.
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(PROVIDER_TIMEOUT)
            .build()
            .map_err(ScoutError::ClientBuild)?;
        Ok(Self {
            http,
            base_url: sportmonks::BASE_URL.to_string(),
            api_token: api_token.into(),
        })
    }

    /// Point the client at a different API root. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch all fixtures scheduled on `date`, with participants embedded.
    #[instrument(skip(self))]
    pub async fn fixtures_on(&self, date: NaiveDate) -> Result<Vec<Fixture>> {
        sportmonks::fixtures::fixtures_on(&self.http, &self.base_url, &self.api_token, date).await
    }

    /// Fetch a team's fixtures between `start` and `end`, both inclusive.
    #[instrument(skip(self))]
    pub async fn team_fixtures_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        team_id: u64,
    ) -> Result<Vec<Fixture>> {
        sportmonks::fixtures::team_fixtures_between(
            &self.http,
            &self.base_url,
            &self.api_token,
            start,
            end,
            team_id,
        )
        .await
    }

    /// Fetch full detail (scores and participants) for a single fixture.
    #[instrument(skip(self))]
    pub async fn fixture_detail(&self, fixture_id: u64) -> Result<Fixture> {
        sportmonks::fixtures::fixture_detail(
            &self.http,
            &self.base_url,
            &self.api_token,
            fixture_id,
        )
        .await
    }
}
