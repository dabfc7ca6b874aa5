pub(crate) mod fixtures;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{Result, ScoutError};

pub(crate) const BASE_URL: &str = "https://api.sportmonks.com/v3/football";

/// Fetch a URL and decode the response body as JSON.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, &str)],
) -> Result<T> {
    debug!(url, "fetching");

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| ScoutError::Http {
            url: url.to_owned(),
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScoutError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        });
    }

    response.json().await.map_err(|e| ScoutError::Decode {
        url: url.to_owned(),
        source: e,
    })
}
