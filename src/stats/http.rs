//! HTTP access to the baseball-stats endpoint and the player plot images.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{
    cli::types::HttpUrl,
    error::{Result, StatsError},
    stats::types::{players_from_array, PlayerStat},
};


const USER_AGENT: &str = concat!("underrated-mlb/", env!("CARGO_PKG_VERSION"));

/// Client for the single stats endpoint.
///
/// One instance is built per run; the underlying `reqwest::Client` is reused
/// for the stats request and any image probes.
#[derive(Debug, Clone)]
pub struct StatsClient {
    http: Client,
    endpoint: HttpUrl,
}

impl StatsClient {
    pub fn new(endpoint: HttpUrl, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { http, endpoint })
    }

    /// Issue the stats request and return the players in response order.
    ///
    /// # Errors
    ///
    /// - [`StatsError::Network`] if the request or body read fails
    /// - [`StatsError::HttpStatus`] on a non-2xx status
    /// - [`StatsError::Parse`] if the body is not JSON
    /// - [`StatsError::ServerReported`] if the body carries a non-empty `error` string
    /// - [`StatsError::InvalidFormat`] if `players` is missing or not an array
    pub async fn fetch_players(&self) -> Result<Vec<PlayerStat>> {
        tracing::info!("Fetching player stats from {}", self.endpoint);

        let response = self.http.get(self.endpoint.as_url().clone()).send().await?;
        let status = response.status();
        tracing::debug!("Response received: {}", status);

        if !status.is_success() {
            return Err(StatsError::HttpStatus { status });
        }

        let body = response.text().await?;
        let players = parse_players_body(&body)?;
        tracing::debug!("Received {} players", players.len());
        Ok(players)
    }

    /// Whether `url` answers a GET with a 2xx status.
    pub async fn image_available(&self, url: &str) -> bool {
        match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::debug!("Image {} returned {}", url, response.status());
                false
            }
            Err(e) => {
                tracing::debug!("Image {} failed to load: {}", url, e);
                false
            }
        }
    }
}

/// Validate a response body and extract the players.
///
/// A non-empty `error` string in the body wins over everything else,
/// including a present `players` array. An empty one is ignored.
pub fn parse_players_body(body: &str) -> Result<Vec<PlayerStat>> {
    let value: Value = serde_json::from_str(body).map_err(StatsError::Parse)?;

    let Value::Object(mut map) = value else {
        return Err(StatsError::InvalidFormat {
            detail: "expected a JSON object".to_string(),
        });
    };

    match map.get("error") {
        Some(Value::String(message)) if !message.is_empty() => {
            return Err(StatsError::ServerReported {
                message: message.clone(),
            });
        }
        _ => {}
    }

    match map.remove("players") {
        Some(Value::Array(items)) => Ok(players_from_array(items)),
        Some(_) => Err(StatsError::InvalidFormat {
            detail: "`players` is not an array".to_string(),
        }),
        None => Err(StatsError::InvalidFormat {
            detail: "missing `players` field".to_string(),
        }),
    }
}
