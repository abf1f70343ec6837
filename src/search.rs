use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::http_client::http_client;

const SEARCH_URL: &str = "https://www.cricbuzz.com/api/search/results";

/// The first player matching a name query. Exists only to drive the
/// profile fetch that follows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerIdentity {
    pub id: String,
    pub name: String,
    pub country: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default, rename = "playerList")]
    player_list: Vec<SearchPlayer>,
}

#[derive(Debug, Deserialize)]
struct SearchPlayer {
    id: RawId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    country: String,
}

// The search API has been seen returning ids both as numbers and strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Num(u64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Num(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// Look a player up by name and return the first hit, or `None` when the
/// request fails, the body does not decode, or the result list is empty.
/// The name is sent through as-is; a single attempt, no retries.
pub fn lookup(name: &str) -> Option<PlayerIdentity> {
    match search_request(name) {
        Ok(identity) => identity,
        Err(err) => {
            log::warn!("search for {name:?} failed: {err}");
            None
        }
    }
}

fn search_request(name: &str) -> Result<Option<PlayerIdentity>> {
    let client = http_client()?;
    let resp = client
        .get(SEARCH_URL)
        .query(&[("q", name)])
        .send()
        .context("request failed")?;
    if !resp.status().is_success() {
        log::warn!("search returned {}", resp.status());
        return Ok(None);
    }
    let body = resp.text().context("failed reading body")?;
    Ok(parse_search_json(&body))
}

/// Decode a search response body into the first listed player.
pub fn parse_search_json(raw: &str) -> Option<PlayerIdentity> {
    let resp: SearchResponse = serde_json::from_str(raw).ok()?;
    let first = resp.player_list.into_iter().next()?;
    Some(PlayerIdentity {
        id: first.id.into_string(),
        name: first.title,
        country: first.country,
    })
}
