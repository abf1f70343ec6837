use anyhow::{Context, Result};
use scraper::Html;

use crate::http_client::http_client;

/// Fetch a player's profile page and parse it, or `None` on a failed
/// request or non-success status.
pub fn fetch_profile(id: &str) -> Option<Html> {
    match profile_request(id) {
        Ok(body) => body.map(|b| parse_profile(&b)),
        Err(err) => {
            log::warn!("profile fetch for id {id} failed: {err}");
            None
        }
    }
}

fn profile_request(id: &str) -> Result<Option<String>> {
    let client = http_client()?;
    let url = format!("https://www.cricbuzz.com/profiles/{id}");
    let resp = client.get(&url).send().context("request failed")?;
    if !resp.status().is_success() {
        log::warn!("profile page returned {}", resp.status());
        return Ok(None);
    }
    let body = resp.text().context("failed reading body")?;
    Ok(Some(body))
}

/// Parse a profile page body into a traversable document.
pub fn parse_profile(body: &str) -> Html {
    Html::parse_document(body)
}
