use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::Error;

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";

const ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Duration token substituted for ids the details endpoint did not return.
const ZERO_DURATION: &str = "PT0S";

/// One search hit, in the order the API returned it.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub channel: String,
}

/// Blocking client for the Data API. The key is held here and appended to
/// every request; nothing else in the program sees it.
pub struct ApiClient {
    client: Client,
    key: String,
}

impl ApiClient {
    pub fn new(key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("ytq/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, key })
    }

    /// Search for videos matching `query`, preserving response order.
    pub fn search(&self, query: &str, max_results: u32) -> Result<Vec<SearchResult>> {
        let url = format!(
            "{SEARCH_URL}?part=snippet&type=video&maxResults={max_results}&q={}&key={}",
            urlencoding::encode(query),
            self.key
        );
        debug!(endpoint = SEARCH_URL, %query, max_results, "search request");
        let body = self.get_with_retry(&url)?;
        parse_search_results(&body)
    }

    /// Fetch the duration token for each id, keyed by id. Ids the API does
    /// not answer for are simply absent from the map.
    pub fn fetch_durations(&self, ids: &[String]) -> Result<HashMap<String, String>> {
        let url = format!(
            "{VIDEOS_URL}?part=contentDetails&id={}&key={}",
            ids.join(","),
            self.key
        );
        debug!(endpoint = VIDEOS_URL, count = ids.len(), "details request");
        let body = self.get_with_retry(&url)?;
        parse_durations(&body)
    }

    // The URL carries the API key, so it is never logged here.
    fn get_with_retry(&self, url: &str) -> Result<String> {
        let mut last_err = None;
        for attempt in 1..=ATTEMPTS {
            if attempt > 1 {
                thread::sleep(RETRY_DELAY);
            }
            match self.client.get(url).send() {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return resp.text().context("reading response body");
                    }
                    warn!(%status, attempt, "request returned error status");
                    last_err = Some(anyhow!("server returned {status}"));
                }
                Err(err) => {
                    warn!(attempt, "request failed: {err}");
                    last_err = Some(err.into());
                }
            }
        }
        Err(Error::Network(last_err.unwrap_or_else(|| anyhow!("no attempt made"))).into())
    }
}

/// Join durations onto the result list by id. Results the details call did
/// not cover get a zero duration instead of shifting the list.
pub fn join_durations(
    results: &[SearchResult],
    by_id: &HashMap<String, String>,
) -> Vec<String> {
    results
        .iter()
        .map(|r| {
            by_id
                .get(&r.id)
                .cloned()
                .unwrap_or_else(|| ZERO_DURATION.to_string())
        })
        .collect()
}

fn parse_search_results(body: &str) -> Result<Vec<SearchResult>> {
    let resp: SearchResponse =
        serde_json::from_str(body).context("parsing search response")?;
    let results: Vec<SearchResult> = resp
        .items
        .into_iter()
        .filter_map(|item| {
            // type=video is requested, but skip anything without a video id.
            let id = item.id.video_id?;
            Some(SearchResult {
                id,
                title: item.snippet.title,
                channel: item.snippet.channel_title,
            })
        })
        .collect();
    if results.is_empty() {
        return Err(Error::NoResults.into());
    }
    Ok(results)
}

fn parse_durations(body: &str) -> Result<HashMap<String, String>> {
    let resp: VideosResponse =
        serde_json::from_str(body).context("parsing video details response")?;
    Ok(resp
        .items
        .into_iter()
        .map(|item| (item.id, item.content_details.duration))
        .collect())
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize)]
struct SearchItem {
    id: SearchItemId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SearchItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    channel_title: String,
}

#[derive(Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    id: String,
    content_details: ContentDetails,
}

#[derive(Deserialize, Default)]
struct ContentDetails {
    #[serde(default)]
    duration: String,
}
