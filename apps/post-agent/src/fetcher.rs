use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use crate::topic::Topic;

/// A news article reduced to the fields the prompt needs.
/// Fields absent on the wire become empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub source_name: String,
    pub description: String,
    pub content: String,
}

// --- News Search Wire Structs ---

#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Deserialize, Debug, Default)]
struct RawArticle {
    title: Option<String>,
    source: Option<RawSource>,
    description: Option<String>,
    content: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct RawSource {
    name: Option<String>,
}

impl From<RawArticle> for Article {
    fn from(raw: RawArticle) -> Self {
        Article {
            title: raw.title.unwrap_or_default(),
            source_name: raw.source.and_then(|s| s.name).unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
        }
    }
}

/// How a ranked result list is reduced to the single article used downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Trust the endpoint's popularity ranking and take the head of the list.
    #[default]
    First,
}

impl SelectionPolicy {
    fn select(self, articles: Vec<RawArticle>) -> Option<RawArticle> {
        match self {
            SelectionPolicy::First => articles.into_iter().next(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("news request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("news endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

pub struct NewsClient {
    client: Client,
    base_url: Url,
    api_key: String,
    policy: SelectionPolicy,
}

impl NewsClient {
    pub fn new(client: Client, base_url: Url, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
            policy: SelectionPolicy::default(),
        }
    }

    /// Look up the most popular article for a topic. `Ok(None)` means the
    /// search succeeded but matched nothing.
    #[instrument(skip(self))]
    pub async fn fetch_top_article(&self, topic: Topic) -> Result<Option<Article>, LookupError> {
        let url = format!("{}/v2/everything", self.base_url.as_str().trim_end_matches('/'));

        debug!("Sending news search request");

        let res = self.client
            .get(&url)
            .query(&[
                ("q", topic.as_str()),
                ("sortBy", "popularity"),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        debug!(status = %status, "News search response received");

        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(LookupError::Status { status, body });
        }

        let resp: SearchResponse = res.json().await?;
        debug!(count = resp.articles.len(), "Articles returned");

        Ok(self.policy.select(resp.articles).map(Article::from))
    }
}
