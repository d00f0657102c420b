use thiserror::Error;
use tracing::info;

use openrouter_engine::CompletionError;

use crate::composer::PostComposer;
use crate::config::Config;
use crate::fetcher::{LookupError, NewsClient};
use crate::topic::Topic;

/// The finished post, ready for display or export.
#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub topic: Topic,
    pub body: String,
}

impl GeneratedPost {
    /// Suggested name for the exported markdown file.
    pub fn file_name(&self) -> String {
        format!("{}_linkedin_post.md", self.topic.as_str().to_lowercase())
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("no articles found for topic '{topic}'")]
    NoArticles { topic: Topic },

    #[error("news lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("post composition failed: {0}")]
    Compose(#[from] CompletionError),
}

/// Runs the two collaborators in sequence for a single topic.
/// Holds no state between invocations.
pub struct Orchestrator {
    news: NewsClient,
    composer: PostComposer,
}

impl Orchestrator {
    pub fn new(news: NewsClient, composer: PostComposer) -> Self {
        Self { news, composer }
    }

    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        let news = NewsClient::new(
            client.clone(),
            config.news_base_url.clone(),
            config.news_api_key.clone(),
        );
        let composer = PostComposer::new(
            client,
            config.openrouter_base_url.clone(),
            config.openrouter_api_key.clone(),
            config.model.clone(),
        );

        Self::new(news, composer)
    }

    /// Fetch the top article for the topic and turn it into a post.
    /// Composition is never attempted when the lookup fails or matches nothing.
    pub async fn generate(&self, topic: Topic) -> Result<GeneratedPost, GenerateError> {
        info!(topic = %topic, "Looking up latest industry news");
        let article = self
            .news
            .fetch_top_article(topic)
            .await?
            .ok_or(GenerateError::NoArticles { topic })?;

        info!(title = %article.title, source = %article.source_name, "Selected article");

        info!("Composing post");
        let body = self.composer.compose(&article).await?;

        info!(chars = body.len(), "Post generated");
        Ok(GeneratedPost { topic, body })
    }
}
