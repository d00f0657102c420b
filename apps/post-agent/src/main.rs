use std::time::Duration;

use tracing::{error, info};

use openrouter_engine::init_logging;
use post_agent::config::Config;
use post_agent::orchestrator::{GenerateError, Orchestrator};
use post_agent::topic::Topic;

// --- Configuration Constants ---
const HTTP_TIMEOUT_SECS: u64 = 30;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    init_logging();

    let config = Config::from_env().map_err(|e| {
        error!(error = %e, "Please configure your API keys first");
        e
    })?;

    let topic = parse_topic_arg().map_err(|e| {
        error!("{}", e);
        e
    })?;

    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    let orchestrator = Orchestrator::from_config(http_client, &config);

    info!(topic = %topic, model = %config.model, "Starting LinkedIn post generation");

    let post = match orchestrator.generate(topic).await {
        Ok(post) => post,
        Err(GenerateError::NoArticles { topic }) => {
            error!(topic = %topic, "No recent articles found, try another topic");
            return Err(GenerateError::NoArticles { topic }.into());
        }
        Err(e) => {
            error!(error = %e, "Post generation failed");
            return Err(e.into());
        }
    };

    let file_name = post.file_name();
    std::fs::write(&file_name, &post.body).map_err(|e| {
        error!(file = %file_name, error = %e, "Failed to write post file");
        e
    })?;

    info!(file = %file_name, "Post generated successfully");
    println!("{}", post.body);

    Ok(())
}

fn parse_topic_arg() -> Result<Topic, String> {
    let usage = format!(
        "usage: post-agent <topic>\ntopics: {}",
        Topic::ALL.map(|t| t.as_str()).join(", ")
    );

    let raw = std::env::args().nth(1).ok_or_else(|| usage.clone())?;
    raw.parse::<Topic>().map_err(|e| format!("{}\n{}", e, usage))
}
