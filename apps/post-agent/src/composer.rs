use reqwest::Client;
use tracing::instrument;
use url::Url;

use openrouter_engine::{call_chat_completion, CompletionError};

use crate::fetcher::Article;

/// Stylistic instructions sent with every prompt, regardless of topic.
const STYLE_REQUIREMENTS: &str = "\
Requirements:
- Use professional but engaging tone
- Include relevant hashtags
- Add emojis where appropriate
- Keep paragraphs short
- Include key takeaways
- Add a call-to-action question";

/// Interpolate the article into the fixed instruction template.
pub fn build_prompt(article: &Article) -> String {
    format!(
        "Create a professional LinkedIn post about this news article:\n\
         Article Title: {}\n\
         Source: {}\n\
         Description: {}\n\
         Content: {}\n\n\
         {}",
        article.title,
        article.source_name,
        article.description,
        article.content,
        STYLE_REQUIREMENTS,
    )
}

pub struct PostComposer {
    client: Client,
    base_url: Url,
    api_key: String,
    model: String,
}

impl PostComposer {
    pub fn new(client: Client, base_url: Url, api_key: String, model: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
            model,
        }
    }

    /// Ask the completion endpoint for a LinkedIn post seeded by the article.
    /// Exactly one completion is requested and used verbatim.
    #[instrument(skip(self, article), fields(title = %article.title))]
    pub async fn compose(&self, article: &Article) -> Result<String, CompletionError> {
        let prompt = build_prompt(article);
        call_chat_completion(&self.client, &self.base_url, &self.api_key, &self.model, prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            title: "X".to_string(),
            source_name: "Y".to_string(),
            description: "Z".to_string(),
            content: "W".to_string(),
        }
    }

    #[test]
    fn test_prompt_embeds_all_article_fields() {
        let prompt = build_prompt(&sample_article());
        assert!(prompt.contains("Article Title: X"));
        assert!(prompt.contains("Source: Y"));
        assert!(prompt.contains("Description: Z"));
        assert!(prompt.contains("Content: W"));
    }

    #[test]
    fn test_prompt_carries_fixed_instructions() {
        let prompt = build_prompt(&sample_article());
        assert!(prompt.contains("hashtags"));
        assert!(prompt.contains("emojis"));
        assert!(prompt.contains("call-to-action"));
        assert!(prompt.contains("key takeaways"));
    }

    #[test]
    fn test_prompt_tolerates_empty_fields() {
        let article = Article {
            title: String::new(),
            source_name: String::new(),
            description: String::new(),
            content: String::new(),
        };

        let prompt = build_prompt(&article);
        assert!(prompt.contains("Article Title:"));
        assert!(prompt.contains("call-to-action"));
    }
}
