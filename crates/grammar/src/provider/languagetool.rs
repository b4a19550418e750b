use std::time::Duration;

use async_trait::async_trait;
use parley_config::GrammarConfig;
use reqwest::Client;
use url::Url;

use crate::{error::GrammarError, http_client::http_client, types::GrammarFinding};

use super::GrammarChecker;

/// LanguageTool grammar checker
pub struct LanguageToolChecker {
    client: Client,
    check_url: Url,
    language: String,
    timeout: Duration,
}

impl LanguageToolChecker {
    /// Create a checker for the API rooted at `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` cannot be extended with the `/check` path
    pub fn new(base_url: &Url, language: String, timeout: Duration) -> crate::error::Result<Self> {
        let check_url = base_url
            .join(&format!("{}/check", base_url.path().trim_end_matches('/')))
            .map_err(|e| GrammarError::InvalidUrl(format!("{base_url}: {e}")))?;

        Ok(Self {
            client: http_client(),
            check_url,
            language,
            timeout,
        })
    }

    /// Create a checker from the `[grammar]` configuration section
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is unusable
    pub fn from_config(config: &GrammarConfig) -> crate::error::Result<Self> {
        Self::new(&config.base_url, config.language.clone(), config.timeout)
    }

    /// Full URL of the check endpoint
    pub fn check_url(&self) -> &Url {
        &self.check_url
    }
}

#[derive(serde::Deserialize)]
struct CheckResponse {
    matches: Vec<LanguageToolMatch>,
}

#[derive(serde::Deserialize)]
struct LanguageToolMatch {
    message: String,
    replacements: Vec<LanguageToolReplacement>,
    context: LanguageToolContext,
    rule: LanguageToolRule,
}

#[derive(serde::Deserialize)]
struct LanguageToolReplacement {
    value: String,
}

#[derive(serde::Deserialize)]
struct LanguageToolContext {
    text: String,
}

#[derive(serde::Deserialize)]
struct LanguageToolRule {
    category: LanguageToolCategory,
}

#[derive(serde::Deserialize)]
struct LanguageToolCategory {
    id: String,
}

impl From<LanguageToolMatch> for GrammarFinding {
    fn from(m: LanguageToolMatch) -> Self {
        Self {
            category_id: m.rule.category.id,
            message: m.message,
            replacements: m.replacements.into_iter().map(|r| r.value).collect(),
            context: m.context.text,
        }
    }
}

#[async_trait]
impl GrammarChecker for LanguageToolChecker {
    async fn check(&self, text: &str) -> crate::error::Result<Vec<GrammarFinding>> {
        tracing::debug!(
            url = %self.check_url,
            language = %self.language,
            chars = text.len(),
            "LanguageTool check request"
        );

        let response = self
            .client
            .post(self.check_url.clone())
            .timeout(self.timeout)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

            return Err(GrammarError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let result: CheckResponse = serde_json::from_str(&body)?;

        tracing::debug!(matches = result.matches.len(), "LanguageTool check complete");

        Ok(result.matches.into_iter().map(GrammarFinding::from).collect())
    }

    fn name(&self) -> &str {
        "languagetool"
    }
}
