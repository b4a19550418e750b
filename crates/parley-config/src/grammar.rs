use std::time::Duration;

use serde::{Deserialize, Deserializer};
use url::Url;

const DEFAULT_BASE_URL: &str = "https://api.languagetoolplus.com/v2";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Grammar checking service configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GrammarConfig {
    /// Base URL of the LanguageTool-compatible API (the `/check` path is appended)
    #[serde(default = "default_base_url")]
    pub base_url: Url,
    /// Locale code sent with every check
    #[serde(default = "default_language")]
    pub language: String,
    /// Upper bound for a single check request, e.g. `"30s"` or `"1m"`
    #[serde(default = "default_timeout", deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for GrammarConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GrammarConfig {
    /// Validate the grammar service settings
    ///
    /// # Errors
    ///
    /// Returns an error if the language is empty, the timeout is zero,
    /// or the base URL is not HTTP(S)
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.language.trim().is_empty() {
            anyhow::bail!("grammar.language must not be empty");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("grammar.timeout must be greater than 0");
        }

        match self.base_url.scheme() {
            "http" | "https" => Ok(()),
            other => anyhow::bail!("grammar.base_url must use http or https, got '{other}'"),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(DEFAULT_BASE_URL).expect("default base URL must be valid")
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

const fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    duration_str::parse(&raw).map_err(|e| serde::de::Error::custom(format!("invalid duration '{raw}': {e}")))
}
