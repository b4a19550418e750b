//! Programmatic configuration builder for integration tests

use std::time::Duration;

use parley_config::Config;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with defaults
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Point the grammar checker at a mock backend
    pub fn with_grammar_service(mut self, base_url: &str) -> Self {
        self.config.grammar.base_url = base_url.parse().expect("valid URL");
        self
    }

    /// Set the request timeout for grammar checks
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.grammar.timeout = timeout;
        self
    }

    /// Set the locale sent with each check
    pub fn with_language(mut self, language: &str) -> Self {
        self.config.grammar.language = language.to_owned();
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}
