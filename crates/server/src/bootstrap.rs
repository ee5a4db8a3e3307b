use std::sync::Arc;

use atende_agent::{ChatRuntime, LlmClient, OpenAiChatClient};
use atende_content::AcquisitionPipeline;
use atende_core::config::{AppConfig, ConfigError, LoadOptions};
use thiserror::Error;
use tracing::info;

use crate::http::AppState;

pub struct Application {
    pub config: AppConfig,
    pub runtime: Arc<ChatRuntime>,
}

impl Application {
    pub fn state(&self) -> AppState {
        AppState { runtime: self.runtime.clone() }
    }
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(event_name = "system.bootstrap.start", "starting application bootstrap");

    let provider = Arc::new(AcquisitionPipeline::from_config(&config.content));
    let llm: Option<Arc<dyn LlmClient>> = OpenAiChatClient::from_config(&config.llm)
        .map(|client| Arc::new(client) as Arc<dyn LlmClient>);

    info!(
        event_name = "system.bootstrap.ai_mode",
        mode = if llm.is_some() { "ai" } else { "unconfigured" },
        model = %config.llm.model,
        "completion client initialized"
    );
    info!(
        event_name = "system.bootstrap.content_tiers",
        crawl_enabled = config.content.crawl_enabled,
        services_url = %config.content.services_url,
        "profile acquisition pipeline assembled"
    );

    let runtime = Arc::new(ChatRuntime::new(provider, llm));
    Ok(Application { config, runtime })
}

#[cfg(test)]
mod tests {
    use atende_core::config::{ConfigOverrides, LoadOptions};

    use crate::bootstrap::bootstrap;

    fn isolated_options(overrides: ConfigOverrides) -> LoadOptions {
        // Point at a nonexistent config path so a developer's local file
        // cannot leak into the test.
        LoadOptions {
            config_path: Some("/nonexistent/atende.toml".into()),
            require_file: false,
            overrides,
        }
    }

    #[tokio::test]
    async fn bootstrap_fails_fast_on_invalid_services_url() {
        let result = bootstrap(isolated_options(ConfigOverrides {
            content_services_url: Some("not-a-url".to_string()),
            ..ConfigOverrides::default()
        }))
        .await;

        assert!(result.is_err());
        let message = result.err().expect("error").to_string();
        assert!(message.contains("content.services_url"));
    }

    #[tokio::test]
    async fn bootstrap_succeeds_without_llm_credentials() {
        let app = bootstrap(isolated_options(ConfigOverrides::default()))
            .await
            .expect("bootstrap should succeed with defaults");

        // The profile is acquired lazily; nothing has been fetched yet.
        assert_eq!(app.runtime.profile_source(), None);
    }
}
