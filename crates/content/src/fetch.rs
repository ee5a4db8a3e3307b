//! Tier 1: lightweight HTTP fetch of the services page.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use atende_core::config::ContentConfig;
use atende_core::profile::{CompanyProfile, ProfileSource, Service};

use crate::extract::extract_headings;
use crate::fallback::static_profile;
use crate::pipeline::ContentSource;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Extracted fragments appended to the static catalog, beyond which live
/// headings tend to repeat the hand-authored services.
const MAX_EXTRA_SERVICES: usize = 2;

/// Plain GET + heading extraction against the known services page.
pub struct LightweightFetch {
    client: reqwest::Client,
    services_url: String,
}

impl LightweightFetch {
    pub fn from_config(content: &ContentConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(content.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { client, services_url: content.services_url.clone() }
    }
}

#[async_trait]
impl ContentSource for LightweightFetch {
    fn name(&self) -> &'static str {
        "lightweight_fetch"
    }

    async fn acquire(&self) -> Result<Option<CompanyProfile>> {
        let response = self
            .client
            .get(&self.services_url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", self.services_url))?
            .error_for_status()
            .context("services page returned an error status")?;

        let html = response.text().await.context("services page body was unreadable")?;
        let fragments = extract_headings(&html);
        if fragments.is_empty() {
            return Ok(None);
        }

        Ok(Some(synthesize_profile(fragments)))
    }
}

/// Builds a profile around the extracted fragments: the hand-authored
/// catalog stays as the base, live headings are appended as extra services.
fn synthesize_profile(fragments: Vec<String>) -> CompanyProfile {
    let mut profile = static_profile();
    for fragment in fragments.into_iter().take(MAX_EXTRA_SERVICES) {
        let description = format!("Serviço especializado oferecido pelo Grupo OC: {fragment}");
        profile.services.push(Service::new(fragment, description));
    }
    profile.stamped(ProfileSource::LightweightFetch)
}
