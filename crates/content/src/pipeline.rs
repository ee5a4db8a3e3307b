//! The tiered acquisition chain: first usable result wins, the static
//! profile guarantees the chain never comes back empty-handed.

use anyhow::Result;
use async_trait::async_trait;
use atende_core::config::ContentConfig;
use atende_core::profile::{CompanyProfile, ProfileProvider};
use tracing::{info, warn};

use crate::crawl::SiteCrawl;
use crate::fallback::static_profile;
use crate::fetch::LightweightFetch;

/// One acquisition strategy. `Ok(None)` means the tier ran but extracted
/// nothing usable; `Err` means it failed outright. Both fall through.
#[async_trait]
pub trait ContentSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn acquire(&self) -> Result<Option<CompanyProfile>>;
}

/// Ordered strategy chain. Tier failures are logged and swallowed; the
/// caller always receives a profile.
pub struct AcquisitionPipeline {
    sources: Vec<Box<dyn ContentSource>>,
}

impl AcquisitionPipeline {
    pub fn new(sources: Vec<Box<dyn ContentSource>>) -> Self {
        Self { sources }
    }

    /// Builds the deployment's chain: lightweight fetch, then the crawl
    /// tier when enabled. The static tier is implicit and always last.
    pub fn from_config(content: &ContentConfig) -> Self {
        let mut sources: Vec<Box<dyn ContentSource>> =
            vec![Box::new(LightweightFetch::from_config(content))];
        if content.crawl_enabled {
            sources.push(Box::new(SiteCrawl::from_config(content)));
        }
        Self::new(sources)
    }

    pub async fn acquire_profile(&self) -> CompanyProfile {
        for source in &self.sources {
            match source.acquire().await {
                Ok(Some(profile)) => {
                    info!(
                        event_name = "content.acquire.succeeded",
                        tier = source.name(),
                        service_count = profile.metadata.service_count,
                        "company profile acquired"
                    );
                    return profile;
                }
                Ok(None) => {
                    warn!(
                        event_name = "content.acquire.empty",
                        tier = source.name(),
                        "tier extracted nothing usable, falling through"
                    );
                }
                Err(error) => {
                    warn!(
                        event_name = "content.acquire.failed",
                        tier = source.name(),
                        error = %error,
                        "tier failed, falling through"
                    );
                }
            }
        }

        info!(
            event_name = "content.acquire.fallback",
            tier = "static_fallback",
            "using bundled static profile"
        );
        static_profile()
    }
}

#[async_trait]
impl ProfileProvider for AcquisitionPipeline {
    async fn acquire(&self) -> CompanyProfile {
        self.acquire_profile().await
    }
}
