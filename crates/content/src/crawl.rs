//! Tier 2: multi-page extraction across the home and services pages.
//!
//! Optional tier, off by default (`content.crawl_enabled`). Visits both
//! pages sequentially, extracting heading and paragraph text with
//! de-duplication and caps, the deeper variant of what tier 1 does.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use atende_core::config::ContentConfig;
use atende_core::profile::{CompanyProfile, ProfileSource, Service};

use crate::extract::extract_headings_and_paragraphs;
use crate::fallback::static_profile;
use crate::pipeline::ContentSource;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

const MAX_CRAWLED_SERVICES: usize = 12;
const MAX_NARRATIVE_TEXTS: usize = 10;

/// Sequential home + services page extraction.
pub struct SiteCrawl {
    client: reqwest::Client,
    home_url: String,
    services_url: String,
}

impl SiteCrawl {
    pub fn from_config(content: &ContentConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(content.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            client,
            home_url: content.home_url.clone(),
            services_url: content.services_url.clone(),
        }
    }

    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))?
            .error_for_status()
            .with_context(|| format!("{url} returned an error status"))?;
        response.text().await.with_context(|| format!("{url} body was unreadable"))
    }
}

#[async_trait]
impl ContentSource for SiteCrawl {
    fn name(&self) -> &'static str {
        "site_crawl"
    }

    async fn acquire(&self) -> Result<Option<CompanyProfile>> {
        let mut headings = Vec::new();
        let mut paragraphs = Vec::new();

        for url in [&self.home_url, &self.services_url] {
            let html = self.fetch_page(url).await?;
            let (page_headings, page_paragraphs) = extract_headings_and_paragraphs(&html);
            merge_unique(&mut headings, page_headings);
            merge_unique(&mut paragraphs, page_paragraphs);
        }

        if headings.is_empty() {
            return Ok(None);
        }

        Ok(Some(assemble_profile(headings, paragraphs)))
    }
}

fn merge_unique(target: &mut Vec<String>, extra: Vec<String>) {
    for text in extra {
        if !target.contains(&text) {
            target.push(text);
        }
    }
}

fn assemble_profile(headings: Vec<String>, paragraphs: Vec<String>) -> CompanyProfile {
    let mut profile = static_profile();

    profile.services = headings
        .into_iter()
        .take(MAX_CRAWLED_SERVICES)
        .map(|heading| {
            let description = format!("Serviço identificado no site do Grupo OC: {heading}");
            Service::new(heading, description)
        })
        .collect();

    if !paragraphs.is_empty() {
        profile.narrative_texts = paragraphs.into_iter().take(MAX_NARRATIVE_TEXTS).collect();
    }

    profile.stamped(ProfileSource::SiteCrawl)
}

#[cfg(test)]
mod tests {
    use atende_core::profile::ProfileSource;

    use super::{assemble_profile, merge_unique, MAX_CRAWLED_SERVICES};

    #[test]
    fn merging_keeps_first_occurrence_order() {
        let mut target = vec!["Telefonia".to_string()];
        merge_unique(
            &mut target,
            vec!["Internet Fibra".to_string(), "Telefonia".to_string()],
        );
        assert_eq!(target, vec!["Telefonia".to_string(), "Internet Fibra".to_string()]);
    }

    #[test]
    fn assembled_profile_caps_services_and_keeps_narrative() {
        let headings =
            (0..20).map(|index| format!("Serviço corporativo número {index}")).collect();
        let paragraphs = vec!["Texto institucional sobre o grupo.".to_string()];

        let profile = assemble_profile(headings, paragraphs);
        assert_eq!(profile.metadata.source, ProfileSource::SiteCrawl);
        assert_eq!(profile.services.len(), MAX_CRAWLED_SERVICES);
        assert_eq!(
            profile.narrative_texts,
            vec!["Texto institucional sobre o grupo.".to_string()]
        );
    }

    #[test]
    fn assembled_profile_keeps_static_narrative_without_paragraphs() {
        let profile = assemble_profile(vec!["Serviço corporativo".to_string()], Vec::new());
        assert!(!profile.narrative_texts.is_empty());
    }
}
