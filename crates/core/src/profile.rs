//! Company profile: the knowledge base both responders read.
//!
//! Populated at most once per process by the acquisition pipeline and
//! read-only afterwards (single writer, many readers).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One service from the company catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Service {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into(), division: None, category: None }
    }

    pub fn with_division(
        name: impl Into<String>,
        description: impl Into<String>,
        division: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            division: Some(division.into()),
            category: Some(category.into()),
        }
    }
}

/// Which acquisition tier produced the profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    LightweightFetch,
    SiteCrawl,
    StaticFallback,
}

impl ProfileSource {
    pub fn tag(self) -> &'static str {
        match self {
            Self::LightweightFetch => "lightweight_fetch",
            Self::SiteCrawl => "site_crawl",
            Self::StaticFallback => "static_fallback",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub source: ProfileSource,
    pub collected_at: DateTime<Utc>,
    pub service_count: usize,
}

/// Structured knowledge base describing the represented business.
///
/// Invariant: always available once the first acquisition attempt has
/// completed; the static fallback tier guarantees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub narrative_texts: Vec<String>,
    pub differentiators: Vec<String>,
    pub about: String,
    pub services: Vec<Service>,
    pub metadata: ProfileMetadata,
}

impl CompanyProfile {
    /// Restamps provenance after a tier has assembled its content.
    pub fn stamped(mut self, source: ProfileSource) -> Self {
        self.metadata = ProfileMetadata {
            source,
            collected_at: Utc::now(),
            service_count: self.services.len(),
        };
        self
    }
}

/// Acquires the company profile. Callers invoke this once, lazily, and
/// cache the result for the process lifetime.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn acquire(&self) -> CompanyProfile;
}
