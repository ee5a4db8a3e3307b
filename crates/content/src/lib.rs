//! Content acquisition for the Atende knowledge base.
//!
//! A descending chain of strategies refreshes the company profile from the
//! live site: a lightweight HTTP fetch of the services page, an optional
//! multi-page crawl, and finally the bundled static profile. The chain
//! always returns a usable profile; individual tier failures are logged
//! and swallowed, never propagated.

pub mod crawl;
pub mod extract;
pub mod fallback;
pub mod fetch;
pub mod pipeline;

pub use crawl::SiteCrawl;
pub use fallback::static_profile;
pub use fetch::LightweightFetch;
pub use pipeline::{AcquisitionPipeline, ContentSource};
