//! Short-link expansion by following HTTP redirects.
//!
//! A HEAD request is sent and redirects are followed while they stay on
//! Google hosts. Whatever goes wrong, the caller gets a URL back: the
//! original one on failure.

use super::domains::DomainAllowlist;
use crate::config::LocatorConfig;
use async_trait::async_trait;
use reqwest::header::LOCATION;
use reqwest::redirect::Policy;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Resolves a possibly shortened URL to its final destination.
#[async_trait]
pub trait RedirectExpander: Send + Sync {
    /// Return the final URL, or `url` itself if it cannot be expanded.
    async fn expand(&self, url: &str) -> String;
}

/// Expander that never expands; used when network access is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExpander;

#[async_trait]
impl RedirectExpander for NoopExpander {
    async fn expand(&self, url: &str) -> String {
        url.to_string()
    }
}

#[derive(Debug, Error)]
pub enum ExpandError {
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("host not allowed: {0}")]
    HostNotAllowed(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// HEAD-request expander restricted to an allowlist of hosts.
pub struct HttpExpander {
    client: reqwest::Client,
    allowlist: DomainAllowlist,
}

impl HttpExpander {
    pub fn new(config: &LocatorConfig) -> Result<Self, ExpandError> {
        let allowlist = DomainAllowlist::new(&config.allowed_domains);
        let client = reqwest::Client::builder()
            .redirect(redirect_policy(allowlist.clone(), config.max_redirects))
            .timeout(config.expand_timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, allowlist })
    }

    /// Expand `url`, surfacing the reason when it cannot be expanded.
    pub async fn try_expand(&self, url: &str) -> Result<String, ExpandError> {
        let parsed = Url::parse(url)?;
        if !self.allowlist.allows_url(&parsed) {
            return Err(ExpandError::HostNotAllowed(
                parsed.host_str().unwrap_or_default().to_string(),
            ));
        }

        let resp = self.client.head(parsed).send().await?;

        // A redirect we refused to follow still tells us where it points.
        if resp.status().is_redirection() {
            if let Some(target) = resp
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|loc| resp.url().join(loc).ok())
            {
                return Ok(target.to_string());
            }
        }

        Ok(resp.url().to_string())
    }
}

#[async_trait]
impl RedirectExpander for HttpExpander {
    async fn expand(&self, url: &str) -> String {
        match self.try_expand(url).await {
            Ok(resolved) => {
                debug!(url, resolved, "expanded url");
                resolved
            }
            Err(e) => {
                debug!(url, "expansion failed, keeping original url: {e}");
                url.to_string()
            }
        }
    }
}

/// Follow redirects up to `max` hops, stopping at the first off-list host.
fn redirect_policy(allowlist: DomainAllowlist, max: usize) -> Policy {
    Policy::custom(move |attempt| {
        if attempt.previous().len() > max {
            attempt.error("too many redirects")
        } else if allowlist.allows_url(attempt.url()) {
            attempt.follow()
        } else {
            attempt.stop()
        }
    })
}
