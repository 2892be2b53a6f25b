//! The per-URL probe policy.
//!
//! A cheap header-only request goes out first. Some servers reject
//! header-only probes outright while still serving the resource, so a
//! rejection triggers one full retrieval request whose status wins, whatever
//! it is. Request failures never abort a batch: they are folded into the
//! [`StatusOutcome`] of the URL that caused them.
use std::time::Duration;

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::redirect::Policy;

use super::StatusOutcome;

/// Status codes after which a header-only probe cannot be trusted.
const HEAD_FALLBACK_CODES: [u16; 2] = [400, 403];

/// A prober resolves one URL to the outcome of checking it.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait Prober: Sync + Send {
    async fn probe(&self, url: String) -> StatusOutcome;
}

/// The HTTP [`Prober`] used in production.
pub struct HttpProber {
    head_client: reqwest::Client,
    get_client: reqwest::Client,
}

impl HttpProber {
    /// Builds a prober whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Will return an error if the underlying HTTP clients cannot be built.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        // Header-only probes report the status of the URL itself, so they
        // must not follow redirects. Retrieval probes keep the default
        // redirect behavior.
        let head_client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .build()?;

        let get_client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            head_client,
            get_client,
        })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, url: String) -> StatusOutcome {
        let status = match self.head_client.head(&url).send().await {
            Ok(response) => response.status().as_u16(),
            Err(err) => return outcome_from_error(&err),
        };

        if !HEAD_FALLBACK_CODES.contains(&status) {
            return StatusOutcome::Code(status);
        }

        match self.get_client.get(&url).send().await {
            Ok(response) => StatusOutcome::Code(response.status().as_u16()),
            Err(err) => outcome_from_error(&err),
        }
    }
}

fn outcome_from_error(err: &reqwest::Error) -> StatusOutcome {
    if err.is_timeout() {
        StatusOutcome::TimedOut
    } else {
        StatusOutcome::Unknown
    }
}
