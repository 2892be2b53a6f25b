//! Fans probes out to a bounded pool of concurrent tasks.
use std::collections::{BTreeMap, HashSet};
use std::num::NonZeroUsize;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};

use super::probe::Prober;
use super::CheckResult;

pub struct Dispatcher {
    prober: Arc<dyn Prober>,
    max_workers: NonZeroUsize,
}

impl Dispatcher {
    #[must_use]
    pub fn new(prober: Arc<dyn Prober>, max_workers: NonZeroUsize) -> Self {
        Self { prober, max_workers }
    }

    /// Probes every distinct URL and returns one result per URL.
    ///
    /// Duplicates are dropped before anything is scheduled, so a URL is
    /// probed once no matter how often it appears. All probes are submitted
    /// up front; a semaphore keeps at most `max_workers` of them in flight.
    /// The call returns once every probe has finished. A URL that cannot be
    /// checked produces an ordinary result, never an error.
    ///
    /// # Errors
    ///
    /// Will return an error if some of the probe tasks panic or otherwise
    /// fail to run.
    ///
    /// # Panics
    ///
    /// Will panic if the semaphore guarding the worker pool has been closed.
    pub async fn dispatch<I>(&self, urls: I) -> Result<BTreeMap<String, CheckResult>, JoinError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let urls: Vec<String> = urls.into_iter().filter(|url| seen.insert(url.clone())).collect();
        let total = urls.len();

        tracing::info!(total, max_workers = self.max_workers.get(), "Checking URLs ...");

        let semaphore = Arc::new(Semaphore::new(self.max_workers.get()));

        let mut probes = JoinSet::new();
        for url in urls {
            let prober = Arc::clone(&self.prober);
            let semaphore = Arc::clone(&semaphore);
            probes.spawn(async move {
                let _permit = semaphore
                    .acquire_owned()
                    .await
                    .expect("the semaphore should stay open while probes are running");
                let outcome = prober.probe(url.clone()).await;
                (url, outcome)
            });
        }

        let mut results = BTreeMap::new();
        while let Some(probe) = probes.join_next().await {
            let (url, outcome) = probe?;
            tracing::debug!(%url, %outcome, completed = results.len() + 1, total, "check finished");
            results.insert(url, CheckResult::observed_now(outcome));
        }

        debug_assert_eq!(results.len(), total);

        Ok(results)
    }
}
