use crate::core::dispatcher::Dispatcher;
use crate::core::wordlist::read_candidates;
use crate::core::{ConfigProvider, Connector, RunReport};
use crate::utils::error::Result;
use chrono::Utc;

/// Load the wordlist, try every candidate, collect a report.
pub struct AuditEngine<C: ConfigProvider, K: Connector> {
    config: C,
    dispatcher: Dispatcher<K>,
}

impl<C: ConfigProvider, K: Connector + 'static> AuditEngine<C, K> {
    pub fn new(config: C, connector: K) -> Self {
        let dispatcher = Dispatcher::new(connector, config.workers());
        Self { config, dispatcher }
    }

    pub async fn run(&self) -> Result<RunReport> {
        let started_at = Utc::now();

        // 讀取候選密碼
        let candidates = read_candidates(
            self.config.wordlist_path(),
            self.config.missing_file_policy(),
        )?;
        tracing::info!(
            "📄 {} candidates loaded from {}",
            candidates.len(),
            self.config.wordlist_path()
        );

        let outcomes = if candidates.is_empty() {
            tracing::info!("No candidates, skipping dispatch");
            Vec::new()
        } else {
            self.dispatcher.run(self.config.ssid(), &candidates).await
        };

        Ok(RunReport {
            ssid: self.config.ssid().to_string(),
            workers: self.dispatcher.pool_size(candidates.len()),
            candidates: candidates.len(),
            started_at,
            finished_at: Utc::now(),
            outcomes,
        })
    }
}
