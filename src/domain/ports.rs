use crate::domain::model::{Attempt, AttemptOutcome, MissingFilePolicy};
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn ssid(&self) -> &str;
    fn wordlist_path(&self) -> &str;
    fn missing_file_policy(&self) -> MissingFilePolicy;
    fn workers(&self) -> usize;
}

/// Tries one candidate against the target network.
///
/// Implementations never fail the run: anything that goes wrong with a
/// single attempt is recorded in the returned outcome.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn attempt(&self, attempt: &Attempt) -> AttemptOutcome;
}
