pub mod dispatcher;
pub mod engine;
pub mod nmcli;
pub mod report;
pub mod wordlist;

pub use crate::domain::model::{
    Attempt, AttemptOutcome, AttemptStatus, Candidates, MissingFilePolicy, RunReport,
};
pub use crate::domain::ports::{ConfigProvider, Connector};
pub use crate::utils::error::Result;
