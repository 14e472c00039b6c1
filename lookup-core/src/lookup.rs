use log::debug;

use crate::client::{LookupError, WeatherStore};
use crate::model::WeatherRecord;

/// Terminal outcome of one submission. Every submission produces a fresh
/// outcome; callers replace any previous one rather than merging.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Success {
        message: String,
        record: WeatherRecord,
    },
    Failure {
        message: String,
    },
}

impl LookupOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LookupOutcome::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            LookupOutcome::Success { message, .. } | LookupOutcome::Failure { message } => message,
        }
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        match self {
            LookupOutcome::Success { record, .. } => Some(record),
            LookupOutcome::Failure { .. } => None,
        }
    }
}

/// Perform exactly one lookup and fold every exit path into a displayable
/// outcome. Nothing here retries or escalates.
pub async fn submit_lookup(store: &dyn WeatherStore, id: &str) -> LookupOutcome {
    match store.fetch_record(id).await {
        Ok(record) => LookupOutcome::Success {
            message: format!("Success! Here is the weather data stored with ID \"{id}\":"),
            record,
        },
        Err(err) => {
            debug!("lookup for {id:?} failed: {err}");
            LookupOutcome::Failure {
                message: err.to_string(),
            }
        }
    }
}
