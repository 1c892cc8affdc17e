use business::domain::logger::Logger;
use business::domain::suggestion::model::SuggestionStage;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under a single target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "nakoleh", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "nakoleh", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "nakoleh", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "nakoleh", "{}", message);
    }
    fn stage(&self, stage: SuggestionStage) {
        debug!(target: "nakoleh", stage = %stage, "suggestion pipeline stage");
    }
}
