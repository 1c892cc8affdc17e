use crate::domain::suggestion::model::SuggestionStage;

pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);

    /// Records a pipeline stage transition.
    fn stage(&self, stage: SuggestionStage) {
        self.debug(&format!("suggestion pipeline entered stage: {}", stage));
    }
}
