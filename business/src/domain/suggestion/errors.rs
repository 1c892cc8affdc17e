use super::model::{SearchKind, SuggestionStage};

/// Failures of a single suggestion request.
/// Display strings are code-style identifiers for i18n compatibility; the payload carries
/// the upstream detail or the raw generation reply for diagnosis.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SuggestionError {
    #[error("suggestion.generation_failed")]
    GenerationFailed(String),
    #[error("suggestion.search_failed")]
    SearchFailed { kind: SearchKind, details: String },
    #[error("suggestion.incomplete_generation")]
    IncompleteGeneration { raw_reply: String },
}

impl SuggestionError {
    pub fn generation_failed(details: impl Into<String>) -> Self {
        SuggestionError::GenerationFailed(details.into())
    }

    pub fn search_failed(kind: SearchKind, details: impl Into<String>) -> Self {
        SuggestionError::SearchFailed {
            kind,
            details: details.into(),
        }
    }

    /// Stage of the pipeline this error is raised from.
    pub fn stage(&self) -> SuggestionStage {
        match self {
            SuggestionError::GenerationFailed(_) => SuggestionStage::Prompting,
            SuggestionError::SearchFailed { .. } => SuggestionStage::Searching,
            SuggestionError::IncompleteGeneration { .. } => SuggestionStage::Validating,
        }
    }

    /// Upstream message, or the raw reply for an incomplete generation.
    pub fn details(&self) -> &str {
        match self {
            SuggestionError::GenerationFailed(details) => details,
            SuggestionError::SearchFailed { details, .. } => details,
            SuggestionError::IncompleteGeneration { raw_reply } => raw_reply,
        }
    }

    /// Whether the failure came from a remote call rather than from the reply contents.
    pub fn is_upstream(&self) -> bool {
        !matches!(self, SuggestionError::IncompleteGeneration { .. })
    }
}
