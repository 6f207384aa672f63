use thiserror::Error;

use crate::extract::JsonRepairFailure;
use crate::llm_client::LlmError;

/// Error type returned by every LLM-backed call site in the crate.
///
/// A `JsonRepairFailure` is never swallowed here: whether to propagate it or
/// substitute a degraded value is each call site's decision (the content
/// selector catches, everything else propagates).
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Parse(#[from] JsonRepairFailure),

    #[error("{stage} output did not match the expected schema: {source}")]
    Schema {
        stage: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {stage} prompt input: {source}")]
    Encode {
        stage: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl GeneratorError {
    pub(crate) fn schema(stage: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| GeneratorError::Schema { stage, source }
    }

    pub(crate) fn encode(stage: &'static str) -> impl FnOnce(serde_json::Error) -> Self {
        move |source| GeneratorError::Encode { stage, source }
    }
}
