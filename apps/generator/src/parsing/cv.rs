//! CV parsing — raw resume text into a structured [`CandidateProfile`].

use tracing::debug;

use crate::errors::GeneratorError;
use crate::extract;
use crate::llm_client::CompletionProvider;
use crate::models::profile::CandidateProfile;
use crate::parsing::prompts::build_cv_parsing_prompt;

/// Parses raw CV text with the LLM and returns the structured profile.
///
/// Failure policy: propagate. A CV that cannot be interpreted blocks the
/// whole pipeline, so there is no degraded substitute here.
pub async fn parse_cv(
    cv_text: &str,
    llm: &dyn CompletionProvider,
) -> Result<CandidateProfile, GeneratorError> {
    let prompt = build_cv_parsing_prompt(cv_text);
    let raw = llm.generate(&prompt).await?;
    let value = extract::parse_with_repair(&raw)?;
    let profile: CandidateProfile =
        serde_json::from_value(value).map_err(GeneratorError::schema("CV parsing"))?;

    debug!(
        "CV parsed: {} experiences, {} education entries",
        profile.professional_experiences.len(),
        profile.education.len()
    );
    Ok(profile)
}
