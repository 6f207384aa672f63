//! One-shot CV content generation — rewrites the whole profile against one
//! offer in a single model call, for cross-section coherence and a single
//! round-trip.

use serde::Serialize;
use tracing::debug;

use crate::errors::GeneratorError;
use crate::extract;
use crate::generation::prompts::build_cv_content_prompt;
use crate::llm_client::CompletionProvider;
use crate::models::content::CvContent;
use crate::models::offer::ParsedOffer;
use crate::models::profile::{AcademicProject, CandidateProfile, Education, Experience, SkillSet};

/// Source-data layout the generation prompt expects.
#[derive(Debug, Serialize)]
struct SourceData<'a> {
    profile: SourceProfile<'a>,
    experiences: &'a [Experience],
    projects: &'a [AcademicProject],
    education: &'a [Education],
    skills: &'a SkillSet,
    interests: &'a [String],
}

#[derive(Debug, Serialize)]
struct SourceProfile<'a> {
    summary: Option<&'a str>,
}

impl<'a> SourceData<'a> {
    fn from_profile(profile: &'a CandidateProfile) -> Self {
        Self {
            profile: SourceProfile {
                summary: profile.raw_summary.as_deref(),
            },
            experiences: &profile.professional_experiences,
            projects: &profile.academic_projects,
            education: &profile.education,
            skills: &profile.skills,
            interests: &profile.interests,
        }
    }
}

/// Generates the full tailored CV content. Failure policy: propagate — a
/// half-written CV is worse than a reported error.
pub async fn generate_cv_content(
    offer: &ParsedOffer,
    profile: &CandidateProfile,
    llm: &dyn CompletionProvider,
) -> Result<CvContent, GeneratorError> {
    let offer_json =
        serde_json::to_string_pretty(offer).map_err(GeneratorError::encode("CV generation"))?;
    let source_json = serde_json::to_string_pretty(&SourceData::from_profile(profile))
        .map_err(GeneratorError::encode("CV generation"))?;

    let prompt = build_cv_content_prompt(&offer_json, &source_json);
    let raw = llm.generate(&prompt).await?;
    let value = extract::parse_with_repair(&raw)?;
    let content: CvContent =
        serde_json::from_value(value).map_err(GeneratorError::schema("CV generation"))?;

    debug!(
        "CV content generated: {} experiences, {} projects",
        content.experiences.len(),
        content.projects.len()
    );
    Ok(content)
}
