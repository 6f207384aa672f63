//! Content Selector — asks the model for the profile subset most relevant
//! to one offer.
//!
//! This is the documented fallback call site: when the model call or the
//! JSON recovery fails, the selector degrades to deterministic source-order
//! truncation instead of propagating the error. A worse selection beats no
//! application content at all.

use serde::Deserialize;
use tracing::warn;

use crate::errors::GeneratorError;
use crate::extract;
use crate::generation::prompts::build_selection_prompt;
use crate::llm_client::CompletionProvider;
use crate::models::content::SelectedContent;
use crate::models::offer::ParsedOffer;
use crate::models::profile::{AcademicProject, CandidateProfile, Experience, SkillSet};

/// Per-section caps for the selection.
#[derive(Debug, Clone)]
pub struct SelectionLimits {
    pub experiences: usize,
    pub projects: usize,
    pub interests: usize,
}

impl Default for SelectionLimits {
    fn default() -> Self {
        Self {
            experiences: 3,
            projects: 2,
            interests: 3,
        }
    }
}

/// Wire shape of the model's answer; entries are echoed from the source
/// profile.
#[derive(Debug, Deserialize)]
struct RawSelection {
    #[serde(default)]
    selected_experiences: Vec<Experience>,
    #[serde(default)]
    selected_projects: Vec<AcademicProject>,
    #[serde(default)]
    selected_skills: SkillSet,
    #[serde(default)]
    selected_interests: Vec<String>,
}

impl From<RawSelection> for SelectedContent {
    fn from(raw: RawSelection) -> Self {
        SelectedContent {
            experiences: raw.selected_experiences,
            projects: raw.selected_projects,
            skills: raw.selected_skills,
            interests: raw.selected_interests,
        }
    }
}

/// Selects the most strategic profile content for the offer.
///
/// Never fails: any error from the model call or the JSON recovery is
/// logged and replaced by [`fallback_selection`].
pub async fn select_content(
    offer: &ParsedOffer,
    profile: &CandidateProfile,
    limits: &SelectionLimits,
    llm: &dyn CompletionProvider,
) -> SelectedContent {
    match try_select(offer, profile, limits, llm).await {
        Ok(selected) => selected,
        Err(err) => {
            warn!("content selection failed ({err}), falling back to source-order truncation");
            fallback_selection(profile, limits)
        }
    }
}

async fn try_select(
    offer: &ParsedOffer,
    profile: &CandidateProfile,
    limits: &SelectionLimits,
    llm: &dyn CompletionProvider,
) -> Result<SelectedContent, GeneratorError> {
    let offer_json =
        serde_json::to_string_pretty(offer).map_err(GeneratorError::encode("content selection"))?;
    let profile_json = serde_json::to_string_pretty(profile)
        .map_err(GeneratorError::encode("content selection"))?;

    let prompt = build_selection_prompt(
        &offer_json,
        &profile_json,
        limits.experiences,
        limits.projects,
        limits.interests,
    );
    let raw = llm.generate(&prompt).await?;
    let value = extract::parse_with_repair(&raw)?;
    let selection: RawSelection =
        serde_json::from_value(value).map_err(GeneratorError::schema("content selection"))?;

    Ok(selection.into())
}

/// Deterministic degraded selection: first N entries of each section, skills
/// kept whole.
fn fallback_selection(profile: &CandidateProfile, limits: &SelectionLimits) -> SelectedContent {
    SelectedContent {
        experiences: profile
            .professional_experiences
            .iter()
            .take(limits.experiences)
            .cloned()
            .collect(),
        projects: profile
            .academic_projects
            .iter()
            .take(limits.projects)
            .cloned()
            .collect(),
        skills: profile.skills.clone(),
        interests: profile.interests.iter().take(limits.interests).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedProvider;

    fn profile_with_sections() -> CandidateProfile {
        CandidateProfile {
            professional_experiences: (0..5)
                .map(|i| Experience {
                    title: Some(format!("Role {i}")),
                    ..Default::default()
                })
                .collect(),
            academic_projects: (0..4)
                .map(|i| AcademicProject {
                    title: Some(format!("Project {i}")),
                    ..Default::default()
                })
                .collect(),
            skills: SkillSet {
                hard_skills: vec!["Python".to_string(), "SQL".to_string()],
                ..Default::default()
            },
            interests: vec![
                "Running".to_string(),
                "Chess".to_string(),
                "Teaching".to_string(),
                "Cooking".to_string(),
            ],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_selection_uses_model_answer() {
        let llm = ScriptedProvider::new([
            r#"{
                "selected_experiences": [{"title": "Role 2", "company": "Acme"}],
                "selected_projects": [{"title": "Project 1"}],
                "selected_skills": {"hard_skills": ["Python"], "soft_skills": [], "languages": []},
                "selected_interests": ["Chess"]
            }"#,
        ]);
        let selected = select_content(
            &ParsedOffer::default(),
            &profile_with_sections(),
            &SelectionLimits::default(),
            &llm,
        )
        .await;

        assert_eq!(selected.experiences.len(), 1);
        assert_eq!(selected.experiences[0].title.as_deref(), Some("Role 2"));
        assert_eq!(selected.skills.hard_skills, vec!["Python"]);
        assert_eq!(selected.interests, vec!["Chess"]);
    }

    #[tokio::test]
    async fn test_selection_repairs_noisy_model_answer() {
        let llm = ScriptedProvider::new([
            "```json\n{\"selected_experiences\": [{\"title\": \"Role 0\"},], \"selected_interests\": [\"Running\",],}\n```",
        ]);
        let selected = select_content(
            &ParsedOffer::default(),
            &profile_with_sections(),
            &SelectionLimits::default(),
            &llm,
        )
        .await;
        assert_eq!(selected.experiences[0].title.as_deref(), Some("Role 0"));
        assert_eq!(selected.interests, vec!["Running"]);
    }

    #[tokio::test]
    async fn test_llm_failure_falls_back_to_truncation() {
        let llm = ScriptedProvider::failing();
        let profile = profile_with_sections();
        let limits = SelectionLimits::default();
        let selected = select_content(&ParsedOffer::default(), &profile, &limits, &llm).await;

        assert_eq!(selected.experiences.len(), 3);
        assert_eq!(selected.experiences[0].title.as_deref(), Some("Role 0"));
        assert_eq!(selected.projects.len(), 2);
        assert_eq!(selected.interests, vec!["Running", "Chess", "Teaching"]);
        // Skills are kept whole in the fallback.
        assert_eq!(selected.skills.hard_skills, vec!["Python", "SQL"]);
    }

    #[tokio::test]
    async fn test_unparseable_answer_falls_back_to_truncation() {
        let llm = ScriptedProvider::new(["I picked the best three experiences for you!"]);
        let profile = profile_with_sections();
        let selected = select_content(
            &ParsedOffer::default(),
            &profile,
            &SelectionLimits::default(),
            &llm,
        )
        .await;
        assert_eq!(selected.experiences.len(), 3);
    }

    #[tokio::test]
    async fn test_fallback_respects_short_sections() {
        let llm = ScriptedProvider::failing();
        let profile = CandidateProfile {
            interests: vec!["Running".to_string()],
            ..Default::default()
        };
        let selected = select_content(
            &ParsedOffer::default(),
            &profile,
            &SelectionLimits::default(),
            &llm,
        )
        .await;
        assert!(selected.experiences.is_empty());
        assert_eq!(selected.interests, vec!["Running"]);
    }
}
