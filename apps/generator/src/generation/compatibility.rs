//! Compatibility scoring — LLM-written match analysis between one profile
//! and one offer.
//!
//! This is the call site the percent/fraction repair pass exists for:
//! scoring models regularly answer `"skills_match": 80%` or `"overall_score":
//! 72/100` despite the integer schema. Callers that want a fast heuristic
//! score for list views should compute it upstream — this module always
//! consults the model.

use tracing::debug;

use crate::errors::GeneratorError;
use crate::extract;
use crate::generation::prompts::build_compatibility_prompt;
use crate::llm_client::CompletionProvider;
use crate::models::content::CompatibilityReport;
use crate::models::offer::ParsedOffer;
use crate::models::profile::CandidateProfile;

/// Scores the profile against the offer. Failure policy: propagate — a
/// fabricated score would mislead the candidate, so there is no fallback
/// value here.
pub async fn score_compatibility(
    offer: &ParsedOffer,
    profile: &CandidateProfile,
    llm: &dyn CompletionProvider,
) -> Result<CompatibilityReport, GeneratorError> {
    let offer_json = serde_json::to_string_pretty(offer)
        .map_err(GeneratorError::encode("compatibility scoring"))?;
    let cv_json = serde_json::to_string_pretty(profile)
        .map_err(GeneratorError::encode("compatibility scoring"))?;

    let prompt = build_compatibility_prompt(&offer_json, &cv_json);
    let raw = llm.generate(&prompt).await?;
    let value = extract::parse_with_repair(&raw)?;
    let report: CompatibilityReport =
        serde_json::from_value(value).map_err(GeneratorError::schema("compatibility scoring"))?;

    debug!(
        "compatibility scored: overall={}, skills={}",
        report.overall_score, report.scores.skills_match
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedProvider;

    #[tokio::test]
    async fn test_percent_scores_are_recovered_as_integers() {
        let llm = ScriptedProvider::new([
            "```json\n{\"overall_score\": 72%, \"scores\": {\"skills_match\": 80%, \"experience_match\": 60, \"education_match\": 90/100, \"language_match\": 100}, \"summary\": \"Bon profil.\",}\n```",
        ]);
        let report =
            score_compatibility(&ParsedOffer::default(), &CandidateProfile::default(), &llm)
                .await
                .unwrap();

        assert_eq!(report.overall_score, 72);
        assert_eq!(report.scores.skills_match, 80);
        assert_eq!(report.scores.education_match, 90);
        assert_eq!(report.summary, "Bon profil.");
    }

    #[tokio::test]
    async fn test_sparse_report_defaults_to_zero_scores() {
        let llm = ScriptedProvider::new([r#"{"overall_score": 35, "summary": "Profil éloigné."}"#]);
        let report =
            score_compatibility(&ParsedOffer::default(), &CandidateProfile::default(), &llm)
                .await
                .unwrap();
        assert_eq!(report.overall_score, 35);
        assert_eq!(report.scores.experience_match, 0);
        assert!(report.key_strengths.is_empty());
    }

    #[tokio::test]
    async fn test_unintelligible_answer_propagates_failure() {
        let llm = ScriptedProvider::new(["The candidate seems like a decent fit overall."]);
        let err = score_compatibility(&ParsedOffer::default(), &CandidateProfile::default(), &llm)
            .await
            .unwrap_err();
        assert!(matches!(err, GeneratorError::Parse(_)));
    }
}
