//! GeneratorService — facade over the pipeline call sites.
//!
//! Holds the injected completion providers (no ambient client singletons)
//! and exposes one method per pipeline capability. Rendering the returned
//! content to HTML/PDF and exposing it over HTTP belong to the surrounding
//! application.

use std::sync::Arc;

use tracing::info;

use crate::config::Config;
use crate::errors::GeneratorError;
use crate::generation::compatibility::score_compatibility;
use crate::generation::content_selector::{select_content, SelectionLimits};
use crate::generation::cover_letter::{generate_cover_letter, LetterOptions};
use crate::generation::cv_content::generate_cv_content;
use crate::llm_client::{CompletionProvider, GeminiClient};
use crate::models::content::{CompatibilityReport, CoverLetter, CvContent, SelectedContent};
use crate::models::offer::ParsedOffer;
use crate::models::profile::CandidateProfile;
use crate::parsing::cv::parse_cv;
use crate::parsing::job_offer::parse_job_offer;

/// Both parsed inputs of the pipeline.
#[derive(Debug, Clone)]
pub struct ParsedDocuments {
    pub profile: CandidateProfile,
    pub offer: ParsedOffer,
}

pub struct GeneratorService {
    llm: Arc<dyn CompletionProvider>,
    /// Separate provider for compatibility scoring, which may run a
    /// different model (see `Config::scoring_model`).
    scoring_llm: Arc<dyn CompletionProvider>,
}

impl GeneratorService {
    /// Builds a service using one provider for every call site.
    pub fn new(llm: Arc<dyn CompletionProvider>) -> Self {
        Self {
            scoring_llm: llm.clone(),
            llm,
        }
    }

    /// Swaps in a dedicated provider for compatibility scoring.
    pub fn with_scoring_provider(mut self, scoring_llm: Arc<dyn CompletionProvider>) -> Self {
        self.scoring_llm = scoring_llm;
        self
    }

    /// Builds Gemini-backed providers from configuration.
    pub fn from_config(config: &Config) -> Self {
        let llm = GeminiClient::new(config.gemini_api_key.clone(), config.model_name.clone());
        let scoring = GeminiClient::new(
            config.gemini_api_key.clone(),
            config.scoring_model().to_string(),
        );
        info!(
            "generator service initialized (model: {}, scoring model: {})",
            llm.model(),
            scoring.model()
        );
        Self::new(Arc::new(llm)).with_scoring_provider(Arc::new(scoring))
    }

    /// Parses both raw documents.
    pub async fn parse_documents(
        &self,
        cv_text: &str,
        offer_text: &str,
    ) -> Result<ParsedDocuments, GeneratorError> {
        let profile = parse_cv(cv_text, self.llm.as_ref()).await?;
        let offer = parse_job_offer(offer_text, self.llm.as_ref()).await?;
        Ok(ParsedDocuments { profile, offer })
    }

    /// Parses only a job-offer text.
    pub async fn parse_offer(&self, offer_text: &str) -> Result<ParsedOffer, GeneratorError> {
        parse_job_offer(offer_text, self.llm.as_ref()).await
    }

    /// Selects the profile subset most relevant to the offer. Degrades to
    /// source-order truncation instead of failing.
    pub async fn select_content(
        &self,
        offer: &ParsedOffer,
        profile: &CandidateProfile,
        limits: &SelectionLimits,
    ) -> SelectedContent {
        select_content(offer, profile, limits, self.llm.as_ref()).await
    }

    /// Generates the full tailored CV content.
    pub async fn build_cv(
        &self,
        offer: &ParsedOffer,
        profile: &CandidateProfile,
    ) -> Result<CvContent, GeneratorError> {
        generate_cv_content(offer, profile, self.llm.as_ref()).await
    }

    /// Generates the French cover letter.
    pub async fn build_cover_letter(
        &self,
        offer: &ParsedOffer,
        profile: &CandidateProfile,
        options: &LetterOptions,
    ) -> Result<CoverLetter, GeneratorError> {
        generate_cover_letter(offer, profile, options, self.llm.as_ref()).await
    }

    /// Scores the profile against the offer with the scoring provider.
    pub async fn score(
        &self,
        offer: &ParsedOffer,
        profile: &CandidateProfile,
    ) -> Result<CompatibilityReport, GeneratorError> {
        score_compatibility(offer, profile, self.scoring_llm.as_ref()).await
    }
}
