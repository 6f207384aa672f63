//! Parsed job offer — the structured output of job-offer parsing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedOffer {
    pub title: Option<String>,
    pub company_name: Option<String>,
    /// City / country / "Remote".
    pub location: Option<String>,
    /// e.g. "Full-time", "Internship", "CDI", "CDD".
    pub contract_type: Option<String>,
    pub seniority_level: Option<String>,
    /// Degrees / fields of study only. The wire key is capitalized — an
    /// inconsistency in the upstream schema that the prompts pin down.
    #[serde(rename = "Education", default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub hard_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    /// Short sentences describing responsibilities.
    #[serde(default)]
    pub missions: Vec<String>,
    /// Experience-duration requirements ("3+ years in data analysis").
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub salary: Option<String>,
    /// Full, cleaned-up job description text.
    pub description: Option<String>,
    #[serde(default)]
    pub language: OfferLanguage,
}

/// Language of the posting. Only French and English are distinguished; the
/// cover-letter and CV prompts switch on this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferLanguage {
    Fr,
    #[default]
    En,
}

impl OfferLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            OfferLanguage::Fr => "fr",
            OfferLanguage::En => "en",
        }
    }
}
