//! Candidate profile — the structured output of CV parsing.
//!
//! Field names are the JSON contract pinned by the CV parsing prompt. Every
//! container defaults to empty so a model response that drops an optional
//! field still deserializes: missing data degrades output quality, it does
//! not fail the parse.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Full name as it appears on the CV.
    pub full_name: Option<String>,
    #[serde(default)]
    pub contacts: Contacts,
    #[serde(default)]
    pub websites: Vec<WebsiteLink>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub professional_experiences: Vec<Experience>,
    #[serde(default)]
    pub academic_projects: Vec<AcademicProject>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Short model-written summary of the candidate (2-3 sentences).
    pub raw_summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebsiteLink {
    pub label: Option<String>,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: Option<String>,
    #[serde(default)]
    pub url: String,
}

/// Skills split the way the parsing prompt asks for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSet {
    #[serde(default)]
    pub hard_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    /// Spoken languages, e.g. "French (C1)".
    #[serde(default)]
    pub languages: Vec<String>,
}

/// A job, internship, or freelance engagement. Dates stay as written in the
/// CV — no format normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AcademicProject {
    pub title: Option<String>,
    /// Course, hackathon, team project...
    pub context: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
}
