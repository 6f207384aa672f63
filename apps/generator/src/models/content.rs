//! Generated-content schemas: tailored CV content, cover letter,
//! compatibility report, and the content-selection result.

use serde::{Deserialize, Serialize};

use crate::models::profile::{AcademicProject, Experience, SkillSet};

// ────────────────────────────────────────────────────────────────────────────
// CV content (one-shot generation output)
// ────────────────────────────────────────────────────────────────────────────

/// Full CV content rewritten against one offer. Produced in a single model
/// call so sections stay coherent with each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CvContent {
    /// CV headline aligned with the target role.
    pub cv_title: Option<String>,
    /// Professional summary, 2-3 sentences.
    pub objective: Option<String>,
    #[serde(default)]
    pub experiences: Vec<GeneratedExperience>,
    #[serde(default)]
    pub projects: Vec<GeneratedProject>,
    #[serde(default)]
    pub education: Vec<GeneratedEducation>,
    #[serde(default)]
    pub skills: SkillSections,
    #[serde(default)]
    pub interests: Vec<InterestLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedExperience {
    /// Title as it appeared in the source profile.
    pub source_title: Option<String>,
    /// Title optimized for the offer.
    pub target_title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedProject {
    pub source_title: Option<String>,
    pub target_title: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedEducation {
    pub degree: Option<String>,
    pub school: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSections {
    #[serde(default)]
    pub sections: Vec<SkillSection>,
    /// Top skills for this role, surfaced separately by the renderer.
    #[serde(default)]
    pub highlighted: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillSection {
    #[serde(default)]
    pub section_title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestLine {
    #[serde(default)]
    pub label: String,
    /// One sentence tying the interest to a soft skill.
    #[serde(default)]
    pub sentence: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter
// ────────────────────────────────────────────────────────────────────────────

/// Fully merged cover letter. Every field is whitespace-normalized and
/// never null — missing blocks come through as empty strings, and the
/// renderer skips them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverLetter {
    #[serde(default)]
    pub header_blocks: HeaderBlocks,
    #[serde(default)]
    pub company_blocks: CompanyBlocks,
    /// "Fait à [City], le [Date]"
    #[serde(default)]
    pub place_date_line: String,
    /// "Objet : Candidature pour le poste de ..."
    #[serde(default)]
    pub objet_line: String,
    #[serde(default)]
    pub greeting: String,
    #[serde(default)]
    pub para1: String,
    #[serde(default)]
    pub para2: String,
    #[serde(default)]
    pub para3: String,
    #[serde(default)]
    pub para4: String,
    #[serde(default)]
    pub signature: String,
}

/// Candidate block at the top left of the letter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderBlocks {
    #[serde(default)]
    pub fullname_block: String,
    #[serde(default)]
    pub location_block: String,
    #[serde(default)]
    pub email_block: String,
    #[serde(default)]
    pub phone_block: String,
    #[serde(default)]
    pub websites_block: String,
}

/// Recipient block at the top right of the letter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyBlocks {
    #[serde(default)]
    pub contact_block: String,
    #[serde(default)]
    pub company_name_block: String,
    #[serde(default)]
    pub company_address_block: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Compatibility report
// ────────────────────────────────────────────────────────────────────────────

/// LLM-written compatibility analysis between one profile and one offer.
/// All scores are 0-100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    #[serde(default)]
    pub overall_score: u8,
    #[serde(default)]
    pub scores: ScoreBreakdown,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub key_strengths: Vec<String>,
    #[serde(default)]
    pub key_gaps: Vec<String>,
    #[serde(default)]
    pub missing_hard_skills: Vec<String>,
    #[serde(default)]
    pub missing_soft_skills: Vec<String>,
    #[serde(default)]
    pub recommended_improvements: Vec<String>,
    #[serde(default)]
    pub recommended_projects_or_experiences: Vec<String>,
    #[serde(default)]
    pub recommended_courses_or_certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(default)]
    pub skills_match: u8,
    #[serde(default)]
    pub experience_match: u8,
    #[serde(default)]
    pub education_match: u8,
    #[serde(default)]
    pub language_match: u8,
}

// ────────────────────────────────────────────────────────────────────────────
// Content selection
// ────────────────────────────────────────────────────────────────────────────

/// Profile subset judged most relevant for one offer. Entries are echoed
/// from the source profile, so they reuse the profile types.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectedContent {
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<AcademicProject>,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub interests: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_content_full_deserializes() {
        let json = r#"{
            "cv_title": "Data Scientist Junior — Machine Learning",
            "objective": "Junior data scientist focused on business impact.",
            "experiences": [{
                "source_title": "Data Scientist Intern",
                "target_title": "Data Scientist Intern — Predictive Maintenance",
                "company": "Airbus",
                "location": "Toulouse, France",
                "start_date": "Feb 2024",
                "end_date": "Aug 2024",
                "bullets": ["Improved failure detection by ~7% on 50k+ records."]
            }],
            "projects": [{
                "target_title": "Glycemic Variability Dashboard",
                "tech_stack": ["Python", "D3.js"],
                "bullets": ["Built an interactive glucose/activity dashboard."]
            }],
            "education": [{
                "degree": "Engineering degree in Data Science",
                "school": "IMT Atlantique",
                "location": "France",
                "start_date": "2022",
                "end_date": "2025",
                "bullets": ["ML specialization."]
            }],
            "skills": {
                "sections": [{"section_title": "Technical", "items": ["Python", "SQL"]}],
                "highlighted": ["Python", "Machine Learning"]
            },
            "interests": [{"label": "Running", "sentence": "Half-marathons."}]
        }"#;

        let content: CvContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.experiences.len(), 1);
        assert_eq!(content.skills.sections[0].items, vec!["Python", "SQL"]);
        assert_eq!(content.interests[0].label, "Running");
    }

    #[test]
    fn test_cv_content_empty_sections_stay_empty() {
        let content: CvContent =
            serde_json::from_str(r#"{"cv_title": "X", "experiences": []}"#).unwrap();
        assert!(content.experiences.is_empty());
        assert!(content.projects.is_empty());
        assert!(content.skills.sections.is_empty());
    }

    #[test]
    fn test_compatibility_report_deserializes() {
        let json = r#"{
            "overall_score": 72,
            "scores": {
                "skills_match": 80,
                "experience_match": 60,
                "education_match": 90,
                "language_match": 100
            },
            "summary": "Bon profil junior.",
            "key_strengths": ["Python"],
            "key_gaps": ["Power BI"],
            "missing_hard_skills": ["Power BI"],
            "missing_soft_skills": [],
            "recommended_improvements": ["Chiffrer les résultats."],
            "recommended_projects_or_experiences": [],
            "recommended_courses_or_certifications": []
        }"#;

        let report: CompatibilityReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.overall_score, 72);
        assert_eq!(report.scores.language_match, 100);
        assert_eq!(report.missing_hard_skills, vec!["Power BI"]);
    }

    #[test]
    fn test_compatibility_report_defaults_on_sparse_payload() {
        let report: CompatibilityReport =
            serde_json::from_str(r#"{"overall_score": 40}"#).unwrap();
        assert_eq!(report.overall_score, 40);
        assert_eq!(report.scores.skills_match, 0);
        assert!(report.summary.is_empty());
    }

    #[test]
    fn test_cover_letter_defaults_are_empty_strings() {
        let letter = CoverLetter::default();
        assert!(letter.greeting.is_empty());
        assert!(letter.header_blocks.fullname_block.is_empty());
        assert!(letter.company_blocks.company_name_block.is_empty());
    }
}
