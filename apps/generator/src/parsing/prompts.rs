// Prompt templates for document parsing. Replace the {placeholder} tokens
// before sending; the strict-JSON preamble is prepended by the builders.

use crate::llm_client::prompts::STRICT_JSON_RULES;

/// CV parsing prompt template. Replace `{cv_text}` before sending.
const CV_PARSE_PROMPT_TEMPLATE: &str = r#"You are an AI expert specialized in parsing CVs and resumes.

Analyze the CV text below and extract structured information about the candidate.

The JSON MUST contain ALL of the following fields, with EXACTLY these names:

{
  "first_name": string | null,
  "last_name": string | null,
  "full_name": string | null,

  "contacts": {
    "emails": string[],
    "phones": string[],
    "locations": string[]
  },

  "websites": [
    {"label": string | null, "url": string}
  ],

  "social_links": [
    {"platform": string | null, "url": string}
  ],

  "skills": {
    "hard_skills": string[],
    "soft_skills": string[],
    "languages": string[]
  },

  "professional_experiences": [
    {
      "title": string | null,
      "company": string | null,
      "location": string | null,
      "start_date": string | null,
      "end_date": string | null,
      "description": string
    }
  ],

  "academic_projects": [
    {
      "title": string | null,
      "context": string | null,
      "technologies": string[],
      "description": string
    }
  ],

  "education": [
    {
      "degree": string | null,
      "school": string | null,
      "location": string | null,
      "start_date": string | null,
      "end_date": string | null,
      "description": string
    }
  ],

  "certifications": [
    {"name": string | null, "issuer": string | null, "date": string | null}
  ],

  "interests": [string],

  "raw_summary": string | null
}

Rules you MUST follow:
- Do NOT invent projects or companies that are not clearly in the CV.
- You may slightly rephrase descriptions to make them concise and clear.
- Dates must remain as written in the CV (no need to normalize format).
- "raw_summary" is a short global summary of the candidate (2-3 sentences).

Here is the CV text to parse:
"""
{cv_text}
""""#;

/// Job-offer parsing prompt template. Replace `{offer_text}` before sending.
const JOB_OFFER_PROMPT_TEMPLATE: &str = r#"You are an AI expert specialized in parsing job postings.

Extract structured information from the job posting below.

The JSON MUST contain ALL of the following fields, with EXACTLY these names:

{
  "title": string | null,
  "company_name": string | null,
  "location": string | null,
  "contract_type": string | null,
  "seniority_level": string | null,
  "Education": string[],
  "hard_skills": string[],
  "soft_skills": string[],
  "missions": string[],
  "requirements": string[],
  "keywords": string[],
  "salary": string | null,
  "description": string | null,
  "language": "fr" | "en"
}

Rules you MUST follow:
- Lists must NOT contain duplicates.
- "Education" must include ONLY degrees / diplomas / study fields (no skills).
- "requirements" must focus on experience duration (years / seniority).
- "keywords" are the most relevant, high-signal terms appearing in the offer.
- "salary" is the range or amount if specified (e.g. "40k-50k"), null otherwise.
- "language" must reflect the job posting's language (not this prompt).

Job posting to parse:
"""
{offer_text}
""""#;

pub fn build_cv_parsing_prompt(cv_text: &str) -> String {
    format!(
        "{STRICT_JSON_RULES}\n\n{}",
        CV_PARSE_PROMPT_TEMPLATE.replace("{cv_text}", cv_text)
    )
}

pub fn build_job_offer_prompt(offer_text: &str) -> String {
    format!(
        "{STRICT_JSON_RULES}\n\n{}",
        JOB_OFFER_PROMPT_TEMPLATE.replace("{offer_text}", offer_text)
    )
}
