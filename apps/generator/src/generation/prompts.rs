// Prompt templates for the generation module. Inputs arrive pre-serialized
// as JSON strings; builders replace the {placeholder} tokens and prepend the
// strict-JSON preamble.

use crate::llm_client::prompts::STRICT_JSON_RULES;

/// Content-selection template. Replace `{offer_json}`, `{profile_json}`,
/// `{exp_limit}`, `{proj_limit}`, `{act_limit}`.
const SELECTION_PROMPT_TEMPLATE: &str = r#"You are an expert in strategic recruiting. Filter a candidate's profile down to the elements that maximize their chances for one specific job offer.

### TARGET JOB OFFER
{offer_json}

### FULL CANDIDATE PROFILE
{profile_json}

### SELECTION CRITERIA
1. Experiences: keep the {exp_limit} best. Prioritize direct impact and mission similarity.
2. Projects: keep the {proj_limit} best. Prioritize technology overlap with the offer.
3. Skills: keep only the skills useful for this role (hard and soft).
4. Interests: keep the {act_limit} most valuable (leadership, teamwork...).

### OUTPUT FORMAT
Return a JSON object with EXACTLY this structure:
{
  "selected_experiences": [],
  "selected_projects": [],
  "selected_skills": {"hard_skills": [], "soft_skills": [], "languages": []},
  "selected_interests": []
}
For experiences and projects, return each kept entry COMPLETE, exactly as it appears in the source profile."#;

/// One-shot CV content template. Replace `{offer_json}`, `{source_json}`.
const CV_CONTENT_PROMPT_TEMPLATE: &str = r#"You are an expert in recruiting and ATS-friendly CV optimization. Rewrite the candidate's data so it matches the job offer as closely as the facts allow.

### TARGET DATA (OFFER)
{offer_json}

### SOURCE DATA (CANDIDATE)
{source_json}

### WRITING DIRECTIVES
1. Language: use the main language of the job offer.
2. STRICT fidelity: invent NO experience, education, project, or skill. Use ONLY the information present in the source data.
3. Empty sections: if a section is empty or absent in the source data, return an empty list [] or null. Do NOT fabricate content to fill it.
4. Improvement: you may rephrase existing descriptions (keywords, C.A.R. structure) to fit the offer better, without adding facts.
5. Impact: highlight quantified results ONLY where present or logically deducible from the source data.
6. Check: before writing a bullet, ask "is this information in the source profile?". If not, leave it out.

### OUTPUT STRUCTURE
Return a JSON object with EXACTLY this structure:
{
  "cv_title": "CV headline aligned with the role",
  "objective": "Punchy professional summary (2-3 sentences)",
  "experiences": [
    {
      "source_title": "Original title",
      "target_title": "Optimized title",
      "company": "Company",
      "location": "City, Country",
      "start_date": "Start date (e.g. Jan 2024)",
      "end_date": "End date (e.g. Present)",
      "bullets": ["Point with a number", "Point with a number"]
    }
  ],
  "projects": [
    {
      "target_title": "Project name",
      "tech_stack": ["Tool 1", "Tool 2"],
      "bullets": ["Concrete action and result"]
    }
  ],
  "education": [
    {
      "degree": "Degree",
      "school": "School",
      "location": "City, Country",
      "start_date": "Start date",
      "end_date": "End date",
      "bullets": ["Relevant specialization or academic project"]
    }
  ],
  "skills": {
    "sections": [{"section_title": "Category name", "items": ["Skill"]}],
    "highlighted": ["Top 8 key skills for this role"]
  },
  "interests": [{"label": "Hobby", "sentence": "One sentence highlighting a soft skill"}]
}"#;

/// Compatibility-scoring template. Replace `{offer_json}`, `{cv_json}`.
const COMPATIBILITY_PROMPT_TEMPLATE: &str = r#"You are an expert recruiter and career coach.

Evaluate how well THIS CANDIDATE matches THIS JOB OFFER, based on their parsed JSON representations, and return a detailed compatibility analysis.

====================
JOB OFFER (parsed JSON)
====================
{offer_json}

====================
CANDIDATE PROFILE (parsed CV JSON)
====================
{cv_json}

====================
OUTPUT JSON SPEC
====================
Return a JSON object with EXACTLY these fields:
{
  "overall_score": 0,
  "scores": {
    "skills_match": 0,
    "experience_match": 0,
    "education_match": 0,
    "language_match": 0
  },
  "summary": "string",
  "key_strengths": ["string"],
  "key_gaps": ["string"],
  "missing_hard_skills": ["string"],
  "missing_soft_skills": ["string"],
  "recommended_improvements": ["string"],
  "recommended_projects_or_experiences": ["string"],
  "recommended_courses_or_certifications": ["string"]
}

VERY IMPORTANT RULES:
- All string fields (summary, strengths, gaps...) MUST be in French.
- Each score must be an integer in the range [0,100].
- Be realistic and fair: do not give 95+ unless the match is extremely strong.
- "missing_hard_skills" and "missing_soft_skills" compare the offer against the CV.
- "recommended_improvements" must be concrete and actionable.
- Do NOT invent job titles or degrees; reason strictly from the JSON inputs.
- If a section (e.g. Experience, Education) is empty in the CV, the corresponding score MUST be low (or 0)."#;

/// Cover-letter header template. Replace `{offer_json}`, `{cv_json}`,
/// `{city_hint}`, `{date_hint}`, `{reference}`.
const LETTER_HEADER_PROMPT_TEMPLATE: &str = r#"You are an expert French administrative assistant. Prepare the HEADER and METADATA for a professional cover letter.

Return a JSON object with EXACTLY this structure:
{
  "header_blocks": {
    "fullname_block": "Candidate full name",
    "location_block": "Candidate address/city",
    "email_block": "Candidate email",
    "phone_block": "Candidate phone",
    "websites_block": "Candidate links (LinkedIn, portfolio...)"
  },
  "company_blocks": {
    "contact_block": "Recruiter name (if known) or empty",
    "company_name_block": "Company name",
    "company_address_block": "Company address (if known) or city"
  },
  "place_date_line": "Fait à [City], le [Date]",
  "objet_line": "Objet : Candidature pour le poste de [Job Title] [Reference]"
}

Instructions:
- Use the candidate's real information from the CV JSON.
- Use the company's information from the job offer.
- Format 'place_date_line' with the city "{city_hint}" and the date "{date_hint}".
- If a reference is provided ("{reference}"), include it in the objet line.

JOB OFFER:
{offer_json}

CANDIDATE CV:
{cv_json}"#;

/// Cover-letter body template. Replace `{offer_json}`, `{cv_json}`,
/// `{gender_label}`, `{objet_line}`.
const LETTER_BODY_PROMPT_TEMPLATE: &str = r#"You are an expert French copywriter specialized in cover letters. Write the BODY of the letter.

Context:
- Candidate gender: {gender_label}
- Letter objet: "{objet_line}"

Return a JSON object with EXACTLY this structure:
{
  "greeting": "Madame, Monsieur,",
  "para1": "Introduction paragraph (hook)...",
  "para2": "Why me (skills & experience)...",
  "para3": "Why you (company alignment)...",
  "para4": "Call to action (interview request)...",
  "signature": "Candidate name"
}

Instructions:
- Write in professional French.
- "para1" MUST NOT contain the greeting.
- Adapt to the specific job offer (missions, technologies, skills).
- STRICT FIDELITY: do NOT invent any experience or skill. Use ONLY what is in the CV.
- Be convincing but factual.

JOB OFFER:
{offer_json}

CANDIDATE CV:
{cv_json}"#;

pub fn build_selection_prompt(
    offer_json: &str,
    profile_json: &str,
    exp_limit: usize,
    proj_limit: usize,
    act_limit: usize,
) -> String {
    format!(
        "{STRICT_JSON_RULES}\n\n{}",
        SELECTION_PROMPT_TEMPLATE
            .replace("{offer_json}", offer_json)
            .replace("{profile_json}", profile_json)
            .replace("{exp_limit}", &exp_limit.to_string())
            .replace("{proj_limit}", &proj_limit.to_string())
            .replace("{act_limit}", &act_limit.to_string())
    )
}

pub fn build_cv_content_prompt(offer_json: &str, source_json: &str) -> String {
    format!(
        "{STRICT_JSON_RULES}\n\n{}",
        CV_CONTENT_PROMPT_TEMPLATE
            .replace("{offer_json}", offer_json)
            .replace("{source_json}", source_json)
    )
}

pub fn build_compatibility_prompt(offer_json: &str, cv_json: &str) -> String {
    format!(
        "{STRICT_JSON_RULES}\n\n{}",
        COMPATIBILITY_PROMPT_TEMPLATE
            .replace("{offer_json}", offer_json)
            .replace("{cv_json}", cv_json)
    )
}

pub fn build_letter_header_prompt(
    offer_json: &str,
    cv_json: &str,
    city_hint: &str,
    date_hint: &str,
    reference: Option<&str>,
) -> String {
    format!(
        "{STRICT_JSON_RULES}\n\n{}",
        LETTER_HEADER_PROMPT_TEMPLATE
            .replace("{offer_json}", offer_json)
            .replace("{cv_json}", cv_json)
            .replace("{city_hint}", city_hint)
            .replace("{date_hint}", date_hint)
            .replace("{reference}", reference.unwrap_or(""))
    )
}

pub fn build_letter_body_prompt(
    offer_json: &str,
    cv_json: &str,
    gender_label: &str,
    objet_line: &str,
) -> String {
    format!(
        "{STRICT_JSON_RULES}\n\n{}",
        LETTER_BODY_PROMPT_TEMPLATE
            .replace("{offer_json}", offer_json)
            .replace("{cv_json}", cv_json)
            .replace("{gender_label}", gender_label)
            .replace("{objet_line}", objet_line)
    )
}
