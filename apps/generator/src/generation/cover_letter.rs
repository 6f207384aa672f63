//! Cover-letter generation — two model calls merged into one letter.
//!
//! Call 1 produces the header and metadata (sender/recipient blocks, place/
//! date line, objet line). Call 2 writes the four body paragraphs,
//! conditioned on the objet line from call 1 so both calls agree on the
//! role. The merged result is whitespace-normalized field by field; missing
//! blocks become empty strings and the renderer skips them.

use chrono::{Datelike, NaiveDate, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::errors::GeneratorError;
use crate::extract;
use crate::generation::prompts::{build_letter_body_prompt, build_letter_header_prompt};
use crate::llm_client::CompletionProvider;
use crate::models::content::{CompanyBlocks, CoverLetter, HeaderBlocks};
use crate::models::offer::ParsedOffer;
use crate::models::profile::CandidateProfile;

/// Grammatical gender used by the French letter body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Masculine => "masculin",
            Gender::Feminine => "féminin",
        }
    }
}

/// Caller-tunable knobs for one letter.
#[derive(Debug, Clone, Default)]
pub struct LetterOptions {
    pub gender: Gender,
    /// Offer reference to cite in the objet line.
    pub reference: Option<String>,
    pub city_override: Option<String>,
    /// Preformatted date line; defaults to today's date in French.
    pub date_override: Option<String>,
}

/// Collapses all whitespace runs to single spaces and trims.
pub fn normalize_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Formats a date the way French letters expect it, e.g. "7 août 2026".
pub fn french_date(date: NaiveDate) -> String {
    const MONTHS: [&str; 12] = [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ];
    format!(
        "{} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Contact hints mined from the profile for the header prompt and the
/// signature fallback.
struct ContactHints {
    full_name: String,
    city: String,
}

fn pick_contact_info(profile: &CandidateProfile) -> ContactHints {
    let first = profile.first_name.as_deref().unwrap_or("");
    let last = profile.last_name.as_deref().unwrap_or("");

    let full_name = match profile.full_name.as_deref() {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => format!("{first} {last}").trim().to_string(),
    };

    let city = profile
        .contacts
        .locations
        .first()
        .cloned()
        .unwrap_or_default();

    ContactHints {
        full_name: normalize_text(&full_name),
        city: normalize_text(&city),
    }
}

// Wire shapes of the two model answers. Everything is optional; the merge
// step turns absent and null fields into empty strings.

#[derive(Debug, Default, Deserialize)]
struct RawLetterHeader {
    #[serde(default)]
    header_blocks: Option<RawHeaderBlocks>,
    #[serde(default)]
    company_blocks: Option<RawCompanyBlocks>,
    place_date_line: Option<String>,
    objet_line: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawHeaderBlocks {
    fullname_block: Option<String>,
    location_block: Option<String>,
    email_block: Option<String>,
    phone_block: Option<String>,
    websites_block: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawCompanyBlocks {
    contact_block: Option<String>,
    company_name_block: Option<String>,
    company_address_block: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawLetterBody {
    greeting: Option<String>,
    para1: Option<String>,
    para2: Option<String>,
    para3: Option<String>,
    para4: Option<String>,
    signature: Option<String>,
}

/// Generates the full letter. Failure policy: propagate — both calls must
/// succeed, a letter without body or header is not worth rendering.
pub async fn generate_cover_letter(
    offer: &ParsedOffer,
    profile: &CandidateProfile,
    options: &LetterOptions,
    llm: &dyn CompletionProvider,
) -> Result<CoverLetter, GeneratorError> {
    let offer_json =
        serde_json::to_string_pretty(offer).map_err(GeneratorError::encode("cover letter"))?;
    let cv_json =
        serde_json::to_string_pretty(profile).map_err(GeneratorError::encode("cover letter"))?;

    let contact = pick_contact_info(profile);
    let city_hint = options
        .city_override
        .clone()
        .filter(|c| !c.is_empty())
        .or_else(|| Some(contact.city.clone()).filter(|c| !c.is_empty()))
        .unwrap_or_else(|| "Paris".to_string());
    let date_hint = options
        .date_override
        .clone()
        .unwrap_or_else(|| french_date(Utc::now().date_naive()));

    let header_prompt = build_letter_header_prompt(
        &offer_json,
        &cv_json,
        &city_hint,
        &date_hint,
        options.reference.as_deref(),
    );
    let raw_header = llm.generate(&header_prompt).await?;
    let header: RawLetterHeader = serde_json::from_value(extract::parse_with_repair(&raw_header)?)
        .map_err(GeneratorError::schema("cover-letter header"))?;

    let objet_line = header.objet_line.clone().unwrap_or_default();
    debug!("letter header generated, objet line: {objet_line:?}");

    let body_prompt =
        build_letter_body_prompt(&offer_json, &cv_json, options.gender.label(), &objet_line);
    let raw_body = llm.generate(&body_prompt).await?;
    let body: RawLetterBody = serde_json::from_value(extract::parse_with_repair(&raw_body)?)
        .map_err(GeneratorError::schema("cover-letter body"))?;

    Ok(merge(header, body, &contact))
}

fn norm(field: Option<String>) -> String {
    normalize_text(field.as_deref().unwrap_or(""))
}

fn merge(header: RawLetterHeader, body: RawLetterBody, contact: &ContactHints) -> CoverLetter {
    let header_blocks = header.header_blocks.unwrap_or_default();
    let company_blocks = header.company_blocks.unwrap_or_default();

    let signature = {
        let s = norm(body.signature);
        if s.is_empty() {
            contact.full_name.clone()
        } else {
            s
        }
    };

    CoverLetter {
        header_blocks: HeaderBlocks {
            fullname_block: norm(header_blocks.fullname_block),
            location_block: norm(header_blocks.location_block),
            email_block: norm(header_blocks.email_block),
            phone_block: norm(header_blocks.phone_block),
            websites_block: norm(header_blocks.websites_block),
        },
        company_blocks: CompanyBlocks {
            contact_block: norm(company_blocks.contact_block),
            company_name_block: norm(company_blocks.company_name_block),
            company_address_block: norm(company_blocks.company_address_block),
        },
        place_date_line: norm(header.place_date_line),
        objet_line: norm(header.objet_line),
        greeting: norm(body.greeting),
        para1: norm(body.para1),
        para2: norm(body.para2),
        para3: norm(body.para3),
        para4: norm(body.para4),
        signature,
    }
}
