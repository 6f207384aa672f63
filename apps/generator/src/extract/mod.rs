//! JSON extraction from raw model output.
//!
//! Models asked for strict JSON routinely return markdown fences, leading
//! prose, trailing commas, missing separators, or `85%` score values. This
//! module recovers a parseable value from that noise in two stages:
//!
//! 1. [`normalize`] narrows the raw text down to the substring most likely to
//!    delimit a single JSON value. It never rewrites anything — the return
//!    value is a subslice of the input.
//! 2. [`parse_with_repair`] attempts a strict `serde_json` parse and, on
//!    failure, applies the fixed repair pipeline in [`repair`] once and
//!    retries. A second failure becomes a typed [`JsonRepairFailure`].
//!
//! The repair passes are regex heuristics, not a tolerant parser: the line
//! comment stripper can fire inside string literals containing `//`, and the
//! greedy brace span can swallow unrelated braces appearing after the real
//! closing one. Both behaviours are kept for compatibility with the prompts
//! and are contained behind this module, so a real JSON5-style parser could
//! replace them later without touching call sites.

pub mod repair;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Characters of the raw model output kept for diagnostics on failure.
const EXCERPT_CHARS: usize = 500;

/// Top-level shape a call site expects from the model.
///
/// Most prompts pin an object schema; the content selector historically
/// accepted a bare array as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    Object,
    Array,
}

impl PayloadShape {
    fn delimiters(self) -> (char, char) {
        match self {
            PayloadShape::Object => ('{', '}'),
            PayloadShape::Array => ('[', ']'),
        }
    }
}

/// Hard failure of the repair pipeline: the candidate did not parse even
/// after every repair pass was applied.
///
/// Carries the final parse error and a bounded excerpt of the ORIGINAL raw
/// output (not the normalized candidate), so prompt/schema drift can be
/// debugged without logging entire responses.
#[derive(Debug, Error)]
#[error("could not interpret model output as JSON: {source}; output began with {excerpt:?}")]
pub struct JsonRepairFailure {
    #[source]
    pub source: serde_json::Error,
    /// First [`EXCERPT_CHARS`] characters of the raw model output.
    pub excerpt: String,
}

impl JsonRepairFailure {
    fn new(source: serde_json::Error, raw: &str) -> Self {
        Self {
            source,
            excerpt: excerpt(raw),
        }
    }
}

/// Truncates `raw` to the first [`EXCERPT_CHARS`] characters, respecting
/// char boundaries.
fn excerpt(raw: &str) -> String {
    match raw.char_indices().nth(EXCERPT_CHARS) {
        Some((idx, _)) => raw[..idx].to_string(),
        None => raw.to_string(),
    }
}

// Fence handling: prefer a complete value inside a fenced block; otherwise
// strip one leading fence marker (with optional language tag) and one
// trailing fence marker.
static RE_FENCED_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").unwrap());
static RE_FENCED_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(\[.*?\])\s*```").unwrap());
static RE_FENCE_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^```[A-Za-z0-9_-]*").unwrap());
static RE_FENCE_CLOSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*```$").unwrap());

/// Narrows raw model output to its most plausible object-shaped JSON span.
///
/// Equivalent to [`normalize_as`] with [`PayloadShape::Object`].
pub fn normalize(raw: &str) -> &str {
    normalize_as(raw, PayloadShape::Object)
}

/// Narrows raw model output to its most plausible JSON span.
///
/// Steps: trim, unwrap markdown fences, then take the span from the first
/// opening delimiter to the LAST closing delimiter. The span is greedy on
/// purpose — it is not a balanced-brace scan, and unrelated braces after the
/// true closing brace will be included.
///
/// Never fails: when no delimiter pair is found, the trimmed text is
/// returned unchanged and the downstream parse reports the real error.
pub fn normalize_as(raw: &str, shape: PayloadShape) -> &str {
    let mut text = raw.trim();

    if text.contains("```") {
        let fenced = match shape {
            PayloadShape::Object => &RE_FENCED_OBJECT,
            PayloadShape::Array => &RE_FENCED_ARRAY,
        };
        if let Some(inner) = fenced.captures(text).and_then(|caps| caps.get(1)) {
            text = inner.as_str();
        } else {
            if let Some(open) = RE_FENCE_OPEN.find(text) {
                text = text[open.end()..].trim_start();
            }
            if let Some(close) = RE_FENCE_CLOSE.find(text) {
                text = text[..close.start()].trim_end();
            }
        }
    }

    let (open, close) = shape.delimiters();
    match (text.find(open), text.rfind(close)) {
        (Some(start), Some(end)) if end > start => &text[start..=end],
        _ => text,
    }
}

/// Parses object-shaped model output, repairing it if needed.
///
/// Equivalent to [`parse_with_repair_as`] with [`PayloadShape::Object`].
/// This is the entry point most call sites need.
pub fn parse_with_repair(raw: &str) -> Result<Value, JsonRepairFailure> {
    parse_with_repair_as(raw, PayloadShape::Object)
}

/// Normalizes `raw`, parses it strictly, and on failure applies the full
/// repair pipeline once and retries.
///
/// Valid JSON passes through untouched. The repair pipeline is all-or-
/// nothing: either the fully repaired string parses, or the typed failure is
/// returned — no partially repaired value ever escapes.
pub fn parse_with_repair_as(raw: &str, shape: PayloadShape) -> Result<Value, JsonRepairFailure> {
    let candidate = normalize_as(raw, shape);

    match serde_json::from_str(candidate) {
        Ok(value) => Ok(value),
        Err(strict_err) => {
            debug!("strict JSON parse failed ({strict_err}), applying repair passes");
            let repaired = repair::apply_all(candidate);
            serde_json::from_str(&repaired).map_err(|err| JsonRepairFailure::new(err, raw))
        }
    }
}
