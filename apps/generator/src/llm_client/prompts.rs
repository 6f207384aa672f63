// Shared prompt fragments. Each call-site module defines its own prompts.rs
// alongside it; this file contains only the cross-cutting pieces.

/// Instruction block shared by every prompt that expects a JSON object back.
///
/// The models still break these rules routinely (fences, trailing commas,
/// percent values) — that is what `extract::parse_with_repair` is for.
pub const STRICT_JSON_RULES: &str = "\
You MUST return STRICTLY a valid JSON object, with NO explanation, NO text \
before, and NO text after. Do NOT use markdown code fences. Do NOT include \
comments in the JSON output. If a field is unknown, set it to null (for \
scalars) or [] (for lists). Always include every key of the schema.";
