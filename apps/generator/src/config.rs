use anyhow::{Context, Result};

/// Model used when `GEMINI_MODEL_NAME` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Model substituted for compatibility scoring when the configured model is
/// from the 2.5 family, whose JSON output is unstable on scoring prompts.
pub const SCORING_FALLBACK_MODEL: &str = "gemini-1.5-flash";

/// Generator configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub model_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            model_name: std::env::var("GEMINI_MODEL_NAME")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }

    /// Model to use for compatibility scoring (2.5-family downgraded).
    pub fn scoring_model(&self) -> &str {
        if self.model_name.contains("2.5") {
            SCORING_FALLBACK_MODEL
        } else {
            &self.model_name
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_model(model: &str) -> Config {
        Config {
            gemini_api_key: "test-key".to_string(),
            model_name: model.to_string(),
        }
    }

    #[test]
    fn test_scoring_model_downgrades_25_family() {
        let config = config_with_model("gemini-2.5-flash");
        assert_eq!(config.scoring_model(), SCORING_FALLBACK_MODEL);
    }

    #[test]
    fn test_scoring_model_keeps_other_models() {
        let config = config_with_model("gemini-1.5-flash");
        assert_eq!(config.scoring_model(), "gemini-1.5-flash");
    }
}
