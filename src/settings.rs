//! User settings for the model-driven summarizer.
//!
//! Mirrors the stored key/value layout (camelCase keys) so a calling layer
//! can hand over its storage blob as JSON. Blank strings count as unset and
//! unknown engine names from older versions are ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::prompt::PromptTemplates;

/// Model used with ChatGPT when none is configured.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Model used with Gemini when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Summarization service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    ChatGpt,
    Gemini,
}

impl Engine {
    /// Stored name, `chatgpt` or `gemini`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ChatGpt => "chatgpt",
            Self::Gemini => "gemini",
        }
    }

    /// Vendor name used in messages.
    #[must_use]
    pub fn provider_name(self) -> &'static str {
        match self {
            Self::ChatGpt => "OpenAI",
            Self::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Engine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chatgpt" => Ok(Self::ChatGpt),
            "gemini" => Ok(Self::Gemini),
            _ => Err(Error::UnknownEngine(s.to_string())),
        }
    }
}

/// Stored settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    #[serde(deserialize_with = "lenient_engine", skip_serializing_if = "Option::is_none")]
    pub default_engine: Option<Engine>,

    /// Engine picked most recently by the user.
    #[serde(deserialize_with = "lenient_engine", skip_serializing_if = "Option::is_none")]
    pub last_engine: Option<Engine>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_model: Option<String>,

    /// Summarize as soon as the surface opens. Unset means on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_summarize: Option<bool>,

    /// Replaces the built-in pull-request instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pr_instructions: Option<String>,

    /// Replaces the built-in page instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_instructions: Option<String>,
}

fn lenient_engine<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<Engine>, D::Error> {
    let name = Option::<String>::deserialize(deserializer)?;
    Ok(name.and_then(|name| name.parse().ok()))
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl Settings {
    /// Parse stored settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Settings`] for malformed JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Engine for a request: the requested one, else the last used, else the
    /// default, else whichever service has a key, else ChatGPT.
    #[must_use]
    pub fn resolve_engine(&self, requested: Option<Engine>) -> Engine {
        requested
            .or(self.last_engine)
            .or(self.default_engine)
            .unwrap_or_else(|| {
                if non_blank(self.openai_key.as_ref()).is_some() {
                    Engine::ChatGpt
                } else if non_blank(self.gemini_key.as_ref()).is_some() {
                    Engine::Gemini
                } else {
                    Engine::ChatGpt
                }
            })
    }

    /// Configured model for `engine`, or its default.
    #[must_use]
    pub fn model_for(&self, engine: Engine) -> &str {
        match engine {
            Engine::ChatGpt => non_blank(self.openai_model.as_ref()).unwrap_or(DEFAULT_OPENAI_MODEL),
            Engine::Gemini => non_blank(self.gemini_model.as_ref()).unwrap_or(DEFAULT_GEMINI_MODEL),
        }
    }

    /// API key for `engine`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingApiKey`] when no key is stored for `engine`.
    pub fn api_key_for(&self, engine: Engine) -> Result<&str> {
        let key = match engine {
            Engine::ChatGpt => non_blank(self.openai_key.as_ref()),
            Engine::Gemini => non_blank(self.gemini_key.as_ref()),
        };
        key.ok_or(Error::MissingApiKey { engine })
    }

    #[must_use]
    pub fn auto_summarize(&self) -> bool {
        self.auto_summarize.unwrap_or(true)
    }

    /// Instruction overrides for the prompt builder.
    #[must_use]
    pub fn templates(&self) -> PromptTemplates<'_> {
        PromptTemplates {
            pr_instructions: non_blank(self.pr_instructions.as_ref()),
            page_instructions: non_blank(self.page_instructions.as_ref()),
        }
    }
}
