//! Advisory service boundary — design analysis by a remote model.
//!
//! The core emits the same five-field design snapshot the persistence
//! layer uses, sends it to an OpenRouter-compatible chat-completions
//! endpoint, and treats the reply as opaque text: escaped before display,
//! never parsed for structured decisions. Failures are surfaced as
//! messages and never block continued editing.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::env;

use crate::persistence::SavedDesign;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
const DEFAULT_MODEL: &str = "qwen/qwen3-235b-a22b:free";
const DEFAULT_PROMPT: &str = "Analyze this space base design and advise improvements.";

const SYSTEM_PROMPT: &str = "You are an expert space habitat engineer AI assistant embedded in a 2D base design tool. Given a JSON design (modules, corridors, environment, crew, duration), provide:
1) Key risks and violations (concise bullets)
2) Concrete fixes (prioritized actions)
3) Sizing verdicts per module type (Too small / OK / Oversized with brief reason)
4) Resource sufficiency (food, water, O2, exercise, radiation) and what to add or resize.
Be practical, specific, and brief. Output simple markdown with short bullets.";

/// Advisory request configuration.
#[derive(Debug, Clone)]
pub struct AdvisoryConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.3,
            max_tokens: 800,
        }
    }
}

/// Errors from the advisory boundary. All non-fatal.
#[derive(Debug)]
pub enum AdvisoryError {
    /// The API key environment variable is not set.
    MissingApiKey,
    /// Connection or protocol failure.
    Transport(String),
    /// The service answered with an error status.
    Status(u16, String),
    /// The response body didn't carry advisory text.
    MalformedResponse(String),
}

impl std::fmt::Display for AdvisoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvisoryError::MissingApiKey => {
                write!(f, "missing {API_KEY_ENV} environment variable")
            }
            AdvisoryError::Transport(e) => write!(f, "advisory request failed: {}", e),
            AdvisoryError::Status(code, body) => {
                write!(f, "advisory service error {}: {}", code, body)
            }
            AdvisoryError::MalformedResponse(e) => {
                write!(f, "unexpected advisory response: {}", e)
            }
        }
    }
}

impl std::error::Error for AdvisoryError {}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Sync client for the advisory service.
pub struct AdvisoryClient {
    config: AdvisoryConfig,
    api_key: String,
    agent: ureq::Agent,
}

impl AdvisoryClient {
    pub fn new(config: AdvisoryConfig, api_key: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(120))
            .build();
        Self {
            config,
            api_key: api_key.into(),
            agent,
        }
    }

    /// Build a client with the key from the environment.
    pub fn from_env(config: AdvisoryConfig) -> Result<Self, AdvisoryError> {
        let api_key = env::var(API_KEY_ENV).map_err(|_| AdvisoryError::MissingApiKey)?;
        Ok(Self::new(config, api_key))
    }

    /// Send a design snapshot for analysis and return the advisory text.
    pub fn analyze(
        &self,
        design: &SavedDesign,
        prompt: Option<&str>,
    ) -> Result<String, AdvisoryError> {
        let design_json = serde_json::to_string_pretty(design)
            .map_err(|e| AdvisoryError::MalformedResponse(e.to_string()))?;
        let user_prompt = prompt.unwrap_or(DEFAULT_PROMPT);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("{user_prompt}\n\nDesign JSON:\n\n{design_json}"),
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!("requesting advisory analysis from {}", self.config.endpoint);
        let response = self
            .agent
            .post(&self.config.endpoint)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(&body);

        let response = match response {
            Ok(r) => r,
            Err(ureq::Error::Status(code, r)) => {
                let text = r.into_string().unwrap_or_default();
                warn!("advisory service returned status {}", code);
                return Err(AdvisoryError::Status(code, text));
            }
            Err(e) => return Err(AdvisoryError::Transport(e.to_string())),
        };

        let parsed: ChatResponse = response
            .into_json()
            .map_err(|e| AdvisoryError::MalformedResponse(e.to_string()))?;
        match parsed.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => Err(AdvisoryError::MalformedResponse(
                "response carried no choices".to_string(),
            )),
        }
    }
}

/// Escape advisory text for display. The reply is opaque markdown from a
/// remote model; it must never reach a renderer unescaped.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DesignSession;
    use habplan_logic::modules::ModuleType;

    #[test]
    fn test_escape_text() {
        assert_eq!(
            escape_text("a < b && c > d"),
            "a &lt; b &amp;&amp; c &gt; d"
        );
        assert_eq!(escape_text("plain advice"), "plain advice");
    }

    #[test]
    fn test_escape_order_ampersand_first() {
        // Escaping & after < would double-escape the entity
        assert_eq!(escape_text("<"), "&lt;");
        assert_eq!(escape_text("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_request_body_carries_design() {
        let mut session = DesignSession::default();
        session.place_module(ModuleType::Kitchen, 100.0, 100.0);
        let design = SavedDesign::from_session(&session);
        let json = serde_json::to_string(&design).unwrap();
        assert!(json.contains("\"crewCount\":4"));
        assert!(json.contains("\"kitchen\""));
    }

    #[test]
    fn test_from_env_without_key() {
        // The variable is absent in the test environment
        if env::var(API_KEY_ENV).is_ok() {
            return;
        }
        let err = AdvisoryClient::from_env(AdvisoryConfig::default())
            .err()
            .expect("construction must fail without a key");
        assert!(matches!(err, AdvisoryError::MissingApiKey));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_default_config() {
        let config = AdvisoryConfig::default();
        assert_eq!(config.max_tokens, 800);
        assert!((config.temperature - 0.3).abs() < f32::EPSILON);
        assert!(config.endpoint.starts_with("https://"));
    }
}
