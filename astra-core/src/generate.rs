//! Response generation backends.
//!
//! `ResponseGenerator` abstracts over the two ways Astra produces a reply:
//! - **template** — the deterministic composer over the static knowledge base
//! - **openai** — an OpenAI-compatible chat-completions API
//!
//! The OpenAI client checks its credential at call time, not construction, so
//! a missing key degrades a single request instead of preventing startup.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::compose;
use crate::config::{AstraConfig, OpenAiConfig};
use crate::models::{ChatTurn, Role, StudentProfile};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Returned when the API produces an empty completion.
const EMPTY_COMPLETION_REPLY: &str =
    "I apologize, but I couldn't generate a response. Please try again.";

const ASTRA_SYSTEM_PROMPT: &str = r#"You are "Astra," an elite AI College Admissions Advisor trained to support high-achieving students applying to top U.S. universities (MIT, Harvard, Stanford, Princeton, Cornell, etc.) and top Canadian universities (Waterloo, UofT, McGill).
Your role is to give detailed, strategic, actionable advice—not generic tips.

🎓 Your Responsibilities:

**Profile Building**
- Suggest personalized extracurriculars, research ideas, competitions, and leadership projects based on the user's background and goals.
- Ensure recommendations are realistic, high-impact, and aligned with top-university expectations.

**Academic + Course Planning**
- Recommend courses, difficulty levels, and academic strategies for Grades 9–12.

**Research Guidance**
- Help design research projects, mentor the user through methodology, data analysis, writing papers, and preparing for BASEF, Regeneron, Google Science Fair, and similar competitions.

**Competition Strategy**
- Recommend specific competitions, dates, eligibility, how to prepare, and how to stand out.

**Personal Statement & Essays**
- Help brainstorm story angles, write outlines, give feedback, and edit essays while preserving the user's voice.

**Extracurricular & Summer Planning**
- Help design summer schedules, project timelines, internship ideas, and high-ROI experiences.

**Long-Term Planning**
- Plan multi-year timelines from Grade 9 to Grade 12 with checkpoints, goals, and deliverables.

🔎 Your Style:
- Extremely detailed and structured.
- Always asks clarifying questions when needed.
- Gives timelines, step-by-step plans, and specific examples.
- Never gives vague advice like "do more extracurriculars."
- Tailors every answer to the user's goals.

💡 Your Expertise:
- U.S. holistic admissions
- Canadian admissions + Waterloo AIF strategy
- STEM/CS/AI pathways
- Olympiads (math, physics, CS), research fairs, hackathons
- Building spike projects
- Scholarship applications
- Crafting compelling narratives & personal branding

🚫 Constraints:
- Do not fabricate competition dates; if unsure, ask or approximate.
- Do not encourage anything unethical (e.g., cheating or misrepresentation).
- Do not write an entire essay in a way that replaces the student—their voice must stay authentic.

Format your responses with clear sections using **bold headers** and bullet points where appropriate. Be warm but professional."#;

const GREETING_INSTRUCTION: &str = r#"The student has just completed their profile. Greet them warmly, acknowledge their goals, and provide an initial strategic overview tailored to their profile. Include:
1. A brief personalized welcome mentioning their target universities and major
2. A quick assessment of their current position (strengths and areas to develop)
3. 2-3 immediate actionable recommendations based on their grade level and timeline
4. An invitation to ask about any specific area (essays, extracurriculars, research, etc.)

Keep it encouraging but substantive—show them you understand their unique situation."#;

// ============================================================================
// Error types
// ============================================================================

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    #[error("OpenAI API key is not configured. Please add your OPENAI_API_KEY to continue.")]
    MissingApiKey,

    #[error("unknown generator backend '{0}'")]
    UnknownBackend(String),
}

impl GenerateError {
    /// Configuration errors carry their actionable message to the caller;
    /// everything else is reported as a generic generation failure.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GenerateError::MissingApiKey | GenerateError::UnknownBackend(_)
        )
    }
}

// ============================================================================
// ResponseGenerator trait
// ============================================================================

/// Abstraction over reply producers. `history` is the ordered conversation so
/// far (including the just-appended user turn); `initial_greeting` marks the
/// first assistant turn of a conversation.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    async fn generate(
        &self,
        history: &[ChatTurn],
        profile: Option<&StudentProfile>,
        initial_greeting: bool,
    ) -> Result<String, GenerateError>;

    /// Backend name for logging and the health endpoint.
    fn name(&self) -> &str;
}

/// Create the backend selected by configuration.
pub fn create_generator(
    config: &AstraConfig,
) -> Result<Box<dyn ResponseGenerator>, GenerateError> {
    match config.generator.backend.as_str() {
        "template" => Ok(Box::new(TemplateGenerator)),
        "openai" => Ok(Box::new(OpenAiGenerator::new(config.openai.clone())?)),
        other => Err(GenerateError::UnknownBackend(other.to_string())),
    }
}

// ============================================================================
// TemplateGenerator
// ============================================================================

/// The deterministic knowledge-base engine. Pure and infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

#[async_trait]
impl ResponseGenerator for TemplateGenerator {
    async fn generate(
        &self,
        history: &[ChatTurn],
        profile: Option<&StudentProfile>,
        initial_greeting: bool,
    ) -> Result<String, GenerateError> {
        Ok(compose::compose_reply(history, profile, initial_greeting))
    }

    fn name(&self) -> &str {
        "template"
    }
}

// ============================================================================
// OpenAI API structs (private)
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ApiMessage>,
    max_completion_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// ============================================================================
// OpenAiGenerator
// ============================================================================

pub struct OpenAiGenerator {
    client: Client,
    config: OpenAiConfig,
    base_url: String,
}

impl OpenAiGenerator {
    pub fn new(config: OpenAiConfig) -> Result<Self, GenerateError> {
        Self::with_base_url(config, OPENAI_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL (for testing / integration)
    pub fn with_base_url(config: OpenAiConfig, base_url: String) -> Result<Self, GenerateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Resolve the credential lazily: config value first, then environment.
    fn api_key(&self) -> Result<String, GenerateError> {
        if let Some(key) = &self.config.api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }
        std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(GenerateError::MissingApiKey)
    }

    fn build_messages(
        &self,
        history: &[ChatTurn],
        profile: Option<&StudentProfile>,
        initial_greeting: bool,
    ) -> Vec<ApiMessage> {
        let mut messages = vec![ApiMessage {
            role: "system",
            content: ASTRA_SYSTEM_PROMPT.to_string(),
        }];

        if let Some(profile) = profile {
            messages.push(ApiMessage {
                role: "system",
                content: build_profile_context(profile),
            });

            if initial_greeting {
                messages.push(ApiMessage {
                    role: "system",
                    content: GREETING_INSTRUCTION.to_string(),
                });
            }
        }

        if history.is_empty() {
            messages.push(ApiMessage {
                role: "user",
                content: "Hello, I just completed my profile. Please help me with my college admissions journey.".to_string(),
            });
        } else {
            for turn in history {
                messages.push(ApiMessage {
                    role: match turn.role {
                        Role::User => "user",
                        Role::Assistant => "assistant",
                    },
                    content: turn.content.clone(),
                });
            }
        }

        messages
    }
}

#[async_trait]
impl ResponseGenerator for OpenAiGenerator {
    async fn generate(
        &self,
        history: &[ChatTurn],
        profile: Option<&StudentProfile>,
        initial_greeting: bool,
    ) -> Result<String, GenerateError> {
        let api_key = self.api_key()?;

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: self.build_messages(history, profile, initial_greeting),
            max_completion_tokens: self.config.max_completion_tokens,
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .ok()
                .and_then(|e| e.error)
                .map(|e| e.message)
                .unwrap_or(body);

            tracing::error!(code = status.as_u16(), message = %message, "OpenAI API error");

            return Err(GenerateError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty());

        Ok(content.unwrap_or_else(|| EMPTY_COMPLETION_REPLY.to_string()))
    }

    fn name(&self) -> &str {
        "openai"
    }
}

// ============================================================================
// Profile context
// ============================================================================

fn timeline_label(timeline: &str) -> &str {
    match timeline {
        "2024-2025" => "2024-2025 (applying this year)",
        "2025-2026" => "2025-2026 (applying next year)",
        "2026-2027" => "2026-2027 (2 years away)",
        "2027-2028" => "2027-2028 (3 years away)",
        "exploring" => "Just exploring options",
        other => other,
    }
}

fn build_profile_context(profile: &StudentProfile) -> String {
    format!(
        "\n**Student Profile:**\n\
         - Grade Level: {}\n\
         - Intended Major(s): {}\n\
         - Target Universities: {}\n\
         - Application Timeline: {}\n\
         - Current Activities: {}\n\
         - Strengths: {}\n\
         - Areas for Improvement: {}\n",
        profile.grade_level.context_label(),
        profile.intended_majors.join(", "),
        profile.target_universities.join(", "),
        timeline_label(&profile.timeline),
        profile.current_activities,
        profile.strengths,
        profile.weaknesses,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GradeLevel, NewStudentProfile};
    use uuid::Uuid;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_profile() -> StudentProfile {
        NewStudentProfile {
            grade_level: GradeLevel::Grade11,
            intended_majors: vec!["Computer Science".to_string()],
            target_universities: vec!["MIT".to_string()],
            current_activities: "Robotics club member".to_string(),
            strengths: "strong GPA, club president".to_string(),
            weaknesses: "weak test scores".to_string(),
            timeline: "2025-2026".to_string(),
        }
        .into_profile(Uuid::nil())
    }

    fn test_config() -> OpenAiConfig {
        OpenAiConfig {
            model: "gpt-5".to_string(),
            max_completion_tokens: 2048,
            api_key: Some("test-key".to_string()),
        }
    }

    fn user_turn(content: &str) -> ChatTurn {
        ChatTurn {
            role: Role::User,
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn template_generator_delegates_to_composer() {
        let generator = TemplateGenerator;
        let profile = sample_profile();
        let reply = generator
            .generate(&[], Some(&profile), true)
            .await
            .unwrap();
        assert!(reply.contains("**Welcome to Astra, your College Admissions Advisor!**"));
        assert_eq!(generator.name(), "template");
    }

    #[tokio::test]
    async fn openai_generator_returns_completion_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({ "model": "gpt-5" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "content": "mock advice" } }]
            })))
            .mount(&server)
            .await;

        let generator = OpenAiGenerator::with_base_url(test_config(), server.uri()).unwrap();
        let reply = generator
            .generate(&[user_turn("what about essays?")], Some(&sample_profile()), false)
            .await
            .unwrap();
        assert_eq!(reply, "mock advice");
    }

    #[tokio::test]
    async fn openai_generator_maps_api_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
                "error": { "message": "quota exceeded" }
            })))
            .mount(&server)
            .await;

        let generator = OpenAiGenerator::with_base_url(test_config(), server.uri()).unwrap();
        let err = generator
            .generate(&[user_turn("hello")], None, false)
            .await
            .unwrap_err();

        match err {
            GenerateError::Api { code, message } => {
                assert_eq!(code, 429);
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_key_is_a_configuration_error_at_call_time() {
        std::env::remove_var("OPENAI_API_KEY");

        let config = OpenAiConfig {
            api_key: None,
            ..test_config()
        };
        // Construction succeeds even without a key.
        let generator = OpenAiGenerator::with_base_url(config, "http://127.0.0.1:9".to_string())
            .unwrap();

        let err = generator
            .generate(&[user_turn("hello")], None, false)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerateError::MissingApiKey));
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn empty_completion_falls_back_to_apology() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{ "message": { "content": "" } }]
            })))
            .mount(&server)
            .await;

        let generator = OpenAiGenerator::with_base_url(test_config(), server.uri()).unwrap();
        let reply = generator
            .generate(&[user_turn("hello")], None, false)
            .await
            .unwrap();
        assert_eq!(reply, EMPTY_COMPLETION_REPLY);
    }

    #[test]
    fn profile_context_uses_display_maps() {
        let context = build_profile_context(&sample_profile());
        assert!(context.contains("Grade Level: Grade 11 (Junior)"));
        assert!(context.contains("Application Timeline: 2025-2026 (applying next year)"));
        assert!(context.contains("Strengths: strong GPA, club president"));
    }

    #[test]
    fn message_assembly_orders_system_blocks_before_history() {
        let generator = OpenAiGenerator::with_base_url(
            test_config(),
            "http://127.0.0.1:9".to_string(),
        )
        .unwrap();
        let profile = sample_profile();
        let messages = generator.build_messages(&[user_turn("hi")], Some(&profile), true);

        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "system");
        assert!(messages[1].content.contains("**Student Profile:**"));
        assert!(messages[2].content.contains("just completed their profile"));
        assert_eq!(messages[3].role, "user");
    }

    #[test]
    fn empty_history_gets_a_default_user_turn() {
        let generator = OpenAiGenerator::with_base_url(
            test_config(),
            "http://127.0.0.1:9".to_string(),
        )
        .unwrap();
        let messages = generator.build_messages(&[], None, false);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.contains("just completed my profile"));
    }
}
