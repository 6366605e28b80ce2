//! Advisory endpoint orchestration.
//!
//! One sequential unit of work per request: validate the body, resolve
//! conversation state, append the user turn, invoke the response generator,
//! append the assistant turn. All conversation-store mutation happens here.

use astra_core::{
    ChatTurn, ConversationStore, Message, NewStudentProfile, ResponseGenerator, Role, StoreError,
    StudentProfile,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

/// Validated form of a `POST /chat` body.
#[derive(Debug, Clone)]
pub struct ChatCommand {
    pub message: String,
    pub conversation_id: Option<Uuid>,
    pub profile: Option<NewStudentProfile>,
}

/// One field-level problem found while validating a request body.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Invalid request")]
    Validation(Vec<FieldIssue>),

    #[error("Conversation {0} not found")]
    ConversationNotFound(Uuid),

    /// Missing credential — the message is actionable and surfaced verbatim.
    #[error("{0}")]
    Configuration(String),

    /// Any other generator failure, reported generically.
    #[error("{0}")]
    Generation(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// What the endpoint returns on success.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatOutcome {
    pub message: Message,
    pub conversation_id: Uuid,
}

/// Validates the raw body into a `ChatCommand`, collecting every field-level
/// issue instead of stopping at the first.
pub fn parse_chat_request(body: &Value) -> Result<ChatCommand, ChatError> {
    if !body.is_object() {
        return Err(ChatError::Validation(vec![FieldIssue::new(
            "body",
            "expected a JSON object",
        )]));
    }

    let mut issues = Vec::new();

    let message = match body.get("message") {
        Some(Value::String(text)) => text.clone(),
        Some(_) => {
            issues.push(FieldIssue::new("message", "must be a string"));
            String::new()
        }
        None => {
            issues.push(FieldIssue::new(
                "message",
                "is required (empty string requests the initial greeting)",
            ));
            String::new()
        }
    };

    // Ids we mint are always UUIDs, so a non-UUID string can never name a
    // stored conversation — reject it here rather than report not-found.
    let conversation_id = match body.get("conversationId") {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => match Uuid::parse_str(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                issues.push(FieldIssue::new("conversationId", "must be a UUID"));
                None
            }
        },
        Some(_) => {
            issues.push(FieldIssue::new("conversationId", "must be a string"));
            None
        }
    };

    let profile = match body.get("profile") {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value::<NewStudentProfile>(value.clone()) {
            Ok(profile) => Some(profile),
            Err(e) => {
                issues.push(FieldIssue::new("profile", e.to_string()));
                None
            }
        },
    };

    if !issues.is_empty() {
        return Err(ChatError::Validation(issues));
    }

    Ok(ChatCommand {
        message,
        conversation_id,
        profile,
    })
}

/// Runs one advisory exchange against the store and generator.
pub async fn handle_chat(
    store: &ConversationStore,
    generator: &dyn ResponseGenerator,
    command: ChatCommand,
) -> Result<ChatOutcome, ChatError> {
    // Resolve conversation state. An id that resolves to nothing is a caller
    // error — never a silent fresh conversation. A supplied profile is only
    // honored when a new conversation is being created.
    let (conversation, profile): (_, Option<StudentProfile>) = match command.conversation_id {
        Some(id) => match store.conversation(id).await {
            Some(conversation) => {
                let profile = match conversation.profile_id {
                    Some(profile_id) => store.profile(profile_id).await,
                    None => None,
                };
                (conversation, profile)
            }
            None => return Err(ChatError::ConversationNotFound(id)),
        },
        None => match command.profile {
            Some(new_profile) => {
                let profile = store.create_profile(new_profile).await;
                let conversation = store.create_conversation(Some(profile.id)).await;
                (conversation, Some(profile))
            }
            None => (store.create_conversation(None).await, None),
        },
    };

    let initial_greeting = command.message.is_empty() && conversation.messages.is_empty();

    let mut history: Vec<ChatTurn> = conversation.messages.iter().map(ChatTurn::from).collect();

    if !initial_greeting && !command.message.is_empty() {
        let user_message = Message::new(Role::User, command.message);
        store
            .append_message(conversation.id, user_message.clone())
            .await?;
        history.push(ChatTurn::from(&user_message));
    }

    let reply = generator
        .generate(&history, profile.as_ref(), initial_greeting)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, backend = generator.name(), "response generation failed");
            if e.is_configuration() {
                ChatError::Configuration(e.to_string())
            } else {
                ChatError::Generation(
                    "Failed to generate a response from Astra. Please try again.".to_string(),
                )
            }
        })?;

    let assistant_message = Message::new(Role::Assistant, reply);
    store
        .append_message(conversation.id, assistant_message.clone())
        .await?;

    Ok(ChatOutcome {
        message: assistant_message,
        conversation_id: conversation.id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra_core::TemplateGenerator;
    use serde_json::json;

    fn profile_payload() -> Value {
        json!({
            "gradeLevel": "grade-11",
            "intendedMajors": ["Computer Science"],
            "targetUniversities": ["MIT"],
            "currentActivities": "Robotics club member",
            "strengths": "strong GPA, club president",
            "weaknesses": "weak test scores",
            "timeline": "2025-2026",
        })
    }

    #[test]
    fn parse_accepts_minimal_body() {
        let command = parse_chat_request(&json!({ "message": "hello" })).unwrap();
        assert_eq!(command.message, "hello");
        assert!(command.conversation_id.is_none());
        assert!(command.profile.is_none());
    }

    #[test]
    fn parse_collects_field_issues() {
        let err = parse_chat_request(&json!({
            "message": 42,
            "conversationId": "not-a-uuid",
        }))
        .unwrap_err();

        let ChatError::Validation(issues) = err else {
            panic!("expected validation error");
        };
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["message", "conversationId"]);
    }

    #[test]
    fn parse_rejects_missing_message() {
        let err = parse_chat_request(&json!({})).unwrap_err();
        let ChatError::Validation(issues) = err else {
            panic!("expected validation error");
        };
        assert_eq!(issues[0].field, "message");
    }

    #[test]
    fn parse_rejects_malformed_profile() {
        let err = parse_chat_request(&json!({
            "message": "",
            "profile": { "gradeLevel": "grade-13" },
        }))
        .unwrap_err();
        let ChatError::Validation(issues) = err else {
            panic!("expected validation error");
        };
        assert_eq!(issues[0].field, "profile");
    }

    #[test]
    fn parse_rejects_non_object_body() {
        let err = parse_chat_request(&json!("just a string")).unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
    }

    #[tokio::test]
    async fn new_conversation_with_profile_creates_and_links_both() {
        let store = ConversationStore::new();
        let generator = TemplateGenerator;
        let command = parse_chat_request(&json!({
            "message": "",
            "profile": profile_payload(),
        }))
        .unwrap();

        let outcome = handle_chat(&store, &generator, command).await.unwrap();

        let conversation = store.conversation(outcome.conversation_id).await.unwrap();
        let profile_id = conversation.profile_id.expect("conversation links profile");
        let profile = store.profile(profile_id).await.expect("profile stored");
        assert_eq!(profile.target_universities, vec!["MIT".to_string()]);

        // Initial greeting: no user message appended, only the assistant turn.
        assert_eq!(conversation.messages.len(), 1);
        assert_eq!(conversation.messages[0].role, Role::Assistant);
    }

    #[tokio::test]
    async fn unknown_conversation_id_is_not_found_not_a_fresh_conversation() {
        let store = ConversationStore::new();
        let generator = TemplateGenerator;
        let missing = Uuid::new_v4();
        let command = ChatCommand {
            message: "hello".to_string(),
            conversation_id: Some(missing),
            profile: None,
        };

        let err = handle_chat(&store, &generator, command).await.unwrap_err();
        assert!(matches!(err, ChatError::ConversationNotFound(id) if id == missing));
    }

    #[tokio::test]
    async fn follow_up_appends_user_and_assistant_in_order() {
        let store = ConversationStore::new();
        let generator = TemplateGenerator;

        let first = parse_chat_request(&json!({ "message": "", "profile": profile_payload() }))
            .unwrap();
        let outcome = handle_chat(&store, &generator, first).await.unwrap();

        let second = ChatCommand {
            message: "What competitions should I do?".to_string(),
            conversation_id: Some(outcome.conversation_id),
            profile: None,
        };
        let outcome2 = handle_chat(&store, &generator, second).await.unwrap();
        assert!(outcome2.message.content.contains("USACO"));

        let conversation = store.conversation(outcome.conversation_id).await.unwrap();
        let roles: Vec<Role> = conversation.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
    }

    #[tokio::test]
    async fn profile_payload_is_ignored_when_resuming_a_conversation() {
        let store = ConversationStore::new();
        let generator = TemplateGenerator;

        let bare = ChatCommand {
            message: "hi there".to_string(),
            conversation_id: None,
            profile: None,
        };
        let outcome = handle_chat(&store, &generator, bare).await.unwrap();

        let resume = parse_chat_request(&json!({
            "message": "tell me about essays",
            "conversationId": outcome.conversation_id.to_string(),
            "profile": profile_payload(),
        }))
        .unwrap();
        let outcome2 = handle_chat(&store, &generator, resume).await.unwrap();

        // No profile was attached at creation, so the payload is not honored
        // and the reply is the onboarding prompt.
        assert!(outcome2
            .message
            .content
            .contains("complete the onboarding questionnaire"));
        let conversation = store.conversation(outcome.conversation_id).await.unwrap();
        assert!(conversation.profile_id.is_none());
    }

    #[tokio::test]
    async fn empty_message_on_nonempty_conversation_is_not_a_greeting() {
        let store = ConversationStore::new();
        let generator = TemplateGenerator;

        let first = parse_chat_request(&json!({ "message": "", "profile": profile_payload() }))
            .unwrap();
        let outcome = handle_chat(&store, &generator, first).await.unwrap();

        let empty_again = ChatCommand {
            message: String::new(),
            conversation_id: Some(outcome.conversation_id),
            profile: None,
        };
        let outcome2 = handle_chat(&store, &generator, empty_again).await.unwrap();

        // Not a greeting (conversation is non-empty) and no user turn to
        // append; the generator sees the history without a trailing user
        // message and replays the greeting content.
        assert!(outcome2
            .message
            .content
            .contains("**Welcome to Astra, your College Admissions Advisor!**"));
        let conversation = store.conversation(outcome.conversation_id).await.unwrap();
        assert_eq!(conversation.messages.len(), 2);
    }
}
