//! In-memory conversation store.
//!
//! Process-lifetime only — durability is out of scope. All mutation goes
//! through the write lock, so appends to any conversation are serialized and
//! a message sequence always reflects append order. Reads hand out clones;
//! the store keeps sole ownership of the live records.

use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Conversation, Message, NewStudentProfile, StudentProfile};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("conversation {0} not found")]
    ConversationNotFound(Uuid),
}

#[derive(Debug, Default)]
pub struct ConversationStore {
    inner: RwLock<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    profiles: HashMap<Uuid, StudentProfile>,
    conversations: HashMap<Uuid, Conversation>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns an id and persists the profile. Profiles are immutable once
    /// stored — there is no update operation.
    pub async fn create_profile(&self, new_profile: NewStudentProfile) -> StudentProfile {
        let profile = new_profile.into_profile(Uuid::new_v4());
        let mut inner = self.inner.write().await;
        inner.profiles.insert(profile.id, profile.clone());
        profile
    }

    /// Absence is not an error — the caller decides what a missing profile
    /// means.
    pub async fn profile(&self, id: Uuid) -> Option<StudentProfile> {
        self.inner.read().await.profiles.get(&id).cloned()
    }

    /// Creates an empty conversation, optionally linked to a profile. The
    /// link is never changed afterwards.
    pub async fn create_conversation(&self, profile_id: Option<Uuid>) -> Conversation {
        let conversation = Conversation {
            id: Uuid::new_v4(),
            profile_id,
            messages: Vec::new(),
        };
        let mut inner = self.inner.write().await;
        inner
            .conversations
            .insert(conversation.id, conversation.clone());
        conversation
    }

    pub async fn conversation(&self, id: Uuid) -> Option<Conversation> {
        self.inner.read().await.conversations.get(&id).cloned()
    }

    /// Appends to the conversation's message sequence. Unknown ids are
    /// reported, not silently ignored.
    pub async fn append_message(
        &self,
        conversation_id: Uuid,
        message: Message,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        match inner.conversations.get_mut(&conversation_id) {
            Some(conversation) => {
                conversation.messages.push(message);
                Ok(())
            }
            None => Err(StoreError::ConversationNotFound(conversation_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GradeLevel, Role};

    fn sample_new_profile() -> NewStudentProfile {
        NewStudentProfile {
            grade_level: GradeLevel::Grade10,
            intended_majors: vec!["Biology".to_string()],
            target_universities: vec!["Cornell".to_string()],
            current_activities: "HOSA chapter".to_string(),
            strengths: "volunteering".to_string(),
            weaknesses: "essays".to_string(),
            timeline: "2026-2027".to_string(),
        }
    }

    #[tokio::test]
    async fn created_profile_is_retrievable_by_assigned_id() {
        let store = ConversationStore::new();
        let profile = store.create_profile(sample_new_profile()).await;
        let fetched = store.profile(profile.id).await.unwrap();
        assert_eq!(fetched.intended_majors, vec!["Biology".to_string()]);
    }

    #[tokio::test]
    async fn missing_profile_is_absence_not_error() {
        let store = ConversationStore::new();
        assert!(store.profile(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn conversation_keeps_profile_link() {
        let store = ConversationStore::new();
        let profile = store.create_profile(sample_new_profile()).await;
        let conversation = store.create_conversation(Some(profile.id)).await;
        let fetched = store.conversation(conversation.id).await.unwrap();
        assert_eq!(fetched.profile_id, Some(profile.id));
        assert!(fetched.messages.is_empty());
    }

    #[tokio::test]
    async fn appends_preserve_order_without_loss() {
        let store = ConversationStore::new();
        let conversation = store.create_conversation(None).await;

        for i in 0..10 {
            let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
            store
                .append_message(conversation.id, Message::new(role, format!("turn {i}")))
                .await
                .unwrap();
        }

        let fetched = store.conversation(conversation.id).await.unwrap();
        assert_eq!(fetched.messages.len(), 10);
        for (i, message) in fetched.messages.iter().enumerate() {
            assert_eq!(message.content, format!("turn {i}"));
        }
    }

    #[tokio::test]
    async fn append_to_unknown_conversation_is_an_error() {
        let store = ConversationStore::new();
        let id = Uuid::new_v4();
        let err = store
            .append_message(id, Message::new(Role::User, "hello"))
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::ConversationNotFound(id));
    }

    #[tokio::test]
    async fn reads_are_snapshots_not_live_references() {
        let store = ConversationStore::new();
        let conversation = store.create_conversation(None).await;
        let before = store.conversation(conversation.id).await.unwrap();

        store
            .append_message(conversation.id, Message::new(Role::User, "later"))
            .await
            .unwrap();

        assert!(before.messages.is_empty());
        let after = store.conversation(conversation.id).await.unwrap();
        assert_eq!(after.messages.len(), 1);
    }
}
