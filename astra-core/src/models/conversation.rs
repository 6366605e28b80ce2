use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Message;

/// A conversation owns its message sequence exclusively. The profile link is
/// a weak reference set at creation and never changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<Uuid>,
    pub messages: Vec<Message>,
}
