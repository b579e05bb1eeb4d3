use serde::{Deserialize, Serialize};

/// Discriminator Slack puts in the `type` field of an interaction payload.
/// Payload kinds this crate does not model map to `Unknown` instead of
/// failing deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum InteractionKind {
    BlockActions,
    Shortcut,
    ViewSubmission,
    Unknown,
}

impl From<String> for InteractionKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "block_actions" => Self::BlockActions,
            "shortcut" => Self::Shortcut,
            "view_submission" => Self::ViewSubmission,
            _ => Self::Unknown,
        }
    }
}

/// One pressed element within an interaction payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionInvocation {
    pub action_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Payload the platform delivers when a user interacts with a posted message.
///
/// Carried through to the configured interactive-action handler as-is; this
/// crate never inspects it beyond deserialization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionCallback {
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub trigger_id: String,
    pub user_id: String,
    pub channel_id: String,
    pub message_ts: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<String>,
    pub response_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ActionInvocation>,
}

/// Per-delivery correlation context handed to event and interaction handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventContext {
    pub correlation_id: String,
}

impl EventContext {
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self { correlation_id: correlation_id.into() }
    }
}

impl Default for EventContext {
    fn default() -> Self {
        Self { correlation_id: "unknown-correlation-id".to_owned() }
    }
}
