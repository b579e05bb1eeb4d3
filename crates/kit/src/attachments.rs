use serde::Serialize;

/// One title/value pair rendered inside an attachment table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

/// Legacy secondary-content record hung off an outgoing message.
///
/// Slack renders these below the main text with a colored gutter bar. Block
/// Kit supersedes them, but the message API still accepts both side by side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MessageAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<AttachmentField>,
}

impl MessageAttachment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gutter color, either a hex string like `#36a64f` or a named alias.
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_link(mut self, title_link: impl Into<String>) -> Self {
        self.title_link = Some(title_link.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn field(mut self, title: impl Into<String>, value: impl Into<String>, short: bool) -> Self {
        self.fields.push(AttachmentField { title: title.into(), value: value.into(), short });
        self
    }
}
