use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText { text: String },
    Mrkdwn { text: String },
}

impl TextObject {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

/// Interactive button inside an actions block. The `action_id` comes back in
/// the interaction callback when the button is pressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ButtonElement {
    pub action_id: String,
    pub text: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ButtonElement {
    pub fn new(action_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            action_id: action_id.into(),
            text: TextObject::plain(label),
            style: None,
            value: None,
            url: None,
        }
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// One layout block of an outgoing message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Section {
        #[serde(skip_serializing_if = "Option::is_none")]
        block_id: Option<String>,
        text: TextObject,
    },
    Actions {
        #[serde(skip_serializing_if = "Option::is_none")]
        block_id: Option<String>,
        elements: Vec<ButtonElement>,
    },
    Context {
        #[serde(skip_serializing_if = "Option::is_none")]
        block_id: Option<String>,
        elements: Vec<TextObject>,
    },
    Divider {
        #[serde(skip_serializing_if = "Option::is_none")]
        block_id: Option<String>,
    },
}

impl Block {
    pub fn section(text: TextObject) -> Self {
        Self::Section { block_id: None, text }
    }

    pub fn plain_section(text: impl Into<String>) -> Self {
        Self::section(TextObject::plain(text))
    }

    pub fn mrkdwn_section(text: impl Into<String>) -> Self {
        Self::section(TextObject::mrkdwn(text))
    }

    pub fn actions(elements: Vec<ButtonElement>) -> Self {
        Self::Actions { block_id: None, elements }
    }

    pub fn context(elements: Vec<TextObject>) -> Self {
        Self::Context { block_id: None, elements }
    }

    pub fn divider() -> Self {
        Self::Divider { block_id: None }
    }

    pub fn block_id(mut self, id: impl Into<String>) -> Self {
        match &mut self {
            Self::Section { block_id, .. }
            | Self::Actions { block_id, .. }
            | Self::Context { block_id, .. }
            | Self::Divider { block_id } => *block_id = Some(id.into()),
        }
        self
    }
}
