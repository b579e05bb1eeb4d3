use slackline_kit::{attachments::MessageAttachment, blocks::Block};

/// Per-reply message defaults: built at the send call site, consumed by the
/// outgoing send, not retained afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplyDefaults {
    pub attachments: Vec<MessageAttachment>,
    pub blocks: Vec<Block>,
    pub thread_response: bool,
}

impl ReplyDefaults {
    /// Documented defaults: no attachments, no blocks, reply in channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the attachment list wholesale.
    pub fn attachments(mut self, attachments: Vec<MessageAttachment>) -> Self {
        self.attachments = attachments;
        self
    }

    /// Replaces the block list wholesale.
    pub fn blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Sends the reply inside the thread of the triggering message instead
    /// of the channel.
    pub fn in_thread(mut self, use_thread: bool) -> Self {
        self.thread_response = use_thread;
        self
    }
}
