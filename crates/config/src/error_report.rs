/// Defaults for the message a bot posts when a command handler fails.
///
/// Same lifecycle as reply defaults: built per report, consumed by the send
/// call, not retained.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorReportDefaults {
    pub thread_response: bool,
}

impl ErrorReportDefaults {
    /// Documented default: report in channel, not in a thread.
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts the error report inside the thread of the triggering message.
    pub fn in_thread(mut self, use_thread: bool) -> Self {
        self.thread_response = use_thread;
        self
    }
}
