use std::sync::Arc;

use async_trait::async_trait;
use slackline_kit::{
    client::{ApiClient, SocketClient},
    interaction::{EventContext, InteractionCallback},
};
use tracing::debug;

/// Callback interface for interactive message actions (buttons, shortcuts,
/// view submissions).
///
/// The runtime that owns the socket connection invokes this with the
/// delivery context, both client handles, and the raw callback payload.
#[async_trait]
pub trait InteractiveActionHandler: Send + Sync {
    async fn handle_interaction(
        &self,
        ctx: &EventContext,
        api: &ApiClient,
        socket: &SocketClient,
        callback: &InteractionCallback,
    );
}

/// Stand-in handler wired into [`ClientDefaults::new`]: accepts every
/// callback and drops it, so an unconfigured client stays safely invocable.
#[derive(Default)]
pub struct NoopInteractiveActionHandler;

#[async_trait]
impl InteractiveActionHandler for NoopInteractiveActionHandler {
    async fn handle_interaction(
        &self,
        ctx: &EventContext,
        _api: &ApiClient,
        _socket: &SocketClient,
        callback: &InteractionCallback,
    ) {
        debug!(
            correlation_id = %ctx.correlation_id,
            action_id = callback.actions.first().map_or("none", |action| action.action_id.as_str()),
            "no interactive action handler configured; ignoring callback"
        );
    }
}

/// Client startup defaults. Built once at client construction and owned by
/// the client from then on.
#[derive(Clone)]
pub struct ClientDefaults {
    pub debug: bool,
    pub interactive_action_handler: Arc<dyn InteractiveActionHandler>,
}

impl ClientDefaults {
    /// Documented defaults: `debug` off, no-op interactive-action handler.
    pub fn new() -> Self {
        Self { debug: false, interactive_action_handler: Arc::new(NoopInteractiveActionHandler) }
    }

    /// Toggles verbose wire logging in the consuming client.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn interactive_action_handler(
        mut self,
        handler: Arc<dyn InteractiveActionHandler>,
    ) -> Self {
        self.interactive_action_handler = handler;
        self
    }
}

impl Default for ClientDefaults {
    fn default() -> Self {
        Self::new()
    }
}
