//! Contract tests for the three configuration domains: documented defaults,
//! last-write-wins on repeated setters, commutativity across distinct
//! fields, and independent ownership of separately built records.

use std::sync::Arc;

use slackline_config::{
    client::{ClientDefaults, InteractiveActionHandler},
    error_report::ErrorReportDefaults,
    reply::ReplyDefaults,
};
use slackline_kit::{
    attachments::MessageAttachment,
    blocks::{Block, ButtonElement, ButtonStyle},
    client::{ApiClient, SocketClient},
    interaction::{EventContext, InteractionCallback, InteractionKind},
};
use tokio::sync::Mutex;

#[test]
fn every_domain_starts_from_documented_defaults() {
    let client = ClientDefaults::new();
    assert!(!client.debug);

    let reply = ReplyDefaults::new();
    assert!(reply.attachments.is_empty());
    assert!(reply.blocks.is_empty());
    assert!(!reply.thread_response);

    let report = ErrorReportDefaults::new();
    assert!(!report.thread_response);
}

#[test]
fn single_setter_touches_exactly_one_field() {
    let reply = ReplyDefaults::new().in_thread(true);
    assert!(reply.thread_response);
    assert!(reply.attachments.is_empty());
    assert!(reply.blocks.is_empty());
}

#[test]
fn repeated_setters_keep_the_last_value() {
    let report = ErrorReportDefaults::new().in_thread(true).in_thread(false);
    assert!(!report.thread_response);

    let client = ClientDefaults::new().debug(false).debug(true);
    assert!(client.debug);
}

#[test]
fn distinct_field_setters_commute() {
    let attachments = vec![MessageAttachment::new()
        .color("#d00000")
        .title("Command failed")
        .field("Command", "/deploy prod", true)];
    let blocks = vec![
        Block::mrkdwn_section(":warning: deploy failed"),
        Block::actions(vec![
            ButtonElement::new("deploy.retry.v1", "Retry").style(ButtonStyle::Primary)
        ]),
    ];

    let forward = ReplyDefaults::new()
        .attachments(attachments.clone())
        .blocks(blocks.clone())
        .in_thread(true);
    let reverse = ReplyDefaults::new()
        .in_thread(true)
        .blocks(blocks)
        .attachments(attachments);

    assert_eq!(forward, reverse);
}

#[test]
fn separately_built_records_do_not_share_state() {
    let first = ReplyDefaults::new();
    let second = ReplyDefaults::new();
    assert_eq!(first, second);

    let mutated = second.blocks(vec![Block::divider()]);
    assert!(first.blocks.is_empty());
    assert_eq!(mutated.blocks.len(), 1);
}

#[test]
fn nonsensical_values_are_stored_without_validation() {
    let reply = ReplyDefaults::new().attachments(vec![MessageAttachment::new(); 300]);
    assert_eq!(reply.attachments.len(), 300);

    let blocks = vec![Block::plain_section(""); 2];
    let reply = ReplyDefaults::new().blocks(blocks);
    assert_eq!(reply.blocks.len(), 2);
}

struct RecordingHandler {
    seen: Mutex<Vec<String>>,
}

#[async_trait::async_trait]
impl InteractiveActionHandler for RecordingHandler {
    async fn handle_interaction(
        &self,
        ctx: &EventContext,
        _api: &ApiClient,
        _socket: &SocketClient,
        callback: &InteractionCallback,
    ) {
        let action_id = callback
            .actions
            .first()
            .map_or("none", |action| action.action_id.as_str());
        self.seen.lock().await.push(format!("{}:{action_id}", ctx.correlation_id));
    }
}

#[tokio::test]
async fn finished_client_defaults_hand_the_configured_handler_to_the_runtime() {
    let handler = Arc::new(RecordingHandler { seen: Mutex::new(Vec::new()) });
    let defaults = ClientDefaults::new().debug(true).interactive_action_handler(handler.clone());

    // What the consuming runtime does with the record once an interaction
    // arrives over the socket.
    let api = ApiClient::new("xoxb-test");
    let socket = SocketClient::new("xapp-test");
    let callback: InteractionCallback = serde_json::from_str(
        r#"{
            "type": "block_actions",
            "trigger_id": "t-9",
            "user_id": "U9",
            "channel_id": "C9",
            "message_ts": "1730000000.9000",
            "response_url": "https://hooks.slack.com/actions/T9/9/9",
            "actions": [{ "action_id": "report.ack.v1" }]
        }"#,
    )
    .expect("deserialize");
    assert_eq!(callback.kind, InteractionKind::BlockActions);

    defaults
        .interactive_action_handler
        .handle_interaction(&EventContext::new("env-9"), &api, &socket, &callback)
        .await;

    let seen = handler.seen.lock().await;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], "env-9:report.ack.v1");
}
