//! Slackline Config - defaults for a Slack bot client wrapper
//!
//! Three independent configuration domains, each a record of documented
//! defaults with chained setters:
//! - **Client** (`client`) - startup defaults: debug flag, interactive-action handler
//! - **Reply** (`reply`) - per-message defaults: attachments, blocks, thread placement
//! - **Error reports** (`error_report`) - thread placement for error messages
//!
//! A record is built at the call site and handed to the client/runtime that
//! owns message dispatch. Building is total: no validation, no I/O, and the
//! same setter chain always yields the same record.

pub mod client;
pub mod error_report;
pub mod reply;
