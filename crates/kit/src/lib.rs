//! Slackline Kit - typed Slack payload surface
//!
//! Type definitions for the payloads a Slack bot exchanges with the platform:
//! - **Block Kit** (`blocks`) - rich message layout (sections, buttons, context)
//! - **Attachments** (`attachments`) - legacy secondary-content records
//! - **Interactions** (`interaction`) - callback payloads for buttons and shortcuts
//! - **Clients** (`client`) - Web API and Socket Mode connection handles
//!
//! This crate only defines the shapes. Sending messages, keeping the socket
//! open, and acting on callbacks belong to the runtime that consumes them.

pub mod attachments;
pub mod blocks;
pub mod client;
pub mod interaction;
