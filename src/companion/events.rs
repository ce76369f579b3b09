//! Messages exchanged between the chat panel and the companion.
use bevy::prelude::Message;

/// A question typed by the explorer.
#[derive(Message, Debug, Clone)]
pub struct CompanionQuery {
    pub text: String,
}

/// The companion's answer to a query.
#[derive(Message, Debug, Clone)]
pub struct CompanionReply {
    pub query: String,
    pub reply: String,
}
