//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

/// A chat message forwarded by the message router.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    /// Raw message text
    pub text: String,
}

/// The bot's answer to a chat message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Reply to send back, or `None` when the message isn't a command
    pub reply: Option<String>,
}

/// Commands the bot understands.
#[derive(Debug, Serialize)]
pub struct CommandsResponse {
    pub commands: Vec<String>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
