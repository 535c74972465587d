//! Shared frame model and JSON codec for the RTM wire protocol.
//!
//! This crate owns the wire representation used by the client. Frames are
//! UTF-8 JSON text: inbound frames carry a loosely structured event object
//! in which every field is optional (presence pings, typing indicators and
//! other unrelated event kinds must decode without error), outbound frames
//! carry exactly one shape, the channel message.

use serde::{Deserialize, Serialize};

/// Error returned by [`encode`] and [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The outbound message could not be serialized to JSON text.
    #[error("failed to encode outbound frame: {0}")]
    Encode(#[source] serde_json::Error),
    /// The raw bytes are not a well-formed JSON event object.
    #[error("failed to decode inbound frame: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Event kind carried by channel messages, the only kind the client reacts to.
pub const KIND_MESSAGE: &str = "message";

/// One decoded inbound frame.
///
/// Every field is optional because the wire format is loosely structured:
/// unrelated event kinds arrive on the same connection with most fields
/// absent. An absent field decodes to `None`, never to an empty string, so
/// "not present" stays distinguishable from "present but empty".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event kind, e.g. `"message"`, `"presence"`, `"typing"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Server timestamp for the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    /// Identifier of the user that produced the event.
    #[serde(default, rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Message text, when the event carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Channel the event originated from.
    #[serde(default, rename = "channelID", skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
}

impl Event {
    /// Whether this event is a channel message with a known origin channel,
    /// i.e. something the auto-responder can reply to.
    #[must_use]
    pub fn is_channel_message(&self) -> bool {
        self.kind.as_deref() == Some(KIND_MESSAGE) && self.channel_id.is_some()
    }
}

/// One outbound channel message, constructed immediately before send.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outbound {
    /// Connection-scoped identifier stamped from the frame counter.
    #[serde(rename = "identifier")]
    pub id: u64,
    /// Always `"message"`; present as a field so it round-trips on the wire.
    pub kind: String,
    /// Destination channel.
    #[serde(rename = "channelID")]
    pub channel_id: String,
    /// Message text.
    pub text: String,
}

impl Outbound {
    /// Build a channel message frame.
    #[must_use]
    pub fn message(id: u64, channel_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            kind: KIND_MESSAGE.to_owned(),
            channel_id: channel_id.into(),
            text: text.into(),
        }
    }
}

/// Encode an outbound message into wire text.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] when the message cannot be represented as
/// JSON text.
pub fn encode(message: &Outbound) -> Result<String, CodecError> {
    serde_json::to_string(message).map_err(CodecError::Encode)
}

/// Decode raw wire bytes into an inbound event.
///
/// Unknown fields are ignored and absent fields map to `None`; only bytes
/// that are not a well-formed JSON object fail.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed frames (invalid UTF-8,
/// non-JSON bytes, or a JSON value that is not an event object).
pub fn decode(frame: &[u8]) -> Result<Event, CodecError> {
    serde_json::from_slice(frame).map_err(CodecError::Decode)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
