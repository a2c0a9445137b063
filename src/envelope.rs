//! Wire envelope for draw events and its JSON codec.
//!
//! The envelope shape is consumed by the server-driven view and must stay
//! bit-exact:
//! `{"type": <raw DOM type>, "event": <phase name>, "value": {"x": n, "y": n}}`.
//! Envelopes are constructed per dispatch, sent once, and never stored or
//! retried.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Serialize};

use crate::geom::Point;

/// Error returned by [`decode_envelope`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The raw bytes were not a valid JSON envelope.
    #[error("failed to decode draw envelope: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A single draw event as sent to the server-driven view.
///
/// Field declaration order matters: serialization must produce the keys
/// `type`, `event`, `value` in that order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawEnvelope {
    /// Raw DOM event type that triggered this envelope.
    #[serde(rename = "type")]
    pub raw_type: String,
    /// Protocol event name: `"drawstart"`, `"draw"`, or `"drawend"`.
    pub event: String,
    /// Normalized pointer coordinates.
    pub value: Point,
}

impl DrawEnvelope {
    /// Build an envelope for one raw event.
    #[must_use]
    pub fn new(raw_type: impl Into<String>, event: impl Into<String>, value: Point) -> Self {
        Self { raw_type: raw_type.into(), event: event.into(), value }
    }
}

/// Encode an envelope into its JSON wire bytes.
#[must_use]
pub fn encode_envelope(envelope: &DrawEnvelope) -> Vec<u8> {
    // Serializing a struct of strings and floats cannot fail; serde_json only
    // errors here on non-string map keys.
    serde_json::to_vec(envelope).unwrap_or_default()
}

/// Decode JSON wire bytes into an envelope.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed bytes or a payload that does
/// not match the envelope shape.
pub fn decode_envelope(bytes: &[u8]) -> Result<DrawEnvelope, CodecError> {
    Ok(serde_json::from_slice(bytes)?)
}
