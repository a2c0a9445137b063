//! Transport seam between bridges and the server-driven view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges never talk to the socket directly. They hand envelopes to a
//! [`View`], which owns reply tracking; the production implementation
//! forwards encoded bytes to the host's socket loop through an unbounded
//! channel, the same way every other outbound message leaves the client.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use std::cell::Cell;

use futures::channel::mpsc::UnboundedSender;

use crate::envelope::{DrawEnvelope, encode_envelope};

/// Opaque reference to one tracked push.
///
/// Bridges are fire-and-forget: they receive a `ReplyRef` from every push and
/// never look at it. Correlating replies belongs to the transport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplyRef(pub u64);

/// The server-driven view's send primitive, as consumed by bridges.
pub trait View {
    /// Send an envelope on `channel` with reply tracking.
    ///
    /// Implementations must not block; delivery failures are theirs to
    /// surface.
    fn push_with_reply(&self, channel: &str, envelope: &DrawEnvelope) -> ReplyRef;
}

/// An outbound push on its way to the socket loop.
#[derive(Clone, Debug, PartialEq)]
pub struct OutboundPush {
    /// Channel the envelope is pushed on (always `"event"` for bridges).
    pub channel: String,
    /// Encoded envelope bytes.
    pub body: Vec<u8>,
}

/// Production [`View`]: forwards pushes into the host's outbound channel.
///
/// The socket loop at the other end owns framing, delivery, and replies. A
/// closed channel means no active connection; the push is dropped with a
/// warning, matching the fire-and-forget contract.
pub struct ChannelView {
    tx: UnboundedSender<OutboundPush>,
    next_ref: Cell<u64>,
}

impl ChannelView {
    /// Wrap the host's outbound sender.
    #[must_use]
    pub fn new(tx: UnboundedSender<OutboundPush>) -> Self {
        Self { tx, next_ref: Cell::new(0) }
    }
}

impl View for ChannelView {
    fn push_with_reply(&self, channel: &str, envelope: &DrawEnvelope) -> ReplyRef {
        let push_ref = self.next_ref.get().wrapping_add(1);
        self.next_ref.set(push_ref);

        let push = OutboundPush {
            channel: channel.to_owned(),
            body: encode_envelope(envelope),
        };
        if self.tx.unbounded_send(push).is_err() {
            log::warn!("outbound channel closed; dropping {} push", envelope.event);
        }
        ReplyRef(push_ref)
    }
}
