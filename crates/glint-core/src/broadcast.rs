//! Single-sink event broadcaster.
//!
//! The broadcaster holds at most one current [`EventSink`], the most recently
//! connected browser. Registering a new sink silently displaces the old one;
//! the displaced transport is left alone (it just stops receiving events).
//! Publishing with no sink attached is a no-op.
//!
//! Delivery is fire-and-forget. [`Broadcaster::publish`] reports what
//! happened as a [`Publish`] value and callers are expected to ignore
//! [`Publish::Failed`]: a client that went away is not an error worth
//! surfacing.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

/// Handshake sent to every newly connected stream.
pub const CONNECTED: &str = "connected";

/// Tells the browser to close its stream and reload the page.
pub const RELOAD: &str = "reload";

/// Why a sink refused an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The receiving side of the sink is gone
    #[error("sink is closed")]
    Closed,

    /// The sink buffer is full; the event was dropped
    #[error("sink buffer is full")]
    Full,

    /// The payload cannot be framed as a single event
    #[error("event payload contains a line break: {0:?}")]
    InvalidPayload(String),
}

/// Destination for published events.
pub trait EventSink: Send + Sync {
    /// Hand one event to the transport without waiting on it.
    fn deliver(&self, event: &str) -> Result<(), SinkError>;
}

impl<F> EventSink for F
where
    F: Fn(&str) -> Result<(), SinkError> + Send + Sync,
{
    fn deliver(&self, event: &str) -> Result<(), SinkError> {
        self(event)
    }
}

/// Outcome of [`Broadcaster::publish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Publish {
    /// The current sink accepted the event
    Delivered,
    /// No client has connected yet; the event was dropped
    NoSink,
    /// The current sink rejected the event
    Failed(SinkError),
}

impl Publish {
    /// Whether the sink accepted the event.
    pub fn is_delivered(&self) -> bool {
        matches!(self, Publish::Delivered)
    }
}

/// Holds the current sink and publishes events to it.
#[derive(Default)]
pub struct Broadcaster {
    sink: RwLock<Option<Arc<dyn EventSink>>>,
}

impl Broadcaster {
    /// Create a broadcaster with no sink attached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current sink.
    pub fn set_sink<S>(&self, sink: S)
    where
        S: EventSink + 'static,
    {
        *self.sink.write() = Some(Arc::new(sink));
    }

    /// Hand `handshake` to `sink` and make it the current sink, atomically.
    ///
    /// No publish can slip in between, so the new sink always sees the
    /// handshake first and a concurrent attach never receives it.
    pub fn attach<S>(&self, sink: S, handshake: &str) -> Publish
    where
        S: EventSink + 'static,
    {
        let mut current = self.sink.write();
        let outcome = match sink.deliver(handshake) {
            Ok(()) => Publish::Delivered,
            Err(err) => {
                debug!(event = handshake, error = %err, "handshake delivery failed");
                Publish::Failed(err)
            }
        };
        *current = Some(Arc::new(sink));
        outcome
    }

    /// Whether any sink has been registered.
    pub fn has_sink(&self) -> bool {
        self.sink.read().is_some()
    }

    /// Deliver `event` to the current sink.
    pub fn publish(&self, event: &str) -> Publish {
        // Clone the handle so delivery never runs under the lock.
        let sink = self.sink.read().clone();

        let Some(sink) = sink else {
            debug!(event, "no stream connected, dropping event");
            return Publish::NoSink;
        };

        match sink.deliver(event) {
            Ok(()) => {
                debug!(event, "dispatched event");
                Publish::Delivered
            }
            Err(err) => {
                debug!(event, error = %err, "event delivery failed");
                Publish::Failed(err)
            }
        }
    }
}

impl fmt::Debug for Broadcaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcaster")
            .field("has_sink", &self.has_sink())
            .finish()
    }
}

/// Sink backed by a bounded Tokio channel.
///
/// The receiving half is turned into a response stream by the HTTP layer.
/// Sends never wait: a full buffer drops the event, a dropped receiver
/// reports [`SinkError::Closed`].
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::Sender<String>,
}

impl ChannelSink {
    /// Create a sink and the receiver that drains it.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<String>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn deliver(&self, event: &str) -> Result<(), SinkError> {
        if event.contains(['\r', '\n']) {
            return Err(SinkError::InvalidPayload(event.to_string()));
        }
        self.tx.try_send(event.to_string()).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => SinkError::Full,
            mpsc::error::TrySendError::Closed(_) => SinkError::Closed,
        })
    }
}
