//! Mock event source for unit testing.
//!
//! Allows tests to inject synthetic [`RawPenEvent`]s without a tablet
//! attached or a platform event loop running.

use std::sync::{
    mpsc::{self, Sender},
    Arc, Mutex,
};

use super::{EventSource, RawPenEvent, SourceError};

/// A mock implementation of [`EventSource`] that allows tests to inject events.
pub struct MockEventSource {
    sender: Arc<Mutex<Option<Sender<RawPenEvent>>>>,
}

impl MockEventSource {
    /// Creates a new mock event source.
    pub fn new() -> Self {
        Self {
            sender: Arc::new(Mutex::new(None)),
        }
    }

    /// Injects a synthetic event, as if captured from hardware.
    ///
    /// Panics if `start()` has not been called or if `stop()` has been called.
    pub fn inject_event(&self, event: RawPenEvent) {
        let guard = self.sender.lock().expect("lock poisoned");
        if let Some(ref sender) = *guard {
            sender
                .send(event)
                .expect("receiver has been dropped; call start() first");
        } else {
            panic!("MockEventSource::inject_event called before start()");
        }
    }
}

impl Default for MockEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for MockEventSource {
    fn start(&self) -> Result<mpsc::Receiver<RawPenEvent>, SourceError> {
        let (tx, rx) = mpsc::channel();
        *self.sender.lock().expect("lock poisoned") = Some(tx);
        Ok(rx)
    }

    fn stop(&self) {
        // Drop the sender to close the channel
        *self.sender.lock().expect("lock poisoned") = None;
    }
}
