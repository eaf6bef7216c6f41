//! Background execution of lookup requests.
//!
//! The UI event loop stays single-threaded; each fetch runs on its own
//! thread and reports a tagged [`FetchEvent`] back over a channel the
//! loop drains between ticks. Superseded results are not cancelled
//! here; the application state discards them by generation.

use crate::application::{FetchEvent, FetchRequest};
use crate::infrastructure::LookupClient;
use std::sync::mpsc::Sender;
use std::thread;

/// Turns queued [`FetchRequest`]s into [`FetchEvent`]s.
#[derive(Debug, Clone)]
pub struct FetchDispatcher {
    client: LookupClient,
    events: Sender<FetchEvent>,
}

impl FetchDispatcher {
    pub fn new(client: LookupClient, events: Sender<FetchEvent>) -> Self {
        Self { client, events }
    }

    /// Runs one lookup on a background thread.
    ///
    /// The locality generation tag travels through untouched, so the
    /// state machine can match the completion to the request that caused
    /// it. A closed receiver means the UI is shutting down and the
    /// result is dropped.
    pub fn dispatch(&self, request: FetchRequest) {
        let client = self.client.clone();
        let events = self.events.clone();
        thread::spawn(move || {
            let event = match request {
                FetchRequest::Regions => FetchEvent::Regions(client.regions()),
                FetchRequest::Localities { uf, epoch } => FetchEvent::Localities {
                    epoch,
                    result: client.localities(&uf),
                },
            };
            let _ = events.send(event);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    /// A dispatcher against an unreachable server still delivers a
    /// completion event, carrying the failure as a value.
    #[test]
    fn test_dispatch_delivers_failure_event() {
        let (tx, rx) = mpsc::channel();
        let client = LookupClient::new("http://127.0.0.1:1").unwrap();
        let dispatcher = FetchDispatcher::new(client, tx);

        dispatcher.dispatch(FetchRequest::Regions);

        let event = rx.recv_timeout(Duration::from_secs(30)).unwrap();
        assert!(matches!(event, FetchEvent::Regions(Err(_))));
    }

    #[test]
    fn test_dispatch_preserves_locality_epoch() {
        let (tx, rx) = mpsc::channel();
        let client = LookupClient::new("http://127.0.0.1:1").unwrap();
        let dispatcher = FetchDispatcher::new(client, tx);

        dispatcher.dispatch(FetchRequest::Localities {
            uf: "SP".to_string(),
            epoch: 7,
        });

        let event = rx.recv_timeout(Duration::from_secs(30)).unwrap();
        match event {
            FetchEvent::Localities { epoch, result } => {
                assert_eq!(epoch, 7);
                assert!(result.is_err());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
