// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::HashMap;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace, warn};
use serde::Deserialize;
use serde_json::{Map, Value};
use tdlib_types::{enums, types};
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::{mpsc, oneshot};
use tokio::task;

use crate::{InvocationError, Transport};

/// The key TDLib echoes back in the response to the request that carried it.
pub(crate) const EXTRA_KEY: &str = "@extra";

/// The key identifying the TDLib instance that produced an object.
pub(crate) const CLIENT_ID_KEY: &str = "@client_id";

type InvokeResponse = Value;

enum Request {
    Invoke {
        extra: String,
        tx: oneshot::Sender<Result<InvokeResponse, InvocationError>>,
    },
    Quit,
}

/// Everything TDLib sends which is not the response to a request.
#[derive(Clone, Debug, PartialEq)]
pub enum UpdateLike {
    /// An update from the bundled schema.
    Update(Box<enums::Update>),
    /// An object that could not be decoded as an update, as is.
    ///
    /// This happens with updates newer than the bundled schema.
    Unrecognized(Value),
    /// TDLib reached `authorizationStateClosed`, and no more updates will follow.
    Closed,
}

/// Configuration that controls how the [`DispatcherRunner`] reads from its transport.
pub struct DispatcherConfiguration {
    /// How long a single call to [`Transport::receive`] may block.
    ///
    /// This bounds how long it takes for the runner to notice that it should stop.
    pub receive_timeout: Duration,
}

impl Default for DispatcherConfiguration {
    /// Returns an instance that waits for up to one second on every receive.
    fn default() -> Self {
        Self {
            receive_timeout: Duration::from_secs(1),
        }
    }
}

/// Cheaply cloneable handle to interact with its [`DispatcherRunner`].
#[derive(Clone)]
pub struct DispatcherHandle {
    requests: mpsc::UnboundedSender<Request>,
    transport: Arc<dyn Transport>,
    next_extra: Arc<AtomicU64>,
}

/// Named type holding the actual runner and initial handles. The entry point.
pub struct Dispatcher {
    /// The single mutable instance responsible for reading from the transport.
    pub runner: DispatcherRunner,
    /// Starting handle attached to the [`Dispatcher::runner`].
    ///
    /// This is the only way to interact with the runner once it's running.
    pub handle: DispatcherHandle,
    /// The single mutable channel through which updates received
    /// from TDLib by the [`Dispatcher::runner`] are delivered.
    ///
    /// Update handling must be processed in a sequential manner,
    /// so this is a separate instance with no way to clone it.
    pub updates: mpsc::UnboundedReceiver<UpdateLike>,
}

/// Reads everything TDLib sends and routes it to either
/// the pending requests or the update channel.
///
/// Use [`Dispatcher::new`] to create an instance of this type and associated channels.
pub struct DispatcherRunner {
    /// Configuration used when reading from the transport.
    pub configuration: DispatcherConfiguration,
    transport: Arc<dyn Transport>,
    request_rx: mpsc::UnboundedReceiver<Request>,
    updates_tx: mpsc::UnboundedSender<UpdateLike>,
    pending: HashMap<String, oneshot::Sender<Result<InvokeResponse, InvocationError>>>,
}

impl DispatcherHandle {
    /// Communicate with the running [`DispatcherRunner`] instance
    /// to send the request and wait for its response.
    ///
    /// The request is tagged with a new `@extra`, which is removed again
    /// (along with `@client_id`) from the response.
    pub async fn invoke(&self, request: Value) -> Result<InvokeResponse, InvocationError> {
        let extra = self.next_extra.fetch_add(1, Ordering::Relaxed).to_string();
        let request = tag_request(request, &extra)?;

        let (tx, rx) = oneshot::channel();
        self.requests
            .send(Request::Invoke {
                extra: extra.clone(),
                tx,
            })
            .map_err(|_| InvocationError::Dropped)?;

        trace!("sending request with extra {extra}: {request}");
        self.transport.send(&request);
        rx.await.map_err(|_| InvocationError::Dropped)?
    }

    /// Runs the request synchronously, without involving the [`DispatcherRunner`].
    ///
    /// Only a few requests can be executed this way. TDLib answers
    /// any other with an error. A transport that gives no answer at all
    /// results in [`InvocationError::Deserialize`].
    pub fn execute(&self, request: &Value) -> Result<InvokeResponse, InvocationError> {
        let response = self.transport.execute(&request.to_string()).ok_or_else(|| {
            InvocationError::Deserialize(serde::de::Error::custom(
                "no response to a synchronous request",
            ))
        })?;
        serde_json::from_str(&response).map_err(InvocationError::Deserialize)
    }

    /// Communicate with the running [`DispatcherRunner`] instance
    /// to stop running. Requests still waiting for their response fail.
    pub fn quit(&self) -> bool {
        self.requests.send(Request::Quit).is_ok()
    }
}

fn tag_request(request: Value, extra: &str) -> Result<String, InvocationError> {
    match request {
        Value::Object(mut map) => {
            map.insert(EXTRA_KEY.into(), Value::String(extra.into()));
            Ok(Value::Object(map).to_string())
        }
        _ => Err(InvocationError::Serialize(serde::ser::Error::custom(
            "requests must be JSON objects",
        ))),
    }
}

impl Dispatcher {
    /// Creates a new dispatcher reading from the given transport, with default configuration.
    ///
    /// The transport **should not** be read from by anything else while the runner is running.
    pub fn new<T: Transport + 'static>(transport: T) -> Self {
        Self::with_configuration(transport, Default::default())
    }

    /// Creates a new dispatcher with non-[`DispatcherConfiguration::default`] configuration.
    pub fn with_configuration<T: Transport + 'static>(
        transport: T,
        configuration: DispatcherConfiguration,
    ) -> Self {
        let transport = Arc::new(transport) as Arc<dyn Transport>;
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();

        Self {
            runner: DispatcherRunner {
                configuration,
                transport: Arc::clone(&transport),
                request_rx,
                updates_tx,
                pending: HashMap::new(),
            },
            handle: DispatcherHandle {
                requests: request_tx,
                transport,
                next_extra: Arc::new(AtomicU64::new(1)),
            },
            updates: updates_rx,
        }
    }
}

impl DispatcherRunner {
    /// Run the dispatcher until [`DispatcherHandle::quit`] is called, all handles
    /// are dropped, TDLib closes, or the returned future is dropped.
    pub async fn run(mut self) {
        loop {
            let transport = Arc::clone(&self.transport);
            let timeout = self.configuration.receive_timeout;
            let received = match task::spawn_blocking(move || transport.receive(timeout)).await {
                Ok(received) => received,
                Err(e) => {
                    warn!("receiving from the transport failed: {e}");
                    break;
                }
            };

            // Requests are registered before being sent, so draining them
            // now covers any response the transport just returned.
            if self.drain_requests().is_break() {
                break;
            }
            if let Some(received) = received {
                if self.process_received(&received).is_break() {
                    break;
                }
            }
        }

        debug!(
            "dispatcher stopped with {} request(s) pending",
            self.pending.len()
        );
    }

    fn drain_requests(&mut self) -> ControlFlow<()> {
        loop {
            match self.request_rx.try_recv() {
                Ok(Request::Invoke { extra, tx }) => {
                    self.pending.insert(extra, tx);
                }
                Ok(Request::Quit) | Err(TryRecvError::Disconnected) => {
                    break ControlFlow::Break(());
                }
                Err(TryRecvError::Empty) => break ControlFlow::Continue(()),
            }
        }
    }

    fn process_received(&mut self, received: &str) -> ControlFlow<()> {
        let mut map = match serde_json::from_str::<Map<String, Value>>(received) {
            Ok(map) => map,
            Err(e) => {
                warn!("skipping malformed object from the transport: {e}");
                return ControlFlow::Continue(());
            }
        };
        map.remove(CLIENT_ID_KEY);

        match map.remove(EXTRA_KEY) {
            Some(extra) => {
                let extra = match extra {
                    Value::String(extra) => extra,
                    extra => extra.to_string(),
                };
                match self.pending.remove(&extra) {
                    Some(tx) => {
                        let _ = tx.send(Ok(Value::Object(map)));
                    }
                    None => debug!("dropping response to unknown request with extra {extra}"),
                }
                ControlFlow::Continue(())
            }
            None => self.process_update(Value::Object(map)),
        }
    }

    fn process_update(&mut self, update: Value) -> ControlFlow<()> {
        let update = match enums::Update::deserialize(&update) {
            Ok(update) => update,
            Err(e) => {
                debug!("update not in the schema ({e}): {update}");
                let _ = self.updates_tx.send(UpdateLike::Unrecognized(update));
                return ControlFlow::Continue(());
            }
        };

        let closed = matches!(
            update,
            enums::Update::AuthorizationState(types::UpdateAuthorizationState {
                authorization_state: enums::AuthorizationState::Closed,
            })
        );
        let _ = self.updates_tx.send(UpdateLike::Update(Box::new(update)));
        if closed {
            let _ = self.updates_tx.send(UpdateLike::Closed);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Queue(Mutex<VecDeque<String>>);

    impl Transport for Queue {
        fn send(&self, _: &str) {}
        fn receive(&self, _: Duration) -> Option<String> {
            self.0.lock().unwrap().pop_front()
        }
        fn execute(&self, request: &str) -> Option<String> {
            Some(request.to_string())
        }
    }

    fn runner() -> (DispatcherRunner, mpsc::UnboundedReceiver<UpdateLike>) {
        let Dispatcher {
            runner, updates, ..
        } = Dispatcher::new(Queue::default());
        (runner, updates)
    }

    #[test]
    fn requests_are_tagged() {
        let request = tag_request(json!({"@type": "getMe"}), "7").unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(&request).unwrap(),
            json!({"@type": "getMe", "@extra": "7"})
        );
        assert!(matches!(
            tag_request(json!([1, 2]), "7"),
            Err(InvocationError::Serialize(_))
        ));
    }

    #[test]
    fn responses_reach_pending_requests() {
        let (mut runner, _updates) = runner();
        let (tx, mut rx) = oneshot::channel();
        runner.pending.insert("3".into(), tx);

        let flow = runner.process_received(r#"{"@type":"ok","@extra":"3","@client_id":1}"#);
        assert!(flow.is_continue());
        assert_eq!(rx.try_recv().unwrap().unwrap(), json!({"@type": "ok"}));
        assert!(runner.pending.is_empty());
    }

    #[test]
    fn non_string_extra_is_matched_as_text() {
        let (mut runner, _updates) = runner();
        let (tx, mut rx) = oneshot::channel();
        runner.pending.insert("3".into(), tx);

        runner.process_received(r#"{"@type":"ok","@extra":3}"#);
        assert!(rx.try_recv().unwrap().is_ok());
    }

    #[test]
    fn updates_are_decoded() {
        let (mut runner, mut updates) = runner();
        runner.process_received(
            r#"{"@type":"updateOption","name":"version","value":{"@type":"optionValueString","value":"1.8.0"}}"#,
        );
        match updates.try_recv().unwrap() {
            UpdateLike::Update(update) => assert!(matches!(*update, enums::Update::Option(_))),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_updates_are_kept() {
        let (mut runner, mut updates) = runner();
        runner.process_received(r#"{"@type":"updateFromTheFuture","value":1}"#);
        assert_eq!(
            updates.try_recv().unwrap(),
            UpdateLike::Unrecognized(json!({"@type": "updateFromTheFuture", "value": 1}))
        );
    }

    #[test]
    fn malformed_objects_are_skipped() {
        let (mut runner, mut updates) = runner();
        assert!(runner.process_received("not json").is_continue());
        assert!(runner.process_received("[]").is_continue());
        assert!(updates.try_recv().is_err());
    }

    #[test]
    fn closing_stops_the_runner() {
        let (mut runner, mut updates) = runner();
        let flow = runner.process_received(
            r#"{"@type":"updateAuthorizationState","authorization_state":{"@type":"authorizationStateClosed"}}"#,
        );
        assert!(flow.is_break());
        assert!(matches!(updates.try_recv().unwrap(), UpdateLike::Update(_)));
        assert_eq!(updates.try_recv().unwrap(), UpdateLike::Closed);
    }

    #[test]
    fn quitting_stops_draining() {
        let Dispatcher {
            mut runner, handle, ..
        } = Dispatcher::new(Queue::default());
        assert!(runner.drain_requests().is_continue());
        assert!(handle.quit());
        assert!(runner.drain_requests().is_break());
    }

    struct Mute;

    impl Transport for Mute {
        fn send(&self, _: &str) {}
        fn receive(&self, _: Duration) -> Option<String> {
            None
        }
        fn execute(&self, _: &str) -> Option<String> {
            None
        }
    }

    #[test]
    fn unanswered_executions_are_bad_responses() {
        let Dispatcher { handle, .. } = Dispatcher::new(Mute);
        let err = handle.execute(&json!({"@type": "getOption"})).unwrap_err();
        assert!(matches!(err, InvocationError::Deserialize(_)));
        assert_eq!(
            err.to_string(),
            "request error, bad response: no response to a synchronous request"
        );
    }

    #[test]
    fn dropping_every_handle_stops_draining() {
        let Dispatcher {
            mut runner, handle, ..
        } = Dispatcher::new(Queue::default());
        drop(handle);
        assert!(runner.drain_requests().is_break());
    }
}
