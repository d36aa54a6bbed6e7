// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use super::{Client, ClientInner};
use crate::client::{client::ClientConfiguration, retry_policy::RetryContext};
use crate::{DispatcherHandle, InvocationError, TdError};
use log::info;
use serde_json::Value;
use std::{num::NonZeroU32, ops::ControlFlow, sync::Arc, time::Duration};
use tdlib_types::{self as td, types, RemoteCall};
use tokio::time::sleep;

/// Turns a response with `@type` `"error"` into [`InvocationError::Td`].
fn catch_error(response: Value) -> Result<Value, InvocationError> {
    if td::type_of(&response) == Some(<types::Error as td::Identifiable>::TYPE_NAME) {
        let error = td::from_value::<types::Error>(response).map_err(InvocationError::Deserialize)?;
        Err(TdError::from(error).into())
    } else {
        Ok(response)
    }
}

fn decode_response<R: RemoteCall>(response: Value) -> Result<R::Return, InvocationError> {
    td::from_value(response).map_err(InvocationError::Deserialize)
}

/// Method implementations directly related with sending requests to TDLib.
impl Client {
    /// Creates and returns a new client instance sending its requests through the
    /// given handle, which belongs to a [`crate::Dispatcher`].
    ///
    /// The [`crate::DispatcherRunner`] must be running for requests to complete.
    ///
    /// # Examples
    ///
    /// ```
    /// use tdlib_client::{Client, Dispatcher, Transport};
    ///
    /// # async fn f(transport: impl Transport + 'static) {
    /// let Dispatcher { runner, handle, updates } = Dispatcher::new(transport);
    /// let client = Client::new(handle);
    /// let dispatcher_task = tokio::spawn(runner.run());
    /// # }
    /// ```
    pub fn new(handle: DispatcherHandle) -> Self {
        Self::with_configuration(handle, Default::default())
    }

    /// Like [`Self::new`] but with a custom [`ClientConfiguration`].
    pub fn with_configuration(
        handle: DispatcherHandle,
        configuration: ClientConfiguration,
    ) -> Self {
        Self(Arc::new(ClientInner {
            handle,
            configuration,
        }))
    }

    /// Invoke a request. This directly sends the request to TDLib.
    ///
    /// Every function in the bundled schema can be used here. Using functions
    /// the linked TDLib does not know about will fail with an error.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: tdlib_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// use tdlib_types::functions;
    ///
    /// dbg!(client.invoke(&functions::TestSquareInt { x: 3 }).await?);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn invoke<R: RemoteCall>(&self, request: &R) -> Result<R::Return, InvocationError> {
        let request = td::to_request(request).map_err(InvocationError::Serialize)?;
        self.send_and_catch(request)
            .await
            .and_then(decode_response::<R>)
    }

    /// Sends an already-built JSON request and returns the response as is.
    ///
    /// The request must be an object with its `@type`. If TDLib responds with
    /// an `error`, it is returned as [`InvocationError::Td`], after the retry
    /// policy had a chance to repeat the request.
    pub async fn send_and_catch(&self, request: Value) -> Result<Value, InvocationError> {
        let mut retry_context = RetryContext {
            fail_count: NonZeroU32::MIN,
            slept_so_far: Duration::default(),
            error: InvocationError::Dropped,
        };

        loop {
            match self
                .0
                .handle
                .invoke(request.clone())
                .await
                .and_then(catch_error)
            {
                Ok(response) => break Ok(response),
                Err(e) => {
                    retry_context.error = e;
                    match self
                        .0
                        .configuration
                        .retry_policy
                        .should_retry(&retry_context)
                    {
                        ControlFlow::Continue(delay) => {
                            info!(
                                "sleeping on {} for {:?} before retrying",
                                td::type_of(&request).unwrap_or("request"),
                                delay,
                            );
                            sleep(delay).await;
                            retry_context.slept_so_far += delay;
                            retry_context.fail_count = retry_context.fail_count.saturating_add(1);
                        }
                        ControlFlow::Break(()) => break Err(retry_context.error),
                    }
                }
            }
        }
    }

    /// Runs a request synchronously, without waiting on the [`crate::DispatcherRunner`].
    ///
    /// Only the functions documented as "can be called synchronously" work this way,
    /// such as [`functions::GetTextEntities`] or [`functions::SetLogVerbosityLevel`].
    /// The retry policy is not used.
    ///
    /// [`functions::GetTextEntities`]: tdlib_types::functions::GetTextEntities
    /// [`functions::SetLogVerbosityLevel`]: tdlib_types::functions::SetLogVerbosityLevel
    pub fn execute<R: RemoteCall>(&self, request: &R) -> Result<R::Return, InvocationError> {
        let request = td::to_request(request).map_err(InvocationError::Serialize)?;
        self.0
            .handle
            .execute(&request)
            .and_then(catch_error)
            .and_then(decode_response::<R>)
    }
}
