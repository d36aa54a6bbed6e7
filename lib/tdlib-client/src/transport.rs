// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::time::Duration;

/// The channel through which JSON requests reach a TDLib instance, and through
/// which its responses and updates come back.
///
/// This mirrors the `td_json_client_*` interface, so that [`crate::TdJson`] is
/// only one of the possible implementations. Anything speaking the same
/// protocol (a TDLib process behind a pipe, a fake in tests) can be used.
///
/// Responses carry the `@extra` field of the request they belong to.
/// Everything else TDLib sends is an update.
pub trait Transport: Send + Sync {
    /// Hands a request over to TDLib. The response will be returned by a
    /// future call to [`Transport::receive`].
    fn send(&self, request: &str);

    /// Waits up to `timeout` for the next response or update.
    ///
    /// This may block the current thread, and is only ever called from one
    /// thread at a time.
    fn receive(&self, timeout: Duration) -> Option<String>;

    /// Runs a request which TDLib can answer synchronously, such as
    /// `setLogVerbosityLevel` or `getTextEntities`.
    fn execute(&self, request: &str) -> Option<String>;
}
