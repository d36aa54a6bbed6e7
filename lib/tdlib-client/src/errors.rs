// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that may occur when invoking requests.

use std::fmt;

use tdlib_types::types;

const RETRY_AFTER_PREFIX: &str = "Too Many Requests: retry after ";

/// The error reported by TDLib when a request cannot be fulfilled.
///
/// These are returned when TDLib responds to a request with an object whose
/// `@type` is `"error"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TdError {
    /// Error code, similar to [HTTP response status codes](https://developer.mozilla.org/en-US/docs/Web/HTTP/Reference/Status).
    ///
    /// Codes below 0 come from TDLib itself rather than from Telegram's servers.
    pub code: i32,

    /// The error message, such as `PHONE_CODE_INVALID`.
    pub message: String,
}

impl std::error::Error for TdError {}

impl fmt::Display for TdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "td error {}: {}", self.code, self.message)
    }
}

impl From<types::Error> for TdError {
    fn from(error: types::Error) -> Self {
        Self {
            code: error.code,
            message: error.message,
        }
    }
}

impl TdError {
    /// Matches on the message of the error (case-sensitive).
    ///
    /// Useful in `match` arm guards. A single trailing or leading asterisk (`'*'`) is allowed,
    /// and will instead check if the error message starts (or ends with) the input parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// # let request_result = Result::<(), _>::Err(tdlib_client::TdError {
    /// #     code: 400, message: "PHONE_CODE_INVALID".to_string() });
    /// #
    /// match request_result {
    ///     Err(td_err) if td_err.is("SESSION_PASSWORD_NEEDED") => panic!(),
    ///     Err(td_err) if td_err.is("PHONE_CODE_*") => {},
    ///     _ => panic!()
    /// }
    /// ```
    pub fn is(&self, message: &str) -> bool {
        if let Some(message) = message.strip_suffix('*') {
            self.message.starts_with(message)
        } else if let Some(message) = message.strip_prefix('*') {
            self.message.ends_with(message)
        } else {
            self.message == message
        }
    }

    /// The amount of seconds to wait before repeating the request, if this is a
    /// flood error (`"Too Many Requests: retry after N"`).
    ///
    /// ```
    /// let td_error = tdlib_client::TdError {
    ///     code: 429, message: "Too Many Requests: retry after 31".into() };
    /// assert_eq!(td_error.retry_after(), Some(31));
    /// ```
    pub fn retry_after(&self) -> Option<u32> {
        self.message
            .strip_prefix(RETRY_AFTER_PREFIX)
            .and_then(|seconds| seconds.trim().parse().ok())
    }
}

/// This error occurs when a request was unsuccessful.
#[derive(Debug)]
pub enum InvocationError {
    /// TDLib answered the request with an error. Some of these are temporary,
    /// and the request may succeed if retried after some time.
    Td(TdError),

    /// The request could not be converted into a JSON object.
    Serialize(serde_json::Error),

    /// The response did not have the shape of the type the request returns.
    ///
    /// This occurs when the bundled schema does not match the version of TDLib in use.
    Deserialize(serde_json::Error),

    /// The request was cancelled or dropped, and the results won't arrive.
    /// This may mean that the [`crate::DispatcherRunner`] is no longer running.
    Dropped,
}

impl std::error::Error for InvocationError {}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Td(err) => write!(f, "request error: {err}"),
            Self::Serialize(err) => write!(f, "request error, bad request: {err}"),
            Self::Deserialize(err) => write!(f, "request error, bad response: {err}"),
            Self::Dropped => write!(f, "request error: dropped (cancelled)"),
        }
    }
}

impl From<TdError> for InvocationError {
    fn from(error: TdError) -> Self {
        Self::Td(error)
    }
}

impl InvocationError {
    /// Matches on the message of the TDLib error (case-sensitive).
    ///
    /// Useful in `match` arm guards. A single trailing or leading asterisk (`'*'`) is allowed,
    /// and will instead check if the error message starts (or ends with) the input parameter.
    ///
    /// If the error is not a TDLib error, returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// # let request_result = Result::<(), _>::Err(tdlib_client::InvocationError::Td(
    /// #     tdlib_client::TdError { code: 400, message: "PHONE_CODE_INVALID".to_string() }));
    /// #
    /// match request_result {
    ///     Err(err) if err.is("SESSION_PASSWORD_NEEDED") => panic!(),
    ///     Err(err) if err.is("PHONE_CODE_*") => {},
    ///     _ => panic!()
    /// }
    /// ```
    #[inline]
    pub fn is(&self, message: &str) -> bool {
        match self {
            Self::Td(td) => td.is(message),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(code: i32, message: &str) -> TdError {
        TdError::from(types::Error {
            code,
            message: message.into(),
        })
    }

    #[test]
    fn check_error_matching() {
        let err = error(400, "PHONE_CODE_INVALID");
        assert!(err.is("PHONE_CODE_INVALID"));
        assert!(err.is("PHONE_CODE_*"));
        assert!(err.is("*_INVALID"));
        assert!(!err.is("PHONE_CODE"));
        assert!(!err.is("*CODE"));
    }

    #[test]
    fn check_retry_after() {
        assert_eq!(
            error(429, "Too Many Requests: retry after 7").retry_after(),
            Some(7)
        );
        assert_eq!(error(429, "Too Many Requests").retry_after(), None);
        assert_eq!(error(400, "retry after 7").retry_after(), None);
    }

    #[test]
    fn check_invocation_error_display() {
        let err = InvocationError::from(error(404, "Not Found"));
        assert_eq!(err.to_string(), "request error: td error 404: Not Found");
        assert!(err.is("Not *"));
        assert!(!InvocationError::Dropped.is("Not Found"));
    }
}
