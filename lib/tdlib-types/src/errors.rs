// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that can occur when converting the [`enums`] into [`types`].
//!
//! [`types`]: ../types/index.html
//! [`enums`]: ../enums/index.html
#[cfg(feature = "impl-from-enum")]
use std::error::Error;
#[cfg(feature = "impl-from-enum")]
use std::fmt;

/// The enum held a different constructor than the one requested.
///
/// Both fields are `@type` names, such as `"authorizationStateReady"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg(feature = "impl-from-enum")]
pub struct UnexpectedConstructor {
    pub expected: &'static str,
    pub found: &'static str,
}

#[cfg(feature = "impl-from-enum")]
impl Error for UnexpectedConstructor {}

#[cfg(feature = "impl-from-enum")]
impl fmt::Display for UnexpectedConstructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {} but found {}", self.expected, self.found)
    }
}
