// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Documentation attached to an abstract class, written in the schema as
/// `//@class Name @description Text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDoc {
    /// The name of the class, such as `MessageContent`.
    pub name: String,

    /// The human-readable description of the class.
    pub description: String,
}
