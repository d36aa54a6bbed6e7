// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

pub use common::*;

mod common {
    include!(concat!(env!("OUT_DIR"), "/generated_common.rs"));
}

pub mod types {
    #![allow(rustdoc::bare_urls)]

    //! All of the concrete objects, each represented by a `struct`.
    //!
    //! All of them implement [`crate::Identifiable`], `Serialize` and `Deserialize`.
    //! Their JSON form lacks the `@type`, which is only written by the [`crate::enums`]
    //! wrapping them (or by [`crate::to_request`] for [`crate::functions`]).

    include!(concat!(env!("OUT_DIR"), "/generated_types.rs"));
}

pub mod enums {
    #![allow(clippy::large_enum_variant)]

    //! All of the classes, each represented by a `enum`.
    //!
    //! All of them implement `Serialize` and `Deserialize`, using the `@type`
    //! field of the JSON object to tell which variant it holds.

    include!(concat!(env!("OUT_DIR"), "/generated_enums.rs"));
}

pub mod functions {
    #![allow(rustdoc::bare_urls)]

    //! All of the functions, each represented by a `struct`.
    //!
    //! All of them implement [`crate::Identifiable`] and `Serialize`
    //! (and, when the feature is enabled, `Deserialize`).
    //!
    //! To find out the type that TDLib will return upon
    //! invoking one of these requests, check out the associated
    //! type in the corresponding [`crate::RemoteCall`] trait impl.

    include!(concat!(env!("OUT_DIR"), "/generated_functions.rs"));
}
