// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library contains the Rust definitions for TDLib's JSON API in the
//! form of `struct` (the [`types`] and [`functions`]) and `enum` (the
//! [`enums`], one per class, dispatching on the `@type` of the object).
//!
//! The code is generated at build time from `tl/td_api.tl`, which may be
//! replaced with the schema of whichever TDLib version is linked.
//!
//! # Features
//!
//! The default feature set includes:
//!
//! * `impl-from-type`: implements `From<Type> for Enum`.
//! * `impl-from-enum`: implements `TryFrom<Enum> for Type` (or `From`, if
//!   the class only has one constructor).
//!
//! The available features are:
//!
//! * `deserializable-functions`: implements `Deserialize` for [`functions`].
//!   This might be of interest for code sitting between an application and
//!   TDLib, which needs to read the requests, but is otherwise not required.
//!
//! [`types`]: types/index.html
//! [`functions`]: functions/index.html
//! [`enums`]: enums/index.html

#![deny(unsafe_code)]

pub mod errors;
mod generated;
pub mod int64;

use serde::de::DeserializeOwned;
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::Value;

pub use generated::{class_of, enums, functions, types};

/// The key holding the name of the definition in every TDLib object.
pub const TYPE_KEY: &str = "@type";

/// Anything implementing this trait is identifiable by both ends (client-TDLib)
/// when performing requests and transmission of objects.
pub trait Identifiable {
    /// The `@type` of the definition, such as `"formattedText"`.
    const TYPE_NAME: &'static str;
}

/// Structures implementing this trait indicate that they are suitable for
/// use to perform requests, and know what the type of the response will be.
pub trait RemoteCall: Identifiable + Serialize {
    /// The type of the "return" value coming from TDLib.
    type Return: DeserializeOwned;
}

/// Builds the JSON object TDLib expects for the request, that is, its
/// fields along with the `@type` naming the function.
///
/// # Examples
///
/// ```
/// use tdlib_types::{functions, to_request};
///
/// let request = to_request(&functions::GetChat { chat_id: 42 }).unwrap();
/// assert_eq!(request["@type"], "getChat");
/// assert_eq!(request["chat_id"], 42);
/// ```
pub fn to_request<R: RemoteCall>(request: &R) -> Result<Value, serde_json::Error> {
    match serde_json::to_value(request)? {
        Value::Object(mut map) => {
            map.insert(TYPE_KEY.into(), Value::String(R::TYPE_NAME.into()));
            Ok(Value::Object(map))
        }
        _ => Err(serde_json::Error::custom(format!(
            "{} did not serialize into an object",
            R::TYPE_NAME
        ))),
    }
}

/// Decodes a JSON object received from TDLib into any of the generated
/// [`types`] or [`enums`].
///
/// Decoding into an enum uses the `@type` to pick the variant, and fails if
/// it names a constructor the class does not have.
///
/// [`types`]: types/index.html
/// [`enums`]: enums/index.html
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(value)
}

/// Returns the `@type` of the JSON object, if it has any.
pub fn type_of(value: &Value) -> Option<&str> {
    value.get(TYPE_KEY).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn requests_carry_their_type() {
        let request = to_request(&functions::Close {}).unwrap();
        assert_eq!(request, json!({"@type": "close"}));
    }

    #[test]
    fn type_of_objects() {
        assert_eq!(type_of(&json!({"@type": "ok"})), Some("ok"));
        assert_eq!(type_of(&json!({"@type": 1})), None);
        assert_eq!(type_of(&json!([])), None);
    }
}
