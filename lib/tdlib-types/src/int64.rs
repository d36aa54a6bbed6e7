// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! JSON representation of `int64` fields, used through `#[serde(with)]`.
//!
//! TDLib writes these as decimal strings, because not every JSON reader can
//! hold a 64-bit integer. Plain numbers are accepted on input as well.
use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;

pub fn serialize<S: Serializer>(value: &i64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_any(Int64Visitor)
}

struct Int64Visitor;

impl<'de> Visitor<'de> for Int64Visitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a 64-bit integer, or a string containing one")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
        Ok(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
        i64::try_from(value).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(value), &self))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
        value
            .parse()
            .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

/// Same as the parent module, for `vector<int64>`.
pub mod vec {
    use serde::{Deserialize, Deserializer, Serializer};

    struct Int64(i64);

    impl<'de> Deserialize<'de> for Int64 {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            super::deserialize(deserializer).map(Int64)
        }
    }

    pub fn serialize<S: Serializer>(values: &[i64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(i64::to_string))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
        let values = Vec::<Int64>::deserialize(deserializer)?;
        Ok(values.into_iter().map(|Int64(value)| value).collect())
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, with = "crate::int64")]
        id: i64,
        #[serde(default, with = "crate::int64::vec")]
        ids: Vec<i64>,
    }

    #[test]
    fn written_as_strings() {
        let holder = Holder {
            id: -9007199254740993,
            ids: vec![1, i64::MAX],
        };
        assert_eq!(
            serde_json::to_value(&holder).unwrap(),
            json!({"id": "-9007199254740993", "ids": ["1", "9223372036854775807"]})
        );
    }

    #[test]
    fn read_from_strings_or_numbers() {
        let holder: Holder = serde_json::from_value(json!({"id": 42, "ids": ["7", 8]})).unwrap();
        assert_eq!(
            holder,
            Holder {
                id: 42,
                ids: vec![7, 8]
            }
        );
    }

    #[test]
    fn missing_is_zero() {
        let holder: Holder = serde_json::from_value(json!({})).unwrap();
        assert_eq!(holder, Holder { id: 0, ids: vec![] });
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_value::<Holder>(json!({"id": "12a"})).is_err());
        assert!(serde_json::from_value::<Holder>(json!({"id": u64::MAX})).is_err());
        assert!(serde_json::from_value::<Holder>(json!({"id": true})).is_err());
    }
}
