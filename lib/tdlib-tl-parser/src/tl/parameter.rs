// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::str::FromStr;

use crate::errors::ParamParseError;
use crate::tl::Type;

/// A single parameter, with a name and a type.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    /// The name of the parameter.
    pub name: String,

    /// The type of the parameter.
    pub ty: Type,

    /// The documentation of the parameter, or empty if it had none.
    pub description: String,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.ty)
    }
}

impl FromStr for Parameter {
    type Err = ParamParseError;

    /// Parses a parameter.
    ///
    /// # Examples
    ///
    /// ```
    /// use tdlib_tl_parser::tl::Parameter;
    ///
    /// assert!("chat_ids:vector<int53>".parse::<Parameter>().is_ok());
    /// ```
    fn from_str(param: &str) -> Result<Self, Self::Err> {
        // Parse `name:type`
        let (name, ty) = match param.split_once(':') {
            Some((name, ty)) => (name, ty),
            None => return Err(ParamParseError::NotImplemented),
        };

        if name.is_empty() || ty.is_empty() {
            return Err(ParamParseError::Empty);
        }

        // Type definitions such as `{t:Type}` are not real parameters
        if name.starts_with('{') {
            return Err(ParamParseError::NotImplemented);
        }

        Ok(Parameter {
            name: name.into(),
            ty: ty.parse()?,
            description: String::new(),
        })
    }
}

impl Parameter {
    /// Whether the documentation marks this parameter as optional.
    ///
    /// TDLib documents optional objects with "may be null" (for results)
    /// or "pass null" (for arguments). Primitives are never optional, they
    /// fall back to their zero value instead.
    pub fn is_nullable(&self) -> bool {
        !self.ty.is_builtin() && mentions_null(&self.description)
    }

    /// Whether the documentation marks the elements of this vector as optional.
    ///
    /// TDLib leaves a `null` in place of the objects it could not find, such
    /// as the messages which were deleted in a list of messages.
    pub fn has_nullable_items(&self) -> bool {
        match self.ty.generic_arg.as_deref() {
            Some(arg) if self.ty.name == "vector" => {
                !arg.is_builtin() && mentions_null(&self.description)
            }
            _ => false,
        }
    }
}

fn mentions_null(description: &str) -> bool {
    let description = description.to_ascii_lowercase();
    description.contains("may be null") || description.contains("pass null")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_param() {
        assert_eq!(Parameter::from_str(":noname"), Err(ParamParseError::Empty));
        assert_eq!(Parameter::from_str("notype:"), Err(ParamParseError::Empty));
        assert_eq!(Parameter::from_str(":"), Err(ParamParseError::Empty));
    }

    #[test]
    fn parse_unknown_param() {
        assert_eq!(
            Parameter::from_str(""),
            Err(ParamParseError::NotImplemented)
        );
        assert_eq!(
            Parameter::from_str("no colon"),
            Err(ParamParseError::NotImplemented)
        );
        assert_eq!(
            Parameter::from_str("?"),
            Err(ParamParseError::NotImplemented)
        );
    }

    #[test]
    fn parse_type_def_param() {
        assert_eq!(
            Parameter::from_str("{t:Type}"),
            Err(ParamParseError::NotImplemented)
        );
    }

    #[test]
    fn parse_bad_generics() {
        assert_eq!(
            Parameter::from_str("foo:vector<bar"),
            Err(ParamParseError::InvalidGeneric)
        );
    }

    #[test]
    fn parse_valid_param() {
        assert_eq!(
            Parameter::from_str("chat_id:int53"),
            Ok(Parameter {
                name: "chat_id".into(),
                ty: Type {
                    name: "int53".into(),
                    bare: true,
                    generic_arg: None,
                },
                description: String::new(),
            })
        );
        assert_eq!(
            Parameter::from_str("content:InputMessageContent"),
            Ok(Parameter {
                name: "content".into(),
                ty: Type {
                    name: "InputMessageContent".into(),
                    bare: false,
                    generic_arg: None,
                },
                description: String::new(),
            })
        );
        assert_eq!(
            Parameter::from_str("sizes:vector<photoSize>"),
            Ok(Parameter {
                name: "sizes".into(),
                ty: Type {
                    name: "vector".into(),
                    bare: true,
                    generic_arg: Some(Box::new("photoSize".parse().unwrap())),
                },
                description: String::new(),
            })
        );
    }

    #[test]
    fn check_nullable() {
        let mut param = Parameter::from_str("photo:chatPhotoInfo").unwrap();
        assert!(!param.is_nullable());

        param.description = "Chat photo; may be null".into();
        assert!(param.is_nullable());

        param.description = "The new photo; pass null to remove it".into();
        assert!(param.is_nullable());

        let mut param = Parameter::from_str("title:string").unwrap();
        param.description = "New title; may be null".into();
        assert!(!param.is_nullable());
    }

    #[test]
    fn check_nullable_items() {
        let mut param = Parameter::from_str("messages:vector<message>").unwrap();
        assert!(!param.has_nullable_items());

        param.description = "List of messages; messages may be null".into();
        assert!(param.has_nullable_items());
        assert!(!param.is_nullable());

        let mut param = Parameter::from_str("chat_ids:vector<int53>").unwrap();
        param.description = "Chat identifiers; may be null".into();
        assert!(!param.has_nullable_items());
    }
}
