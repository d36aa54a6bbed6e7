// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseError;
use crate::tl::{Category, Parameter, Type};

/// A [Type Language] definition.
///
/// [Type Language]: https://core.telegram.org/mtproto/TL
#[derive(Clone, Debug, PartialEq)]
pub struct Definition {
    /// The name of this definition. Also known as "predicate" or "method".
    ///
    /// This is the value TDLib uses in the `@type` field of its objects.
    pub name: String,

    /// The documentation of this definition, or empty if it had none.
    pub description: String,

    /// A possibly-empty list of parameters this definition has.
    pub params: Vec<Parameter>,

    /// The type to which this definition belongs to.
    pub ty: Type,

    /// The category to which this definition belongs to.
    pub category: Category,
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for param in self.params.iter() {
            write!(f, " {param}")?;
        }
        write!(f, " = {}", self.ty)
    }
}

impl FromStr for Definition {
    type Err = ParseError;

    /// Parses a [Type Language] definition.
    ///
    /// # Examples
    ///
    /// ```
    /// use tdlib_tl_parser::tl::Definition;
    ///
    /// assert!("sendMessage chat_id:int53 text:string = Message".parse::<Definition>().is_ok());
    /// ```
    ///
    /// [Type Language]: https://core.telegram.org/mtproto/TL
    fn from_str(definition: &str) -> Result<Self, Self::Err> {
        if definition.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        // Parse `(left = ty)`
        let (left, ty) = match definition.split_once('=') {
            Some((left, ty)) => (left.trim(), ty.trim()),
            None => return Err(ParseError::MissingType),
        };

        let ty = match Type::from_str(ty) {
            Ok(ty) => ty,
            Err(crate::errors::ParamParseError::NotImplemented) => {
                return Err(ParseError::NotImplemented);
            }
            Err(_) => return Err(ParseError::MissingType),
        };

        // Parse `name middle`
        let (name, middle) = match left.split_once(char::is_whitespace) {
            Some((name, middle)) => (name, middle.trim()),
            None => (left, ""),
        };

        if name.is_empty() {
            return Err(ParseError::MissingName);
        }

        let params = middle
            .split_whitespace()
            .map(|param| {
                Parameter::from_str(param).map_err(|e| match e {
                    crate::errors::ParamParseError::NotImplemented => ParseError::NotImplemented,
                    e => ParseError::InvalidParam(e),
                })
            })
            .collect::<Result<_, _>>()?;

        Ok(Definition {
            name: name.into(),
            description: String::new(),
            params,
            ty,
            category: Category::Types,
        })
    }
}

impl Definition {
    /// Attaches the documentation tags (as `(tag, text)` pairs) found right
    /// before this definition in the schema.
    ///
    /// `description` documents the definition itself, `param_description`
    /// documents a parameter named `description`, and every other tag
    /// documents the parameter with the same name. Unknown tags are ignored.
    pub fn apply_docs<'a>(&mut self, tags: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (tag, text) in tags {
            if tag == "description" {
                self.description = text.into();
                continue;
            }
            let name = if tag == "param_description" {
                "description"
            } else {
                tag
            };
            if let Some(param) = self.params.iter_mut().find(|p| p.name == name) {
                param.description = text.into();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParamParseError;

    #[test]
    fn parse_empty_def() {
        assert_eq!(Definition::from_str(""), Err(ParseError::Empty));
        assert_eq!(Definition::from_str("  \n "), Err(ParseError::Empty));
    }

    #[test]
    fn parse_no_name() {
        assert_eq!(Definition::from_str(" = foo"), Err(ParseError::MissingName));
    }

    #[test]
    fn parse_no_type() {
        assert_eq!(Definition::from_str("foo"), Err(ParseError::MissingType));
        assert_eq!(Definition::from_str("foo = "), Err(ParseError::MissingType));
    }

    #[test]
    fn parse_unimplemented() {
        assert_eq!(
            Definition::from_str("double ? = Double"),
            Err(ParseError::NotImplemented)
        );
        assert_eq!(
            Definition::from_str("vector {t:Type} # [ t ] = Vector t"),
            Err(ParseError::NotImplemented)
        );
    }

    #[test]
    fn parse_bad_param() {
        assert_eq!(
            Definition::from_str("foo bar:vector<int32 = Foo"),
            Err(ParseError::InvalidParam(ParamParseError::InvalidGeneric))
        );
    }

    #[test]
    fn parse_valid_definition() {
        let def = Definition::from_str("ok = Ok").unwrap();
        assert_eq!(def.name, "ok");
        assert_eq!(def.params.len(), 0);
        assert_eq!(
            def.ty,
            Type {
                name: "Ok".into(),
                bare: false,
                generic_arg: None,
            }
        );

        let def = Definition::from_str("chats total_count:int32 chat_ids:vector<int53> = Chats")
            .unwrap();
        assert_eq!(def.name, "chats");
        assert_eq!(def.params.len(), 2);
        assert_eq!(def.params[1].name, "chat_ids");
        assert_eq!(def.category, Category::Types);
    }

    #[test]
    fn parse_multiline_definition() {
        let def = "
            user
              id:int53
              first_name:string
            = User
            ";

        let def = Definition::from_str(def).unwrap();
        assert_eq!(def.name, "user");
        assert_eq!(def.params.len(), 2);
    }

    #[test]
    fn apply_docs_to_params() {
        let mut def = Definition::from_str(
            "chatInviteLink invite_link:string description:string = ChatInviteLink",
        )
        .unwrap();

        def.apply_docs([
            ("description", "Contains a chat invite link"),
            ("invite_link", "Chat invite link"),
            ("param_description", "Link description"),
            ("unknown", "Ignored"),
        ]);

        assert_eq!(def.description, "Contains a chat invite link");
        assert_eq!(def.params[0].description, "Chat invite link");
        assert_eq!(def.params[1].description, "Link description");
    }

    #[test]
    fn test_to_string() {
        let def = "sendMessage chat_id:int53 entities:vector<textEntity> = Message";
        assert_eq!(Definition::from_str(def).unwrap().to_string(), def);
    }
}
