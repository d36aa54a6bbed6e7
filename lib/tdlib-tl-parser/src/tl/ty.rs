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

/// The type of a definition or a parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Type {
    /// The name of the type.
    pub name: String,

    /// Whether this type is bare or boxed.
    ///
    /// Bare types start with a lowercase letter and name a single concrete
    /// constructor (`formattedText`), while boxed types name a class that
    /// may be satisfied by several constructors (`MessageContent`).
    pub bare: bool,

    /// If the type has a generic argument, which one is it.
    pub generic_arg: Option<Box<Type>>,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(generic_arg) = &self.generic_arg {
            write!(f, "<{generic_arg}>")?;
        }
        Ok(())
    }
}

impl FromStr for Type {
    type Err = ParamParseError;

    /// Parses a single type `type<generic_arg>`
    ///
    /// # Examples
    ///
    /// ```
    /// use tdlib_tl_parser::tl::Type;
    ///
    /// assert!("vector<int64>".parse::<Type>().is_ok());
    /// ```
    fn from_str(ty: &str) -> Result<Self, Self::Err> {
        // Parse `type<generic_arg>`
        let (ty, generic_arg) = if let Some(pos) = ty.find('<') {
            if !ty.ends_with('>') {
                return Err(ParamParseError::InvalidGeneric);
            }
            (
                &ty[..pos],
                Some(Box::new(Type::from_str(&ty[pos + 1..ty.len() - 1])?)),
            )
        } else {
            (ty, None)
        };

        if ty.is_empty() {
            return Err(ParamParseError::Empty);
        }

        if ty.contains(|c: char| c.is_whitespace() || c == '>') {
            return Err(ParamParseError::NotImplemented);
        }

        let bare = ty.starts_with(|c: char| c.is_ascii_lowercase());

        Ok(Self {
            name: ty.into(),
            bare,
            generic_arg,
        })
    }
}

impl Type {
    /// Returns `true` if this type is one of the primitives understood by
    /// TDLib's JSON interface rather than a schema object.
    pub fn is_builtin(&self) -> bool {
        matches!(
            self.name.as_ref(),
            "Bool" | "bytes" | "double" | "int32" | "int53" | "int64" | "string" | "vector"
        )
    }
}
