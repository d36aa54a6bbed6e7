// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors that can occur during the parsing of [Type Language] definitions.
//!
//! [Type Language]: https://core.telegram.org/mtproto/TL
use std::error::Error;
use std::fmt;

/// The error type for the parsing operation of [`Definition`]s.
///
/// [`Definition`]: tl/struct.Definition.html
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
    /// The definition is empty.
    Empty,

    /// One of the parameters from this definition was invalid.
    InvalidParam(ParamParseError),

    /// The name information is missing from the definition.
    MissingName,

    /// The type information is missing from the definition.
    MissingType,

    /// The parser does not know how to parse the definition.
    ///
    /// Built-in definitions fall in this category:
    ///
    /// ```text
    /// double ? = Double;
    /// vector {t:Type} # [ t ] = Vector t;
    /// ```
    NotImplemented,

    /// The file contained an unknown separator (such as `---foo---`)
    UnknownSeparator,
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty definition"),
            Self::InvalidParam(err) => write!(f, "invalid parameter: {err}"),
            Self::MissingName => write!(f, "definition is missing its name"),
            Self::MissingType => write!(f, "definition is missing its type"),
            Self::NotImplemented => write!(f, "definition cannot be parsed"),
            Self::UnknownSeparator => write!(f, "unknown category separator"),
        }
    }
}

/// The error type for the parsing operation of [`Parameter`]s.
///
/// [`Parameter`]: tl/struct.Parameter.html
#[derive(Clone, Debug, PartialEq)]
pub enum ParamParseError {
    /// The parameter was empty.
    Empty,

    /// The generic argument was invalid.
    InvalidGeneric,

    /// The parser does not know how to parse the parameter.
    NotImplemented,
}

impl Error for ParamParseError {}

impl fmt::Display for ParamParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty parameter"),
            Self::InvalidGeneric => write!(f, "invalid generic argument"),
            Self::NotImplemented => write!(f, "parameter cannot be parsed"),
        }
    }
}
