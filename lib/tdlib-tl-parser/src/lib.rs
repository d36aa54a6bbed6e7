// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library provides a public interface to parse the [Type Language]
//! schema used by [TDLib] (`td_api.tl`).
//!
//! It exports [`parse_tl_file`] to parse entire `.tl` files and yield the
//! definitions they contain, together with the documentation comments
//! (`//@description ...`) attached to them. Class-level documentation
//! blocks (`//@class ...`) are available through [`parse_class_docs`].
//!
//! [Type Language]: https://core.telegram.org/mtproto/TL
//! [TDLib]: https://core.telegram.org/tdlib
//! [`parse_tl_file`]: fn.parse_tl_file.html
//! [`parse_class_docs`]: fn.parse_class_docs.html

#![deny(unsafe_code)]

pub mod errors;
pub mod tl;
mod tl_iterator;
mod utils;

use errors::ParseError;
use tl::{ClassDoc, Definition};
use tl_iterator::TlIterator;

/// Parses a file full of [Type Language] definitions.
///
/// Definitions that cannot be represented (such as the built-in
/// `vector {t:Type} # [ t ] = Vector t;`) are yielded as errors, so
/// callers are free to skip them.
///
/// # Examples
///
/// ```
/// use tdlib_tl_parser::parse_tl_file;
///
/// let schema = "
///     //@description A simple object @value The value
///     simple value:int32 = Simple;
/// ";
///
/// let definitions = parse_tl_file(schema).collect::<Result<Vec<_>, _>>().unwrap();
/// assert_eq!(definitions[0].name, "simple");
/// assert_eq!(definitions[0].params[0].description, "The value");
/// ```
///
/// [Type Language]: https://core.telegram.org/mtproto/TL
pub fn parse_tl_file(contents: &str) -> impl Iterator<Item = Result<Definition, ParseError>> {
    TlIterator::new(contents)
}

/// Parses the `//@class Name @description ...` blocks of a file.
///
/// # Examples
///
/// ```
/// use tdlib_tl_parser::parse_class_docs;
///
/// let schema = "//@class ChatType @description Describes the type of a chat\n";
/// let class = parse_class_docs(schema).next().unwrap();
/// assert_eq!(class.name, "ChatType");
/// assert_eq!(class.description, "Describes the type of a chat");
/// ```
pub fn parse_class_docs(contents: &str) -> impl Iterator<Item = ClassDoc> {
    utils::scan(contents).classes.into_iter()
}
