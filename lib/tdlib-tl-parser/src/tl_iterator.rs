// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::vec;

use crate::errors::ParseError;
use crate::tl::{Category, Definition};
use crate::utils::{parse_doc_tags, scan, RawDefinition};

const FUNCTIONS_SEP: &str = "---functions---";
const TYPES_SEP: &str = "---types---";

/// An iterator over [Type Language] definitions.
///
/// [Type Language]: https://core.telegram.org/mtproto/TL
pub struct TlIterator {
    definitions: vec::IntoIter<RawDefinition>,
    category: Category,
}

impl TlIterator {
    pub(crate) fn new(contents: &str) -> Self {
        TlIterator {
            definitions: scan(contents).definitions.into_iter(),
            category: Category::Types,
        }
    }
}

impl Iterator for TlIterator {
    type Item = Result<Definition, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let RawDefinition { doc, body } = self.definitions.next()?;

        // Get rid of the leading separator and adjust category
        let definition = if body.starts_with("---") {
            if let Some(definition) = body.strip_prefix(FUNCTIONS_SEP) {
                self.category = Category::Functions;
                definition.trim()
            } else if let Some(definition) = body.strip_prefix(TYPES_SEP) {
                self.category = Category::Types;
                definition.trim()
            } else {
                return Some(Err(ParseError::UnknownSeparator));
            }
        } else {
            body.as_str()
        };

        // Yield the fixed definition
        Some(match definition.parse::<Definition>() {
            Ok(mut d) => {
                d.category = self.category;
                d.apply_docs(
                    parse_doc_tags(&doc)
                        .iter()
                        .map(|(tag, text)| (*tag, text.as_str())),
                );
                Ok(d)
            }
            x => x,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParseError;

    #[test]
    fn parse_bad_separator() {
        let mut it = TlIterator::new("---foo---\nfoo = Foo;");
        assert_eq!(it.next(), Some(Err(ParseError::UnknownSeparator)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn parse_file() {
        let mut it = TlIterator::new(
            "
            // leading; comment
            first = T; // inline comment
            second and bad;
            third = T;
            // trailing comment
        ",
        );

        assert_eq!(it.next().unwrap().unwrap().name, "first");
        assert!(it.next().unwrap().is_err());
        assert_eq!(it.next().unwrap().unwrap().name, "third");
        assert_eq!(it.next(), None);
    }

    #[test]
    fn parse_categories() {
        let mut it = TlIterator::new(
            "
            ok = Ok;

            ---functions---

            //@description Returns the current user
            getMe = User;

            ---types---
            user id:int53 = User;
            ",
        );

        let ok = it.next().unwrap().unwrap();
        assert_eq!(ok.category, Category::Types);

        let get_me = it.next().unwrap().unwrap();
        assert_eq!(get_me.name, "getMe");
        assert_eq!(get_me.category, Category::Functions);
        assert_eq!(get_me.description, "Returns the current user");

        let user = it.next().unwrap().unwrap();
        assert_eq!(user.category, Category::Types);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn parse_skips_builtins() {
        let results = TlIterator::new(
            "
            double ? = Double;
            int53 = Int53;
            vector {t:Type} # [ t ] = Vector t;
            ",
        )
        .collect::<Vec<_>>();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], Err(ParseError::NotImplemented));
        assert_eq!(results[1].as_ref().unwrap().name, "int53");
        assert_eq!(results[2], Err(ParseError::NotImplemented));
    }
}
