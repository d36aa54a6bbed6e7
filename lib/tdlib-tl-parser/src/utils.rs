// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This module contains several free-standing utility functions.

use crate::tl::ClassDoc;

const DOC_START: &str = "//@";
const DOC_CONTINUATION: &str = "//-";
const CLASS_TAG: &str = "class";

/// A definition as found in the file, still unparsed, along with the
/// documentation comment that preceded it.
#[derive(Debug, PartialEq)]
pub(crate) struct RawDefinition {
    pub doc: String,
    pub body: String,
}

/// The result of splitting a file into its definitions and class docs.
#[derive(Debug, Default)]
pub(crate) struct Scan {
    pub definitions: Vec<RawDefinition>,
    pub classes: Vec<ClassDoc>,
}

/// Splits the contents of a `.tl` file on the definition separator `;`,
/// removing single-line comments but keeping documentation comments around.
///
/// Documentation lines (`//@`, continued by `//-`) accumulate until the next
/// definition completes. Lines starting a `@class` block are set aside.
pub(crate) fn scan(contents: &str) -> Scan {
    let mut scan = Scan::default();
    let mut doc = String::new();
    let mut class_doc = String::new();
    let mut in_class = false;
    let mut body = String::new();

    for line in contents.lines() {
        let trimmed = line.trim();

        if let Some(text) = trimmed.strip_prefix(DOC_START) {
            let starts_class = text.starts_with(CLASS_TAG)
                && text[CLASS_TAG.len()..].starts_with(char::is_whitespace);
            if starts_class {
                flush_class(&mut class_doc, &mut scan);
                in_class = true;
            } else if in_class {
                flush_class(&mut class_doc, &mut scan);
                in_class = false;
            }
            let target = if in_class { &mut class_doc } else { &mut doc };
            target.push_str(" @");
            target.push_str(text);
            continue;
        }

        if let Some(text) = trimmed.strip_prefix(DOC_CONTINUATION) {
            let target = if in_class { &mut class_doc } else { &mut doc };
            target.push(' ');
            target.push_str(text);
            continue;
        }

        let code = match trimmed.find("//") {
            Some(pos) => &trimmed[..pos],
            None => trimmed,
        };
        if code.is_empty() && trimmed.starts_with("//") {
            continue;
        }

        // Any code (or a blank line) ends a class documentation block.
        if in_class {
            flush_class(&mut class_doc, &mut scan);
            in_class = false;
        }

        let mut rest = code;
        while let Some(pos) = rest.find(';') {
            body.push_str(&rest[..pos]);
            let definition = body.trim();
            if !definition.is_empty() {
                scan.definitions.push(RawDefinition {
                    doc: std::mem::take(&mut doc),
                    body: definition.to_string(),
                });
            }
            body.clear();
            rest = &rest[pos + 1..];
        }
        body.push_str(rest);
        body.push('\n');
    }

    flush_class(&mut class_doc, &mut scan);

    let trailing = body.trim();
    if !trailing.is_empty() {
        scan.definitions.push(RawDefinition {
            doc,
            body: trailing.to_string(),
        });
    }

    scan
}

/// Moves a finished `@class` documentation block into the scan results.
fn flush_class(class_doc: &mut String, scan: &mut Scan) {
    if class_doc.is_empty() {
        return;
    }
    let tags = parse_doc_tags(class_doc);
    if let Some((_, name)) = tags.iter().find(|(tag, _)| *tag == CLASS_TAG) {
        scan.classes.push(ClassDoc {
            name: name.to_string(),
            description: tags
                .iter()
                .find(|(tag, _)| *tag == "description")
                .map(|(_, text)| text.to_string())
                .unwrap_or_default(),
        });
    }
    class_doc.clear();
}

/// Splits a documentation comment such as `@description Text @id Identifier`
/// into its `(tag, text)` pairs. Whitespace inside the text is collapsed.
pub(crate) fn parse_doc_tags(doc: &str) -> Vec<(&str, String)> {
    let mut tags: Vec<(&str, String)> = Vec::new();
    for word in doc.split_whitespace() {
        match word.strip_prefix('@') {
            Some(tag) if !tag.is_empty() => tags.push((tag, String::new())),
            _ => {
                if let Some((_, text)) = tags.last_mut() {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(word);
                }
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_ignores_plain_comments() {
        let scan = scan("// hello; world\nfoo = Foo; // trailing; comment\n");
        assert_eq!(
            scan.definitions,
            vec![RawDefinition {
                doc: String::new(),
                body: "foo = Foo".into(),
            }]
        );
    }

    #[test]
    fn scan_many_per_line() {
        let scan = scan("a = A; b = B;\nc\n= C;");
        let bodies = scan
            .definitions
            .iter()
            .map(|d| d.body.as_str())
            .collect::<Vec<_>>();
        assert_eq!(bodies, vec!["a = A", "b = B", "c\n= C"]);
    }

    #[test]
    fn scan_attaches_docs() {
        let scan = scan(
            "
            //@description First @x The x
            //-continued
            first x:int32 = T;

            second = T;
            ",
        );
        assert_eq!(scan.definitions.len(), 2);
        assert_eq!(
            parse_doc_tags(&scan.definitions[0].doc),
            vec![
                ("description", "First".to_string()),
                ("x", "The x continued".to_string())
            ]
        );
        assert!(scan.definitions[1].doc.is_empty());
    }

    #[test]
    fn scan_sets_class_docs_aside() {
        let scan = scan(
            "
            //@class ChatType @description Describes the type of a chat
            //-in detail

            //@description An ordinary chat
            chatTypePrivate user_id:int53 = ChatType;
            ",
        );
        assert_eq!(
            scan.classes,
            vec![ClassDoc {
                name: "ChatType".into(),
                description: "Describes the type of a chat in detail".into(),
            }]
        );
        assert_eq!(
            parse_doc_tags(&scan.definitions[0].doc),
            vec![("description", "An ordinary chat".to_string())]
        );
    }

    #[test]
    fn scan_class_survives_plain_comments() {
        let scan = scan(
            "
            //@class ChatType @description Describes the type
            // plain note
            //-of a chat

            //@description An ordinary chat
            chatTypePrivate user_id:int53 = ChatType;
            ",
        );
        assert_eq!(scan.classes[0].description, "Describes the type of a chat");
        assert_eq!(
            parse_doc_tags(&scan.definitions[0].doc),
            vec![("description", "An ordinary chat".to_string())]
        );
    }

    #[test]
    fn scan_class_followed_by_docs() {
        let scan = scan(
            "
            //@class Ok @description Generic class
            //@description An object of this type is returned on success
            ok = Ok;
            ",
        );
        assert_eq!(scan.classes.len(), 1);
        assert_eq!(
            parse_doc_tags(&scan.definitions[0].doc),
            vec![(
                "description",
                "An object of this type is returned on success".to_string()
            )]
        );
    }

    #[test]
    fn doc_tags_without_tag_are_dropped() {
        assert_eq!(
            parse_doc_tags("loose words @a b  c"),
            vec![("a", "b c".to_string())]
        );
        assert!(parse_doc_tags("").is_empty());
    }
}
