// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::collections::{HashMap, HashSet};

use tdlib_tl_parser::tl::{Category, ClassDoc, Definition, Type};

/// Additional metadata required by several parts of the generation.
pub(crate) struct Metadata<'a> {
    recursing_defs: HashSet<&'a str>,
    defs_with_type: HashMap<&'a str, Vec<&'a Definition>>,
    defs_by_name: HashMap<&'a str, &'a Definition>,
    class_docs: HashMap<&'a str, &'a str>,
}

impl<'a> Metadata<'a> {
    pub fn new(definitions: &'a [Definition], class_docs: &'a [ClassDoc]) -> Self {
        let mut metadata = Self {
            recursing_defs: HashSet::new(),
            defs_with_type: HashMap::new(),
            defs_by_name: HashMap::new(),
            class_docs: class_docs
                .iter()
                .map(|c| (c.name.as_str(), c.description.as_str()))
                .collect(),
        };

        let type_definitions = definitions
            .iter()
            .filter(|d| d.category == Category::Types)
            .collect::<Vec<_>>();

        type_definitions.iter().for_each(|&d| {
            metadata
                .defs_with_type
                .entry(d.ty.name.as_str())
                .or_default()
                .push(d);
            metadata.defs_by_name.insert(d.name.as_str(), d);
        });

        type_definitions.iter().for_each(|&d| {
            if def_self_references(d, d, &metadata, &mut HashSet::new()) {
                metadata.recursing_defs.insert(d.name.as_str());
            }
        });

        metadata
    }

    /// Returns `true` if any of the parameters of `Definition` eventually
    /// contains the same type as the `Definition` itself (meaning it recurses).
    ///
    /// Parameters behind a `vector` are not considered, since `Vec` already
    /// provides the indirection needed.
    pub fn is_recursive_def(&self, def: &Definition) -> bool {
        self.recursing_defs.contains(def.name.as_str())
    }

    pub fn defs_with_type(&self, ty: &Type) -> &[&'a Definition] {
        self.defs_with_type
            .get(ty.name.as_str())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the documentation of the class, or empty if it had none.
    pub fn class_doc(&self, ty: &Type) -> &str {
        self.class_docs.get(ty.name.as_str()).copied().unwrap_or("")
    }
}

fn def_self_references<'a>(
    root: &Definition,
    check: &'a Definition,
    metadata: &Metadata<'a>,
    visited: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(check.name.as_str());
    for param in check.params.iter() {
        let ty = &param.ty;
        if ty.generic_arg.is_some() {
            continue;
        }

        if ty.bare {
            if ty.name == root.name {
                return true;
            }
            if let Some(&def) = metadata.defs_by_name.get(ty.name.as_str()) {
                if !visited.contains(def.name.as_str())
                    && def_self_references(root, def, metadata, visited)
                {
                    return true;
                }
            }
        } else {
            if ty.name == root.ty.name {
                return true;
            }
            for &def in metadata.defs_with_type(ty) {
                if visited.contains(def.name.as_str()) {
                    continue;
                }
                if def_self_references(root, def, metadata, visited) {
                    return true;
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(definitions: &[&str]) -> Vec<Definition> {
        definitions.iter().map(|d| d.parse().unwrap()).collect()
    }

    #[test]
    fn direct_recursion() {
        let definitions = parse(&[
            "richTextPlain text:string = RichText",
            "richTextBold text:RichText = RichText",
        ]);
        let metadata = Metadata::new(&definitions, &[]);
        assert!(!metadata.is_recursive_def(&definitions[0]));
        assert!(metadata.is_recursive_def(&definitions[1]));
    }

    #[test]
    fn indirect_recursion() {
        let definitions = parse(&[
            "pageBlockDetails header:richTextWrapper = PageBlock",
            "richTextWrapper block:PageBlock = RichTextWrapper",
            "pageBlockTitle title:string = PageBlock",
        ]);
        let metadata = Metadata::new(&definitions, &[]);
        assert!(metadata.is_recursive_def(&definitions[0]));
        assert!(metadata.is_recursive_def(&definitions[1]));
        assert!(!metadata.is_recursive_def(&definitions[2]));
    }

    #[test]
    fn vectors_break_recursion() {
        let definitions = parse(&["richTexts texts:vector<RichText> = RichText"]);
        let metadata = Metadata::new(&definitions, &[]);
        assert!(!metadata.is_recursive_def(&definitions[0]));
    }

    #[test]
    fn defs_grouped_by_class() {
        let definitions = parse(&[
            "chatTypePrivate user_id:int53 = ChatType",
            "chatTypeBasicGroup basic_group_id:int53 = ChatType",
            "ok = Ok",
        ]);
        let class_docs = vec![ClassDoc {
            name: "ChatType".into(),
            description: "Describes the type of a chat".into(),
        }];
        let metadata = Metadata::new(&definitions, &class_docs);

        assert_eq!(metadata.defs_with_type(&definitions[0].ty).len(), 2);
        assert_eq!(metadata.defs_with_type(&definitions[2].ty).len(), 1);
        assert_eq!(
            metadata.class_doc(&definitions[0].ty),
            "Describes the type of a chat"
        );
        assert_eq!(metadata.class_doc(&definitions[2].ty), "");
    }
}
