// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Several functions to "rustify" names.
//!
//! Each parsed type can have a corresponding "rusty" name, and
//! the method for it can be found in the corresponding submodule:
//!
//! * `type_name` for use after a type definition (`type FooBar`, `enum FooBar`).
//! * `qual_name` for the qualified type name (`crate::types::FooBar`).
//! * `variant_name` for use inside `enum` variants (`Private`).
//! * `attr_name` for use as an attribute name (`foo_bar: ()`).
//! * `serde_with` for the module handling a field's JSON representation.

use tdlib_tl_parser::tl::{Definition, Parameter, Type};

/// Get the rusty type name for a certain definition.
///
/// For example, transforms `"some_OK_name"` into `"SomeOkName"`.
fn rusty_type_name(name: &str) -> String {
    enum Casing {
        Upper,
        Lower,
        Preserve,
    }

    let mut result = String::with_capacity(name.len());

    name.chars().fold(Casing::Upper, |casing, c| {
        if c == '_' {
            return Casing::Upper;
        }

        match casing {
            Casing::Upper => {
                result.push(c.to_ascii_uppercase());
                Casing::Lower
            }
            Casing::Lower => {
                result.push(c.to_ascii_lowercase());
                if c.is_ascii_uppercase() {
                    Casing::Lower
                } else {
                    Casing::Preserve
                }
            }
            Casing::Preserve => {
                result.push(c);
                if c.is_ascii_uppercase() {
                    Casing::Lower
                } else {
                    Casing::Preserve
                }
            }
        }
    });

    result
}

pub mod definitions {
    use super::*;

    pub fn type_name(def: &Definition) -> String {
        rusty_type_name(&def.name)
    }

    pub fn qual_name(def: &Definition) -> String {
        format!("crate::types::{}", type_name(def))
    }

    /// The constructor name without its class prefix, as long as what
    /// remains still reads as a name (`chatTypePrivate` → `Private`).
    pub fn variant_name(def: &Definition) -> String {
        let name = type_name(def);
        let ty_name = types::type_name(&def.ty);

        let variant = name.strip_prefix(&ty_name).unwrap_or("");
        if variant.starts_with(|c: char| c.is_ascii_uppercase()) && variant != "Self" {
            variant.to_string()
        } else {
            name
        }
    }
}

pub mod types {
    use super::*;

    fn builtin_type(ty: &Type) -> Option<&'static str> {
        Some(match ty.name.as_ref() {
            "Bool" => "bool",
            "bytes" => "String",
            "double" => "f64",
            "int32" => "i32",
            "int53" => "i64",
            "int64" => "i64",
            "string" => "String",
            "vector" => "Vec",
            _ => return None,
        })
    }

    pub fn type_name(ty: &Type) -> String {
        rusty_type_name(&ty.name)
    }

    pub fn qual_name(ty: &Type) -> String {
        let mut result = if let Some(name) = builtin_type(ty) {
            name.to_string()
        } else if ty.bare {
            format!("crate::types::{}", type_name(ty))
        } else {
            format!("crate::enums::{}", type_name(ty))
        };

        if let Some(generic_ty) = &ty.generic_arg {
            result.push('<');
            result.push_str(&qual_name(generic_ty));
            result.push('>');
        }

        result
    }
}

pub mod parameters {
    use super::*;

    /// Names which cannot be used as-is for a field.
    const KEYWORDS: [&str; 49] = [
        "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
        "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
        "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
        "return", "static", "struct", "trait", "true", "try", "type", "typeof", "union",
        "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
    ];

    pub fn qual_name(param: &Parameter) -> String {
        if param.has_nullable_items() {
            if let Some(arg) = param.ty.generic_arg.as_deref() {
                return format!("Vec<Option<{}>>", types::qual_name(arg));
            }
        }
        let ty = types::qual_name(&param.ty);
        if param.is_nullable() {
            format!("Option<{ty}>")
        } else {
            ty
        }
    }

    pub fn attr_name(param: &Parameter) -> String {
        match &param.name[..] {
            "self" => "is_self".into(),
            "crate" | "super" | "Self" => format!("{}_", param.name),
            name if KEYWORDS.contains(&name) => format!("r#{name}"),
            name => name.to_ascii_lowercase(),
        }
    }

    /// Whether the field needs an explicit `#[serde(rename)]` to keep its
    /// TDLib name (raw identifiers are understood by `serde` already).
    pub fn needs_rename(param: &Parameter) -> bool {
        let attr = attr_name(param);
        attr.strip_prefix("r#").unwrap_or(&attr) != param.name
    }

    /// The module implementing `serialize` and `deserialize` for the field,
    /// if it cannot use the default representation.
    ///
    /// TDLib encodes 64-bit integers as strings in JSON.
    pub fn serde_with(param: &Parameter) -> Option<&'static str> {
        let ty = &param.ty;
        match (ty.name.as_ref(), ty.generic_arg.as_deref()) {
            ("int64", None) => Some("crate::int64"),
            ("vector", Some(arg)) if arg.name == "int64" && arg.generic_arg.is_none() => {
                Some("crate::int64::vec")
            }
            _ => None,
        }
    }
}
