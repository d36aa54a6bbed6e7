// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library is intended to be a build-time dependency,
//! used to generate source code from parsed TDLib definitions.
//!
//! The generated code relies on `serde` for the JSON representation, and
//! expects the crate including it to provide `crate::Identifiable`,
//! `crate::RemoteCall`, `crate::int64` and `crate::errors::UnexpectedConstructor`.

#![deny(unsafe_code)]

mod enums;
mod grouper;
mod metadata;
mod rustifier;
mod structs;

use std::io::{self, Write};

use tdlib_tl_parser::tl::{Category, ClassDoc, Definition, Type};

/// Writers to use as output for each generated module.
pub struct Outputs<W: Write> {
    /// Writer to the file containing free-standing helpers, such as `class_of`.
    pub common: W,
    /// Writer to the file containing all of the concrete [`Category::Types`] constructors.
    pub types: W,
    /// Writer to the file containing all of the [`Category::Functions`] constructors.
    pub functions: W,
    /// Writer to the file containing all of the classes of [`Category::Types`].
    pub enums: W,
}

impl<W: Write> Outputs<W> {
    /// Flush all writers sequentially.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.common.flush()?;
        self.types.flush()?;
        self.functions.flush()?;
        self.enums.flush()
    }
}

/// Configuration used by [`generate_rust_code`].
pub struct Config {
    /// Whether to generate `class_of`, mapping a TDLib `@type` to the class it belongs to.
    pub gen_class_of: bool,
    /// Whether to also derive `Deserialize` on the definitions under [`Category::Functions`].
    pub deserializable_functions: bool,
    /// Whether to `impl From<types::*> for enums::*` for all generated types.
    pub impl_from_type: bool,
    /// Whether to `impl TryFrom<enums::*> for types::*` for all generated types.
    pub impl_from_enum: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gen_class_of: true,
            deserializable_functions: false,
            impl_from_type: true,
            impl_from_enum: true,
        }
    }
}

/// Don't generate types for definitions of this type,
/// since they are "core" types and treated differently.
const SPECIAL_CASED_TYPES: [&str; 8] = [
    "Bool", "Bytes", "Double", "Int32", "Int53", "Int64", "String", "Vector",
];

fn ignore_type(ty: &Type) -> bool {
    SPECIAL_CASED_TYPES.iter().any(|&x| x == ty.name)
}

/// Writes `text` as a doc comment, unless it's empty.
fn write_doc<W: Write>(file: &mut W, indent: &str, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }
    writeln!(file, "{indent}/// {text}")
}

/// Generate the Rust code into the provided outputs for the given parsed definitions.
///
/// `class_docs` is used to document the generated `enum`s, and may be empty.
pub fn generate_rust_code<W: Write>(
    outputs: &mut Outputs<W>,
    definitions: &[Definition],
    class_docs: &[ClassDoc],
    config: &Config,
) -> io::Result<()> {
    if config.gen_class_of {
        write_class_of(&mut outputs.common, definitions)?;
    }

    let metadata = metadata::Metadata::new(definitions, class_docs);
    structs::write_category_mod(
        &mut outputs.types,
        Category::Types,
        definitions,
        &metadata,
        config,
    )?;
    structs::write_category_mod(
        &mut outputs.functions,
        Category::Functions,
        definitions,
        &metadata,
        config,
    )?;
    enums::write_enums_mod(&mut outputs.enums, definitions, &metadata, config)?;

    Ok(())
}

/// Writes the mapping from every definition name to its class:
///
/// ```ignore
/// pub fn class_of(type_name: &str) -> Option<&'static str> {
///     Some(match type_name {
///         "ok" => "Ok",
///         _ => return None,
///     })
/// }
/// ```
fn write_class_of<W: Write>(file: &mut W, definitions: &[Definition]) -> io::Result<()> {
    writeln!(
        file,
        r#"/// Return the class of the definition with the given `@type`.
///
/// For functions, this is the class of the value they return.
pub fn class_of(type_name: &str) -> Option<&'static str> {{
    Some(match type_name {{"#
    )?;
    for def in grouper::sorted_definitions(definitions) {
        writeln!(file, r#"        "{}" => "{}","#, def.name, def.ty)?;
    }
    writeln!(
        file,
        r#"        _ => return None,
    }})
}}"#
    )
}
