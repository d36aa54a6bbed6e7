// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Code to generate Rust's `struct`'s from TL definitions.

use std::io::{self, Write};

use tdlib_tl_parser::tl::{Category, Definition, Parameter};

use crate::metadata::Metadata;
use crate::rustifier;
use crate::{grouper, write_doc, Config};

/// The `#[serde(...)]` options a field needs, if any.
fn serde_options(param: &Parameter) -> Vec<String> {
    let mut options = Vec::new();
    if rustifier::parameters::needs_rename(param) {
        options.push(format!("rename = \"{}\"", param.name));
    }
    if param.is_nullable() {
        options.push("default".to_string());
        options.push("skip_serializing_if = \"Option::is_none\"".to_string());
    } else if param.ty.is_builtin() {
        // TDLib leaves out fields with their zero value.
        options.push("default".to_string());
    }
    if let Some(with) = rustifier::parameters::serde_with(param) {
        options.push(format!("with = \"{with}\""));
    }
    options
}

/// Defines the `struct` corresponding to the definition:
///
/// ```ignore
/// #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
/// pub struct Name {
///     #[serde(default)]
///     pub field: Type,
/// }
/// ```
fn write_struct<W: Write>(
    file: &mut W,
    indent: &str,
    def: &Definition,
    config: &Config,
) -> io::Result<()> {
    write_doc(file, indent, &def.description)?;
    let deserialize = def.category == Category::Types || config.deserializable_functions;
    writeln!(
        file,
        "{}#[derive(Clone, Debug, PartialEq, ::serde::Serialize{})]",
        indent,
        if deserialize {
            ", ::serde::Deserialize"
        } else {
            ""
        }
    )?;

    writeln!(
        file,
        "{}pub struct {} {{",
        indent,
        rustifier::definitions::type_name(def)
    )?;
    for param in def.params.iter() {
        write_doc(file, &format!("{indent}    "), &param.description)?;
        let options = serde_options(param);
        if !options.is_empty() {
            writeln!(file, "{}    #[serde({})]", indent, options.join(", "))?;
        }
        writeln!(
            file,
            "{}    pub {}: {},",
            indent,
            rustifier::parameters::attr_name(param),
            rustifier::parameters::qual_name(param),
        )?;
    }
    writeln!(file, "{}}}", indent)?;
    Ok(())
}

/// Defines the `impl Identifiable` corresponding to the definition:
///
/// ```ignore
/// impl crate::Identifiable for Name {
///     const TYPE_NAME: &'static str = "name";
/// }
/// ```
fn write_identifiable<W: Write>(file: &mut W, indent: &str, def: &Definition) -> io::Result<()> {
    writeln!(
        file,
        "{}impl crate::Identifiable for {} {{",
        indent,
        rustifier::definitions::type_name(def)
    )?;
    writeln!(
        file,
        "{}    const TYPE_NAME: &'static str = \"{}\";",
        indent, def.name
    )?;
    writeln!(file, "{}}}", indent)?;
    Ok(())
}

/// Defines the `impl RemoteCall` corresponding to the definition:
///
/// ```ignore
/// impl crate::RemoteCall for Name {
///     type Return = crate::enums::Name;
/// }
/// ```
fn write_rpc<W: Write>(file: &mut W, indent: &str, def: &Definition) -> io::Result<()> {
    writeln!(
        file,
        "{}impl crate::RemoteCall for {} {{",
        indent,
        rustifier::definitions::type_name(def)
    )?;
    writeln!(
        file,
        "{}    type Return = {};",
        indent,
        rustifier::types::qual_name(&def.ty)
    )?;
    writeln!(file, "{}}}", indent)?;
    Ok(())
}

/// Defines the `impl TryFrom` corresponding to the definition:
///
/// ```ignore
/// impl ::std::convert::TryFrom<crate::enums::Enum> for Name {
///     type Error = crate::errors::UnexpectedConstructor;
/// }
/// ```
///
/// Classes with a single constructor get an infallible `From` instead.
fn write_impl_from<W: Write>(
    file: &mut W,
    indent: &str,
    def: &Definition,
    metadata: &Metadata,
) -> io::Result<()> {
    let infallible = metadata.defs_with_type(&def.ty).len() == 1;
    let cls = rustifier::types::qual_name(&def.ty);
    let name = rustifier::definitions::type_name(def);

    writeln!(
        file,
        "{}impl ::std::convert::{}From<{}> for {} {{",
        indent,
        if infallible { "" } else { "Try" },
        cls,
        name,
    )?;
    if !infallible {
        writeln!(file, "{}    type Error = crate::errors::UnexpectedConstructor;", indent)?;
    }
    writeln!(
        file,
        "{indent}    fn {try_}from(x: {cls}) -> {result}Self{error} {{",
        try_ = if infallible { "" } else { "try_" },
        result = if infallible {
            ""
        } else {
            "::std::result::Result<"
        },
        error = if infallible { "" } else { ", Self::Error>" },
    )?;
    writeln!(file, "{}        match x {{", indent)?;

    let variant = rustifier::definitions::variant_name(def);
    let value = if def.params.is_empty() {
        "Self {}"
    } else if metadata.is_recursive_def(def) {
        "*x"
    } else {
        "x"
    };
    writeln!(
        file,
        "{indent}            {cls}::{variant}{binding} => {ok}{value}{paren},",
        binding = if def.params.is_empty() { "" } else { "(x)" },
        ok = if infallible {
            ""
        } else {
            "::std::result::Result::Ok("
        },
        paren = if infallible { "" } else { ")" },
    )?;
    if !infallible {
        writeln!(
            file,
            "{indent}            other => {{
{indent}                ::std::result::Result::Err(crate::errors::UnexpectedConstructor {{
{indent}                    expected: <Self as crate::Identifiable>::TYPE_NAME,
{indent}                    found: other.constructor_name(),
{indent}                }})
{indent}            }}",
        )?;
    }
    writeln!(file, "{}        }}", indent)?;
    writeln!(file, "{}    }}", indent)?;
    writeln!(file, "{}}}", indent)?;
    Ok(())
}

/// Writes an entire definition as Rust code (`struct` and `impl`).
fn write_definition<W: Write>(
    file: &mut W,
    indent: &str,
    def: &Definition,
    metadata: &Metadata,
    config: &Config,
) -> io::Result<()> {
    write_struct(file, indent, def, config)?;
    write_identifiable(file, indent, def)?;
    if def.category == Category::Functions {
        write_rpc(file, indent, def)?;
    }
    if def.category == Category::Types && config.impl_from_enum {
        write_impl_from(file, indent, def, metadata)?;
    }
    Ok(())
}

/// Write an entire module for the desired category.
///
/// The output is meant to be included inside a `mod` by the caller.
pub(crate) fn write_category_mod<W: Write>(
    file: &mut W,
    category: Category,
    definitions: &[Definition],
    metadata: &Metadata,
    config: &Config,
) -> io::Result<()> {
    for definition in grouper::by_category(definitions, category) {
        write_definition(file, "", definition, metadata, config)?;
    }
    Ok(())
}
