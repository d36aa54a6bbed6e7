// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Code to generate Rust's `enum`'s from TL definitions.

use std::io::{self, Write};

use tdlib_tl_parser::tl::{Definition, Type};

use crate::metadata::Metadata;
use crate::rustifier;
use crate::{grouper, write_doc, Config};

/// Writes an enumeration listing all types such as the following rust code:
///
/// ```ignore
/// #[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
/// #[serde(tag = "@type")]
/// pub enum Name {
///     #[serde(rename = "nameVariant")]
///     Variant(crate::types::NameVariant),
/// }
/// ```
fn write_enum<W: Write>(
    file: &mut W,
    indent: &str,
    ty: &Type,
    metadata: &Metadata,
) -> io::Result<()> {
    write_doc(file, indent, metadata.class_doc(ty))?;
    writeln!(
        file,
        "{}#[derive(Clone, Debug, PartialEq, ::serde::Serialize, ::serde::Deserialize)]",
        indent
    )?;
    writeln!(file, "{}#[serde(tag = \"@type\")]", indent)?;
    writeln!(
        file,
        "{}pub enum {} {{",
        indent,
        rustifier::types::type_name(ty)
    )?;
    for d in metadata.defs_with_type(ty) {
        write_doc(file, &format!("{indent}    "), &d.description)?;
        writeln!(file, "{}    #[serde(rename = \"{}\")]", indent, d.name)?;
        write!(
            file,
            "{}    {}",
            indent,
            rustifier::definitions::variant_name(d)
        )?;

        // Variant with no struct since it has no data and it only adds noise
        if d.params.is_empty() {
            writeln!(file, ",")?;
            continue;
        } else {
            write!(file, "(")?;
        }

        if metadata.is_recursive_def(d) {
            write!(file, "Box<")?;
        }
        write!(file, "{}", rustifier::definitions::qual_name(d))?;
        if metadata.is_recursive_def(d) {
            write!(file, ">")?;
        }

        writeln!(file, "),")?;
    }
    writeln!(file, "{}}}", indent)?;
    Ok(())
}

/// Defines the inherent `impl` with the helpers common to every class:
///
/// ```ignore
/// impl Name {
///     pub fn constructor_name(&self) -> &'static str {
///         match self {
///             Self::Variant(_) => <crate::types::NameVariant as crate::Identifiable>::TYPE_NAME,
///         }
///     }
/// }
/// ```
fn write_impl<W: Write>(
    file: &mut W,
    indent: &str,
    ty: &Type,
    metadata: &Metadata,
) -> io::Result<()> {
    writeln!(
        file,
        "{}impl {} {{",
        indent,
        rustifier::types::type_name(ty)
    )?;
    writeln!(
        file,
        "{}    /// The TDLib `@type` of the constructor this value holds.",
        indent
    )?;
    writeln!(
        file,
        "{}    pub fn constructor_name(&self) -> &'static str {{",
        indent
    )?;
    writeln!(file, "{}        match self {{", indent)?;
    for d in metadata.defs_with_type(ty) {
        writeln!(
            file,
            "{}            Self::{}{} => <{} as crate::Identifiable>::TYPE_NAME,",
            indent,
            rustifier::definitions::variant_name(d),
            if d.params.is_empty() { "" } else { "(_)" },
            rustifier::definitions::qual_name(d),
        )?;
    }
    writeln!(file, "{}        }}", indent)?;
    writeln!(file, "{}    }}", indent)?;
    writeln!(file, "{}}}", indent)?;
    Ok(())
}

/// Defines the `impl From` corresponding to the definition:
///
/// ```ignore
/// impl ::std::convert::From<crate::types::NameVariant> for Name {
/// }
/// ```
fn write_impl_from<W: Write>(
    file: &mut W,
    indent: &str,
    ty: &Type,
    metadata: &Metadata,
) -> io::Result<()> {
    for def in metadata.defs_with_type(ty) {
        writeln!(
            file,
            "{}impl ::std::convert::From<{}> for {} {{",
            indent,
            rustifier::definitions::qual_name(def),
            rustifier::types::type_name(ty),
        )?;
        writeln!(
            file,
            "{}    fn from({}x: {}) -> Self {{",
            indent,
            if def.params.is_empty() { "_" } else { "" },
            rustifier::definitions::qual_name(def),
        )?;
        write!(
            file,
            "{}        Self::{}",
            indent,
            rustifier::definitions::variant_name(def),
        )?;

        if def.params.is_empty() {
            writeln!(file)?;
        } else if metadata.is_recursive_def(def) {
            writeln!(file, "(Box::new(x))")?;
        } else {
            writeln!(file, "(x)")?;
        }

        writeln!(file, "{}    }}", indent)?;
        writeln!(file, "{}}}", indent)?;
    }
    Ok(())
}

/// Writes an entire definition as Rust code (`enum` and `impl`).
fn write_definition<W: Write>(
    file: &mut W,
    indent: &str,
    ty: &Type,
    metadata: &Metadata,
    config: &Config,
) -> io::Result<()> {
    write_enum(file, indent, ty, metadata)?;
    write_impl(file, indent, ty, metadata)?;
    if config.impl_from_type {
        write_impl_from(file, indent, ty, metadata)?;
    }
    Ok(())
}

/// Write the entire module dedicated to enums.
///
/// The output is meant to be included inside a `mod` by the caller.
pub(crate) fn write_enums_mod<W: Write>(
    file: &mut W,
    definitions: &[Definition],
    metadata: &Metadata,
    config: &Config,
) -> io::Result<()> {
    for ty in grouper::class_types(definitions) {
        write_definition(file, "", ty, metadata, config)?;
    }
    Ok(())
}
