// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Several functions to group definitions by a certain criteria.
//!
//! Definitions whose type is special-cased are always left out.

use tdlib_tl_parser::tl::{Category, Definition, Type};

use crate::ignore_type;

/// Every generatable definition, sorted by name.
pub(crate) fn sorted_definitions(definitions: &[Definition]) -> Vec<&Definition> {
    let mut result = definitions
        .iter()
        .filter(|d| !ignore_type(&d.ty))
        .collect::<Vec<_>>();

    result.sort_by_key(|d| &d.name);
    result
}

/// Filter the input by a certain category, sorted by name.
pub(crate) fn by_category(definitions: &[Definition], category: Category) -> Vec<&Definition> {
    let mut result = sorted_definitions(definitions);
    result.retain(|d| d.category == category);
    result
}

/// Similar to `by_category`, but for the classes the type definitions belong to.
pub(crate) fn class_types(definitions: &[Definition]) -> Vec<&Type> {
    let mut result = definitions
        .iter()
        .filter(|d| d.category == Category::Types && !ignore_type(&d.ty))
        .map(|d| &d.ty)
        .collect::<Vec<_>>();

    result.sort_by_key(|t| &t.name);
    result.dedup_by(|a, b| a.name == b.name);
    result
}
