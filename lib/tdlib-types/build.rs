// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Read};
use std::path::Path;

use tdlib_tl_gen::{generate_rust_code, Config, Outputs};
use tdlib_tl_parser::tl::{ClassDoc, Definition};
use tdlib_tl_parser::{parse_class_docs, parse_tl_file};

const SCHEMA: &str = "tl/td_api.tl";

/// Load the type language definitions from a certain file.
/// Parse errors will be printed to `stderr`, and only the
/// valid results will be returned.
fn load_tl(file: &str) -> io::Result<(Vec<Definition>, Vec<ClassDoc>)> {
    let mut file = File::open(file)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let definitions = parse_tl_file(&contents)
        .filter_map(|d| match d {
            Ok(d) => Some(d),
            Err(e) => {
                eprintln!("TL: parse error: {:?}", e);
                None
            }
        })
        .collect();

    Ok((definitions, parse_class_docs(&contents).collect()))
}

fn feature_enabled(feature: &str) -> bool {
    let var = format!(
        "CARGO_FEATURE_{}",
        feature.to_ascii_uppercase().replace('-', "_")
    );
    env::var_os(var).is_some()
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed={SCHEMA}");

    let (definitions, class_docs) = load_tl(SCHEMA)?;

    let out_dir = env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?;
    let out_dir = Path::new(&out_dir);
    let create = |name: &str| File::create(out_dir.join(name)).map(BufWriter::new);

    let mut outputs = Outputs {
        common: create("generated_common.rs")?,
        types: create("generated_types.rs")?,
        functions: create("generated_functions.rs")?,
        enums: create("generated_enums.rs")?,
    };

    let config = Config {
        gen_class_of: true,
        deserializable_functions: feature_enabled("deserializable-functions"),
        impl_from_type: feature_enabled("impl-from-type"),
        impl_from_enum: feature_enabled("impl-from-enum"),
    };

    generate_rust_code(&mut outputs, &definitions, &class_docs, &config)?;
    outputs.flush()?;

    Ok(())
}
