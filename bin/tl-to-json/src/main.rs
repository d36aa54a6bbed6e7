// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Read every `.tl` file given as input parameter, and output its `json`
//! variant next to it, documentation included.
//!
//! If the file is "-", it is read from standard input instead.
use log::{info, warn};
use simple_logger::SimpleLogger;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Read};
use std::path::PathBuf;
use tdlib_tl_parser::errors::ParseError;
use tdlib_tl_parser::{parse_class_docs, parse_tl_file, tl};

const STDIN_NAME: &str = "-";

#[derive(serde::Serialize)]
struct Schema {
    classes: Vec<Class>,
    constructors: Vec<Constructor>,
    methods: Vec<Method>,
}

#[derive(serde::Serialize)]
struct Class {
    name: String,
    description: String,
}

#[derive(serde::Serialize)]
struct Constructor {
    predicate: String,
    description: String,
    params: Vec<Parameter>,
    r#type: String,
}

#[derive(serde::Serialize)]
struct Method {
    method: String,
    description: String,
    params: Vec<Parameter>,
    r#type: String,
}

#[derive(serde::Serialize)]
struct Parameter {
    name: String,
    r#type: String,
    description: String,
}

fn adapt_param(param: &tl::Parameter) -> Parameter {
    Parameter {
        name: param.name.clone(),
        r#type: param.ty.to_string(),
        description: param.description.clone(),
    }
}

fn build_schema(tl: &str) -> Schema {
    let mut schema = Schema {
        classes: parse_class_docs(tl)
            .map(|class| Class {
                name: class.name,
                description: class.description,
            })
            .collect(),
        constructors: Vec::new(),
        methods: Vec::new(),
    };

    for def in parse_tl_file(tl) {
        let def = match def {
            Ok(def) => def,
            // Built-in types such as `vector` are not definitions.
            Err(ParseError::NotImplemented) => continue,
            Err(e) => {
                warn!("skipping definition: {e:?}");
                continue;
            }
        };
        match def.category {
            tl::Category::Types => schema.constructors.push(Constructor {
                predicate: def.name.clone(),
                description: def.description.clone(),
                params: def.params.iter().map(adapt_param).collect(),
                r#type: def.ty.to_string(),
            }),
            tl::Category::Functions => schema.methods.push(Method {
                method: def.name.clone(),
                description: def.description.clone(),
                params: def.params.iter().map(adapt_param).collect(),
                r#type: def.ty.to_string(),
            }),
        }
    }

    schema
}

fn main() -> std::io::Result<()> {
    let _ = SimpleLogger::new().with_level(log::LevelFilter::Info).init();

    for fin in env::args().skip(1) {
        let mut tl = String::new();
        if fin == STDIN_NAME {
            io::stdin().read_to_string(&mut tl)?;
        } else {
            File::open(&fin)?.read_to_string(&mut tl)?;
        }

        let schema = build_schema(&tl);
        info!(
            "{fin}: {} classes, {} constructors, {} methods",
            schema.classes.len(),
            schema.constructors.len(),
            schema.methods.len()
        );

        if fin == STDIN_NAME {
            serde_json::to_writer(io::stdout(), &schema)?;
        } else {
            let mut fout = PathBuf::from(&fin);
            fout.set_extension("json");
            serde_json::to_writer(BufWriter::new(File::create(fout)?), &schema)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_keeps_documentation() {
        let schema = build_schema(
            "
            double ? = Double;
            //@class ChatType @description Describes the type of a chat

            //@description An ordinary chat with a user @user_id User identifier
            chatTypePrivate user_id:int53 = ChatType;

            ---functions---

            //@description Returns a chat @chat_id Chat identifier
            getChat chat_id:int53 = Chat;
            ",
        );
        assert_eq!(schema.classes[0].name, "ChatType");
        assert_eq!(schema.constructors.len(), 1);
        assert_eq!(schema.constructors[0].predicate, "chatTypePrivate");
        assert_eq!(schema.constructors[0].params[0].description, "User identifier");
        assert_eq!(schema.methods[0].method, "getChat");
        assert_eq!(schema.methods[0].r#type, "Chat");
    }
}
