// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

// Shared by every crate in the workspace through `include!`, so that each
// `Cargo.toml` dependency has a matching `## name` heading in `DEPS.md`.
use std::collections::BTreeSet;
use std::fs;

const DEPENDENCY_TABLES: [&str; 3] = ["dependencies", "build-dependencies", "dev-dependencies"];

fn listed_deps() -> BTreeSet<String> {
    let manifest = fs::read_to_string("Cargo.toml").expect("Cargo.toml must exist");
    let manifest = manifest
        .parse::<toml::Table>()
        .expect("Cargo.toml should not be malformed");

    let mut deps = BTreeSet::new();
    for key in DEPENDENCY_TABLES {
        if let Some(toml::Value::Table(table)) = manifest.get(key) {
            deps.extend(table.keys().cloned());
        }
    }
    // Platform-specific tables, i.e. `[target.'cfg(unix)'.dependencies]`.
    if let Some(toml::Value::Table(targets)) = manifest.get("target") {
        for target in targets.values() {
            for key in DEPENDENCY_TABLES {
                if let Some(toml::Value::Table(table)) = target.get(key) {
                    deps.extend(table.keys().cloned());
                }
            }
        }
    }
    deps
}

fn documented_deps() -> BTreeSet<String> {
    let markdown = fs::read_to_string("DEPS.md").expect("DEPS.md must exist");
    markdown
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .map(|dep| dep.trim().to_string())
        .collect()
}

#[test]
fn check_deps_documented() {
    let listed = listed_deps();
    let documented = documented_deps();

    let undocumented = listed.difference(&documented).collect::<Vec<_>>();
    let stale = documented.difference(&listed).collect::<Vec<_>>();

    assert!(
        undocumented.is_empty(),
        "some Cargo.toml dependencies are not in DEPS.md: {undocumented:?}"
    );
    assert!(
        stale.is_empty(),
        "DEPS.md lists dependencies no longer present in Cargo.toml: {stale:?}"
    );
}
