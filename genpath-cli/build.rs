//! Build script for genpath-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated page is placed in OUT_DIR for inclusion in release builds.
//!
//! The command structure is declared here rather than imported from the
//! crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("genpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse and relate generic file paths")
        .long_about(
            "Command-line tool for parsing, normalizing and relating provider-agnostic \
             file paths such as /home/admin/reports or s3://bucket/key",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the configuration directory location")
                .value_name("PATH")
                .global(true)
                .env("GENPATH_CONFIG_DIR"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (human, json, yaml)")
                .value_name("FORMAT")
                .global(true),
        )
        .subcommands(vec![
            Command::new("inspect")
                .about("Show every property of a path")
                .long_about("Parse a path and print its root, scheme, segments and parent"),
            Command::new("normalize")
                .about("Print the normalized form of a path")
                .long_about("Parse a path and print its normalized string form"),
            Command::new("parent")
                .about("Print the parent of a path")
                .long_about("Print the parent of a path; the null path has no parent"),
            Command::new("child")
                .about("Append segments to a path")
                .long_about("Append one or more segments to a path and print the result"),
            Command::new("ancestors")
                .about("List the ancestors of a path")
                .long_about("Print every ancestor of a path, nearest first"),
            Command::new("relative")
                .about("Print the segments of a path below a base")
                .long_about("Print the segments of a path that lie beyond a base path"),
            Command::new("contains")
                .about("Check whether a path contains another")
                .long_about("Exit with status 0 when the first path contains the second"),
            Command::new("relationship")
                .about("Classify the relationship between two paths")
                .long_about("Print whether a path is an ancestor, descendant, same or unrelated"),
            Command::new("check")
                .about("Validate paths")
                .long_about("Parse each path and check its scheme against the known schemes"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("genpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
