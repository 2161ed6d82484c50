//! Build script for menutree-cli.
//!
//! Generates a man page at build time using clap_mangen. The page is placed
//! in OUT_DIR for inclusion in release builds.
//!
//! The command structure is declared here rather than imported, since build
//! scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("menutree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect menu trees and edit role menu assignments")
        .long_about(
            "Command-line tool for normalizing menu trees, resolving the active menu for a \
             navigation path, and editing tri-state role menu assignments",
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
            Arg::new("menu-file")
                .long("menu-file")
                .help("Menu forest file (.json, .yaml or .yml)")
                .value_name("PATH")
                .global(true)
                .env("MENUTREE_MENU_FILE"),
        )
        .arg(
            Arg::new("assignments-file")
                .long("assignments-file")
                .help("Role assignments file (.json)")
                .value_name("PATH")
                .global(true)
                .env("MENUTREE_ASSIGNMENTS_FILE"),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Print the normalized menu tree")
                .long_about("Resolve every route to an absolute path and print the tree"),
            Command::new("resolve")
                .about("Resolve the active menu for a navigation path")
                .long_about(
                    "Find the most specific menu matching a path and the folders to expand",
                ),
            Command::new("show")
                .about("Show the menu tree with a role's selection state")
                .long_about("Print every node with its all/partial/none state for a role"),
            Command::new("toggle")
                .about("Toggle menu nodes in a role's assignment")
                .long_about("Select or deselect whole subtrees and save the assignment"),
            Command::new("validate")
                .about("Validate a menu file")
                .long_about("Parse a menu file, check node ids and report its size"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("menutree.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
