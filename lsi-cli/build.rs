//! Build script for lsi-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

fn flag(id: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(id)
        .help(help)
        .action(ArgAction::SetTrue)
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("lsi")
        .version(env!("CARGO_PKG_VERSION"))
        .about("List every element of a path, following symlinks")
        .long_about(
            "Walk each PATH from the root (or its first relative element) to the last \
             element, printing one line per element. Symlinks are followed and their \
             targets listed beneath them, indented by depth.",
        )
        .disable_version_flag(true)
        .arg(flag("version", 'v', "Display version information"))
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("DURATION")
                .help("Timeout duration (e.g. 500ms, 30s, 1h30m); 0 means unlimited")
                .default_value("0")
                .env("LSI_TIMEOUT"),
        )
        .arg(flag("no-follow", 'n', "Do not follow symlinks"))
        .arg(flag("long", 'l', "Output using long format (-p -u -g -s -m)"))
        .arg(flag("permissions", 'p', "Output file type and permissions"))
        .arg(flag("user", 'u', "Output file owner"))
        .arg(flag("group", 'g', "Output file group"))
        .arg(flag("size", 's', "Output file size (bytes)"))
        .arg(flag("inode", 'i', "Output file inode"))
        .arg(flag("mount", 'm', "Output mount point symbols (@)"))
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "json", "csv"])
                .default_value("text")
                .env("LSI_OUTPUT_FORMAT"),
        )
        .arg(
            Arg::new("indent-width")
                .long("indent-width")
                .value_name("N")
                .help("Spaces of indentation per followed symlink")
                .env("LSI_INDENT_WIDTH"),
        )
        .arg(
            Arg::new("max-link-depth")
                .long("max-link-depth")
                .value_name("N")
                .help("Deepest chain of symlinks to follow")
                .env("LSI_MAX_LINK_DEPTH"),
        )
        .arg(
            Arg::new("completions")
                .long("completions")
                .value_name("SHELL")
                .help("Print a shell completion script and exit")
                .value_parser(["bash", "elvish", "fish", "powershell", "zsh"]),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .num_args(0..)
                .help("Paths to inspect (default: the current directory)"),
        )
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("lsi.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
}
