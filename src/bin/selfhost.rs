//! Command-line interface for selfhost
//! This binary writes the prelude followed by every given C file, rewritten for the
//! self-hosting compiler, to standard output.
//!
//! Usage:
//!   selfhost [`<file>`...]   - Emit one compilation unit built from the files, in order
//!
//! Nothing is written to stdout unless every file could be read. Set `RUST_LOG=debug` to
//! trace loading and rule application on stderr.

use clap::{Arg, ArgAction, Command};
use selfhost::pipeline::DocumentLoader;
use std::io::{self, Write};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let matches = Command::new("selfhost")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Emit header substitutes and C sources rewritten for a minimal self-hosting compiler")
        .arg(
            Arg::new("files")
                .help("C source files, in the order they should appear in the output")
                .action(ArgAction::Append)
                .num_args(1..)
                .index(1),
        )
        .get_matches();

    let files: Vec<&String> = matches
        .get_many::<String>("files")
        .map(|values| values.collect())
        .unwrap_or_default();

    handle_emit_command(&files);
}

/// Handle emitting the compilation unit
fn handle_emit_command(files: &[&String]) {
    let loader = DocumentLoader::new();
    let unit = loader.assemble(files).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout
        .write_all(unit.as_str().as_bytes())
        .and_then(|_| stdout.flush())
    {
        eprintln!("error: cannot write output: {}", e);
        std::process::exit(1);
    }
}
