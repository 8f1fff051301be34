//! Conformance runner CLI.
//!
//! Runs every conformance script, or only the named ones. A script that
//! runs to completion prints one `ok` line; the first failed assertion
//! aborts with `Assert failed` and a non-zero exit.

use quill_conformance::{features, init_tracing};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut selected: Vec<String> = Vec::new();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => init_tracing(),
            "-h" | "--help" => {
                print_usage();
                return;
            }
            name if !name.starts_with('-') => selected.push(name.to_string()),
            other => {
                eprintln!("error: unknown option `{other}`");
                print_usage();
                std::process::exit(1);
            }
        }
    }

    for name in &selected {
        if !features::ALL.iter().any(|(known, _)| *known == name.as_str()) {
            eprintln!("error: unknown feature `{name}`");
            eprintln!("known features:");
            for (known, _) in features::ALL {
                eprintln!("  {known}");
            }
            std::process::exit(1);
        }
    }

    let mut failed = false;
    for (name, run) in features::ALL {
        if !selected.is_empty() && !selected.iter().any(|s| s.as_str() == *name) {
            continue;
        }
        match run() {
            Ok(()) => println!("{name}: ok"),
            Err(e) => {
                eprintln!("{name}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: quill-check [feature...] [options]");
    eprintln!();
    eprintln!("Runs all conformance scripts, or only the named features.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -v, --verbose    Enable tracing output (honors RUST_LOG)");
    eprintln!("  -h, --help       Show this help");
}
