//! cjk-scan - collect the unique CJK characters of a source tree
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use cjk_scan::cli::Args;
use cjk_scan::encoding::EncodingChain;
use cjk_scan::filter::{CJK_RANGES, TEXT_EXTENSIONS};
use cjk_scan::processor::{Scanner, ScannerConfig};
use cjk_scan::progress::{init_logger, print_error, print_header, print_info, print_summary};

fn main() {
    let args = Args::parse();

    init_logger(args.verbose, args.quiet);

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if !args.quiet {
        print_header(&format!("Scanning directory: {}", args.directory.display()));
    }

    let config = ScannerConfig::from_args(&args);

    if args.verbose {
        print_config(&config.chain);
    }

    let scanner = Scanner::new(config)?;
    let report = scanner.run(&args.directory)?;

    print_summary(&report);

    Ok(())
}

/// Print configuration summary
fn print_config(chain: &EncodingChain) {
    let encodings: Vec<&str> = chain.codecs().iter().map(|c| c.name()).collect();
    let ranges: Vec<String> = CJK_RANGES
        .iter()
        .map(|r| format!("U+{:04X}-U+{:04X}", *r.start() as u32, *r.end() as u32))
        .collect();

    print_header("Configuration");
    print_info(&format!("Extensions:   {}", TEXT_EXTENSIONS.join(" ")));
    print_info(&format!("Encodings:    {}", encodings.join(" -> ")));
    print_info(&format!("Ranges:       {}", ranges.join(", ")));
}
