//! Command-line interface definition for cjk-scan

use clap::Parser;
use std::path::PathBuf;

/// Collect every unique CJK character used in a source tree
///
/// Text files are decoded as UTF-8, GBK or GB18030, falling back to ISO-8859-1,
/// and `//` line comments are ignored.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cjk-scan",
    author = "m0h1nd4",
    version,
    about = "Collect every unique CJK character used in a source tree",
    long_about = r#"
Recursively scans DIRECTORY for text files and prints every distinct CJK
ideograph they contain, sorted by code point, on a single line.

Scanned extensions (case-insensitive):
    .cpp .h .c .hpp .txt .py .java .js .html .css .xml

Anything after the first "//" on a line is treated as a comment and ignored,
even when the "//" sits inside a string literal. Block comments are kept.

Collected ranges:
    U+4E00..U+9FFF     CJK Unified Ideographs
    U+3400..U+4DBF     Extension A
    U+20000..U+2A6DF   Extension B

EXAMPLES:
    # Scan the current directory
    cjk-scan

    # Scan a firmware tree, showing which encoding each file used
    cjk-scan ./src --verbose
"#
)]
pub struct Args {
    /// Directory to scan
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Quiet mode - only print the summary
    #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directory() {
        let args = Args::try_parse_from(["cjk-scan"]).unwrap();
        assert_eq!(args.directory, PathBuf::from("."));
        assert!(!args.quiet);
        assert!(!args.verbose);
    }

    #[test]
    fn test_positional_directory() {
        let args = Args::try_parse_from(["cjk-scan", "firmware/src", "-v"]).unwrap();
        assert_eq!(args.directory, PathBuf::from("firmware/src"));
        assert!(args.verbose);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["cjk-scan", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
