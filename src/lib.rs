//! # cjk-scan
//!
//! Collects every distinct CJK ideograph that appears in the text files of a
//! directory tree.
//!
//! ## Pipeline
//!
//! - **Walk**: every file under the root, filtered by a fixed extension list
//! - **Decode**: UTF-8, then GBK, then GB18030, then ISO-8859-1 (never fails)
//! - **Strip**: each line is cut at its first `//`
//! - **Extract**: code points in U+4E00..U+9FFF, U+3400..U+4DBF, U+20000..U+2A6DF
//! - **Report**: the unique characters sorted by code point, plus file counts
//!
//! ## Example
//!
//! ```rust,no_run
//! use cjk_scan::processor::{Scanner, ScannerConfig};
//! use std::path::Path;
//!
//! let scanner = Scanner::new(ScannerConfig::default()).unwrap();
//! let report = scanner.run(Path::new("./src")).unwrap();
//! println!("{} unique: {}", report.unique_count, report.characters);
//! ```

pub mod cli;
pub mod dedup;
pub mod encoding;
pub mod error;
pub mod filter;
pub mod processor;
pub mod progress;

pub use cli::Args;
pub use error::{DecodeError, FileError, ScanError};
pub use processor::{ScanReport, Scanner, ScannerConfig};
