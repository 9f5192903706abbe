//! Core scanning engine
//!
//! Walks a directory tree once, decodes every text file with the encoding
//! fallback chain, strips `//` comments and collects the CJK characters.

use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use walkdir::{DirEntry, WalkDir};

use crate::cli::Args;
use crate::dedup::CharSet;
use crate::encoding::EncodingChain;
use crate::error::{FileError, ScanError};
use crate::filter::{is_text_file, strip_line_comments, CjkMatcher};
use crate::progress::{create_spinner, ScanStats};

/// Scanner configuration
#[derive(Debug, Clone, Default)]
pub struct ScannerConfig {
    /// Codecs tried in order for every file
    pub chain: EncodingChain,
    /// Hide the traversal spinner
    pub quiet: bool,
}

impl ScannerConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            chain: EncodingChain::default(),
            quiet: args.quiet,
        }
    }
}

/// A file that was counted as skipped, with the reason
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub error: FileError,
}

/// Result of one scan
#[derive(Debug)]
pub struct ScanReport {
    /// Unique characters sorted by code point, concatenated
    pub characters: String,
    pub unique_count: usize,
    pub processed_files: u64,
    pub skipped_files: u64,
    pub skipped: Vec<SkippedFile>,
    pub bytes_scanned: u64,
    pub elapsed: Duration,
}

/// Single-pass CJK character scanner
pub struct Scanner {
    config: ScannerConfig,
    matcher: CjkMatcher,
}

impl Scanner {
    pub fn new(config: ScannerConfig) -> anyhow::Result<Self> {
        if !config.chain.is_total() {
            log::debug!(
                "encoding chain {:?} is not total; undecodable files will be skipped",
                config.chain.codecs()
            );
        }

        Ok(Self {
            config,
            matcher: CjkMatcher::new()?,
        })
    }

    /// Scan every text file under `root`.
    ///
    /// Fails only when `root` is not an existing directory. Per-file problems are
    /// logged, counted in `skipped_files` and listed in `skipped`.
    pub fn run(&self, root: &Path) -> Result<ScanReport, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::InvalidInput(root.to_path_buf()));
        }

        let mut stats = ScanStats::new();
        let mut chars = CharSet::new();
        let mut skipped = Vec::new();

        let pb = if self.config.quiet {
            ProgressBar::hidden()
        } else {
            create_spinner("Scanning...")
        };

        for path in self.collect_files(root, &pb) {
            pb.set_message(display_name(&path));

            match self.process_file(&path, &mut chars) {
                Ok(size) => stats.complete_file(size),
                Err(error) => {
                    pb.suspend(|| warn_skipped(&path, &error));
                    stats.skip_file();
                    skipped.push(SkippedFile { path, error });
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        log::debug!("scan of {} finished in {:?}", root.display(), stats.elapsed());

        Ok(ScanReport {
            characters: chars.to_sorted_line(),
            unique_count: chars.len(),
            processed_files: stats.processed_files,
            skipped_files: stats.skipped_files,
            skipped,
            bytes_scanned: stats.bytes_scanned,
            elapsed: stats.elapsed(),
        })
    }

    /// Collect all files with an allowed extension, in file-name order
    fn collect_files(&self, root: &Path, pb: &ProgressBar) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    pb.suspend(|| log::debug!("cannot list {:?}: {}", e.path(), e));
                    continue;
                }
            };

            if !is_file_like(&entry) {
                continue;
            }

            let path = entry.into_path();
            if is_text_file(&path) {
                files.push(path);
            } else {
                log::trace!("ignoring {}", path.display());
            }
        }

        files
    }

    /// Read, decode and extract one file. Returns the number of bytes read.
    fn process_file(&self, path: &Path, chars: &mut CharSet) -> Result<u64, FileError> {
        let bytes = fs::read(path)?;
        let decoded = self.config.chain.decode(&bytes)?;
        log::debug!("{} decoded as {}", path.display(), decoded.codec.name());

        let cleaned = strip_line_comments(&decoded.text);
        chars.extend(self.matcher.find_chars(&cleaned));

        Ok(bytes.len() as u64)
    }
}

/// Anything that is not a directory counts as a file, including symlinks to files
/// and dangling symlinks. Links to directories are not descended into.
fn is_file_like(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn warn_skipped(path: &Path, error: &FileError) {
    let name = display_name(path);
    match error {
        FileError::Decode(e) => {
            log::warn!("cannot read file {} (encoding problem)", name);
            log::debug!("{}: {}", path.display(), e);
        }
        FileError::Processing(e) => {
            log::warn!("error while processing file {}: {}", name, e);
        }
    }
}
