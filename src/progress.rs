//! Console output module
//!
//! Styled status lines, logger setup, the traversal spinner and the final summary.

use bytesize::ByteSize;
use colored::*;
use env_logger::{Env, Target};
use indicatif::{ProgressBar, ProgressStyle};
use log::Level;
use std::io::Write;
use std::time::{Duration, Instant};

use crate::processor::ScanReport;

/// Color theme for the tool
pub mod theme {
    use colored::Color;

    pub const PRIMARY: Color = Color::Green;
    pub const ACCENT: Color = Color::Cyan;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const MUTED: Color = Color::BrightBlack;
}

/// Set up `env_logger` on stdout.
///
/// `RUST_LOG` wins over the level picked from the flags.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .target(Target::Stdout)
        .format(|buf, record| {
            let prefix = match record.level() {
                Level::Error => "Error:".color(theme::ERROR).bold(),
                Level::Warn => "Warning:".color(theme::WARNING).bold(),
                Level::Info => "Info:".color(theme::ACCENT),
                Level::Debug | Level::Trace => "Debug:".color(theme::MUTED),
            };
            writeln!(buf, "  {} {}", prefix, record.args())
        })
        .init();
}

/// Print a section header
pub fn print_header(text: &str) {
    println!("\n{} {}", "▶".color(theme::PRIMARY), text.color(theme::PRIMARY).bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".color(theme::ACCENT), text);
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".color(theme::ERROR), text.color(theme::ERROR));
}

/// Create a styled spinner for the directory walk
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    let template = "{spinner:.green} [{elapsed_precise}] {pos} files {msg}";
    if let Ok(style) = ProgressStyle::default_spinner().template(template) {
        pb.set_style(style.tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "));
    }

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Counters for one scan
#[derive(Debug)]
pub struct ScanStats {
    pub processed_files: u64,
    pub skipped_files: u64,
    pub bytes_scanned: u64,
    pub start_time: Instant,
}

impl ScanStats {
    pub fn new() -> Self {
        Self {
            processed_files: 0,
            skipped_files: 0,
            bytes_scanned: 0,
            start_time: Instant::now(),
        }
    }

    pub fn complete_file(&mut self, size: u64) {
        self.processed_files += 1;
        self.bytes_scanned += size;
    }

    pub fn skip_file(&mut self) {
        self.skipped_files += 1;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Print the completion summary. The character line is always printed, even when empty.
pub fn print_summary(report: &ScanReport) {
    println!();
    println!("{}", "═".repeat(60).color(theme::PRIMARY));
    println!("{}", "                    SCAN COMPLETE".color(theme::PRIMARY).bold());
    println!("{}", "═".repeat(60).color(theme::PRIMARY));
    println!();

    println!("  {} {}", "Processed files:  ".green(), format_number(report.processed_files));
    if report.skipped_files > 0 {
        println!(
            "  {} {}",
            "Skipped files:    ".yellow(),
            format_number(report.skipped_files).yellow()
        );
    } else {
        println!("  {} {}", "Skipped files:    ".green(), format_number(report.skipped_files));
    }
    println!("  {} {}", "Data read:        ".green(), ByteSize(report.bytes_scanned));
    println!("  {} {}", "Duration:         ".green(), format_duration(report.elapsed));
    println!();
    println!(
        "  {} {}",
        "Unique characters:".green().bold(),
        format_number(report.unique_count as u64).green().bold()
    );
    println!("  {} {}", "All characters:   ".green().bold(), report.characters);
    println!();
    println!("{}", "═".repeat(60).color(theme::PRIMARY));
}

/// Format a number with thousand separators
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.2}s", duration.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(20902), "20,902");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m");
    }

    #[test]
    fn test_stats_counters() {
        let mut stats = ScanStats::new();

        stats.complete_file(100);
        stats.complete_file(20);
        stats.skip_file();

        assert_eq!(stats.processed_files, 2);
        assert_eq!(stats.skipped_files, 1);
        assert_eq!(stats.bytes_scanned, 120);
    }
}
