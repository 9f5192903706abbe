//! File and text filtering module
//!
//! Decides which files are read, strips `//` line comments, and picks CJK
//! ideographs out of the remaining text.

use memchr::{memchr2, memmem};
use regex::Regex;
use std::ops::RangeInclusive;
use std::path::Path;

/// Extensions (lower-case, with the leading dot) of files that get scanned
pub const TEXT_EXTENSIONS: &[&str] = &[
    ".cpp", ".h", ".c", ".hpp", ".txt", ".py", ".java", ".js", ".html", ".css", ".xml",
];

/// Code point ranges treated as CJK ideographs
pub const CJK_RANGES: [RangeInclusive<char>; 3] = [
    // CJK Unified Ideographs
    '\u{4E00}'..='\u{9FFF}',
    // Extension A
    '\u{3400}'..='\u{4DBF}',
    // Extension B
    '\u{20000}'..='\u{2A6DF}',
];

const CJK_PATTERN: &str = r"[\x{4E00}-\x{9FFF}\x{3400}-\x{4DBF}\x{20000}-\x{2A6DF}]";

const COMMENT_MARKER: &[u8] = b"//";

/// Lower-cased extension of `path` including the leading dot.
///
/// Leading dots belong to the stem, so `.bashrc` and `..txt` have no extension,
/// while `file.` has the extension `.`.
pub fn extension_of(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_string_lossy();
    let stem_start = name.len() - name.trim_start_matches('.').len();
    let dot = name[stem_start..].rfind('.')?;

    Some(name[stem_start + dot..].to_lowercase())
}

/// Check whether a file should be scanned, based on its extension alone
pub fn is_text_file(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| TEXT_EXTENSIONS.contains(&ext.as_str()))
}

/// Truncate every line at its first `//`.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`; the result joins them with `\n`.
/// Purely textual: quotes and block comments are not understood, so a `//`
/// inside a string literal also cuts the line.
pub fn strip_line_comments(content: &str) -> String {
    let finder = memmem::Finder::new(COMMENT_MARKER);
    let bytes = content.as_bytes();

    let mut cleaned = String::with_capacity(content.len());
    let mut start = 0;
    loop {
        let end = memchr2(b'\r', b'\n', &bytes[start..]).map(|i| start + i);
        let line = &content[start..end.unwrap_or(bytes.len())];

        match finder.find(line.as_bytes()) {
            Some(idx) => cleaned.push_str(&line[..idx]),
            None => cleaned.push_str(line),
        }

        let Some(end) = end else { break };
        cleaned.push('\n');
        start = end + 1;
        if bytes[end] == b'\r' && bytes.get(start) == Some(&b'\n') {
            start += 1;
        }
    }

    cleaned
}

/// Regex-based extractor for CJK ideographs
#[derive(Debug, Clone)]
pub struct CjkMatcher {
    pattern: Regex,
}

impl CjkMatcher {
    pub fn new() -> anyhow::Result<Self> {
        let pattern = Regex::new(CJK_PATTERN)
            .map_err(|e| anyhow::anyhow!("Invalid CJK pattern '{}': {}", CJK_PATTERN, e))?;
        Ok(Self { pattern })
    }

    /// Iterate over every CJK character in `text`, duplicates included
    pub fn find_chars<'t>(&'t self, text: &'t str) -> impl Iterator<Item = char> + 't {
        self.pattern
            .find_iter(text)
            .filter_map(|m| m.as_str().chars().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_cjk(c: char) -> bool {
        CJK_RANGES.iter().any(|range| range.contains(&c))
    }

    #[test]
    fn test_extension_filter() {
        assert!(is_text_file(Path::new("src/main.cpp")));
        assert!(is_text_file(Path::new("Main.CPP")));
        assert!(is_text_file(Path::new("dir/page.Html")));
        assert!(is_text_file(Path::new("archive.tar.py")));

        assert!(!is_text_file(Path::new("notes.md")));
        assert!(!is_text_file(Path::new("Makefile")));
        assert!(!is_text_file(Path::new(".txt")));
        assert!(!is_text_file(Path::new("..txt")));
        assert!(!is_text_file(Path::new("dir/...cpp")));
        assert!(is_text_file(Path::new("a..txt")));
        assert!(!is_text_file(Path::new("lib.rs")));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("a/b/Foo.HPP")), Some(".hpp".to_string()));
        assert_eq!(extension_of(Path::new("README")), None);
        assert_eq!(extension_of(Path::new(".bashrc")), None);
        assert_eq!(extension_of(Path::new("..txt")), None);
        assert_eq!(extension_of(Path::new("...")), None);
        assert_eq!(extension_of(Path::new("file.")), Some(".".to_string()));
        assert_eq!(extension_of(Path::new(".hidden.C")), Some(".c".to_string()));
    }

    #[test]
    fn test_strip_trailing_comment() {
        let cleaned = strip_line_comments("int x = 1; // 中文注释");
        assert_eq!(cleaned, "int x = 1; ");
    }

    #[test]
    fn test_strip_inside_string_literal() {
        // Naive on purpose: the marker inside quotes still cuts the line
        let cleaned = strip_line_comments("s = \"// 中文\"");
        assert_eq!(cleaned, "s = \"");
    }

    #[test]
    fn test_strip_keeps_line_structure() {
        let content = "a // x\nb\n// whole line\nc//d\n";
        assert_eq!(strip_line_comments(content), "a \nb\n\nc\n");
    }

    #[test]
    fn test_strip_carriage_return_lines() {
        let content = "int x; // 注释\r汉字\r";
        assert_eq!(strip_line_comments(content), "int x; \n汉字\n");
    }

    #[test]
    fn test_strip_mixed_line_endings() {
        let content = "a // x\r\nb // y\rc // z\nd\r\n\r";
        assert_eq!(strip_line_comments(content), "a \nb \nc \nd\n\n");
    }

    #[test]
    fn test_strip_first_marker_only() {
        assert_eq!(strip_line_comments("url = http://x // y"), "url = http:");
        assert_eq!(strip_line_comments("/ / not a comment"), "/ / not a comment");
    }

    #[test]
    fn test_block_comments_untouched() {
        let content = "/* 注释 */ code";
        assert_eq!(strip_line_comments(content), content);
    }

    #[test]
    fn test_is_cjk_boundaries() {
        assert!(is_cjk('\u{4E00}'));
        assert!(is_cjk('\u{9FFF}'));
        assert!(is_cjk('\u{3400}'));
        assert!(is_cjk('\u{4DBF}'));
        assert!(is_cjk('\u{20000}'));
        assert!(is_cjk('\u{2A6DF}'));

        assert!(!is_cjk('\u{4DC0}')); // Yijing hexagram symbols
        assert!(!is_cjk('\u{A000}'));
        assert!(!is_cjk('\u{2A700}')); // Extension C
        assert!(!is_cjk('\u{3002}')); // ideographic full stop
        assert!(!is_cjk('\u{FF0C}')); // fullwidth comma
        assert!(!is_cjk('a'));
    }

    #[test]
    fn test_matcher_extracts_in_order() {
        let matcher = CjkMatcher::new().unwrap();
        let found: Vec<char> = matcher.find_chars("print(\"你好\")，世界！abc").collect();
        assert_eq!(found, vec!['你', '好', '世', '界']);
    }

    #[test]
    fn test_matcher_extension_b() {
        let matcher = CjkMatcher::new().unwrap();
        let found: Vec<char> = matcher.find_chars("x\u{20BB7}y\u{3400}").collect();
        assert_eq!(found, vec!['\u{20BB7}', '\u{3400}']);
    }

    #[test]
    fn test_matcher_agrees_with_ranges() {
        let matcher = CjkMatcher::new().unwrap();
        let samples = [
            '\u{33FF}', '\u{3400}', '\u{4DBF}', '\u{4DC0}', '\u{4DFF}', '\u{4E00}',
            '\u{9FFF}', '\u{A000}', '\u{1FFFF}', '\u{20000}', '\u{2A6DF}', '\u{2A6E0}',
            'ä', 'Я', 'ア', '한',
        ];

        for c in samples {
            let text = c.to_string();
            let matched = matcher.find_chars(&text).next() == Some(c);
            assert_eq!(matched, is_cjk(c), "mismatch for U+{:04X}", c as u32);
        }
    }
}
