//! Splits rendered text into output files.
//!
//! Rendered text carries its own file boundaries as marker lines:
//!
//! ```text
//! --- models/user.rs ---
//! pub struct User;
//! --- models/post.rs ---
//! pub struct Post;
//! ```
//!
//! Each marker names the file whose content follows it, up to the next
//! marker or the end of the text. Text before the first marker belongs to no
//! file and is dropped.

use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// One file produced by a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Path relative to the output directory, verbatim from the marker line
    pub path: String,
    pub content: String,
}

impl OutputFile {
    pub fn new<P: Into<String>, C: Into<String>>(path: P, content: C) -> Self {
        Self { path: path.into(), content: content.into() }
    }
}

fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    MARKER.get_or_init(|| {
        Regex::new(r"--- (?P<filename>[^\r\n\x{2028}\x{2029}]+) ---")
            .expect("marker pattern is a valid regex")
    })
}

/// Returns the file name captured from a marker line, if `line` is one.
///
/// The match is unanchored and greedy: the name runs from the first `--- `
/// to the last ` ---` on the line.
pub fn parse_marker(line: &str) -> Option<&str> {
    marker_regex()
        .captures(line)
        .and_then(|caps| caps.name("filename"))
        .map(|m| m.as_str())
}

/// Partitions `rendered` into output files, in marker order.
///
/// Never fails: text without markers yields no files. Duplicate paths are
/// kept; the last one written wins on disk.
pub fn split_files(rendered: &str) -> Vec<OutputFile> {
    let mut files = Vec::new();
    let mut current: Option<&str> = None;
    let mut pending: Vec<&str> = Vec::new();

    for line in rendered.split('\n') {
        match parse_marker(line) {
            Some(filename) => {
                match current {
                    Some(path) => files.push(OutputFile::new(path, pending.join("\n"))),
                    None if !pending.is_empty() => {
                        debug!("Dropping {} line(s) before the first marker", pending.len())
                    }
                    None => {}
                }
                pending.clear();
                current = Some(filename);
            }
            None => pending.push(line),
        }
    }

    if let Some(path) = current {
        files.push(OutputFile::new(path, pending.join("\n")));
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marker() {
        assert_eq!(parse_marker("--- a.txt ---"), Some("a.txt"));
        assert_eq!(parse_marker("--- dir/with space.rs ---"), Some("dir/with space.rs"));
        assert_eq!(parse_marker("// --- a.txt --- //"), Some("a.txt"));
        assert_eq!(parse_marker("--- a --- b ---"), Some("a --- b"));
        assert_eq!(parse_marker("---  x ---"), Some(" x"));
        assert_eq!(parse_marker("---  ---"), None);
        assert_eq!(parse_marker("--- ---"), None);
        assert_eq!(parse_marker("-- a.txt --"), None);
        assert_eq!(parse_marker("---a.txt---"), None);
        assert_eq!(parse_marker(""), None);
        // Line and paragraph separators end a line, so they never sit inside a name.
        assert_eq!(parse_marker("--- a\u{2028}b ---"), None);
        assert_eq!(parse_marker("--- a\u{2029}b ---"), None);
        assert_eq!(parse_marker("--- a\rb ---"), None);
    }

    #[test]
    fn test_single_marker() {
        assert_eq!(split_files("--- a ---\nX"), vec![OutputFile::new("a", "X")]);
    }

    #[test]
    fn test_trailing_newline_is_preserved() {
        assert_eq!(split_files("--- a ---\nX\n"), vec![OutputFile::new("a", "X\n")]);
    }

    #[test]
    fn test_carriage_return_stays_in_content() {
        assert_eq!(
            split_files("--- a ---\r\nX\r\n--- b ---\r\nY"),
            vec![OutputFile::new("a", "X\r"), OutputFile::new("b", "Y")]
        );
    }
}
