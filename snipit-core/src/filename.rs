//! Filename recovery from a leading comment line such as `// utils.go` or
//! `# scripts/build.sh`.
//!
//! The last separator-delimited token of the line is taken as the filename and
//! split on its last `.`. This is a heuristic: lines that do not fit simply
//! yield `None` and the caller falls back to content sniffing.

use crate::types::ParsedFilename;

const SEPARATORS: &[char] = &[' ', '\t', '/', '\\'];
const COMMENT_TERMINATORS: &[&str] = &["*/", "-->"];
const ILLEGAL_CHARS: &[char] = &['\\', '/', '*', '?', ':', '"', '<', '>', '|'];

/// Returns line 1 of `content` (without the line break).
pub fn first_line(content: &str) -> &str {
    content.lines().next().unwrap_or_default()
}

pub fn parse(line: &str) -> Option<ParsedFilename> {
    let mut line = line.trim_end();
    for terminator in COMMENT_TERMINATORS {
        if let Some(stripped) = line.strip_suffix(terminator) {
            line = stripped.trim_end();
            break;
        }
    }

    let (_, token) = line.rsplit_once(SEPARATORS)?;
    let (stem, extension) = token.rsplit_once('.')?;
    // `<stdio.h>`, `"config.h"`, `foo.bar();` are code, not a filename.
    if !extension.chars().all(is_extension_char) {
        return None;
    }

    let stem = sanitize(stem);
    let extension = sanitize(extension);
    if stem.is_empty() || extension.is_empty() {
        return None;
    }

    Some(ParsedFilename { stem, extension })
}

fn is_extension_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+')
}

/// Drops characters that cannot appear in a filename and trims whitespace.
///
/// Comment markers (`//`, `*/`) are covered by the illegal set.
pub fn sanitize(component: &str) -> String {
    component
        .chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}
