use regex::Regex;
use std::sync::OnceLock;

/// One row of the content-signature table.
#[derive(Debug, Clone)]
pub struct ExtensionSignature {
    pub extension: &'static str,
    pub pattern: Regex,
}

// Order is the tie-break: several rows share a signature and only the first
// one can ever win (cpp after c, rb after py, yml after yaml, ...).
const SIGNATURE_TABLE: &[(&str, &str)] = &[
    ("js", r"\bfunction\b|\bconst\b|\blet\b|\bvar\b"),
    ("go", r"\bpackage main\b"),
    ("py", r"\bdef\b"),
    ("java", r"\bpublic class\b"),
    ("c", r"#include\b"),
    ("cpp", r"#include\b"),
    // No trailing `\b`: it would demand a word character right after `;`.
    ("cs", r"\busing System;"),
    ("rb", r"\bdef\b"),
    ("php", r"<\?php\b"),
    ("html", r"<html\b"),
    ("css", r"\bbody\s*\{"),
    ("sql", r"\bSELECT\b"),
    ("sh", r"^#!/bin/bash\b"),
    ("xml", r"<\?xml\b"),
    ("swift", r"\bimport Swift\b"),
    ("kt", r"\bfun main\b"),
    ("r", r"# R script\b"),
    ("ts", r"\bimport \{|\bexport\b"),
    ("h", r"#include\b"),
    ("json", r"^\s*[\{\[]"),
    ("yaml", r"^\s*---"),
    ("yml", r"^\s*---"),
    ("md", r"^#"),
    ("ini", r"^\["),
    ("bat", r"@echo\b"),
    ("ps1", r"^\s*<#\s*PSScriptInfo"),
    ("vbs", r"^\s*<\?\s*VBScript"),
    ("pl", r"#!/usr/bin/perl\b"),
    ("m", r"\bfunction\b"),
    ("coffee", r"# CoffeeScript\b"),
    ("gitignore", r"^#"),
    // Attribute lines start with a pattern (`*.png merge=binary`), not `merge=`.
    ("gitattributes", r"\bmerge="),
    ("p4", r"\bPerforce\b"),
    ("p4ignore", r"^#"),
    ("uasset", r"UE4Asset\b"),
    ("uproject", r"^\s*\{"),
    ("meta", r"\bfileFormatVersion\b"),
    ("unity", r"\bm_Script\b"),
    ("tres", r"^\[gd_resource\b"),
    ("tscn", r"^\[gd_scene\b"),
];

/// The ordered signature table, compiled on first use.
pub fn signatures() -> &'static [ExtensionSignature] {
    static TABLE: OnceLock<Vec<ExtensionSignature>> = OnceLock::new();
    TABLE.get_or_init(|| {
        SIGNATURE_TABLE
            .iter()
            .map(|(extension, pattern)| ExtensionSignature {
                extension,
                // Case-insensitive, and `^` anchors at every line start.
                pattern: Regex::new(&format!("(?im){pattern}")).expect("valid signature regex"),
            })
            .collect()
    })
}

/// Returns the extension of the first signature found anywhere in `content`.
pub fn detect(content: &str) -> Option<&'static str> {
    signatures()
        .iter()
        .find(|sig| sig.pattern.is_match(content))
        .map(|sig| sig.extension)
}

pub fn is_known_extension(extension: &str) -> bool {
    SIGNATURE_TABLE
        .iter()
        .any(|(known, _)| known.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        assert_eq!(signatures().len(), SIGNATURE_TABLE.len());
    }

    #[test]
    fn reachable_extensions_are_detected() {
        let cases = [
            ("js", "function greet() { return 1; }"),
            ("go", "package main\n\nimport \"fmt\""),
            ("py", "def greet():\n    print('hi')"),
            ("java", "public class Main {}"),
            ("c", "#include <stdio.h>\nint main(){}"),
            ("cs", "using System;\nclass A {}"),
            ("php", "<?php echo 'hi'; ?>"),
            ("html", "<html><body></body></html>"),
            ("css", "body { margin: 0; }"),
            ("sql", "SELECT id FROM users"),
            ("sh", "#!/bin/bash\necho hi"),
            ("xml", "<?xml version=\"1.0\"?><root/>"),
            ("swift", "import Swift\nprint(1)"),
            ("kt", "fun main() {\n    println(\"hi\")\n}"),
            ("r", "# R script\nx <- c(1, 2)"),
            ("ts", "export interface Foo { a: number }"),
            ("json", "{\"a\": 1}"),
            ("yaml", "---\nname: x"),
            ("md", "# Title\nSome text"),
            ("bat", "@echo off\nset X=1"),
            ("ps1", "<# PSScriptInfo .VERSION 1.0 #>"),
            ("vbs", "<? VBScript\nMsgBox \"hi\""),
            ("coffee", "x = 1 # CoffeeScript"),
            ("gitattributes", "*.png merge=binary"),
            ("p4", "Perforce depot settings"),
            ("uasset", "UE4Asset header"),
            ("meta", "fileFormatVersion: 2\nguid: abc"),
            ("unity", "m_Script: {fileID: 1}"),
        ];

        for (expected, content) in cases {
            assert_eq!(detect(content), Some(expected), "content: {content:?}");
        }
    }

    #[test]
    fn earlier_row_wins_on_shared_signature() {
        assert_eq!(detect("#include <vector>\nint main() {}"), Some("c"));
        assert_eq!(detect("def run\n  puts 'x'\nend"), Some("py"));
        assert_eq!(detect("---\nkey: value"), Some("yaml"));
        // Both js and ts signatures present.
        assert_eq!(detect("export const x = 1;"), Some("js"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(detect("select * from t"), Some("sql"));
        assert_eq!(detect("PACKAGE MAIN"), Some("go"));
    }

    #[test]
    fn caret_anchors_at_any_line() {
        assert_eq!(detect("plain words\n---\nkey: value"), Some("yaml"));
        assert_eq!(detect("plain words\n#!/bin/bash"), Some("sh"));
    }

    #[test]
    fn plain_prose_matches_nothing() {
        assert_eq!(detect("hello world, nothing to see here"), None);
        assert_eq!(detect(""), None);
    }

    #[test]
    fn known_extension_lookup_ignores_case() {
        assert!(is_known_extension("PY"));
        assert!(is_known_extension("tscn"));
        assert!(!is_known_extension("exe"));
    }
}
