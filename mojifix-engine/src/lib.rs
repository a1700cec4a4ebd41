//! Transform engine for mojifix.
//!
//! Responsibilities:
//! - Normalize line endings the way a universal-newline reader would.
//! - Apply the ordered substitution table over the evolving text.
//! - Decide whether a file changed at all.
//! - Render a unified diff preview.
//!
//! Everything here is pure string work; reading and writing files is the
//! caller's concern.

use camino::Utf8Path;
use diffy::PatchFormatter;
use mojifix_types::table::ReplacementTable;

/// Result of running the table over one file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// Post-substitution text, LF line endings.
    pub text: String,
    /// True when `text` differs from the normalized input, i.e. at least one
    /// substitution fired.
    pub changed: bool,
}

/// Convert CRLF and lone CR to LF; every other character passes through.
pub fn normalize_newlines(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(ch);
        }
    }
    out
}

/// Apply every table entry, in declaration order, as a literal replace-all.
///
/// Each step's output feeds the next, so when two entries could overlap on
/// the same span the earlier entry is fully resolved before the later one is
/// attempted. This is observably different from single-pass longest-match
/// scanning and must stay sequential.
pub fn apply_table(text: &str, table: &ReplacementTable) -> String {
    let mut current = text.to_string();
    for entry in table.entries() {
        if current.contains(&entry.corrupted) {
            current = current.replace(&entry.corrupted, &entry.replacement);
        }
    }
    current
}

/// Normalize, substitute, and flag whether anything changed.
///
/// `changed` compares against the *normalized* input: a file whose only
/// deviation is line-ending style is reported unchanged, so its original
/// bytes are left alone.
pub fn transform(raw: &str, table: &ReplacementTable) -> Transformed {
    let normalized = normalize_newlines(raw);
    let text = apply_table(&normalized, table);
    let changed = text != normalized;
    Transformed { text, changed }
}

/// Unified diff of one file's pending change.
pub fn render_patch(path: &Utf8Path, before: &str, after: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("diff --git a/{0} b/{0}\n", path));
    out.push_str(&format!("--- a/{0}\n+++ b/{0}\n", path));

    let patch = diffy::create_patch(before, after);
    out.push_str(&PatchFormatter::new().fmt_patch(&patch).to_string());
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_corrupted_sequence_becomes_corrected_character() {
        let table = ReplacementTable::builtin();
        let result = transform("\u{00C3}\u{00B3}", &table);
        assert!(result.changed);
        assert_eq!(result.text, "\u{00F3}");
    }

    #[test]
    fn clean_input_is_unchanged() {
        let table = ReplacementTable::builtin();
        let result = transform("const x = 1;\n", &table);
        assert!(!result.changed);
        assert_eq!(result.text, "const x = 1;\n");
    }

    #[test]
    fn crlf_only_difference_does_not_count_as_change() {
        let table = ReplacementTable::builtin();
        let result = transform("line one\r\nline two\r\n", &table);
        assert!(!result.changed);
        assert_eq!(result.text, "line one\nline two\n");
    }

    #[test]
    fn substitution_plus_crlf_normalizes_line_endings() {
        let table = ReplacementTable::builtin();
        let result = transform("secci\u{00C3}\u{00B3}n\r\nfin\r\n", &table);
        assert!(result.changed);
        assert_eq!(result.text, "secci\u{00F3}n\nfin\n");
    }

    #[test]
    fn deletion_entry_empties_the_text() {
        let table = ReplacementTable::builtin();
        // A decorative check-mark sequence maps to the empty string.
        let result = transform("\u{00E2}\u{0153}\u{2026}", &table);
        assert!(result.changed);
        assert_eq!(result.text, "");
    }

    #[test]
    fn entries_compose_sequentially_not_simultaneously() {
        // The second key occurs inside the first entry's replacement. With
        // sequential semantics the first replacement is re-scanned by the
        // second entry; simultaneous matching would leave "xy".
        let table = ReplacementTable::from_pairs([("ab", "xy"), ("y", "z")]);
        assert_eq!(apply_table("ab", &table), "xz");
    }

    #[test]
    fn earlier_entry_wins_on_shared_prefix() {
        // Declared order: "ab" before "abc". The longer key never matches
        // because the shorter one consumes its prefix first.
        let table = ReplacementTable::from_pairs([("ab", "_"), ("abc", "!")]);
        assert_eq!(apply_table("abc", &table), "_c");
    }

    #[test]
    fn bare_capital_prefix_consumes_later_capital_keys() {
        // In the built-in table the bare "Ã" entry is declared before "Ã‰"
        // and "Ãš"; those later entries can never fire. Pinned here so the
        // declared order is not "corrected" silently.
        let table = ReplacementTable::builtin();
        assert_eq!(apply_table("\u{00C3}", &table), "\u{00CD}");
        assert_eq!(
            apply_table("\u{00C3}\u{2030}", &table),
            "\u{00CD}\u{2030}"
        );
    }

    #[test]
    fn quoted_capital_key_survives_bare_prefix() {
        // "Ã\"" is declared before the bare "Ã" entry, so Ó is repaired.
        let table = ReplacementTable::builtin();
        assert_eq!(apply_table("\u{00C3}\"", &table), "\u{00D3}");
    }

    #[test]
    fn lone_cr_becomes_lf() {
        assert_eq!(normalize_newlines("a\rb"), "a\nb");
        assert_eq!(normalize_newlines("a\r\nb"), "a\nb");
        assert_eq!(normalize_newlines("a\r\r\nb"), "a\n\nb");
    }

    #[test]
    fn render_patch_carries_git_style_headers() {
        let path = Utf8Path::new("components/App.tsx");
        let patch = render_patch(path, "old\n", "new\n");
        assert!(patch.starts_with("diff --git a/components/App.tsx b/components/App.tsx\n"));
        assert!(patch.contains("--- a/components/App.tsx"));
        assert!(patch.contains("+++ b/components/App.tsx"));
        assert!(patch.contains("-old"));
        assert!(patch.contains("+new"));
    }
}
