//! The ordered substitution table.
//!
//! Each entry maps one mis-decoded character sequence to its intended text.
//! Entries are applied as literal replace-alls in declaration order, each
//! step feeding the next, so an earlier entry is fully resolved before a
//! later one is attempted. Several keys share prefixes with later keys;
//! declaration order decides which entry wins on overlapping input.

/// One corrupted-sequence -> corrected-text pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementEntry {
    pub corrupted: String,
    /// May be empty: the corrupted sequence is deleted outright.
    pub replacement: String,
}

/// An ordered list of replacement entries, fixed for the lifetime of a run.
#[derive(Debug, Clone, Default)]
pub struct ReplacementTable {
    entries: Vec<ReplacementEntry>,
}

impl ReplacementTable {
    /// Build a table from (corrupted, replacement) pairs, preserving order.
    pub fn from_pairs<I, S, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(corrupted, replacement)| ReplacementEntry {
                corrupted: corrupted.into(),
                replacement: replacement.into(),
            })
            .collect();
        Self { entries }
    }

    /// The built-in table for UTF-8-read-as-Windows-1252 corruption.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN.iter().copied())
    }

    pub fn entries(&self) -> &[ReplacementEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The authored mapping, transcribed literally and in declared order.
///
/// Keys are written with `\u{...}` escapes because several contain invisible
/// or visually ambiguous characters. The order is load-bearing: the bare
/// `"\u{00C3}"` entry shadows every `"\u{00C3}"`-prefixed key declared after
/// it, and the duplicate declarations below it can never fire. That is the
/// authored behavior and is pinned by tests; do not "correct" it.
const BUILTIN: &[(&str, &str)] = &[
    // Lowercase accented vowels and punctuation.
    ("\u{00C3}\u{00B3}", "\u{00F3}"),
    ("\u{00C3}\u{00AD}", "\u{00ED}"),
    ("\u{00C3}\u{00A1}", "\u{00E1}"),
    ("\u{00C3}\u{00A9}", "\u{00E9}"),
    ("\u{00C3}\u{00BA}", "\u{00FA}"),
    ("\u{00C3}\u{00B1}", "\u{00F1}"),
    ("\u{00C2}\u{00BF}", "\u{00BF}"),
    // Capitals.
    ("\u{00C3}\"", "\u{00D3}"),
    ("\u{00C3}", "\u{00CD}"),
    ("\u{00C3}", "\u{00C1}"),
    ("\u{00C3}\u{2030}", "\u{00C9}"),
    ("\u{00C3}\u{0161}", "\u{00DA}"),
    ("\u{00C3}", "\u{00D1}"),
    ("\u{00E2}\u{20AC}\u{00A2}", "\u{2022}"),
    // Stray decorative glyphs are deleted outright.
    ("\u{00E2}\u{0153}\u{2026}", ""),
    ("\u{00E2}\u{0161} \u{00EF}\u{00B8}", ""),
    ("\u{00F0}\u{0178}\"\u{00A7}", ""),
    ("\u{00F0}\u{0178}'\u{00A5}", ""),
    ("\u{00F0}\u{0178}\u{2014}'\u{00EF}\u{00B8}", ""),
    ("\u{00F0}\u{0178}\"", ""),
    ("\u{00F0}\u{0178}\"\u{201E}", ""),
    ("\u{00F0}\u{0178}\u{017D}\u{2030}", ""),
    ("\u{00E2}\u{2030}\u{00A1}", ""),
    ("\u{00E2}\u{0153}\u{2022}", ""),
    ("\u{00E2}\u{0153}\u{00EF}\u{00B8}", ""),
    ("\u{00E2}\u{0153}\"", ""),
    ("\u{00E2}\u{0152}", ""),
    ("\u{00E2}\u{00B3}", ""),
    ("\u{00E2}\u{017E}\u{2022}", ""),
    ("\u{00F0}\u{0178}\u{203A} \u{00EF}\u{00B8}", ""),
    ("\u{00E2}\u{2020}\u{00BB}", ""),
    ("\u{00E2}\u{201E}\u{00B9}\u{00EF}\u{00B8}", ""),
    ("\u{00E2}\u{2020}'", ""),
    ("\u{00E2}\u{2020}", ""),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_preserves_declared_order_and_size() {
        let table = ReplacementTable::builtin();
        assert_eq!(table.len(), 34);

        let entries = table.entries();
        assert_eq!(entries[0].corrupted, "\u{00C3}\u{00B3}");
        assert_eq!(entries[0].replacement, "\u{00F3}");
        assert_eq!(entries[33].corrupted, "\u{00E2}\u{2020}");
        assert_eq!(entries[33].replacement, "");
    }

    #[test]
    fn builtin_keys_are_never_empty() {
        for entry in ReplacementTable::builtin().entries() {
            assert!(!entry.corrupted.is_empty());
        }
    }

    #[test]
    fn bare_prefix_entry_is_declared_before_longer_capital_keys() {
        // The first bare "Ã" entry precedes the "Ã‰" and "Ãš" keys; sequential
        // application therefore consumes the prefix before they are tried.
        let table = ReplacementTable::builtin();
        let first_bare = table
            .entries()
            .iter()
            .position(|e| e.corrupted == "\u{00C3}")
            .unwrap();
        let e_acute = table
            .entries()
            .iter()
            .position(|e| e.corrupted == "\u{00C3}\u{2030}")
            .unwrap();
        assert!(first_bare < e_acute);
    }

    #[test]
    fn from_pairs_keeps_duplicates_in_order() {
        let table = ReplacementTable::from_pairs([("a", "x"), ("a", "y")]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].replacement, "x");
        assert_eq!(table.entries()[1].replacement, "y");
    }
}
