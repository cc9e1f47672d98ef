// ── Text statistics ───────────────────────────────────────────────────────────
//
// Pure string scanning.  No allocation, no I/O, total over every input.

/// Counts shown under each counter.
///
/// Whitespace falls into none of `letters`, `numbers` or `special`; it only
/// separates words.  The four fields therefore never sum to the input length
/// when the input contains whitespace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct TextStats {
    pub(crate) words: usize,
    pub(crate) letters: usize,
    pub(crate) numbers: usize,
    pub(crate) special: usize,
}

/// Whitespace as matched by the regex `\s` class: Unicode `White_Space`
/// plus the byte-order mark.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Analyze `text` and return its word, letter, digit and special counts.
///
/// * `words`   – maximal runs of non-whitespace characters.
/// * `letters` – ASCII `[a-zA-Z]`.
/// * `numbers` – ASCII `[0-9]`.
/// * `special` – anything that is not an ASCII letter, not an ASCII digit and
///   not whitespace.
pub(crate) fn analyze(text: &str) -> TextStats {
    let mut stats = TextStats {
        words: text.split(is_space).filter(|w| !w.is_empty()).count(),
        ..TextStats::default()
    };
    for c in text.chars() {
        if c.is_ascii_alphabetic() {
            stats.letters += 1;
        } else if c.is_ascii_digit() {
            stats.numbers += 1;
        } else if !is_space(c) {
            stats.special += 1;
        }
    }
    stats
}

// ── Tests ─────────────────────────────────────────────────────────────────────
