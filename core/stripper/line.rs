use crate::language::LanguagePolicy;

/// Per-line string tracking. Ordinary quotes never carry over to the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Code,
    InString { quote: char },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanAction {
    Keep,
    Truncate,
}

fn scan_transition(
    from: ScanState,
    c: char,
    prev: Option<char>,
    rest: &str,
    marker: &str,
    quotes: &[char],
) -> (ScanState, ScanAction) {
    match from {
        ScanState::Code if quotes.contains(&c) => {
            (ScanState::InString { quote: c }, ScanAction::Keep)
        }
        ScanState::Code if rest.starts_with(marker) => (ScanState::Code, ScanAction::Truncate),
        ScanState::Code => (ScanState::Code, ScanAction::Keep),
        // A single preceding backslash escapes; `\\"` is not special-cased.
        ScanState::InString { quote } if c == quote && prev != Some('\\') => {
            (ScanState::Code, ScanAction::Keep)
        }
        ScanState::InString { .. } => (from, ScanAction::Keep),
    }
}

/// Byte offset of the first line-comment marker that is not inside a quoted string.
pub fn find_line_comment(line: &str, marker: &str, quotes: &[char]) -> Option<usize> {
    let mut state = ScanState::Code;
    let mut prev = None;
    for (idx, c) in line.char_indices() {
        let (next, action) = scan_transition(state, c, prev, &line[idx..], marker, quotes);
        if action == ScanAction::Truncate {
            return Some(idx);
        }
        state = next;
        prev = Some(c);
    }
    None
}

/// Truncates `line` at its first unquoted marker, dropping whitespace left before it.
pub fn strip_line<'a>(line: &'a str, marker: &str, quotes: &[char]) -> &'a str {
    match find_line_comment(line, marker, quotes) {
        Some(idx) => line[..idx].trim_end(),
        None => line,
    }
}

/// Strips trailing line comments from every line of `input`.
///
/// A line disappears only when nothing but whitespace is left after stripping
/// and its first non-blank text was the marker itself. Blank lines and
/// lines that still carry code are kept.
pub fn strip_line_comments(input: &str, policy: &LanguagePolicy) -> String {
    let Some(marker) = policy.line_comment else {
        return input.to_string();
    };

    let mut kept: Vec<&str> = Vec::new();
    for line in input.split('\n') {
        let stripped = strip_line(line, marker, policy.string_quotes);
        if stripped.trim().is_empty() && line.trim_start().starts_with(marker) {
            continue;
        }
        kept.push(stripped);
    }
    kept.join("\n")
}
