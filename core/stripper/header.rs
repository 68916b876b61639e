use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

const DIRECTIVE_PREFIXES: &[&str] = &["#!", "# -*-", "# coding=", "# encoding="];

static FILE_INFO_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)'''.*?Author:.*?Code function:.*?'''|""".*?Author:.*?Code function:.*?""""#,
    )
    .expect("file-info pattern is valid")
});

/// A Python file split into the part kept verbatim and the part still to be stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSplit<'a> {
    pub header: Cow<'a, str>,
    pub remainder: &'a str,
}

fn is_directive(line: &str) -> bool {
    let trimmed = line.trim();
    DIRECTIVE_PREFIXES
        .iter()
        .any(|prefix| trimmed.starts_with(prefix))
}

/// Shebang and coding lines among the leading `#` lines, plus the byte offset
/// where the leading `#` run ends.
fn leading_directives(input: &str) -> (Vec<&str>, usize) {
    let mut directives = Vec::new();
    let mut offset = 0;
    for line in input.split('\n') {
        if !line.trim_start().starts_with('#') {
            return (directives, offset);
        }
        if is_directive(line) {
            directives.push(line);
        }
        offset += line.len() + 1;
    }
    (directives, input.len())
}

/// Finds the header to preserve, if any.
///
/// With a file-info block (a triple-quoted region mentioning both `Author:` and
/// `Code function:`) the header runs to the end of that block, byte for byte,
/// except that leading `#` lines other than shebang/coding lines are left out.
/// Without one, the leading shebang/coding lines form the header and the
/// remainder starts after the leading comment run.
pub fn split_header(input: &str) -> Option<HeaderSplit<'_>> {
    let (directives, end) = leading_directives(input);

    if let Some(m) = FILE_INFO_BLOCK.find(input) {
        let rest = &input[m.end()..];
        let remainder = rest.strip_prefix('\n').unwrap_or(rest);
        // Nothing to drop, or the block starts on one of the leading `#` lines.
        if end > m.start() || directives.len() == input[..end].matches('\n').count() {
            return Some(HeaderSplit {
                header: Cow::Borrowed(&input[..m.end()]),
                remainder,
            });
        }
        let mut header = directives.join("\n");
        if !header.is_empty() {
            header.push('\n');
        }
        header.push_str(&input[end..m.end()]);
        return Some(HeaderSplit {
            header: Cow::Owned(header),
            remainder,
        });
    }

    if directives.is_empty() {
        return None;
    }
    Some(HeaderSplit {
        header: Cow::Owned(directives.join("\n")),
        remainder: &input[end..],
    })
}
