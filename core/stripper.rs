pub mod block;
pub mod header;
pub mod line;

pub use block::remove_block_comments;
pub use header::{HeaderSplit, split_header};
pub use line::{find_line_comment, strip_line, strip_line_comments};

use crate::language::Language;

/// Which blank lines survive stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetentionPolicy {
    /// Keep blank lines; only comment-only lines disappear.
    #[default]
    KeepBlankLines,
    /// Drop every whitespace-only line of the stripped code. A preserved
    /// header is never touched.
    DropBlankLines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripOptions {
    /// Keep the shebang/coding lines and the file-info block. Python only.
    pub preserve_header: bool,
    pub retention: RetentionPolicy,
}

impl StripOptions {
    pub fn new(preserve_header: bool, drop_all_blank_lines: bool) -> Self {
        StripOptions {
            preserve_header,
            retention: if drop_all_blank_lines {
                RetentionPolicy::DropBlankLines
            } else {
                RetentionPolicy::KeepBlankLines
            },
        }
    }
}

/// Removes comments from `input`, leaving string contents and code intact.
///
/// Pure and infallible: text with unterminated blocks or strings is still
/// processed, those regions are simply left alone.
pub fn strip_comments(input: &str, lang: Language, options: StripOptions) -> String {
    if options.preserve_header
        && lang.policy().supports_header
        && let Some(split) = split_header(input)
    {
        let body = strip_body(split.remainder, lang, options.retention);
        let body = skip_leading_blank_lines(&body);
        let mut out = String::with_capacity(split.header.len() + body.len() + 2);
        out.push_str(&split.header);
        out.push_str("\n\n");
        out.push_str(body);
        return out;
    }
    strip_body(input, lang, options.retention)
}

fn strip_body(input: &str, lang: Language, retention: RetentionPolicy) -> String {
    let without_blocks = remove_block_comments(input, lang);
    let stripped = strip_line_comments(&without_blocks, lang.policy());
    match retention {
        RetentionPolicy::KeepBlankLines => stripped,
        RetentionPolicy::DropBlankLines => drop_blank_lines(&stripped),
    }
}

fn drop_blank_lines(text: &str) -> String {
    let (body, terminated) = match text.strip_suffix('\n') {
        Some(body) => (body, true),
        None => (text, false),
    };
    let mut out = body
        .split('\n')
        .filter(|l| !l.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    if terminated && !out.is_empty() {
        out.push('\n');
    }
    out
}

// The separator after the header is emitted explicitly.
fn skip_leading_blank_lines(mut text: &str) -> &str {
    while let Some((first, rest)) = text.split_once('\n')
        && first.trim().is_empty()
    {
        text = rest;
    }
    text
}
