use crate::language::{BlockDelimiter, Language};
use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static PYTHON_BLOCKS: LazyLock<Regex> = LazyLock::new(|| block_regex(Language::Python));
static JAVASCRIPT_BLOCKS: LazyLock<Regex> = LazyLock::new(|| block_regex(Language::JavaScript));
static HTML_BLOCKS: LazyLock<Regex> = LazyLock::new(|| block_regex(Language::Html));
static CSS_BLOCKS: LazyLock<Regex> = LazyLock::new(|| block_regex(Language::Css));

fn delimiter_pattern(d: &BlockDelimiter) -> String {
    format!("{}.*?{}", regex::escape(d.open), regex::escape(d.close))
}

fn block_regex(lang: Language) -> Regex {
    let alternatives: Vec<String> = lang
        .policy()
        .block_delimiters
        .iter()
        .map(delimiter_pattern)
        .collect();
    let pattern = format!("(?s){}", alternatives.join("|"));
    Regex::new(&pattern).expect("block delimiters are escaped literals")
}

fn compiled(lang: Language) -> &'static Regex {
    match lang {
        Language::Python => &PYTHON_BLOCKS,
        Language::JavaScript => &JAVASCRIPT_BLOCKS,
        Language::Html => &HTML_BLOCKS,
        Language::Css => &CSS_BLOCKS,
    }
}

/// Deletes every non-overlapping, shortest-match block region, newlines included.
///
/// For Python this removes triple-quoted string values as well as docstrings.
/// An opener with no closer is left in place.
pub fn remove_block_comments(input: &str, lang: Language) -> Cow<'_, str> {
    compiled(lang).replace_all(input, "")
}
