use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Language {
    Python,
    #[value(name = "javascript", alias = "js")]
    JavaScript,
    #[value(alias = "htm")]
    Html,
    Css,
}

/// A paired block-comment delimiter. Spans may cross line boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDelimiter {
    pub open: &'static str,
    pub close: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguagePolicy {
    /// Alternatives tried in order at each position; the same pair opens and closes.
    pub block_delimiters: &'static [BlockDelimiter],
    pub line_comment: Option<&'static str>,
    pub string_quotes: &'static [char],
    pub supports_header: bool,
}

const PYTHON_EXTENSIONS: &[&str] = &["py"];
const JAVASCRIPT_EXTENSIONS: &[&str] = &["js"];
const HTML_EXTENSIONS: &[&str] = &["html", "htm"];
const CSS_EXTENSIONS: &[&str] = &["css"];

const TRIPLE_QUOTES: &[BlockDelimiter] = &[
    BlockDelimiter {
        open: "\"\"\"",
        close: "\"\"\"",
    },
    BlockDelimiter {
        open: "'''",
        close: "'''",
    },
];
const SLASH_STAR: &[BlockDelimiter] = &[BlockDelimiter {
    open: "/*",
    close: "*/",
}];
const MARKUP: &[BlockDelimiter] = &[BlockDelimiter {
    open: "<!--",
    close: "-->",
}];

const PYTHON_POLICY: LanguagePolicy = LanguagePolicy {
    block_delimiters: TRIPLE_QUOTES,
    line_comment: Some("#"),
    string_quotes: &['"', '\''],
    supports_header: true,
};
const JAVASCRIPT_POLICY: LanguagePolicy = LanguagePolicy {
    block_delimiters: SLASH_STAR,
    line_comment: Some("//"),
    string_quotes: &['"', '\'', '`'],
    supports_header: false,
};
const HTML_POLICY: LanguagePolicy = LanguagePolicy {
    block_delimiters: MARKUP,
    line_comment: None,
    string_quotes: &[],
    supports_header: false,
};
const CSS_POLICY: LanguagePolicy = LanguagePolicy {
    block_delimiters: SLASH_STAR,
    line_comment: None,
    string_quotes: &[],
    supports_header: false,
};

impl Language {
    pub const ALL: [Language; 4] = [
        Language::Python,
        Language::JavaScript,
        Language::Html,
        Language::Css,
    ];

    pub fn policy(self) -> &'static LanguagePolicy {
        match self {
            Language::Python => &PYTHON_POLICY,
            Language::JavaScript => &JAVASCRIPT_POLICY,
            Language::Html => &HTML_POLICY,
            Language::Css => &CSS_POLICY,
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Language::Python => PYTHON_EXTENSIONS,
            Language::JavaScript => JAVASCRIPT_EXTENSIONS,
            Language::Html => HTML_EXTENSIONS,
            Language::Css => CSS_EXTENSIONS,
        }
    }

    /// Case-insensitive lookup, with or without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Language> {
        let ext = ext.trim_start_matches('.').to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }

    pub fn from_path(path: &Path) -> Option<Language> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Language::from_extension)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Html => "html",
            Language::Css => "css",
        };
        f.write_str(name)
    }
}
