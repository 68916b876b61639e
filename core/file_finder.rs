use crate::CoreError;
use crate::language::Language;
use crate::stripper::StripOptions;
use clap::{Parser, Subcommand};
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    about = "Strip comments from Python, JavaScript, HTML and CSS sources (main arguments)",
    long_about = "These are the main arguments for comment stripping."
)]
pub struct DecommentArgs {
    #[clap(help = "Path to the file or directory to process", default_value = ".")]
    pub path: PathBuf,

    #[clap(
        long = "keep-header",
        help = "Keep the Python shebang/coding lines and the Author/Code function block"
    )]
    pub keep_header: bool,

    #[clap(
        long = "drop-blank-lines",
        help = "Remove every whitespace-only line from the stripped code"
    )]
    pub drop_blank_lines: bool,

    #[clap(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        help = "Write results under DIR (mirroring relative paths) instead of in place"
    )]
    pub output_dir: Option<PathBuf>,

    #[clap(long = "no-recursive", help = "Only process the top level of a directory")]
    pub no_recursive: bool,

    #[clap( long, value_enum, value_name = "LANG", help = "Restrict to specific languages [multiple allowed]", action = clap::ArgAction::Append )]
    pub lang: Vec<Language>,
    #[clap( long, value_name = "PATTERN", help = "Glob pattern for files to include [multiple allowed]", action = clap::ArgAction::Append )]
    pub include: Vec<String>,
    #[clap( long, value_name = "PATTERN", help = "Glob pattern for files/directories to exclude [multiple allowed]", action = clap::ArgAction::Append )]
    pub exclude: Vec<String>,
    #[clap(long, help = "Do not honour .gitignore/.ignore files")]
    pub no_ignore: bool,
    #[clap(long, help = "Skip the confirmation prompt")]
    pub no_confirm: bool,
    #[clap(short, long, help = "Enable debug logging", conflicts_with = "quiet")]
    pub verbose: bool,
    #[clap(short, long, help = "Only log errors")]
    pub quiet: bool,
}

impl Default for DecommentArgs {
    fn default() -> Self {
        DecommentArgs {
            path: PathBuf::from("."),
            keep_header: false,
            drop_blank_lines: false,
            output_dir: None,
            no_recursive: false,
            lang: Vec::new(),
            include: Vec::new(),
            exclude: Vec::new(),
            no_ignore: false,
            no_confirm: false,
            verbose: false,
            quiet: false,
        }
    }
}

impl From<&DecommentArgs> for StripOptions {
    fn from(args: &DecommentArgs) -> Self {
        StripOptions::new(args.keep_header, args.drop_blank_lines)
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    #[clap(about = "Generate shell completion scripts")]
    Completion(CompletionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CompletionArgs {
    #[clap(value_parser = clap::value_parser!(clap_complete::Shell))]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "decomment",
    version = "0.1.0",
    about = "Comment stripper for Python, JavaScript, HTML and CSS",
    long_about = "Removes comments while keeping string literals and code intact.\nPython files can keep their shebang, coding line and file-info block.",
    propagate_version = true
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(flatten)]
    pub main_opts: DecommentArgs,
}

/// Collects the files to strip.
///
/// A path naming a single file is returned as-is, whatever its extension, so
/// the processor can report it as unsupported. Directories are walked and
/// filtered to the selected languages.
pub fn find_files(args: &DecommentArgs) -> Result<Vec<PathBuf>, CoreError> {
    let r = &args.path;
    if !r.exists() {
        return Err(CoreError::PathNotFound(r.clone()));
    }
    if r.is_file() {
        return Ok(vec![r.clone()]);
    }

    let t: HashSet<Language> = if args.lang.is_empty() {
        Language::ALL.into_iter().collect()
    } else {
        args.lang.iter().copied().collect()
    };

    let mut w = WalkBuilder::new(r);
    w.standard_filters(!args.no_ignore);
    w.hidden(false);
    if args.no_recursive {
        w.max_depth(Some(1));
    }
    let mut o = OverrideBuilder::new(r);
    for p in &args.exclude {
        o.add(&format!("!{}", p))
            .map_err(|source| CoreError::InvalidPattern {
                pattern: p.clone(),
                source,
            })?;
    }
    for p in &args.include {
        o.add(p).map_err(|source| CoreError::InvalidPattern {
            pattern: p.clone(),
            source,
        })?;
    }
    let v = o.build().map_err(|source| CoreError::InvalidPattern {
        pattern: args
            .exclude
            .iter()
            .chain(&args.include)
            .cloned()
            .collect::<Vec<_>>()
            .join(", "),
        source,
    })?;
    w.overrides(v);

    let mut f = Vec::new();
    for i in w.build() {
        match i {
            Ok(e) => {
                if e.file_type().is_some_and(|ft| ft.is_file()) && is_target(e.path(), &t) {
                    f.push(e.into_path());
                }
            }
            Err(e) => {
                warn!("Walk error: {}", e);
            }
        }
    }
    debug!("Found {} files under {}", f.len(), r.display());
    f.sort();
    Ok(f)
}

fn is_target(p: &Path, t: &HashSet<Language>) -> bool {
    Language::from_path(p).is_some_and(|lang| t.contains(&lang))
}
