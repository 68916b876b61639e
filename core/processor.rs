use crate::CoreError;
use crate::file_finder::DecommentArgs;
use crate::language::Language;
use crate::stripper::{StripOptions, strip_comments};
use rayon::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where stripped text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    InPlace,
    /// Mirror each file's path relative to `source_root` under `output_root`.
    Mirror {
        source_root: PathBuf,
        output_root: PathBuf,
    },
}

impl OutputMode {
    pub fn from_args(args: &DecommentArgs) -> Self {
        match &args.output_dir {
            Some(dir) => OutputMode::Mirror {
                source_root: args.path.clone(),
                output_root: dir.clone(),
            },
            None => OutputMode::InPlace,
        }
    }

    pub fn destination_for(&self, path: &Path) -> PathBuf {
        match self {
            OutputMode::InPlace => path.to_path_buf(),
            OutputMode::Mirror {
                source_root,
                output_root,
            } => {
                let rel = path
                    .strip_prefix(source_root)
                    .ok()
                    .filter(|rel| !rel.as_os_str().is_empty());
                match rel {
                    Some(rel) => output_root.join(rel),
                    None => output_root.join(path.file_name().unwrap_or(path.as_os_str())),
                }
            }
        }
    }
}

#[derive(Debug)]
pub struct ProcessedFileResult {
    pub path: PathBuf,
    pub changed: bool,
    pub error: Option<CoreError>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub changed: usize,
}

impl ProcessSummary {
    pub fn from_results(results: &[ProcessedFileResult]) -> Self {
        results.iter().fold(ProcessSummary::default(), |mut s, r| {
            match r.error {
                None => s.succeeded += 1,
                Some(_) => s.failed += 1,
            }
            if r.changed {
                s.changed += 1;
            }
            s
        })
    }
}

fn io_error(p: &Path) -> impl Fn(std::io::Error) -> CoreError {
    let path = p.to_path_buf();
    move |source| CoreError::Io {
        path: path.clone(),
        source,
    }
}

/// Writes through a temp file in the destination directory so a failed write
/// never leaves a half-written source file behind.
///
/// The result takes the permissions of `dest` if it exists, else of `source`.
fn write_atomic(dest: &Path, source: &Path, contents: &str) -> Result<(), CoreError> {
    let parent = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(io_error(parent))?;

    let mut temp_file = tempfile::Builder::new()
        .prefix(".decomment_")
        .tempfile_in(parent)
        .map_err(io_error(dest))?;
    temp_file
        .write_all(contents.as_bytes())
        .map_err(io_error(dest))?;
    if let Ok(meta) = fs::metadata(dest).or_else(|_| fs::metadata(source)) {
        temp_file
            .as_file()
            .set_permissions(meta.permissions())
            .map_err(io_error(dest))?;
    }
    temp_file
        .persist(dest)
        .map_err(|e| io_error(dest)(e.error))?;
    Ok(())
}

fn process_single_file(
    path: &Path,
    options: StripOptions,
    output: &OutputMode,
) -> Result<bool, CoreError> {
    let lang = Language::from_path(path).ok_or_else(|| CoreError::UnsupportedLanguage {
        path: path.to_path_buf(),
    })?;

    let original_content = fs::read_to_string(path).map_err(io_error(path))?;
    let cleaned = strip_comments(&original_content, lang, options);
    let modified = cleaned != original_content;

    match output {
        OutputMode::InPlace => {
            if modified {
                write_atomic(path, path, &cleaned)?;
            }
        }
        OutputMode::Mirror { .. } => {
            let dest = output.destination_for(path);
            write_atomic(&dest, path, &cleaned)?;
            debug!("{} -> {}", path.display(), dest.display());
        }
    }
    debug!(
        "Stripped {} as {} (modified: {})",
        path.display(),
        lang,
        modified
    );
    Ok(modified)
}

/// Strips every file in parallel. A failing file never stops the others.
pub fn process_files(
    files: Vec<PathBuf>,
    options: StripOptions,
    output: &OutputMode,
) -> Vec<ProcessedFileResult> {
    files
        .par_iter()
        .map(|p| match process_single_file(p, options, output) {
            Ok(changed) => ProcessedFileResult {
                path: p.clone(),
                changed,
                error: None,
            },
            Err(e) => {
                warn!("Skipping {}: {}", p.display(), e);
                ProcessedFileResult {
                    path: p.clone(),
                    changed: false,
                    error: Some(e),
                }
            }
        })
        .collect()
}
