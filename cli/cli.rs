use decomment_core::{
    CliArgs, Command as CoreCommand, OutputMode, ProcessSummary, ProcessedFileResult,
    StripOptions, find_files, process_files,
};
mod interaction;
mod logger;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use console::style;
use std::io;
use std::process::ExitCode;
use tracing::debug;

fn print_completions_cli(shell: clap_complete::Shell) {
    let mut cmd = CliArgs::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "file" } else { "files" }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli: CliArgs = CliArgs::parse();

    if let Some(command_enum_val) = cli.command {
        match command_enum_val {
            CoreCommand::Completion(args) => {
                print_completions_cli(args.shell);
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    let main_app_args = cli.main_opts;
    logger::init_logger(main_app_args.verbose, main_app_args.quiet);

    let files_to_process = match find_files(&main_app_args) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{}", style(format!("Error finding files: {}", e)).red());
            return Ok(ExitCode::FAILURE);
        }
    };

    if files_to_process.is_empty() {
        println!("No files found matching the criteria.");
        return Ok(ExitCode::SUCCESS);
    }

    println!("Found {} {}:", files_to_process.len(), plural(files_to_process.len()));
    for file in files_to_process.iter().take(10) {
        println!("  {}", style(file.display()).dim());
    }
    if files_to_process.len() > 10 {
        println!("  ... and {} more.", files_to_process.len() - 10);
    }

    let output = OutputMode::from_args(&main_app_args);
    match interaction::confirm_processing(
        files_to_process.len(),
        &output,
        main_app_args.no_confirm,
    ) {
        Ok(true) => {}
        Ok(false) => return Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!(
                "{}",
                style(format!("Error during confirmation: {}", e)).red()
            );
            return Ok(ExitCode::FAILURE);
        }
    }

    let options = StripOptions::from(&main_app_args);
    debug!("Processing with {:?}, output {:?}", options, output);
    println!("Stripping comments...");

    let processing_results: Vec<ProcessedFileResult> =
        tokio::task::spawn_blocking(move || process_files(files_to_process, options, &output))
            .await?;

    let summary = ProcessSummary::from_results(&processing_results);
    println!("\nProcessing complete.");
    for result in &processing_results {
        if let Some(err) = &result.error {
            eprintln!(
                "  {} Failed: {} - {}",
                style("⚠️").yellow(),
                style(result.path.display()).dim(),
                style(err).red()
            );
        }
    }
    println!(
        "Result: {} {} processed successfully ({} changed), {} {} failed.",
        style(summary.succeeded).green(),
        plural(summary.succeeded),
        summary.changed,
        style(summary.failed).red(),
        plural(summary.failed),
    );

    if summary.failed > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
