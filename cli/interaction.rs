use anyhow::Result;
use console::style;
use decomment_core::OutputMode;
use dialoguer::Confirm;

pub fn confirm_processing(
    file_count: usize,
    output: &OutputMode,
    no_confirm: bool,
) -> Result<bool> {
    if no_confirm {
        return Ok(true);
    }
    if file_count == 0 {
        println!("No files to process.");
        return Ok(false);
    }

    let prompt = match output {
        OutputMode::InPlace => format!(
            "Strip comments in place from {} files?",
            style(file_count).cyan()
        ),
        OutputMode::Mirror { output_root, .. } => format!(
            "Strip comments from {} files into {}?",
            style(file_count).cyan(),
            style(output_root.display()).cyan()
        ),
    };

    let confirmed = Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    if !confirmed {
        println!("Aborted by user.");
    }

    Ok(confirmed)
}
