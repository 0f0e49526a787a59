use anyhow::Result;
use cscaffold_core::{render_step_failures, scaffold_operation, OutputFormat, OutputFormatter};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Run the scaffold against the current working directory.
///
/// Returns `Ok(true)` when every step succeeded, `Ok(false)` when the run
/// finished with recorded step failures (best effort, all steps attempted).
pub fn handle_new(
    name: Option<String>,
    dry_run: bool,
    output: OutputFormat,
    quiet: bool,
    use_color: bool,
) -> Result<bool> {
    let name = match name {
        Some(name) => name,
        None => prompt_for_name()?,
    };

    let result = scaffold_operation(&name, Path::new("."), dry_run)?;

    match output {
        OutputFormat::Json => println!("{}", result.format(OutputFormat::Json)),
        OutputFormat::Summary => {
            if !quiet {
                print!("{}", result.format(OutputFormat::Summary));
            }
            let failures = render_step_failures(&result.steps, use_color);
            if !failures.is_empty() {
                eprint!("{failures}");
            }
        },
    }

    Ok(result.success())
}

fn prompt_for_name() -> Result<String> {
    prompt_for_name_with_input(&mut io::stdin())
}

fn prompt_for_name_with_input<R: io::Read>(reader: &mut R) -> Result<String> {
    eprint!("Enter the C project name: ");
    io::stderr().flush()?;

    let mut input = String::new();
    io::BufReader::new(reader).read_line(&mut input)?;
    Ok(input.trim().to_string())
}
