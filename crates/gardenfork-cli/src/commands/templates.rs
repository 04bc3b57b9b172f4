//! Implementation of the `gardenfork templates` command.

use gardenfork_adapters::builtin;

use crate::{
    cli::{ListFormat, TemplatesArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, output: OutputManager) -> CliResult<()> {
    let templates = builtin::templates();

    match args.format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for t in &templates {
                output.print(&format!("  {:<10} {:<24} {}", t.id, t.name, t.description))?;
            }
        }
        ListFormat::List => {
            for t in &templates {
                println!("{}", t.id);
            }
        }
        ListFormat::Json => {
            // Straight to stdout — JSON output must be parseable even in
            // non-TTY pipes, so it bypasses the OutputManager.
            let rows: Vec<serde_json::Value> = templates
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "id": t.id,
                        "name": t.name,
                        "description": t.description,
                        "starter_file": t.starter_file,
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
        ListFormat::Csv => {
            println!("id,name,starter_file");
            for t in &templates {
                println!("{},{},{}", t.id, t.name, t.starter_file);
            }
        }
    }

    Ok(())
}
