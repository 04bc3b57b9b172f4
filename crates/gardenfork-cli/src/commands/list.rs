//! Implementation of the `gardenfork list` command.
//!
//! Scans a directory for project directories carrying a fork record; anything
//! without one is ignored.

use gardenfork_adapters::LocalFs;
use gardenfork_core::application::MetadataRecorder;

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let fs = LocalFs::new();
    let projects = MetadataRecorder::new(&fs).scan(&args.dir)?;

    if projects.is_empty() {
        output.info(&format!(
            "No forked projects found under {}",
            args.dir.display()
        ))?;
        return Ok(());
    }

    match args.format {
        ListFormat::Table => {
            output.header(&format!("Forked projects in {}:", args.dir.display()))?;
            for (_, record) in &projects {
                output.print(&format!(
                    "  {:<20} {:<10} {:<14} forked {}",
                    record.name,
                    record.template,
                    record.deploy_status,
                    record.created.format("%Y-%m-%d")
                ))?;
            }
        }
        ListFormat::List => {
            for (_, record) in &projects {
                println!("{}", record.name);
            }
        }
        ListFormat::Json => {
            let records: Vec<_> = projects.iter().map(|(_, r)| r).collect();
            let json = serde_json::to_string_pretty(&records).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
        ListFormat::Csv => {
            println!("name,template,deploy_status,created,forked_from");
            for (_, r) in &projects {
                println!(
                    "{},{},{},{},{}",
                    r.name,
                    r.template,
                    r.deploy_status,
                    r.created.to_rfc3339(),
                    r.forked_from
                );
            }
        }
    }

    Ok(())
}
