//! Implementation of the `gardenfork status` command.

use gardenfork_adapters::LocalFs;
use gardenfork_core::application::MetadataRecorder;

use crate::{cli::StatusArgs, error::CliResult, output::OutputManager};

pub fn execute(args: StatusArgs, output: OutputManager) -> CliResult<()> {
    let fs = LocalFs::new();
    let recorder = MetadataRecorder::new(&fs);

    // MetadataRead maps to a not-found exit code, which is exactly right for
    // a directory that is not a fork.
    let record = recorder.read(&args.dir)?;

    output.header(&format!("Project '{}'", record.name))?;
    output.print(&format!("  Template:       {}", record.template))?;
    output.print(&format!("  Forked from:    {}", record.forked_from))?;
    output.print(&format!(
        "  Created:        {}",
        record.created.format("%Y-%m-%d %H:%M:%S UTC")
    ))?;
    output.print(&format!("  Garden version: {}", record.garden_version))?;
    output.print(&format!("  Deploy status:  {}", record.deploy_status))?;

    Ok(())
}
