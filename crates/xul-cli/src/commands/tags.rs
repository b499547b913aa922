//! `xul tags`: list the registered controls.

use xul_adapters::standard_registry;

use crate::{
    cli::TagsArgs,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TagsArgs, output: OutputManager) -> CliResult<()> {
    let registry = standard_registry();
    let tags = registry.tags();

    if args.json {
        // JSON goes through `emit` so it stays parseable under --quiet.
        let json = serde_json::to_string(&tags)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        output.emit(&json)?;
        return Ok(());
    }

    output.header("Registered tags:")?;
    for tag in tags {
        output.print(&format!("  {tag}"))?;
    }
    Ok(())
}
