//! `xul check`: parse a document and report on it.

use xul_adapters::standard_service;
use xul_core::application::UnknownTagPolicy;

use crate::{
    cli::CheckArgs,
    commands::read_markup,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: CheckArgs, output: OutputManager) -> CliResult<()> {
    let markup = read_markup(&args.file)?;
    let stats = standard_service(UnknownTagPolicy::Passthrough).check(&markup)?;

    if args.json {
        let json = serde_json::to_string_pretty(&stats)
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        output.emit(&json)?;
    } else {
        output.success(&format!(
            "{}: <{}> with {} nodes, depth {}",
            args.file.display(),
            stats.root,
            stats.nodes,
            stats.depth
        ))?;
        if !stats.unknown_tags.is_empty() {
            output.warning(&format!(
                "Passed through as plain containers: {}",
                stats.unknown_tags.join(", ")
            ))?;
        }
    }

    if args.strict && !stats.unknown_tags.is_empty() {
        return Err(CliError::UnknownTags {
            tags: stats.unknown_tags,
        });
    }
    Ok(())
}
